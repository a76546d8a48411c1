// CauseConv - core/classifier.rs
//
// Cause-number classifier: an ordered cascade of recognition rules.
// Core layer: pure function of the input string and the supplied date.
//
// Rule order is the priority contract. Several patterns are narrower subsets
// of later ones (a civil number also contains digits that the bare-digit
// rules would accept), so the first rule that produces a result wins and no
// later rule sees the input.

use crate::core::century::{resolve_two_digit_year, two_digit_fragment};
use crate::core::era;
use crate::core::model::{AlternateForm, ClassificationResult, Scheme};
use crate::util::constants;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

// =============================================================================
// Working input
// =============================================================================

/// Views of one raw input shared by every rule.
#[derive(Debug)]
struct WorkingInput<'a> {
    /// Original input.
    raw: &'a str,
    /// Trimmed, uppercased input. Rules may rewrite this for later rules.
    upper: String,
    /// `upper` with everything except `A-Z` and `0-9` removed.
    alnum: String,
    /// ASCII digits of the original input.
    digits: String,
}

impl<'a> WorkingInput<'a> {
    fn new(raw: &'a str) -> Self {
        let upper = raw.trim().to_uppercase();
        let alnum = upper
            .chars()
            .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
            .collect();
        let digits = raw.chars().filter(char::is_ascii_digit).collect();
        Self {
            raw,
            upper,
            alnum,
            digits,
        }
    }

    /// Result skeleton carrying the original input.
    fn result(
        &self,
        normalized: Option<String>,
        canonical_form: Option<String>,
        filing_year: Option<i32>,
        scheme: Scheme,
        alternate_forms: Vec<AlternateForm>,
    ) -> ClassificationResult {
        ClassificationResult {
            raw: self.raw.to_string(),
            normalized,
            canonical_form,
            filing_year: filing_year.map(|y| y.to_string()),
            scheme,
            alternate_forms,
        }
    }
}

// =============================================================================
// Rule table
// =============================================================================

/// One step of the cascade. `apply` either produces the final result or
/// returns `None` to pass the (possibly rewritten) input to the next rule.
struct Rule {
    name: &'static str,
    apply: fn(&mut WorkingInput<'_>, i32) -> Option<ClassificationResult>,
}

/// Rules in priority order. The unrecognised fallback runs after all of them.
const RULES: &[Rule] = &[
    Rule {
        name: "civil",
        apply: civil_case,
    },
    Rule {
        name: "compact-facts",
        apply: expand_compact_facts,
    },
    Rule {
        name: "punctuated-facts",
        apply: punctuated_facts,
    },
    Rule {
        name: "five-digit",
        apply: five_digit,
    },
    Rule {
        name: "six-digit",
        apply: six_digit,
    },
    Rule {
        name: "seven-digit",
        apply: seven_digit,
    },
];

/// Classify a raw cause number.
///
/// Total: every input yields a result; anything no rule recognises becomes
/// `Scheme::Unrecognized`. `today` only bounds the open-ended "2010 to the
/// current year" era band.
pub fn classify(raw: &str, today: NaiveDate) -> ClassificationResult {
    let current_year = today.year();
    let mut input = WorkingInput::new(raw);

    for rule in RULES {
        if let Some(result) = (rule.apply)(&mut input, current_year) {
            tracing::debug!(
                rule = rule.name,
                input = raw,
                scheme = %result.scheme,
                "Cause number classified"
            );
            return result;
        }
        tracing::trace!(rule = rule.name, "Rule did not match");
    }

    tracing::debug!(input = raw, "No rule matched; unrecognized pattern");
    unrecognized(&input)
}

// =============================================================================
// Patterns
// =============================================================================

/// Compile a built-in pattern. The patterns are constants covered by the
/// unit tests below, so a mistake shows up as a failing test.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("classifier: invalid built-in regex")
}

/// `D-1-GN-YY-SEQ`, prefix match only.
fn civil_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r"(?i)^D-1-GN-([0-9]{2})-([0-9]+)"))
}

/// `D1DCYYSEQ` with no punctuation, on the alphanumeric view.
fn compact_facts_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r"^D1DC([0-9]{2})([0-9]{5,6})$"))
}

/// `D-1-DC-YY-SEQ`, whole string.
fn facts_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r"(?i)^D-1-DC-([0-9]{2})-([0-9]{5,6})$"))
}

// =============================================================================
// Rules
// =============================================================================

/// Rule 1: anything whose alphanumeric form starts `D1GN` is civil. Year and
/// sequence are only filled in for the punctuated form.
fn civil_case(input: &mut WorkingInput<'_>, _current_year: i32) -> Option<ClassificationResult> {
    if !input.alnum.starts_with(constants::CIVIL_PREFIX) {
        return None;
    }

    let (normalized, year) = match civil_pattern().captures(&input.upper) {
        Some(caps) => (
            Some(caps[2].to_string()),
            resolve_two_digit_year(&caps[1]),
        ),
        None => (None, None),
    };

    Some(input.result(
        normalized,
        Some(input.upper.clone()),
        year,
        Scheme::Civil,
        Vec::new(),
    ))
}

/// Rule 2: rewrite the compact spelling into the punctuated one so rule 3
/// handles both identically.
fn expand_compact_facts(
    input: &mut WorkingInput<'_>,
    _current_year: i32,
) -> Option<ClassificationResult> {
    if let Some(caps) = compact_facts_pattern().captures(&input.alnum) {
        let expanded = format!("{}{}-{}", constants::FACTS_PREFIX, &caps[1], &caps[2]);
        tracing::trace!(from = %input.upper, to = %expanded, "Expanded compact FACTS number");
        input.upper = expanded;
    }
    None
}

/// Rule 3: punctuated FACTS number; storage era picked from the year band.
fn punctuated_facts(
    input: &mut WorkingInput<'_>,
    current_year: i32,
) -> Option<ClassificationResult> {
    let caps = facts_pattern().captures(&input.upper)?;
    let yy = &caps[1];
    let seq = &caps[2];
    let year = resolve_two_digit_year(yy)?;

    let (scheme, alternates) = era::facts_scheme(year, current_year, yy, seq);

    Some(input.result(
        Some(seq.to_string()),
        Some(input.upper.clone()),
        Some(year),
        scheme,
        alternates,
    ))
}

/// Rule 4a: bare 5-digit microfilm number. The year is a fixed assumption,
/// not read from the digits.
fn five_digit(input: &mut WorkingInput<'_>, _current_year: i32) -> Option<ClassificationResult> {
    if input.digits.len() != 5 {
        return None;
    }

    let year = constants::FIVE_DIGIT_ASSUMED_YEAR;
    let canonical = format!(
        "{}{}-{:0>width$}",
        constants::FACTS_PREFIX,
        two_digit_fragment(year),
        input.digits,
        width = constants::FIVE_DIGIT_SEQUENCE_WIDTH
    );

    Some(input.result(
        Some(input.digits.clone()),
        Some(canonical),
        Some(year),
        Scheme::FactsMicrofilm,
        vec![AlternateForm::new(
            constants::ALT_MICROFILM_FIVE_DIGIT,
            input.digits.clone(),
        )],
    ))
}

/// Rule 4b: bare 6-digit number. A leading `9` means the first two digits
/// are the year; otherwise the number is filed as a generic 1990 case.
fn six_digit(input: &mut WorkingInput<'_>, _current_year: i32) -> Option<ClassificationResult> {
    if input.digits.len() != 6 {
        return None;
    }

    let digits = input.digits.clone();
    let alternate = vec![AlternateForm::new(
        constants::ALT_MICROFILM_SHELF_SIX_DIGIT,
        digits.clone(),
    )];

    if digits.starts_with('9') {
        let yy = &digits[..2];
        let year = resolve_two_digit_year(yy)?;
        let scheme = if year < constants::SHELF_ERA_START {
            Scheme::FactsMicrofilm
        } else if year <= constants::SHELF_ERA_END {
            Scheme::FactsMicrofilmShelf
        } else {
            Scheme::FactsSixDigit
        };
        let canonical = format!("{}{yy}-{digits}", constants::FACTS_PREFIX);
        return Some(input.result(
            Some(digits.clone()),
            Some(canonical),
            Some(year),
            scheme,
            alternate,
        ));
    }

    let year = constants::SIX_DIGIT_ASSUMED_YEAR;
    let canonical = format!(
        "{}{}-{digits}",
        constants::FACTS_PREFIX,
        two_digit_fragment(year)
    );
    Some(input.result(
        Some(digits.clone()),
        Some(canonical),
        Some(year),
        Scheme::FactsMicrofilm1990,
        alternate,
    ))
}

/// Rule 4c: bare 7-digit shelf number (2001-2004). Digits 2-3 are the year;
/// dropping the third digit gives the 6-digit FACTS sequence.
fn seven_digit(input: &mut WorkingInput<'_>, _current_year: i32) -> Option<ClassificationResult> {
    if input.digits.len() != 7 {
        return None;
    }

    let digits = &input.digits;
    let yy = &digits[1..3];
    let year: i32 = 2000 + yy.parse::<i32>().ok()?;
    let sequence = format!("{}{}", &digits[..2], &digits[3..]);
    let canonical = format!("{}{yy}-{sequence}", constants::FACTS_PREFIX);

    Some(input.result(
        Some(digits.clone()),
        Some(canonical),
        Some(year),
        Scheme::FactsShelf,
        vec![AlternateForm::new(
            constants::ALT_FACTS_SIX_DIGIT_SEQUENCE,
            sequence,
        )],
    ))
}

/// Fallback: keep whatever digits there are (or the uppercased input when
/// there are none) and nothing else.
fn unrecognized(input: &WorkingInput<'_>) -> ClassificationResult {
    let normalized = if input.digits.is_empty() {
        input.upper.clone()
    } else {
        input.digits.clone()
    };
    input.result(Some(normalized), None, None, Scheme::Unrecognized, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn run(raw: &str) -> ClassificationResult {
        classify(raw, today())
    }

    fn alternates(result: &ClassificationResult) -> Vec<(&str, &str)> {
        result
            .alternate_forms
            .iter()
            .map(|a| (a.label.as_str(), a.value.as_str()))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Civil
    // -------------------------------------------------------------------------

    #[test]
    fn test_civil_punctuated() {
        let r = run("D-1-GN-05-123456");
        assert_eq!(r.scheme, Scheme::Civil);
        assert_eq!(r.scheme_label(), "Civil case number");
        assert_eq!(r.normalized.as_deref(), Some("123456"));
        assert_eq!(r.filing_year.as_deref(), Some("2005"));
        assert_eq!(r.canonical_form.as_deref(), Some("D-1-GN-05-123456"));
        assert!(r.alternate_forms.is_empty());
    }

    #[test]
    fn test_civil_lowercase_uses_century_rule() {
        let r = run("d-1-gn-88-42");
        assert_eq!(r.filing_year.as_deref(), Some("1988"));
        assert_eq!(r.normalized.as_deref(), Some("42"));
        assert_eq!(r.canonical_form.as_deref(), Some("D-1-GN-88-42"));
    }

    #[test]
    fn test_civil_compact_leaves_year_unset() {
        let r = run("d1gn05123456");
        assert_eq!(r.scheme, Scheme::Civil);
        assert_eq!(r.normalized, None);
        assert_eq!(r.filing_year, None);
        assert_eq!(r.canonical_form.as_deref(), Some("D1GN05123456"));
    }

    #[test]
    fn test_civil_beats_digit_rules() {
        // The digits alone (11023) would otherwise hit the 5-digit rule.
        let r = run("D 1 GN 1023");
        assert_eq!(r.scheme, Scheme::Civil);
        let r = run("D1GN");
        assert_eq!(r.scheme, Scheme::Civil);
    }

    // -------------------------------------------------------------------------
    // FACTS
    // -------------------------------------------------------------------------

    #[test]
    fn test_compact_equivalent_to_punctuated() {
        let compact = run("d1dc05987678");
        let punctuated = run("D-1-DC-05-987678");
        assert_eq!(compact.raw, "d1dc05987678");
        assert_eq!(compact.normalized, punctuated.normalized);
        assert_eq!(compact.canonical_form, punctuated.canonical_form);
        assert_eq!(compact.filing_year, punctuated.filing_year);
        assert_eq!(compact.scheme, punctuated.scheme);
        assert_eq!(compact.alternate_forms, punctuated.alternate_forms);
        assert_eq!(compact.canonical_form.as_deref(), Some("D-1-DC-05-987678"));
    }

    #[test]
    fn test_compact_with_stray_punctuation() {
        let r = run("D1/DC 05.98767");
        assert_eq!(r.canonical_form.as_deref(), Some("D-1-DC-05-98767"));
        assert_eq!(r.scheme, Scheme::FactsShelfLists);
    }

    #[test]
    fn test_facts_pre_1990() {
        let r = run("D-1-DC-85-12345");
        assert_eq!(r.filing_year.as_deref(), Some("1985"));
        assert_eq!(r.scheme_label(), "FACTS / Microfilm (pre-1990)");
        assert_eq!(
            alternates(&r),
            vec![("Microfilm / Tablet (pre-1990)", "12345")]
        );
    }

    #[test]
    fn test_facts_1990_to_2000() {
        let r = run("D-1-DC-00-654321");
        assert_eq!(r.filing_year.as_deref(), Some("2000"));
        assert_eq!(r.scheme, Scheme::FactsMicrofilmShelf);
        assert_eq!(
            alternates(&r),
            vec![("Microfilm / Tablet / Shelf (1990–2000)", "654321")]
        );
    }

    #[test]
    fn test_facts_shelf_seven_digit_alternate() {
        let r = run("D-1-DC-02-123456");
        assert_eq!(r.filing_year.as_deref(), Some("2002"));
        assert_eq!(r.scheme_label(), "FACTS / Shelf (2001–2004)");
        assert_eq!(
            alternates(&r),
            vec![("Shelf / Offsite / OnBase (7-digit)", "1023456")]
        );
    }

    #[test]
    fn test_facts_shelf_five_digit_sequence_has_no_alternate() {
        let r = run("D-1-DC-03-12345");
        assert_eq!(r.scheme, Scheme::FactsShelf);
        assert!(r.alternate_forms.is_empty());
    }

    #[test]
    fn test_facts_lists_era() {
        let r = run("D-1-DC-05-123456");
        assert_eq!(
            r.scheme_label(),
            "Shelf / Offsite / OnBase / Sam / Linda's List / FACTS"
        );
        assert_eq!(
            alternates(&r),
            vec![("Shelf / Offsite / OnBase / Lists (same number)", "123456")]
        );
    }

    #[test]
    fn test_facts_only_era() {
        let r = run("D-1-DC-15-123456");
        assert_eq!(r.filing_year.as_deref(), Some("2015"));
        assert_eq!(r.scheme, Scheme::FactsOnly);
        assert!(r.alternate_forms.is_empty());
    }

    #[test]
    fn test_facts_year_after_today_is_plain_facts() {
        let r = run("D-1-DC-79-12345");
        assert_eq!(r.filing_year.as_deref(), Some("2079"));
        assert_eq!(r.scheme, Scheme::Facts);
        assert!(r.alternate_forms.is_empty());

        let later = NaiveDate::from_ymd_opt(2079, 1, 1).unwrap();
        assert_eq!(classify("D-1-DC-79-12345", later).scheme, Scheme::FactsOnly);
    }

    #[test]
    fn test_facts_surrounding_whitespace_is_trimmed() {
        let r = run("  d-1-dc-91-914954 ");
        assert_eq!(r.raw, "  d-1-dc-91-914954 ");
        assert_eq!(r.canonical_form.as_deref(), Some("D-1-DC-91-914954"));
    }

    #[test]
    fn test_facts_sequence_too_long_falls_through() {
        // 7-digit sequence fails both FACTS rules; 2+7 digits hit the fallback.
        let r = run("D-1-DC-05-1234567");
        assert_eq!(r.scheme, Scheme::Unrecognized);
        assert_eq!(r.normalized.as_deref(), Some("1051234567"));
    }

    // -------------------------------------------------------------------------
    // Bare digits
    // -------------------------------------------------------------------------

    #[test]
    fn test_five_digit_assumes_1985() {
        let r = run("12345");
        assert_eq!(r.filing_year.as_deref(), Some("1985"));
        assert_eq!(r.canonical_form.as_deref(), Some("D-1-DC-85-12345"));
        assert_eq!(r.scheme, Scheme::FactsMicrofilm);
        assert_eq!(alternates(&r), vec![("Microfilm / Tablet (5-digit)", "12345")]);
    }

    #[test]
    fn test_six_digit_starting_with_nine() {
        let r = run("914954");
        assert_eq!(r.filing_year.as_deref(), Some("1991"));
        assert_eq!(r.canonical_form.as_deref(), Some("D-1-DC-91-914954"));
        assert_eq!(r.scheme, Scheme::FactsMicrofilmShelf);
        assert_eq!(
            alternates(&r),
            vec![("Microfilm / Tablet / Shelf (6-digit)", "914954")]
        );
    }

    #[test]
    fn test_six_digit_generic_1990() {
        let r = run("123-456");
        assert_eq!(r.normalized.as_deref(), Some("123456"));
        assert_eq!(r.filing_year.as_deref(), Some("1990"));
        assert_eq!(r.canonical_form.as_deref(), Some("D-1-DC-90-123456"));
        assert_eq!(r.scheme_label(), "FACTS / Microfilm (1990)");
    }

    #[test]
    fn test_seven_digit_shelf() {
        let r = run("1023456");
        assert_eq!(r.normalized.as_deref(), Some("1023456"));
        assert_eq!(r.filing_year.as_deref(), Some("2002"));
        assert_eq!(r.canonical_form.as_deref(), Some("D-1-DC-02-103456"));
        assert_eq!(r.scheme, Scheme::FactsShelf);
        assert_eq!(alternates(&r), vec![("FACTS sequence (6-digit)", "103456")]);
    }

    #[test]
    fn test_seven_digit_always_2000s() {
        let r = run("1953456");
        assert_eq!(r.filing_year.as_deref(), Some("2095"));
    }

    // -------------------------------------------------------------------------
    // Fallback
    // -------------------------------------------------------------------------

    #[test]
    fn test_unrecognized_keeps_digits() {
        let r = run("1234");
        assert_eq!(r.scheme_label(), "Unrecognized pattern");
        assert_eq!(r.normalized.as_deref(), Some("1234"));
        assert_eq!(r.canonical_form, None);
        assert_eq!(r.filing_year, None);
        assert!(r.alternate_forms.is_empty());
    }

    #[test]
    fn test_unrecognized_without_digits_uses_uppercased_input() {
        let r = run(" dc-gn ");
        assert_eq!(r.scheme, Scheme::Unrecognized);
        assert_eq!(r.normalized.as_deref(), Some("DC-GN"));
    }

    #[test]
    fn test_empty_input_is_unrecognized() {
        let r = run("");
        assert_eq!(r.scheme, Scheme::Unrecognized);
        assert_eq!(r.normalized.as_deref(), Some(""));
    }

    #[test]
    fn test_non_ascii_digits_are_not_digits() {
        let r = run("١٢٣٤٥");
        assert_eq!(r.scheme, Scheme::Unrecognized);
    }

    #[test]
    fn test_deterministic_for_same_year() {
        let a = classify("D-1-DC-12-123456", today());
        let b = classify(
            "D-1-DC-12-123456",
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        );
        assert_eq!(a, b);
    }
}
