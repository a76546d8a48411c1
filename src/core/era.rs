// CauseConv - core/era.rs
//
// FACTS era bands: which record systems hold a FACTS number filed in a given
// year, and how its alternate identifier is derived in each era.
//
// Bands are a strict partition evaluated in table order. The last band is
// open-ended up to the current calendar year, so the lookup takes that year
// as a parameter rather than reading the clock.

use crate::core::model::{AlternateForm, Scheme};
use crate::util::constants;

/// Inclusive upper bound of an era band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandEnd {
    /// A fixed final year.
    Year(i32),
    /// Runs through the current calendar year.
    CurrentYear,
}

/// How a band derives the alternate identifier from a FACTS number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlternateRule {
    /// No alternate identifier exists for this era.
    None,
    /// The other system files the case under the same sequence.
    SameSequence(&'static str),
    /// The 7-digit shelf number: first sequence digit, the two year digits,
    /// then the sequence from its third digit on. Only 6-digit sequences
    /// have one.
    ShelfSevenDigit(&'static str),
}

impl AlternateRule {
    /// Derive the alternate form for a sequence filed in two-digit year `yy`.
    pub fn derive(&self, yy: &str, seq: &str) -> Option<AlternateForm> {
        match *self {
            AlternateRule::None => None,
            AlternateRule::SameSequence(label) => Some(AlternateForm::new(label, seq)),
            AlternateRule::ShelfSevenDigit(label) => {
                shelf_seven_digit(yy, seq).map(|value| AlternateForm::new(label, value))
            }
        }
    }
}

/// One contiguous year range with its storage label and alternate rule.
#[derive(Debug, Clone, Copy)]
pub struct EraBand {
    /// First year of the band; `None` means unbounded below.
    pub start: Option<i32>,
    pub end: BandEnd,
    pub scheme: Scheme,
    pub alternate: AlternateRule,
}

impl EraBand {
    /// Whether `year` falls in this band given the current calendar year.
    pub fn contains(&self, year: i32, current_year: i32) -> bool {
        let above_start = self.start.map_or(true, |start| year >= start);
        let below_end = match self.end {
            BandEnd::Year(end) => year <= end,
            BandEnd::CurrentYear => year <= current_year,
        };
        above_start && below_end
    }
}

/// FACTS era bands in evaluation order.
pub const FACTS_ERA_BANDS: &[EraBand] = &[
    EraBand {
        start: None,
        end: BandEnd::Year(constants::SHELF_ERA_START - 1),
        scheme: Scheme::FactsMicrofilm,
        alternate: AlternateRule::SameSequence(constants::ALT_MICROFILM_PRE_1990),
    },
    EraBand {
        start: Some(constants::SHELF_ERA_START),
        end: BandEnd::Year(constants::SHELF_ERA_END),
        scheme: Scheme::FactsMicrofilmShelf,
        alternate: AlternateRule::SameSequence(constants::ALT_MICROFILM_SHELF_1990_2000),
    },
    EraBand {
        start: Some(constants::SEVEN_DIGIT_ERA_START),
        end: BandEnd::Year(constants::SEVEN_DIGIT_ERA_END),
        scheme: Scheme::FactsShelf,
        alternate: AlternateRule::ShelfSevenDigit(constants::ALT_SHELF_SEVEN_DIGIT),
    },
    EraBand {
        start: Some(constants::LISTS_ERA_START),
        end: BandEnd::Year(constants::LISTS_ERA_END),
        scheme: Scheme::FactsShelfLists,
        alternate: AlternateRule::SameSequence(constants::ALT_SHELF_LISTS_SAME_NUMBER),
    },
    EraBand {
        start: Some(constants::FACTS_ONLY_ERA_START),
        end: BandEnd::CurrentYear,
        scheme: Scheme::FactsOnly,
        alternate: AlternateRule::None,
    },
];

/// Band for a FACTS filing year, or `None` when the year lies past the
/// current calendar year.
pub fn band_for_year(year: i32, current_year: i32) -> Option<&'static EraBand> {
    FACTS_ERA_BANDS
        .iter()
        .find(|band| band.contains(year, current_year))
}

/// Scheme and alternate forms for a FACTS number filed in `year`.
///
/// Years outside every band get `Scheme::Facts` and no alternates.
pub fn facts_scheme(
    year: i32,
    current_year: i32,
    yy: &str,
    seq: &str,
) -> (Scheme, Vec<AlternateForm>) {
    match band_for_year(year, current_year) {
        Some(band) => (band.scheme, band.alternate.derive(yy, seq).into_iter().collect()),
        None => {
            tracing::debug!(year, current_year, "FACTS year outside every era band");
            (Scheme::Facts, Vec::new())
        }
    }
}

/// Interleave a 6-digit sequence with its two-digit year.
fn shelf_seven_digit(yy: &str, seq: &str) -> Option<String> {
    if seq.len() != 6 || yy.len() != 2 || !seq.is_ascii() || !yy.is_ascii() {
        return None;
    }
    let mut shelf = String::with_capacity(7);
    shelf.push_str(&seq[..1]);
    shelf.push_str(yy);
    shelf.push_str(&seq[2..]);
    Some(shelf)
}
