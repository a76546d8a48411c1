// CauseConv - core/gate.rs
//
// Input gate: the only validation applied before classification.
// Rejects input whose letters fall outside the prefix alphabet {D, C, G, N}.
// Digits and punctuation are never inspected here; malformed digit runs
// are left to the classifier's fallback.

use crate::util::constants::ALLOWED_LETTERS;
use crate::util::error::InputError;

/// Check that every letter in `raw` belongs to the supported prefixes.
///
/// The whole input is uppercased first and the `A-Z` letters of that view
/// are checked, so characters whose uppercase form is an ASCII letter
/// (`ß` -> `SS`, `ı` -> `I`) count as those letters. Input with no letters
/// passes.
pub fn check_character_set(raw: &str) -> Result<(), InputError> {
    let mut invalid: Vec<char> = Vec::new();

    for c in raw.to_uppercase().chars().filter(char::is_ascii_uppercase) {
        if !ALLOWED_LETTERS.contains(&c) && !invalid.contains(&c) {
            invalid.push(c);
        }
    }

    if invalid.is_empty() {
        Ok(())
    } else {
        tracing::debug!(input = raw, ?invalid, "Input rejected by character gate");
        Err(InputError::InvalidCharacterSet {
            input: raw.to_string(),
            invalid,
        })
    }
}
