// CauseConv - core/century.rs
//
// The one century rule shared by every branch that reads a two-digit year.

use crate::util::constants::CENTURY_PIVOT;

/// Resolve a two-digit year fragment to a full year.
///
/// `80..=99` map to the 1900s, `00..=79` to the 2000s. Returns `None` unless
/// the fragment is exactly two ASCII digits.
pub fn resolve_two_digit_year(yy: &str) -> Option<i32> {
    if yy.len() != 2 || !yy.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: i32 = yy.parse().ok()?;
    Some(resolve_year_value(value))
}

/// Same rule on an already-parsed value in `0..=99`.
pub fn resolve_year_value(yy: i32) -> i32 {
    if yy >= CENTURY_PIVOT {
        1900 + yy
    } else {
        2000 + yy
    }
}

/// Last two digits of a year, zero-padded.
pub fn two_digit_fragment(year: i32) -> String {
    format!("{:02}", year.rem_euclid(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pivot_boundary() {
        assert_eq!(resolve_two_digit_year("79"), Some(2079));
        assert_eq!(resolve_two_digit_year("80"), Some(1980));
    }

    #[test]
    fn test_full_range_partition() {
        for yy in 0..=99 {
            let fragment = format!("{yy:02}");
            let year = resolve_two_digit_year(&fragment).unwrap();
            if yy >= 80 {
                assert!((1980..=1999).contains(&year), "{fragment} -> {year}");
            } else {
                assert!((2000..=2079).contains(&year), "{fragment} -> {year}");
            }
            assert_eq!(two_digit_fragment(year), fragment);
        }
    }

    #[test]
    fn test_rejects_malformed_fragments() {
        assert_eq!(resolve_two_digit_year(""), None);
        assert_eq!(resolve_two_digit_year("5"), None);
        assert_eq!(resolve_two_digit_year("123"), None);
        assert_eq!(resolve_two_digit_year("+5"), None);
        assert_eq!(resolve_two_digit_year("٠٥"), None);
    }

    #[test]
    fn test_two_digit_fragment_pads() {
        assert_eq!(two_digit_fragment(1985), "85");
        assert_eq!(two_digit_fragment(2005), "05");
    }
}
