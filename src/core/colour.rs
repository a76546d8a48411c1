// CauseConv - core/colour.rs
//
// Display-only lookup from filing year to the colour of the physical file.

use crate::core::model::FileColour;

/// File colour for a four-digit year string, if that year has one.
pub fn file_colour(year: &str) -> Option<FileColour> {
    match year {
        "2002" => Some(FileColour::Yellow),
        "2003" => Some(FileColour::Gray),
        "2004" => Some(FileColour::Green),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shelf_years_have_colours() {
        assert_eq!(file_colour("2002"), Some(FileColour::Yellow));
        assert_eq!(file_colour("2003"), Some(FileColour::Gray));
        assert_eq!(file_colour("2004"), Some(FileColour::Green));
    }

    #[test]
    fn test_other_years_have_none() {
        for year in ["2001", "2005", "1985", "", "02"] {
            assert_eq!(file_colour(year), None, "year {year:?}");
        }
    }
}
