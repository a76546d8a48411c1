// CauseConv - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
//
// These types are the shared vocabulary across all layers.

use serde::{Serialize, Serializer};

// =============================================================================
// Classification result (output of the classifier)
// =============================================================================

/// The outcome of classifying one raw cause number.
///
/// Produced by exactly one call to `classify` and never mutated afterwards.
/// The caller may drop it from its result list as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// Original input string, unmodified.
    pub raw: String,

    /// Core digit sequence. `None` only for civil numbers that are not in
    /// the punctuated `D-1-GN-YY-SEQ` form.
    pub normalized: Option<String>,

    /// Fully expanded modern identifier (the FACTS or civil cause number).
    /// `None` for unrecognised input.
    pub canonical_form: Option<String>,

    /// Four-digit filing year. `None` when no year could be located.
    pub filing_year: Option<String>,

    /// Record-storage system implied by the number and its year.
    pub scheme: Scheme,

    /// Equivalent identifiers in other historical record systems.
    pub alternate_forms: Vec<AlternateForm>,
}

impl ClassificationResult {
    /// Free-text label for the record-storage system.
    pub fn scheme_label(&self) -> &'static str {
        self.scheme.label()
    }

    /// File colour for the filing year, if that year has one.
    pub fn file_colour(&self) -> Option<FileColour> {
        self.filing_year
            .as_deref()
            .and_then(crate::core::colour::file_colour)
    }
}

// =============================================================================
// Alternate form
// =============================================================================

/// One `(label, value)` pair naming the same case in another record system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternateForm {
    pub label: String,
    pub value: String,
}

impl AlternateForm {
    pub fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for AlternateForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

// =============================================================================
// Scheme
// =============================================================================

/// Record-storage system (or combination of systems) a number belongs to.
///
/// Serialised as its display label so JSON/CSV output carries the same text
/// a reader sees on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// `D-1-GN` civil cause number.
    Civil,
    /// FACTS number filed before 1990.
    FactsMicrofilm,
    /// FACTS number filed 1990 through 2000.
    FactsMicrofilmShelf,
    /// FACTS number filed 2001 through 2004.
    FactsShelf,
    /// FACTS number filed 2005 through 2009.
    FactsShelfLists,
    /// FACTS number filed 2010 or later, up to the current year.
    FactsOnly,
    /// FACTS number whose year falls outside every era band.
    Facts,
    /// Bare 6-digit number starting with `9` that resolved past 2000.
    FactsSixDigit,
    /// Bare 6-digit number not starting with `9`; assumed 1990.
    FactsMicrofilm1990,
    /// Nothing matched.
    Unrecognized,
}

impl Scheme {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Scheme::Civil => "Civil case number",
            Scheme::FactsMicrofilm => "FACTS / Microfilm (pre-1990)",
            Scheme::FactsMicrofilmShelf => "FACTS / Microfilm / Shelf (1990–2000)",
            Scheme::FactsShelf => "FACTS / Shelf (2001–2004)",
            Scheme::FactsShelfLists => "Shelf / Offsite / OnBase / Sam / Linda's List / FACTS",
            Scheme::FactsOnly => "FACTS only",
            Scheme::Facts => "FACTS",
            Scheme::FactsSixDigit => "FACTS (6-digit)",
            Scheme::FactsMicrofilm1990 => "FACTS / Microfilm (1990)",
            Scheme::Unrecognized => "Unrecognized pattern",
        }
    }

    /// Whether numbers of this scheme are civil rather than FACTS numbers.
    pub fn is_civil(&self) -> bool {
        matches!(self, Scheme::Civil)
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Scheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

// =============================================================================
// File colour
// =============================================================================

/// Colour of the physical file folder for the 7-digit shelf years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FileColour {
    Yellow,
    Gray,
    Green,
}

impl FileColour {
    pub fn label(&self) -> &'static str {
        match self {
            FileColour::Yellow => "Yellow",
            FileColour::Gray => "Gray",
            FileColour::Green => "Green",
        }
    }
}

impl std::fmt::Display for FileColour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
