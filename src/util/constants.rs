// CauseConv - util/constants.rs
//
// Single source of truth for named constants, labels, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "CauseConv";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "CauseConv";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Number prefixes
// =============================================================================

/// Letters that may appear in a cause number. Anything else is rejected by
/// the input gate.
pub const ALLOWED_LETTERS: &[char] = &['D', 'C', 'G', 'N'];

/// Alphanumeric prefix that marks a civil case number (`D-1-GN`).
pub const CIVIL_PREFIX: &str = "D1GN";

/// Punctuated prefix of every FACTS canonical form.
pub const FACTS_PREFIX: &str = "D-1-DC-";

// =============================================================================
// Century resolution
// =============================================================================

/// Two-digit years at or above this value belong to the 1900s; below it,
/// to the 2000s.
pub const CENTURY_PIVOT: i32 = 80;

// =============================================================================
// Era band boundaries (inclusive)
// =============================================================================

/// First year of the microfilm/shelf band.
pub const SHELF_ERA_START: i32 = 1990;

/// Last year of the microfilm/shelf band.
pub const SHELF_ERA_END: i32 = 2000;

/// First year of the 7-digit shelf band.
pub const SEVEN_DIGIT_ERA_START: i32 = 2001;

/// Last year of the 7-digit shelf band.
pub const SEVEN_DIGIT_ERA_END: i32 = 2004;

/// First year of the "same number" lists band.
pub const LISTS_ERA_START: i32 = 2005;

/// Last year of the "same number" lists band.
pub const LISTS_ERA_END: i32 = 2009;

/// First year where FACTS is the only record system. The band runs to the
/// current calendar year.
pub const FACTS_ONLY_ERA_START: i32 = 2010;

// =============================================================================
// Bare-digit legacy years
// =============================================================================

/// Year assumed for every 5-digit microfilm number. Not derived from the
/// digits.
pub const FIVE_DIGIT_ASSUMED_YEAR: i32 = 1985;

/// Year assumed for 6-digit numbers that do not start with `9`.
pub const SIX_DIGIT_ASSUMED_YEAR: i32 = 1990;

/// Width a 5-digit microfilm sequence is left-padded to.
pub const FIVE_DIGIT_SEQUENCE_WIDTH: usize = 5;

// =============================================================================
// Alternate-form labels
// =============================================================================

pub const ALT_MICROFILM_PRE_1990: &str = "Microfilm / Tablet (pre-1990)";
pub const ALT_MICROFILM_SHELF_1990_2000: &str = "Microfilm / Tablet / Shelf (1990–2000)";
pub const ALT_SHELF_SEVEN_DIGIT: &str = "Shelf / Offsite / OnBase (7-digit)";
pub const ALT_SHELF_LISTS_SAME_NUMBER: &str = "Shelf / Offsite / OnBase / Lists (same number)";
pub const ALT_MICROFILM_FIVE_DIGIT: &str = "Microfilm / Tablet (5-digit)";
pub const ALT_MICROFILM_SHELF_SIX_DIGIT: &str = "Microfilm / Tablet / Shelf (6-digit)";
pub const ALT_FACTS_SIX_DIGIT_SEQUENCE: &str = "FACTS sequence (6-digit)";

// =============================================================================
// Result list
// =============================================================================

/// Maximum number of results held in a result list. The oldest entry is
/// dropped once the list is full.
pub const MAX_RESULTS: usize = 1_000;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in config.toml.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
