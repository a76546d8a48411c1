// CauseConv - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; every error keeps its cause so the
// full chain can be logged.
//
// Classification itself never fails: unrecognised numbers degrade to the
// "Unrecognized pattern" result. Only the input gate, output rendering,
// and configuration loading produce errors.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all CauseConv operations.
#[derive(Debug)]
pub enum CauseConvError {
    /// Writing results failed.
    Render(RenderError),

    /// An explicitly named config file could not be loaded.
    Config(ConfigError),
}

impl fmt::Display for CauseConvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(e) => write!(f, "Output error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for CauseConvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

/// Errors raised by the input gate. Recoverable: the caller reports it and
/// moves on to the next input, so it never reaches `CauseConvError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The input contains letters outside the supported prefix alphabet.
    InvalidCharacterSet {
        /// The input as supplied.
        input: String,
        /// Offending letters, uppercased, deduplicated, in first-seen order.
        invalid: Vec<char>,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacterSet { invalid, .. } => {
                let letters: String = invalid.iter().collect();
                write!(
                    f,
                    "This cause/case number isn't ours (invalid letters: {letters})"
                )
            }
        }
    }
}

impl std::error::Error for InputError {}

// ---------------------------------------------------------------------------
// Render errors
// ---------------------------------------------------------------------------

/// Errors raised while writing results in one of the output formats.
#[derive(Debug)]
pub enum RenderError {
    /// I/O error writing to the output stream.
    Io(io::Error),

    /// CSV serialisation error.
    Csv(csv::Error),

    /// JSON serialisation error.
    Json(serde_json::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(source) => write!(f, "write failed: {source}"),
            Self::Csv(source) => write!(f, "CSV output failed: {source}"),
            Self::Json(source) => write!(f, "JSON output failed: {source}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(source) => Some(source),
            Self::Csv(source) => Some(source),
            Self::Json(source) => Some(source),
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for RenderError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<RenderError> for CauseConvError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is not one of the accepted values.
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::InvalidValue {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is not valid. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for CauseConvError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for CauseConv results.
pub type Result<T> = std::result::Result<T, CauseConvError>;
