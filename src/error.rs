//! Error types for notedown

use thiserror::Error;

/// Result type alias for notedown operations
pub type Result<T> = std::result::Result<T, NotedownError>;

/// Crate error types
///
/// The highlighting core itself never fails at runtime; errors only arise
/// when building a matcher table, loading a theme, or doing file I/O.
#[derive(Error, Debug)]
pub enum NotedownError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid pattern for rule '{name}': {source}")]
    InvalidPattern {
        name: String,
        source: regex::Error,
    },

    #[error("rule '{0}' can match an empty range and would never advance")]
    ZeroWidthPattern(String),

    #[error("theme error: {0}")]
    Theme(String),
}
