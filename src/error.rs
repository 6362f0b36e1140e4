//! Error types for the pattern matching library.
//!
//! Only compilation of a pattern is a hard failure on the matching surface.
//! Not finding a match is never an error: operations report it through
//! empty vectors, `None` or `false`.

use thiserror::Error;

/// Result type alias for pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;

/// Error type for all pattern operations.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern text is not a valid expression in the case-insensitive dialect
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A normalization mapping table could not be parsed
    #[error("Invalid mapping on line {line}: {reason}")]
    InvalidMapping { line: usize, reason: String },
}

impl PatternError {
    /// Builds an [`PatternError::InvalidPattern`] for the given pattern text.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Returns the offending pattern text, if this error concerns a pattern.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::InvalidPattern { pattern, .. } => Some(pattern),
            Self::InvalidMapping { .. } => None,
        }
    }
}
