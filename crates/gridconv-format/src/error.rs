//! Formatting and parsing errors

use thiserror::Error;

/// Result type for formatting operations
pub type FormatResult<T> = Result<T, FormatError>;

/// Errors produced by the formatter collaborators
#[derive(Debug, Clone, Error)]
pub enum FormatError {
    /// Input text did not match the expected pattern
    #[error("cannot parse {input:?} as {target}")]
    Parse { input: String, target: &'static str },

    /// Value shape the formatter does not handle
    #[error("cannot format {found} as {target}")]
    UnsupportedValue { found: &'static str, target: &'static str },

    /// Structured value could not be serialized
    #[error("cannot serialize object: {message}")]
    Serialize { message: String },
}

impl FormatError {
    /// Parse failure for the given input and target description
    pub fn parse(input: impl Into<String>, target: &'static str) -> Self {
        Self::Parse {
            input: input.into(),
            target,
        }
    }
}
