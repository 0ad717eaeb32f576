//! Conversion errors
//!
//! Most conversion failures are *soft*: a converter that cannot parse a
//! concrete value returns `Ok(GridValue::Null)` and the caller treats the
//! null as "conversion failed, keep going". Errors are reserved for the two
//! hard cases below; "no path between these points" is not an error at all,
//! [`ConversionGraph::get_converter`](crate::ConversionGraph::get_converter)
//! simply returns `None`.

use gridconv_format::FormatError;
use thiserror::Error;

/// Result type for value conversions
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Hard conversion failures
#[derive(Debug, Clone, Error)]
pub enum ConvertError {
    /// The converter intentionally does not implement this direction
    #[error("{converter} does not support {direction} conversion")]
    Unsupported {
        converter: &'static str,
        direction: &'static str,
    },

    /// A value of the wrong shape reached the converter; this is a
    /// programming error at the call boundary, not a data condition
    #[error("{converter} expected {expected}, found {found}")]
    Mismatch {
        converter: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A formatter collaborator failed to render the value
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl ConvertError {
    /// Shape mismatch for the named converter
    pub fn mismatch(
        converter: &'static str,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::Mismatch {
            converter,
            expected,
            found,
        }
    }
}
