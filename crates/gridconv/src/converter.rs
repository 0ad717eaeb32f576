//! The converter contract

use crate::ConvertResult;
use gridconv_types::{GridValue, PointSetId};

/// A bidirectional conversion between two point sets.
///
/// Implementations supply `not_null` / `reverse_not_null`; the public
/// `convert` / `convert_reverse` entry points short-circuit null to null, so
/// every converter upholds the null-propagation invariant for free. A
/// `not_null` body may still return `Ok(GridValue::Null)` to signal that the
/// concrete value could not be converted (a soft failure the caller must
/// tolerate).
pub trait DataConverter: Send + Sync {
    /// Name used in diagnostics
    fn name(&self) -> &'static str;

    /// Point set the forward direction starts from
    fn start(&self) -> PointSetId;

    /// Point set the forward direction produces
    fn end(&self) -> PointSetId;

    /// Forward conversion of a non-null value
    fn not_null(&self, value: &GridValue) -> ConvertResult<GridValue>;

    /// Reverse conversion of a non-null value
    fn reverse_not_null(&self, value: &GridValue) -> ConvertResult<GridValue>;

    /// Forward conversion, null passes through
    fn convert(&self, value: &GridValue) -> ConvertResult<GridValue> {
        if value.is_null() {
            return Ok(GridValue::Null);
        }
        self.not_null(value)
    }

    /// Reverse conversion, null passes through
    fn convert_reverse(&self, value: &GridValue) -> ConvertResult<GridValue> {
        if value.is_null() {
            return Ok(GridValue::Null);
        }
        self.reverse_not_null(value)
    }
}
