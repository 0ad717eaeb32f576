//! Formatter collaborators for the gridconv conversion graph
//!
//! Converters that render or parse values do so through the collaborators
//! defined here rather than ad hoc:
//! - `FormatSettings` - timezone offset, patterns and the time-lifting
//!   anchor date shared by a grid session
//! - `FormatsCache` - memoized pattern strings keyed by `FormatKey`
//! - `FormatterCreator` - factory producing date/time/timestamp/number
//!   formatters; converters build their formatter once at construction
//! - `ObjectFormatter` - serializes structured values to text

pub mod cache;
pub mod creator;
pub mod error;
pub mod object;
pub mod settings;

pub use cache::{FormatKey, FormatsCache};
pub use creator::{
    DateFormatter, FormatterCreator, NumberFormatter, TimeFormatter, TimestampFormatter,
    TimestampTzFormatter,
};
pub use error::{FormatError, FormatResult};
pub use object::{JsonObjectFormatter, ObjectFormatMode, ObjectFormatter};
pub use settings::FormatSettings;
