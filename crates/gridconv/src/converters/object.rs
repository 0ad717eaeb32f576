//! Structured-value conversions
//!
//! Two asymmetric converters with different reverse policies. They are not
//! interchangeable: `ObjectToText` hard-fails its reverse direction while
//! `ObjectToJsonText` attempts a JSON parse and soft-fails to null.

use crate::{ConvertError, ConvertResult, DataConverter};
use gridconv_format::{ObjectFormatMode, ObjectFormatter};
use gridconv_types::{GridValue, PointSetId};
use std::sync::Arc;

/// objects -> texts, display rendering only.
///
/// Reverse is intentionally unsupported: arbitrary display text cannot be
/// read back into a structured value, and silently returning null here would
/// mask caller bugs. The error, not a null, is the contract.
pub struct ObjectToText {
    start: PointSetId,
    end: PointSetId,
    formatter: Arc<dyn ObjectFormatter>,
}

impl ObjectToText {
    pub fn new(start: PointSetId, end: PointSetId, formatter: Arc<dyn ObjectFormatter>) -> Self {
        Self {
            start,
            end,
            formatter,
        }
    }
}

impl DataConverter for ObjectToText {
    fn name(&self) -> &'static str {
        "ObjectToText"
    }

    fn start(&self) -> PointSetId {
        self.start
    }

    fn end(&self) -> PointSetId {
        self.end
    }

    fn not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Object(v) => {
                let text = self.formatter.format_object(v, ObjectFormatMode::Json)?;
                Ok(GridValue::Text(text))
            }
            other => Err(ConvertError::mismatch(
                self.name(),
                "object",
                other.kind_name(),
            )),
        }
    }

    fn reverse_not_null(&self, _value: &GridValue) -> ConvertResult<GridValue> {
        Err(ConvertError::Unsupported {
            converter: "ObjectToText",
            direction: "reverse",
        })
    }
}

/// objects <-> json texts.
///
/// Forward renders compact JSON; reverse parses JSON text back into a
/// structured value and soft-fails to null on malformed input.
pub struct ObjectToJsonText {
    start: PointSetId,
    end: PointSetId,
    formatter: Arc<dyn ObjectFormatter>,
}

impl ObjectToJsonText {
    pub fn new(start: PointSetId, end: PointSetId, formatter: Arc<dyn ObjectFormatter>) -> Self {
        Self {
            start,
            end,
            formatter,
        }
    }
}

impl DataConverter for ObjectToJsonText {
    fn name(&self) -> &'static str {
        "ObjectToJsonText"
    }

    fn start(&self) -> PointSetId {
        self.start
    }

    fn end(&self) -> PointSetId {
        self.end
    }

    fn not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Object(v) => {
                let text = self
                    .formatter
                    .format_object(v, ObjectFormatMode::JsonCompact)?;
                Ok(GridValue::Text(text))
            }
            other => Err(ConvertError::mismatch(
                self.name(),
                "object",
                other.kind_name(),
            )),
        }
    }

    fn reverse_not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Text(s) => Ok(serde_json::from_str(s)
                .map(GridValue::Object)
                .unwrap_or(GridValue::Null)),
            other => Err(ConvertError::mismatch(
                self.name(),
                "text",
                other.kind_name(),
            )),
        }
    }
}
