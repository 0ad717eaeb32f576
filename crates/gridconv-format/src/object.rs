//! Serialization of structured values to text

use crate::{FormatError, FormatResult};
use serde_json::Value;

/// How a structured value should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectFormatMode {
    /// Pretty-printed, for display in editors
    Json,
    /// Single line, for storage and wire use
    JsonCompact,
}

/// Serializes arbitrary structured values (maps, arrays, documents) to a
/// textual representation.
///
/// Implementations must be safe for concurrent use; the conversion graph
/// shares one instance across every object converter of a session.
pub trait ObjectFormatter: Send + Sync {
    /// Render the value in the requested mode
    fn format_object(&self, value: &Value, mode: ObjectFormatMode) -> FormatResult<String>;
}

/// Default formatter producing JSON text
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonObjectFormatter;

impl ObjectFormatter for JsonObjectFormatter {
    fn format_object(&self, value: &Value, mode: ObjectFormatMode) -> FormatResult<String> {
        let rendered = match mode {
            ObjectFormatMode::Json => serde_json::to_string_pretty(value),
            ObjectFormatMode::JsonCompact => serde_json::to_string(value),
        };
        rendered.map_err(|e| FormatError::Serialize {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compact_mode_is_single_line() {
        let formatter = JsonObjectFormatter;
        let text = formatter
            .format_object(&json!({"a": [1, 2]}), ObjectFormatMode::JsonCompact)
            .unwrap();
        assert_eq!(text, r#"{"a":[1,2]}"#);
    }

    #[test]
    fn test_pretty_mode_spans_lines() {
        let formatter = JsonObjectFormatter;
        let text = formatter
            .format_object(&json!({"a": 1}), ObjectFormatMode::Json)
            .unwrap();
        assert!(text.contains('\n'));
    }
}
