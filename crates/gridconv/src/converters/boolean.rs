//! Boolean conversions

use crate::{ConvertError, ConvertResult, DataConverter};
use gridconv_types::{GridValue, PointSetId};

/// booleans <-> texts.
///
/// Forward renders `"true"` / `"false"`. Reverse recognizes the truthy
/// tokens `yes`, `true` and `1` case-insensitively; every other string,
/// the empty string included, is false.
pub struct BooleanToText {
    start: PointSetId,
    end: PointSetId,
}

impl BooleanToText {
    pub fn new(start: PointSetId, end: PointSetId) -> Self {
        Self { start, end }
    }
}

impl DataConverter for BooleanToText {
    fn name(&self) -> &'static str {
        "BooleanToText"
    }

    fn start(&self) -> PointSetId {
        self.start
    }

    fn end(&self) -> PointSetId {
        self.end
    }

    fn not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Boolean(b) => Ok(GridValue::Text(b.to_string())),
            other => Err(ConvertError::mismatch(
                self.name(),
                "boolean",
                other.kind_name(),
            )),
        }
    }

    fn reverse_not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Text(s) => {
                let truthy = s.eq_ignore_ascii_case("yes")
                    || s.eq_ignore_ascii_case("true")
                    || s == "1";
                Ok(GridValue::Boolean(truthy))
            }
            other => Err(ConvertError::mismatch(
                self.name(),
                "text",
                other.kind_name(),
            )),
        }
    }
}

/// booleans <-> numbers.
///
/// Forward maps true to 1 and false to 0. Reverse treats any numeric value
/// at or above 1 (by floating comparison) as true.
pub struct BooleanToNumber {
    start: PointSetId,
    end: PointSetId,
}

impl BooleanToNumber {
    pub fn new(start: PointSetId, end: PointSetId) -> Self {
        Self { start, end }
    }
}

impl DataConverter for BooleanToNumber {
    fn name(&self) -> &'static str {
        "BooleanToNumber"
    }

    fn start(&self) -> PointSetId {
        self.start
    }

    fn end(&self) -> PointSetId {
        self.end
    }

    fn not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Boolean(b) => Ok(GridValue::Int(i64::from(*b))),
            other => Err(ConvertError::mismatch(
                self.name(),
                "boolean",
                other.kind_name(),
            )),
        }
    }

    fn reverse_not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value.as_f64() {
            Some(n) => Ok(GridValue::Boolean(n >= 1.0)),
            None => Err(ConvertError::mismatch(
                self.name(),
                "number",
                value.kind_name(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn text_converter() -> BooleanToText {
        BooleanToText::new(PointSetId(0), PointSetId(1))
    }

    #[test]
    fn test_forward_renders_literals() {
        let conv = text_converter();
        assert_eq!(
            conv.convert(&GridValue::Boolean(true)).unwrap(),
            GridValue::Text("true".into())
        );
        assert_eq!(
            conv.convert(&GridValue::Boolean(false)).unwrap(),
            GridValue::Text("false".into())
        );
    }

    #[rstest]
    #[case("YES", true)]
    #[case("yes", true)]
    #[case("True", true)]
    #[case("1", true)]
    #[case("", false)]
    #[case("0", false)]
    #[case("no", false)]
    #[case("2", false)]
    fn test_reverse_truthy_tokens(#[case] input: &str, #[case] expected: bool) {
        let conv = text_converter();
        assert_eq!(
            conv.convert_reverse(&GridValue::Text(input.into())).unwrap(),
            GridValue::Boolean(expected)
        );
    }

    #[test]
    fn test_number_reverse_uses_floating_threshold() {
        let conv = BooleanToNumber::new(PointSetId(0), PointSetId(1));
        assert_eq!(
            conv.convert_reverse(&GridValue::Float(1.0)).unwrap(),
            GridValue::Boolean(true)
        );
        assert_eq!(
            conv.convert_reverse(&GridValue::Float(0.99)).unwrap(),
            GridValue::Boolean(false)
        );
        assert_eq!(
            conv.convert_reverse(&GridValue::Int(7)).unwrap(),
            GridValue::Boolean(true)
        );
    }

    #[test]
    fn test_null_passes_through() {
        let conv = text_converter();
        assert_eq!(conv.convert(&GridValue::Null).unwrap(), GridValue::Null);
        assert_eq!(
            conv.convert_reverse(&GridValue::Null).unwrap(),
            GridValue::Null
        );
    }
}
