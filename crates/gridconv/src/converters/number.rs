//! Numeric conversions

use crate::{ConvertError, ConvertResult, DataConverter};
use gridconv_format::{FormatterCreator, NumberFormatter};
use gridconv_types::{GridValue, PointSetId};

/// numbers <-> texts.
///
/// Forward renders through the session number formatter (built once here,
/// at construction). Reverse parses with a cascade: integer first, then the
/// boolean literals as 1/0, then floating point; text that survives none of
/// these soft-fails to null.
pub struct NumberToText {
    start: PointSetId,
    end: PointSetId,
    formatter: NumberFormatter,
}

impl NumberToText {
    pub fn new(start: PointSetId, end: PointSetId, creator: &FormatterCreator) -> Self {
        Self {
            start,
            end,
            formatter: creator.number_formatter(),
        }
    }
}

impl DataConverter for NumberToText {
    fn name(&self) -> &'static str {
        "NumberToText"
    }

    fn start(&self) -> PointSetId {
        self.start
    }

    fn end(&self) -> PointSetId {
        self.end
    }

    fn not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Int(i) => Ok(GridValue::Text(i.to_string())),
            GridValue::Float(f) => Ok(GridValue::Text(self.formatter.format_f64(*f))),
            GridValue::Decimal(d) => Ok(GridValue::Text(self.formatter.format_decimal(*d))),
            other => Err(ConvertError::mismatch(
                self.name(),
                "number",
                other.kind_name(),
            )),
        }
    }

    fn reverse_not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        let text = match value {
            GridValue::Text(s) => s.trim(),
            other => {
                return Err(ConvertError::mismatch(
                    self.name(),
                    "text",
                    other.kind_name(),
                ))
            }
        };
        if let Ok(i) = text.parse::<i64>() {
            return Ok(GridValue::Int(i));
        }
        if text.eq_ignore_ascii_case("true") {
            return Ok(GridValue::Int(1));
        }
        if text.eq_ignore_ascii_case("false") {
            return Ok(GridValue::Int(0));
        }
        if let Ok(f) = text.parse::<f64>() {
            return Ok(GridValue::Float(f));
        }
        Ok(GridValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn converter() -> NumberToText {
        NumberToText::new(
            PointSetId(0),
            PointSetId(1),
            &FormatterCreator::with_defaults(),
        )
    }

    #[rstest]
    #[case("42", GridValue::Int(42))]
    #[case("-7", GridValue::Int(-7))]
    #[case("true", GridValue::Int(1))]
    #[case("False", GridValue::Int(0))]
    #[case("3.14", GridValue::Float(3.14))]
    #[case("1e3", GridValue::Float(1000.0))]
    #[case("abc", GridValue::Null)]
    #[case("", GridValue::Null)]
    fn test_reverse_parse_cascade(#[case] input: &str, #[case] expected: GridValue) {
        let conv = converter();
        assert_eq!(
            conv.convert_reverse(&GridValue::Text(input.into())).unwrap(),
            expected
        );
    }

    #[test]
    fn test_forward_renders_each_shape() {
        let conv = converter();
        assert_eq!(
            conv.convert(&GridValue::Int(42)).unwrap(),
            GridValue::Text("42".into())
        );
        assert_eq!(
            conv.convert(&GridValue::Float(2.5)).unwrap(),
            GridValue::Text("2.5".into())
        );
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let conv = converter();
        assert!(conv.convert(&GridValue::Boolean(true)).is_err());
    }
}
