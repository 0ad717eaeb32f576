//! Raw-byte conversions

use crate::{ConvertError, ConvertResult, DataConverter};
use gridconv_types::{GridValue, PointSetId};
use std::fmt::Write as _;

/// bytes <-> texts as lowercase hex
pub struct BytesToText {
    start: PointSetId,
    end: PointSetId,
}

impl BytesToText {
    pub fn new(start: PointSetId, end: PointSetId) -> Self {
        Self { start, end }
    }

    fn decode_hex(text: &str) -> Option<Vec<u8>> {
        let text = text.trim();
        if text.len() % 2 != 0 {
            return None;
        }
        (0..text.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(text.get(i..i + 2)?, 16).ok())
            .collect()
    }
}

impl DataConverter for BytesToText {
    fn name(&self) -> &'static str {
        "BytesToText"
    }

    fn start(&self) -> PointSetId {
        self.start
    }

    fn end(&self) -> PointSetId {
        self.end
    }

    fn not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Bytes(b) => {
                let mut out = String::with_capacity(b.len() * 2);
                for byte in b {
                    // write! into a String cannot fail
                    let _ = write!(out, "{byte:02x}");
                }
                Ok(GridValue::Text(out))
            }
            other => Err(ConvertError::mismatch(
                self.name(),
                "bytes",
                other.kind_name(),
            )),
        }
    }

    fn reverse_not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Text(s) => Ok(Self::decode_hex(s)
                .map(GridValue::Bytes)
                .unwrap_or(GridValue::Null)),
            other => Err(ConvertError::mismatch(
                self.name(),
                "text",
                other.kind_name(),
            )),
        }
    }
}

/// bytes <-> binary texts ('0'/'1' digit strings)
pub struct BytesToBinaryText {
    start: PointSetId,
    end: PointSetId,
}

impl BytesToBinaryText {
    pub fn new(start: PointSetId, end: PointSetId) -> Self {
        Self { start, end }
    }

    fn decode_bits(text: &str) -> Option<Vec<u8>> {
        if text.is_empty() || text.len() % 8 != 0 {
            return None;
        }
        let mut bytes = Vec::with_capacity(text.len() / 8);
        let mut current = 0u8;
        for (i, c) in text.chars().enumerate() {
            current = match c {
                '0' => current << 1,
                '1' => (current << 1) | 1,
                _ => return None,
            };
            if i % 8 == 7 {
                bytes.push(current);
                current = 0;
            }
        }
        Some(bytes)
    }
}

impl DataConverter for BytesToBinaryText {
    fn name(&self) -> &'static str {
        "BytesToBinaryText"
    }

    fn start(&self) -> PointSetId {
        self.start
    }

    fn end(&self) -> PointSetId {
        self.end
    }

    fn not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Bytes(b) => {
                let mut out = String::with_capacity(b.len() * 8);
                for byte in b {
                    let _ = write!(out, "{byte:08b}");
                }
                Ok(GridValue::Text(out))
            }
            other => Err(ConvertError::mismatch(
                self.name(),
                "bytes",
                other.kind_name(),
            )),
        }
    }

    fn reverse_not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Text(s) => Ok(Self::decode_bits(s)
                .map(GridValue::Bytes)
                .unwrap_or(GridValue::Null)),
            other => Err(ConvertError::mismatch(
                self.name(),
                "text",
                other.kind_name(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        let conv = BytesToText::new(PointSetId(0), PointSetId(1));
        let bytes = GridValue::Bytes(vec![0xde, 0xad, 0x01]);
        let text = conv.convert(&bytes).unwrap();
        assert_eq!(text, GridValue::Text("dead01".into()));
        assert_eq!(conv.convert_reverse(&text).unwrap(), bytes);
    }

    #[test]
    fn test_malformed_hex_soft_fails() {
        let conv = BytesToText::new(PointSetId(0), PointSetId(1));
        for input in ["zz", "abc"] {
            assert_eq!(
                conv.convert_reverse(&GridValue::Text(input.into())).unwrap(),
                GridValue::Null
            );
        }
    }

    #[test]
    fn test_bit_text_round_trip() {
        let conv = BytesToBinaryText::new(PointSetId(0), PointSetId(1));
        let bytes = GridValue::Bytes(vec![0b0100_0001]);
        let text = conv.convert(&bytes).unwrap();
        assert_eq!(text, GridValue::Text("01000001".into()));
        assert_eq!(conv.convert_reverse(&text).unwrap(), bytes);
    }
}
