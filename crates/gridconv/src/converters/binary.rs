//! Bit-string conversions

use crate::{ConvertError, ConvertResult, DataConverter};
use gridconv_types::{GridValue, PointSetId};

/// binary texts <-> texts.
///
/// Forward decodes a string of '0'/'1' digits, eight bits per character,
/// back into text. Malformed bit text is not an error: the input string is
/// returned unchanged, so a bad round trip degrades to identity instead of
/// losing the value. Reverse encodes each byte of the text as its 8-bit
/// pattern.
pub struct BinaryTextToText {
    start: PointSetId,
    end: PointSetId,
}

impl BinaryTextToText {
    pub fn new(start: PointSetId, end: PointSetId) -> Self {
        Self { start, end }
    }

    fn decode(bits: &str) -> Option<String> {
        if bits.is_empty() || bits.len() % 8 != 0 {
            return None;
        }
        let mut bytes = Vec::with_capacity(bits.len() / 8);
        let mut current = 0u8;
        for (i, c) in bits.chars().enumerate() {
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
        String::from_utf8(bytes).ok()
    }

    fn encode(text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 8);
        for byte in text.bytes() {
            out.push_str(&format!("{byte:08b}"));
        }
        out
    }
}

impl DataConverter for BinaryTextToText {
    fn name(&self) -> &'static str {
        "BinaryTextToText"
    }

    fn start(&self) -> PointSetId {
        self.start
    }

    fn end(&self) -> PointSetId {
        self.end
    }

    fn not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Text(s) => Ok(GridValue::Text(
                Self::decode(s).unwrap_or_else(|| s.clone()),
            )),
            other => Err(ConvertError::mismatch(
                self.name(),
                "text",
                other.kind_name(),
            )),
        }
    }

    fn reverse_not_null(&self, value: &GridValue) -> ConvertResult<GridValue> {
        match value {
            GridValue::Text(s) => Ok(GridValue::Text(Self::encode(s))),
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

    fn converter() -> BinaryTextToText {
        BinaryTextToText::new(PointSetId(0), PointSetId(1))
    }

    #[test]
    fn test_reverse_encodes_eight_bits_per_char() {
        let conv = converter();
        let bits = conv.convert_reverse(&GridValue::Text("AB".into())).unwrap();
        assert_eq!(bits, GridValue::Text("0100000101000010".into()));
    }

    #[test]
    fn test_forward_recovers_encoded_text() {
        let conv = converter();
        let decoded = conv
            .convert(&GridValue::Text("0100000101000010".into()))
            .unwrap();
        assert_eq!(decoded, GridValue::Text("AB".into()));
    }

    #[test]
    fn test_malformed_bits_degrade_to_identity() {
        let conv = converter();
        for input in ["01xy0101", "0101", "hello"] {
            assert_eq!(
                conv.convert(&GridValue::Text(input.into())).unwrap(),
                GridValue::Text(input.into())
            );
        }
    }
}
