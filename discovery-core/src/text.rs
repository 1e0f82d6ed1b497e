//! Debug text rendering of messages.
//!
//! Messages render as space-separated `name:value` pairs; embedded messages
//! nest in braces. Unknown fields render by field number. The output is for
//! humans: deterministic for a given value, but not a stable format.
//!
//! ```text
//! list:{subscriptionId:1 policyId:"Gold"} list:{subscriptionId:2} 9:42
//! ```

use crate::unknown::{UnknownField, UnknownFields};
use prost::encoding::{WireType, decode_key, decode_varint};
use prost::{DecodeError, decode_length_delimiter};
use std::fmt;

/// Collects rendered fields of one message.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextFields {
    parts: Vec<String>,
}

impl TextFields {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scalar field rendered with its `Display` impl.
    pub fn scalar(&mut self, name: &str, value: impl fmt::Display) -> &mut Self {
        self.parts.push(format!("{name}:{value}"));
        self
    }

    /// Adds a quoted string field.
    pub fn string(&mut self, name: &str, value: &str) -> &mut Self {
        self.parts.push(format!("{name}:{value:?}"));
        self
    }

    /// Adds a quoted bytes field, non-printable bytes escaped.
    pub fn bytes(&mut self, name: &str, value: &[u8]) -> &mut Self {
        self.parts.push(format!("{name}:\"{}\"", value.escape_ascii()));
        self
    }

    /// Adds an embedded message field.
    pub fn message(&mut self, name: &str, value: impl fmt::Display) -> &mut Self {
        self.parts.push(format!("{name}:{{{value}}}"));
        self
    }

    /// Adds every stored unknown field.
    pub fn unknown(&mut self, unknown: &UnknownFields) -> &mut Self {
        for field in unknown.iter() {
            match field.and_then(render_unknown) {
                Ok(part) => self.parts.push(part),
                Err(_) => {
                    self.parts.push("<malformed>".to_string());
                    break;
                }
            }
        }
        self
    }

    /// Returns true if nothing was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl fmt::Display for TextFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts.join(" "))
    }
}

fn render_unknown(field: UnknownField<'_>) -> Result<String, DecodeError> {
    let mut value = field.raw;
    decode_key(&mut value)?;
    let number = field.number;
    Ok(match field.wire_type {
        WireType::Varint => format!("{number}:{}", decode_varint(&mut value)?),
        WireType::ThirtyTwoBit => format!("{number}:0x{:08x}", fixed::<4>(value)?),
        WireType::SixtyFourBit => format!("{number}:0x{:016x}", fixed::<8>(value)?),
        WireType::LengthDelimited => {
            let len = decode_length_delimiter(&mut value)?;
            let payload = value
                .get(..len)
                .ok_or_else(|| DecodeError::new("buffer underflow"))?;
            format!("{number}:\"{}\"", payload.escape_ascii())
        }
        WireType::StartGroup | WireType::EndGroup => {
            format!("{number}:<group {} bytes>", field.raw.len())
        }
    })
}

/// Reads a little-endian fixed-width value of `N` bytes.
fn fixed<const N: usize>(value: &[u8]) -> Result<u64, DecodeError> {
    let bytes = value
        .get(..N)
        .ok_or_else(|| DecodeError::new("buffer underflow"))?;
    Ok(bytes
        .iter()
        .rev()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_and_string() {
        let mut text = TextFields::new();
        text.scalar("id", 7).string("name", "a \"b\"");
        assert_eq!(text.to_string(), r#"id:7 name:"a \"b\"""#);
    }

    #[test]
    fn test_nested_message() {
        let mut inner = TextFields::new();
        inner.scalar("x", 1);
        let mut outer = TextFields::new();
        outer.message("m", &inner).message("m", TextFields::new());
        assert_eq!(outer.to_string(), "m:{x:1} m:{}");
    }

    #[test]
    fn test_bytes_escaped() {
        let mut text = TextFields::new();
        text.bytes("raw", &[b'o', b'k', 0x00, 0xFF]);
        assert_eq!(text.to_string(), r#"raw:"ok\x00\xff""#);
    }

    #[test]
    fn test_unknown_fields() {
        let mut unknown = UnknownFields::new();
        unknown.push_raw(&[0x48, 0x2A]);
        unknown.push_raw(&[0x52, 0x01, b'x']);
        unknown.push_raw(&[0x5D, 0x01, 0x00, 0x00, 0x00]);
        unknown.push_raw(&[0x63, 0x08, 0x07, 0x64]);

        let mut text = TextFields::new();
        text.unknown(&unknown);
        assert_eq!(
            text.to_string(),
            r#"9:42 10:"x" 11:0x00000001 12:<group 4 bytes>"#
        );
    }

    #[test]
    fn test_malformed_unknown_stops() {
        let mut unknown = UnknownFields::new();
        unknown.push_raw(&[0x48, 0x01, 0x52, 0x09]);

        let mut text = TextFields::new();
        text.unknown(&unknown);
        assert_eq!(text.to_string(), "9:1 <malformed>");
    }

    #[test]
    fn test_empty() {
        let text = TextFields::new();
        assert!(text.is_empty());
        assert_eq!(text.to_string(), "");
    }
}
