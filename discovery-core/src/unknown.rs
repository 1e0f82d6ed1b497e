//! Storage for fields a decoder did not recognize.
//!
//! Bound message types call [`UnknownFields::merge_field`] from the fallback
//! arm of their [`prost::Message::merge_field`] and [`UnknownFields::encode`]
//! at the end of `encode_raw`, so fields added by newer schema versions
//! survive a decode/encode cycle.

use bytes::{Buf, BufMut};
use prost::DecodeError;
use prost::encoding::{
    DecodeContext, WireType, decode_key, decode_varint, encode_key, encode_varint, skip_field,
};

/// Nesting limit for groups copied out of non-contiguous buffers.
const GROUP_DEPTH_LIMIT: u32 = 100;

/// Raw bytes of unrecognized fields, kept in arrival order.
///
/// Values are stored exactly as they appeared on the wire; keys are stored
/// in their canonical varint form. Everything is written back unchanged
/// after the known fields on re-encode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UnknownFields {
    raw: Vec<u8>,
}

/// One stored field, as yielded by [`UnknownFields::iter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownField<'a> {
    /// Field number.
    pub number: u32,
    /// Wire type of the value.
    pub wire_type: WireType,
    /// Key and value bytes.
    pub raw: &'a [u8],
}

impl UnknownFields {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { raw: Vec::new() }
    }

    /// Collects the top-level fields of an encoded message for which
    /// `is_known` returns false.
    ///
    /// # Errors
    /// Returns an error if `bytes` is not a well-formed message.
    pub fn from_message_bytes(
        bytes: &[u8],
        is_known: impl Fn(u32) -> bool,
    ) -> Result<Self, DecodeError> {
        let mut unknown = Self::new();
        for field in (Fields { rest: bytes }) {
            let field = field?;
            if !is_known(field.number) {
                unknown.push_raw(field.raw);
            }
        }
        Ok(unknown)
    }

    /// Stores the field whose key (`tag`, `wire_type`) was just read from
    /// `buf`, consuming its value.
    ///
    /// # Errors
    /// Returns an error if the value is truncated or malformed. Nothing is
    /// stored in that case.
    pub fn merge_field(
        &mut self,
        tag: u32,
        wire_type: WireType,
        buf: &mut impl Buf,
        ctx: DecodeContext,
    ) -> Result<(), DecodeError> {
        if buf.chunk().len() == buf.remaining() {
            let mut value = buf.chunk();
            let available = value.len();
            skip_field(wire_type, tag, &mut value, ctx)?;
            let len = available - value.len();

            encode_key(tag, wire_type, &mut self.raw);
            self.raw.extend_from_slice(&buf.chunk()[..len]);
            buf.advance(len);
        } else {
            let mut field = Vec::new();
            encode_key(tag, wire_type, &mut field);
            copy_value(tag, wire_type, buf, &mut field, 0)?;
            self.raw.extend_from_slice(&field);
        }
        Ok(())
    }

    /// Appends one raw field, key included.
    pub fn push_raw(&mut self, field: &[u8]) {
        self.raw.extend_from_slice(field);
    }

    /// Returns the stored bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the encoded length of all stored fields.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.raw.len()
    }

    /// Drops all stored fields.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Writes the stored fields.
    pub fn encode(&self, buf: &mut impl BufMut) {
        buf.put_slice(&self.raw);
    }

    /// Iterates over the stored fields.
    pub fn iter(&self) -> impl Iterator<Item = Result<UnknownField<'_>, DecodeError>> {
        Fields { rest: &self.raw }
    }
}

struct Fields<'a> {
    rest: &'a [u8],
}

impl<'a> Iterator for Fields<'a> {
    type Item = Result<UnknownField<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let start = self.rest;
        let mut cursor = self.rest;
        let field = decode_key(&mut cursor).and_then(|(number, wire_type)| {
            skip_field(wire_type, number, &mut cursor, DecodeContext::default())?;
            Ok(UnknownField {
                number,
                wire_type,
                raw: &start[..start.len() - cursor.len()],
            })
        });
        // Stop after the first malformed field rather than resynchronise.
        self.rest = if field.is_ok() { cursor } else { &[] };
        Some(field)
    }
}

fn copy_value(
    tag: u32,
    wire_type: WireType,
    buf: &mut impl Buf,
    out: &mut Vec<u8>,
    depth: u32,
) -> Result<(), DecodeError> {
    match wire_type {
        WireType::Varint => encode_varint(decode_varint(buf)?, out),
        WireType::ThirtyTwoBit => copy_bytes(buf, 4, out)?,
        WireType::SixtyFourBit => copy_bytes(buf, 8, out)?,
        WireType::LengthDelimited => {
            let len = decode_varint(buf)?;
            encode_varint(len, out);
            let len = usize::try_from(len)
                .map_err(|_| DecodeError::new("length delimiter exceeds address space"))?;
            copy_bytes(buf, len, out)?;
        }
        WireType::StartGroup => {
            if depth >= GROUP_DEPTH_LIMIT {
                return Err(DecodeError::new("recursion limit reached"));
            }
            loop {
                let (inner_tag, inner_type) = decode_key(buf)?;
                encode_key(inner_tag, inner_type, out);
                if inner_type == WireType::EndGroup {
                    if inner_tag != tag {
                        return Err(DecodeError::new("unexpected end group tag"));
                    }
                    break;
                }
                copy_value(inner_tag, inner_type, buf, out, depth + 1)?;
            }
        }
        WireType::EndGroup => return Err(DecodeError::new("unexpected end group tag")),
    }
    Ok(())
}

fn copy_bytes(buf: &mut impl Buf, len: usize, out: &mut Vec<u8>) -> Result<(), DecodeError> {
    if buf.remaining() < len {
        return Err(DecodeError::new("buffer underflow"));
    }
    let start = out.len();
    out.resize(start + len, 0);
    buf.copy_to_slice(&mut out[start..]);
    Ok(())
}
