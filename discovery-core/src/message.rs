//! Codec extensions for [`prost::Message`] types.

use prost::{EncodeError, Message};

/// Framing helpers missing from [`Message`].
///
/// # Example
/// ```ignore
/// let mut frame = [0u8; 256];
/// let written = list.encode_to_slice(&mut frame)?;
/// let decoded = SubscriptionList::decode(&frame[..written])?;
/// ```
pub trait MessageExt: Message + Sized {
    /// Encodes the message into a caller-provided slice.
    ///
    /// Returns the number of bytes written; nothing is written on failure.
    ///
    /// # Errors
    /// Returns an error if `buf` is shorter than [`Message::encoded_len`].
    fn encode_to_slice(&self, buf: &mut [u8]) -> Result<usize, EncodeError> {
        let len = self.encoded_len();
        let mut target = buf;
        self.encode(&mut target)?;
        Ok(len)
    }
}

impl<M: Message> MessageExt for M {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, prost::Message)]
    struct Counter {
        #[prost(uint32, tag = "1")]
        value: u32,
    }

    #[test]
    fn test_encode_to_slice() {
        let counter = Counter { value: 300 };
        let mut buf = [0u8; 8];
        let written = counter.encode_to_slice(&mut buf).unwrap();
        assert_eq!(written, 3);
        assert_eq!(&buf[..written], [0x08, 0xAC, 0x02]);
        assert_eq!(Counter::decode(&buf[..written]).unwrap(), counter);
    }

    #[test]
    fn test_encode_to_slice_too_small() {
        let counter = Counter { value: 300 };
        let mut buf = [0u8; 2];
        let err = counter.encode_to_slice(&mut buf).unwrap_err();
        assert_eq!(err.required_capacity(), 3);
        assert_eq!(err.remaining(), 2);
        assert_eq!(buf, [0, 0]);
    }

    #[test]
    fn test_default_encodes_empty() {
        let mut buf = [0u8; 0];
        assert_eq!(Counter::default().encode_to_slice(&mut buf).unwrap(), 0);
    }
}
