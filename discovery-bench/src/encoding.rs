//! Encoding/decoding timing helpers, for quick measurements outside criterion.

use bytes::BytesMut;
use discovery_core::{EncodeError, Message, MessageExt};
use std::time::{Duration, Instant};

/// Encodes `message` `iterations` times into a reused buffer.
///
/// # Errors
/// Returns the first encode failure.
pub fn benchmark_encode<M: Message>(iterations: usize, message: &M) -> Result<Duration, EncodeError> {
    let mut buffer = BytesMut::with_capacity(message.encoded_len());
    let start = Instant::now();

    for _ in 0..iterations {
        buffer.clear();
        message.encode(&mut buffer)?;
    }

    Ok(start.elapsed())
}

/// Encodes `message` `iterations` times into the fixed-size `frame`.
///
/// # Errors
/// Returns an error if `frame` cannot hold the message.
pub fn benchmark_encode_to_slice<M: Message>(
    iterations: usize,
    message: &M,
    frame: &mut [u8],
) -> Result<Duration, EncodeError> {
    let start = Instant::now();

    for _ in 0..iterations {
        message.encode_to_slice(frame)?;
    }

    Ok(start.elapsed())
}

/// Runs `decode_fn` over `data` `iterations` times.
pub fn benchmark_decode<F, T>(iterations: usize, data: &[u8], mut decode_fn: F) -> Duration
where
    F: FnMut(&[u8]) -> T,
{
    let start = Instant::now();

    for _ in 0..iterations {
        let _ = decode_fn(data);
    }

    start.elapsed()
}
