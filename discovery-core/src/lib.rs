//! # Discovery Core
//!
//! Support layer between [`prost`] and the WSO2 discovery message types.
//!
//! This crate provides:
//! - [`UnknownFields`] for preserving unrecognized fields across re-encoding,
//!   driven from a hand-written [`prost::Message::merge_field`]
//! - [`MessageExt`] with framing helpers `prost` leaves out
//! - [`TextFields`] for the debug text rendering shared by all messages
//! - Re-exports of the `prost` codec traits and errors

pub mod message;
pub mod text;
pub mod unknown;

pub use message::MessageExt;
pub use prost::{DecodeError, EncodeError, Message, Name};
pub use text::TextFields;
pub use unknown::{UnknownField, UnknownFields};
