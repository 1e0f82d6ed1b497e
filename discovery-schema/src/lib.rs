//! # Discovery Schema
//!
//! Schema descriptors and runtime reflection for the WSO2 discovery message
//! types, built on `prost-types` and `prost-reflect`.
//!
//! This crate provides:
//! - [`EmbeddedFile`] for `FileDescriptorProto` bytes compiled into the
//!   binary, plain or gzipped, decoded once
//! - [`SchemaRegistry`], an explicit registry over a
//!   [`prost_reflect::DescriptorPool`] validating imports and type references
//! - [`DynamicText`], the debug rendering of [`DynamicMessage`]s

pub mod embedded;
pub mod error;
pub mod registry;
pub mod text;

pub use embedded::{EmbeddedFile, RawEncoding};
pub use error::{DescriptorError, DescriptorResult, ReflectError, SchemaRegistrationError};
pub use prost_reflect::{DynamicMessage, FileDescriptor, MessageDescriptor, Value};
pub use registry::{MessageEntry, RegistryBuilder, SchemaRegistry};
pub use text::DynamicText;
