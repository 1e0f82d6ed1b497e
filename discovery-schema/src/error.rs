//! Error types for descriptor loading, schema registration and reflection.

use prost::DecodeError;
use thiserror::Error;

/// Error type for reading embedded schema descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// Descriptor bytes are not a valid `FileDescriptorProto`.
    #[error("malformed descriptor: {0}")]
    Decode(#[from] DecodeError),

    /// The descriptor pool refused a structurally valid file.
    #[error("invalid descriptor: {message}")]
    Invalid {
        /// Reason given by the descriptor pool.
        message: String,
    },

    /// Gzip stream could not be inflated or deflated.
    #[error("compression error in '{file}': {message}")]
    Compression {
        /// File whose bytes failed.
        file: String,
        /// Underlying I/O error text.
        message: String,
    },
}

/// Error type for schema registration.
///
/// Registration happens at startup; every variant is fatal for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaRegistrationError {
    /// Embedded descriptor bytes could not be loaded.
    #[error("cannot load descriptor for '{file}': {source}")]
    Descriptor {
        /// File name.
        file: String,
        /// Underlying descriptor error.
        #[source]
        source: DescriptorError,
    },

    /// A file was registered before one of its imports.
    #[error("file '{file}' depends on '{dependency}', which is not registered")]
    MissingDependency {
        /// File being registered.
        file: String,
        /// Import that is missing.
        dependency: String,
    },

    /// A field references a type that is neither local nor imported.
    #[error("field '{field}' of '{message}' references unknown type '{type_name}'")]
    UnresolvedType {
        /// Fully-qualified message name.
        message: String,
        /// Field name.
        field: String,
        /// Referenced type name.
        type_name: String,
    },

    /// A type name is already owned by another file.
    #[error("type '{name}' from '{file}' is already registered by '{existing}'")]
    DuplicateType {
        /// Fully-qualified type name.
        name: String,
        /// File being registered.
        file: String,
        /// File that registered the name first.
        existing: String,
    },
}

impl SchemaRegistrationError {
    /// Creates a descriptor error for `file`.
    pub fn descriptor(file: impl Into<String>, source: DescriptorError) -> Self {
        Self::Descriptor {
            file: file.into(),
            source,
        }
    }
}

/// Error type for moving messages in and out of reflective form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflectError {
    /// No registered file declares the message.
    #[error("message type '{name}' is not registered")]
    UnknownMessage {
        /// Fully-qualified name that was looked up.
        name: String,
    },

    /// The encoded bytes could not be decoded on the other side.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The dynamic message is of a different type.
    #[error("expected message {expected}, found {actual}")]
    TypeMismatch {
        /// Name of the requested type.
        expected: String,
        /// Name of the dynamic message type.
        actual: String,
    },
}

/// Result type alias for descriptor operations.
pub type DescriptorResult<T> = std::result::Result<T, DescriptorError>;
