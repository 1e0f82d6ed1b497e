//! Prelude module for convenient imports.
//!
//! ```ignore
//! use discovery::prelude::*;
//! ```

// Codec
pub use discovery_core::{
    DecodeError, EncodeError, Message, MessageExt, Name, TextFields, UnknownFields,
};

// Schema and reflection
pub use discovery_schema::{
    DynamicMessage, DynamicText, EmbeddedFile, MessageDescriptor, RegistryBuilder,
    SchemaRegistrationError, SchemaRegistry, Value,
};

// Subscription types
pub use discovery_subscription::{ReflectError, Subscription, SubscriptionList, register_all};
