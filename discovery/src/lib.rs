//! # Discovery
//!
//! Protobuf messages of the WSO2 discovery subscription API for Rust.
//!
//! ## Features
//!
//! - **Direct codec** - Bound `Subscription` and `SubscriptionList` types
//!   implementing `prost::Message`, unknown fields preserved
//! - **Embedded schemas** - Serialized descriptors compiled in, decoded once
//! - **Explicit registry** - Import order and type references validated at startup
//! - **Reflection** - `prost-reflect` dynamic messages for any registered type,
//!   byte-identical to the direct codec
//!
//! ## Quick Start
//!
//! ```ignore
//! use discovery::prelude::*;
//!
//! let registry = discovery::init()?;
//!
//! let mut list = SubscriptionList::new();
//! list.push(Subscription::new().with_subscription_id(1).with_policy_id("Gold"));
//! let bytes = list.encode_to_vec();
//!
//! let dynamic = registry.decode("wso2.discovery.subscription.SubscriptionList", &bytes)?;
//! println!("{}", DynamicText(&dynamic));
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Unknown-field storage, text rendering, codec extensions
//! - [`schema`] - Embedded descriptors, registry, dynamic message rendering
//! - [`subscription`] - The bound subscription message types

pub mod prelude;

/// Codec support on top of `prost`.
pub mod core {
    pub use discovery_core::*;
}

/// Schema descriptors, registry and reflection.
pub mod schema {
    pub use discovery_schema::*;
}

/// Subscription message types.
pub mod subscription {
    pub use discovery_subscription::*;
}

pub use discovery_core::{DecodeError, EncodeError, Message, Name};
pub use discovery_schema::{DynamicMessage, DynamicText, SchemaRegistrationError, SchemaRegistry};
pub use discovery_subscription::{Subscription, SubscriptionList};

/// Builds a registry holding every schema file of this crate.
///
/// # Errors
/// Returns an error if an embedded schema file fails to register.
pub fn init() -> Result<SchemaRegistry, SchemaRegistrationError> {
    let registry = SchemaRegistry::new();
    discovery_subscription::register_all(&registry)?;
    tracing::debug!("Discovery schemas ready ({} files)", registry.len());
    Ok(registry)
}

/// Like [`init`], for processes that cannot run without their schemas.
///
/// # Panics
/// Panics, after logging the cause, if registration fails.
#[must_use]
pub fn init_or_abort() -> SchemaRegistry {
    match init() {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!("Schema registration failed: {}", e);
            panic!("schema registration failed: {e}");
        }
    }
}
