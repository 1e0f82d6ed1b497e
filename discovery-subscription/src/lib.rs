//! # Discovery Subscription
//!
//! Bound message types of the `wso2.discovery.subscription` package.
//!
//! This crate provides:
//! - [`Subscription`] and [`SubscriptionList`], implementing
//!   [`prost::Message`] with unknown fields preserved
//! - The embedded schema files of the package and [`register_all`]
//! - Conversions to and from [`discovery_schema::DynamicMessage`]

pub mod descriptor;
pub mod subscription;
pub mod subscription_list;

pub use descriptor::{SUBSCRIPTION_LIST_PROTO, SUBSCRIPTION_PROTO, register_all};
pub use discovery_schema::ReflectError;
pub use subscription::Subscription;
pub use subscription_list::{LIST_FIELD_NUMBER, SubscriptionList};

/// Schema package of every type in this crate.
pub const PACKAGE: &str = "wso2.discovery.subscription";
