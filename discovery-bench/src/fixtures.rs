//! Sample messages.

use discovery_schema::SchemaRegistry;
use discovery_subscription::{Subscription, SubscriptionList, register_all};

/// Builds a realistic subscription with every field set.
#[must_use]
pub fn subscription(id: i32) -> Subscription {
    Subscription::new()
        .with_subscription_id(id)
        .with_policy_id("Unlimited")
        .with_api_id(1000 + id)
        .with_app_id(2000 + id)
        .with_subscription_state("UNBLOCKED")
        .with_time_stamp(1_650_000_000_000 + i64::from(id))
        .with_tenant_id(-1234)
        .with_tenant_domain("carbon.super")
        .with_subscription_uuid(format!("7c0b5f2e-0000-4000-8000-{id:012}"))
        .with_app_uuid(format!("a1d3c9e4-0000-4000-8000-{id:012}"))
        .with_api_uuid(format!("f4e2b7a0-0000-4000-8000-{id:012}"))
}

/// Builds a list of `n` subscriptions.
#[must_use]
pub fn subscription_list(n: usize) -> SubscriptionList {
    (0..n)
        .map(|i| subscription(i32::try_from(i).unwrap_or(i32::MAX)))
        .collect()
}

/// Returns a registry holding the subscription files.
///
/// # Panics
/// Panics if the embedded schema files fail to register.
#[must_use]
pub fn registry() -> SchemaRegistry {
    let registry = SchemaRegistry::new();
    if let Err(e) = register_all(&registry) {
        panic!("failed to register subscription schema: {e}");
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use discovery_core::Message;

    #[test]
    fn test_fixture_round_trips() {
        let list = subscription_list(3);
        let bytes = list.encode_to_vec();
        assert_eq!(SubscriptionList::decode(bytes.as_slice()).unwrap(), list);
        assert!(registry().contains("wso2.discovery.subscription.SubscriptionList"));
    }
}
