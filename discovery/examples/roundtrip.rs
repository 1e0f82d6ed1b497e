//! Encodes a subscription snapshot, decodes it directly and through reflection.
//!
//! Run with: `RUST_LOG=debug cargo run --example roundtrip`

use discovery::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = discovery::init()?;

    let list: SubscriptionList = (1..=3)
        .map(|id| {
            Subscription::new()
                .with_subscription_id(id)
                .with_policy_id("Unlimited")
                .with_subscription_state("UNBLOCKED")
                .with_tenant_domain("carbon.super")
        })
        .collect();

    let bytes = list.encode_to_vec();
    println!("[Direct] {} subscriptions, {} bytes", list.len(), bytes.len());

    let decoded = SubscriptionList::decode(bytes.as_slice())?;
    for subscription in &decoded {
        println!("[Direct] {subscription}");
    }

    let dynamic = registry.decode(&SubscriptionList::full_name(), &bytes)?;
    println!("[Dynamic] {}", DynamicText(&dynamic));

    let reencoded = dynamic.encode_to_vec();
    println!(
        "[Dynamic] re-encoded {} bytes, identical: {}",
        reencoded.len(),
        reencoded == bytes
    );

    Ok(())
}
