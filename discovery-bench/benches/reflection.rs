//! Reflective codec and registry benchmarks.
//!
//! Run with: cargo bench -p discovery-bench --bench reflection

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use discovery_bench::fixtures::{registry, subscription_list};
use discovery_core::Message;
use discovery_subscription::SUBSCRIPTION_LIST_PROTO;
use std::hint::black_box;

const FULL_NAME: &str = "wso2.discovery.subscription.SubscriptionList";

fn benchmark_dynamic_decode(c: &mut Criterion) {
    let registry = registry();
    let mut group = c.benchmark_group("dynamic_decode");

    for size in [1, 100] {
        let bytes = subscription_list(size).encode_to_vec();
        group.bench_with_input(BenchmarkId::from_parameter(size), &bytes, |b, bytes| {
            b.iter(|| registry.decode(FULL_NAME, black_box(bytes)).unwrap())
        });
    }

    group.finish();
}

fn benchmark_dynamic_encode(c: &mut Criterion) {
    let registry = registry();
    let mut group = c.benchmark_group("dynamic_encode");

    for size in [1, 100] {
        let dynamic = subscription_list(size).to_dynamic(&registry).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &dynamic, |b, dynamic| {
            b.iter(|| dynamic.encode_to_vec())
        });
    }

    group.finish();
}

fn benchmark_registry(c: &mut Criterion) {
    let registry = registry();

    c.bench_function("registry_find_message", |b| {
        b.iter(|| registry.find_message(black_box(FULL_NAME)).unwrap())
    });

    c.bench_function("registry_register_again", |b| {
        b.iter(|| registry.register(black_box(&SUBSCRIPTION_LIST_PROTO)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_dynamic_decode,
    benchmark_dynamic_encode,
    benchmark_registry
);
criterion_main!(benches);
