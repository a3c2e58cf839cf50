use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use facility_sim::{Analytics, Facility, FacilityGenerator, FacilityStore, StaticFacts};
use std::sync::Arc;

/// Benchmark fleet generation at a few sizes
fn bench_fleet_generation(c: &mut Criterion) {
    for count in [20usize, 200, 2000].iter() {
        c.bench_with_input(
            BenchmarkId::new("fleet_generation", count),
            count,
            |b, &count| {
                let mut generator = FacilityGenerator::with_seed(1);
                b.iter(|| generator.generate_fleet(count))
            },
        );
    }
}

/// Benchmark analytics aggregation
fn bench_analytics(c: &mut Criterion) {
    let fleet = FacilityGenerator::with_seed(2).generate_fleet(2000);
    let facts = StaticFacts::default();

    c.bench_function("analytics_compute", |b| {
        b.iter(|| Analytics::compute(&fleet, &facts))
    });
}

/// Benchmark JSON serialization of the fleet
fn bench_json_serialization(c: &mut Criterion) {
    let fleet = FacilityGenerator::with_seed(3).generate_fleet(20);

    c.bench_function("fleet_json_serialization", |b| {
        b.iter(|| serde_json::to_string(&fleet).expect("Should serialize"))
    });

    let json = serde_json::to_string(&fleet).expect("Should serialize");
    c.bench_function("fleet_json_deserialization", |b| {
        b.iter(|| serde_json::from_str::<Vec<Facility>>(&json).expect("Should deserialize"))
    });
}

/// Benchmark concurrent read-and-refresh against one shared store
fn bench_concurrent_refresh(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("Should create tokio runtime");
    let store = Arc::new(FacilityStore::bootstrap(FacilityGenerator::with_seed(4), 20));

    for concurrency in [1, 4, 16].iter() {
        c.bench_with_input(
            BenchmarkId::new("concurrent_refresh", concurrency),
            concurrency,
            |b, &concurrency| {
                b.to_async(&rt).iter(|| {
                    let store = Arc::clone(&store);
                    async move {
                        let handles: Vec<_> = (0..concurrency)
                            .map(|i| {
                                let store = Arc::clone(&store);
                                tokio::spawn(async move {
                                    store
                                        .read_and_refresh(&format!("NH{}", i % 20 + 1))
                                        .await
                                        .expect("Should refresh")
                                })
                            })
                            .collect();

                        futures_util::future::join_all(handles).await
                    }
                })
            },
        );
    }
}

criterion_group!(
    benches,
    bench_fleet_generation,
    bench_analytics,
    bench_json_serialization,
    bench_concurrent_refresh
);
criterion_main!(benches);
