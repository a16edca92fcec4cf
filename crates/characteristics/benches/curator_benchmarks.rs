//! Curator performance benchmarks.
//!
//! Measures construction, lazy reads, and equality across registry sizes.

use characteristics::{CharacteristicDescriptor, Characterization, Characterized, Curator};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use once_cell::sync::Lazy;
use serde_json::{Value, json};

const DECLARED: usize = 200;

/// Provides every even-numbered characteristic.
struct Wide;

impl Characterized for Wide {
    fn characterization() -> &'static Characterization {
        static REGISTRY: Lazy<Characterization> = Lazy::new(|| {
            (0..DECLARED)
                .map(|i| CharacteristicDescriptor::new(format!("field_{}", i)))
                .collect()
        });
        &REGISTRY
    }

    fn characteristic(&self, name: &str) -> Option<Value> {
        let index: usize = name.strip_prefix("field_")?.parse().ok()?;
        (index % 2 == 0).then(|| json!(index))
    }
}

/// Benchmark eager construction.
fn bench_construction(c: &mut Criterion) {
    c.bench_function("construct_wide", |b| {
        b.iter(|| black_box(Curator::new(Wide)))
    });
}

/// Benchmark stored reads against lazy defaults.
fn bench_reads(c: &mut Criterion) {
    let curator = Curator::new(Wide);
    let mut group = c.benchmark_group("get");

    for name in ["field_10", "field_11"] {
        group.bench_with_input(BenchmarkId::new("name", name), name, |b, name| {
            b.iter(|| black_box(curator.get(name)))
        });
    }

    group.finish();
}

/// Benchmark loose equality between a curator and its reimport.
fn bench_equality(c: &mut Criterion) {
    let curator = Curator::new(Wide);
    let restored = Curator::import(curator.export());

    c.bench_function("loose_eq_wide", |b| {
        b.iter(|| black_box(curator == restored))
    });
}

criterion_group!(benches, bench_construction, bench_reads, bench_equality);
criterion_main!(benches);
