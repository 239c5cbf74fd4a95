//! Benchmarks for spark-collection
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use spark_collection::Collection;

// =============================================================================
// CONSTRUCTION BENCHMARKS
// =============================================================================

fn bench_new(c: &mut Criterion) {
    c.bench_function("collection_new", |b| {
        b.iter(|| black_box(Collection::<i32>::new()))
    });
}

fn bench_from_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_values");

    for count in [16, 1000, 100_000] {
        group.bench_with_input(BenchmarkId::new("count", count), &count, |b, &count| {
            b.iter(|| black_box(Collection::from_values(0..count)))
        });
    }

    group.finish();
}

// =============================================================================
// ADD BENCHMARKS
// =============================================================================

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for count in [100, 10_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("one_by_one", count), &count, |b, &count| {
            b.iter(|| {
                let mut collection = Collection::new();
                for i in 0..count {
                    collection.add(black_box(i));
                }
                collection
            })
        });

        group.bench_with_input(BenchmarkId::new("add_range", count), &count, |b, &count| {
            b.iter(|| {
                let mut collection = Collection::new();
                collection.add_range(black_box(0..count));
                collection
            })
        });
    }

    group.finish();
}

// =============================================================================
// POSITIONAL BENCHMARKS
// =============================================================================

fn bench_get(c: &mut Criterion) {
    let collection = Collection::from_values(0..1024);
    let mut i = 0usize;

    c.bench_function("get", |b| {
        b.iter(|| {
            i = (i + 1) % 1024;
            black_box(collection.get(i))
        })
    });
}

fn bench_insert_remove_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_remove_front");

    for count in [16, 1024, 65_536] {
        group.bench_with_input(BenchmarkId::new("count", count), &count, |b, &count| {
            let mut collection = Collection::from_values(0..count);
            b.iter(|| {
                collection.insert_at(0usize, black_box(-1)).ok();
                black_box(collection.remove_at(0usize))
            })
        });
    }

    group.finish();
}

fn bench_exchange(c: &mut Criterion) {
    let mut collection = Collection::from_values(0..1024);

    c.bench_function("exchange_first_last", |b| {
        b.iter(|| black_box(collection.exchange(0usize, 1023usize)))
    });
}

// =============================================================================
// STRING FORM
// =============================================================================

fn bench_to_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_string");

    for count in [10, 1000, 100_000] {
        let collection = Collection::from_values(0..count);
        group.bench_with_input(BenchmarkId::new("count", count), &collection, |b, collection| {
            b.iter(|| black_box(collection.to_string()))
        });
    }

    group.finish();
}

fn bench_nested_to_string(c: &mut Criterion) {
    let inner = Collection::from_values(0..10);
    let nested = Collection::from_values((0..100).map(|_| inner.clone()));

    c.bench_function("nested_to_string", |b| {
        b.iter(|| black_box(nested.to_string()))
    });
}

// =============================================================================
// CRITERION SETUP
// =============================================================================

criterion_group!(construction_benches, bench_new, bench_from_values);

criterion_group!(add_benches, bench_add);

criterion_group!(
    positional_benches,
    bench_get,
    bench_insert_remove_front,
    bench_exchange,
);

criterion_group!(display_benches, bench_to_string, bench_nested_to_string);

criterion_main!(construction_benches, add_benches, positional_benches, display_benches);
