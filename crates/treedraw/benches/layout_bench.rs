//! Benchmarks for tree layout.
//!
//! Shapes are `layers x children` complete trees of `*` labels, from deep
//! chains to wide fans.
//!
//! Run with: cargo bench -p treedraw --bench layout_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use treedraw::generate::{full_tree, full_tree_len, seeded_random_tree, RandomTreeConfig};

fn bench_full_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/full");

    for (layers, children) in [(3, 3), (100, 1), (6, 3), (1000, 1), (10, 2), (8, 3)] {
        let tree = full_tree("*", layers, children);
        group.throughput(Throughput::Elements(full_tree_len(layers, children) as u64));
        group.bench_with_input(
            BenchmarkId::new("render", format!("{layers}L{children}C")),
            &tree,
            |b, tree| b.iter(|| black_box(tree.to_string())),
        );
    }

    group.finish();
}

fn bench_random_trees(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/random");
    let config = RandomTreeConfig {
        layers: 6,
        max_children: 4,
        max_value: 99_999,
    };

    for seed in [1_u64, 2, 3] {
        let tree = seeded_random_tree(seed, &config);
        group.throughput(Throughput::Elements(tree.len() as u64));
        group.bench_with_input(BenchmarkId::new("render", seed), &tree, |b, tree| {
            b.iter(|| black_box(tree.to_string()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_trees, bench_random_trees);
criterion_main!(benches);
