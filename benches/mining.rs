//! Performance measurement for neighbor discovery and the full mining loop

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use joinless::mining::miner::JoinlessMiner;
use joinless::spatial::instance::Dataset;
use joinless::spatial::neighbors::find_neighbor_pairs;
use joinless::spatial::star::NeighborhoodIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

/// Uniform synthetic dataset over a 100x100 extent with four feature types
fn synthetic_dataset(instances: usize, seed: u64) -> Dataset {
    let features = ["A", "B", "C", "D"];
    let mut rng = StdRng::seed_from_u64(seed);
    let mut dataset = Dataset::new();
    for index in 0..instances {
        let feature = features.get(index % features.len()).copied().unwrap_or("A");
        let id = dataset.intern_feature(feature);
        let x = rng.random::<f64>() * 100.0;
        let y = rng.random::<f64>() * 100.0;
        dataset.push_instance(id, format!("{feature}{index}"), x, y);
    }
    dataset
}

/// Measures grid-indexed pair discovery on a dataset large enough to skip
/// the pairwise scan
fn bench_neighbor_pairs(c: &mut Criterion) {
    let dataset = synthetic_dataset(2000, 7);
    c.bench_function("find_neighbor_pairs_2000", |b| {
        b.iter(|| black_box(find_neighbor_pairs(&dataset, 3.0)));
    });
}

/// Measures the complete level-wise mining loop over a mid-size dataset
fn bench_full_mine(c: &mut Criterion) {
    let dataset = synthetic_dataset(600, 11);
    let pairs = find_neighbor_pairs(&dataset, 4.0);
    let index = NeighborhoodIndex::from_pairs(&dataset, &pairs);
    let miner = JoinlessMiner::new(0.3);

    c.bench_function("mine_600_instances", |b| {
        b.iter(|| black_box(miner.mine(&dataset, &index, None)));
    });
}

criterion_group!(benches, bench_neighbor_pairs, bench_full_mine);
criterion_main!(benches);
