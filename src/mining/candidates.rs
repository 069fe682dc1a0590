//! Level-wise candidate generation with Apriori pruning

use crate::mining::pattern::Colocation;
use crate::spatial::instance::Dataset;
use std::collections::HashSet;

/// Singleton candidates for every feature type present in the dataset
///
/// Feature types interned but left without instances (after sampling, for
/// example) are excluded; they can never participate in a pattern.
pub fn initial_candidates(dataset: &Dataset) -> Vec<Colocation> {
    dataset
        .feature_counts()
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(feature, _)| Colocation::singleton(feature))
        .collect()
}

/// Generate deduplicated size-(k+1) candidates from size-k prevalent patterns
///
/// Joins every pattern pair sharing a full size-(k-1) prefix, then keeps a
/// candidate only when all of its size-k subsets are themselves prevalent.
/// An empty input yields an empty output, which terminates the mining loop.
pub fn generate_candidates(prevalent: &[Colocation]) -> Vec<Colocation> {
    if prevalent.is_empty() {
        return Vec::new();
    }

    let prevalent_set: HashSet<&Colocation> = prevalent.iter().collect();

    let mut candidates = Vec::new();
    for (i, left) in prevalent.iter().enumerate() {
        for right in prevalent.iter().skip(i + 1) {
            let Some(candidate) = left.join(right) else {
                continue;
            };
            let closed = (0..candidate.size())
                .all(|position| prevalent_set.contains(&candidate.without(position)));
            if closed {
                candidates.push(candidate);
            }
        }
    }

    candidates.sort_unstable();
    candidates.dedup();
    candidates
}
