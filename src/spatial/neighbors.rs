//! Neighbor-pair discovery under a global distance threshold
//!
//! Produces every unordered pair of instances of differing feature type
//! within the threshold. Small or degenerate inputs take an exhaustive
//! pairwise scan; larger inputs go through the bucket grid, which yields the
//! identical pair set with near-linear work.

use crate::io::configuration::GRID_MIN_INSTANCES;
use crate::spatial::grid::BucketGrid;
use crate::spatial::instance::{Dataset, SpatialInstance};
use rayon::prelude::*;

/// Squared Euclidean distance between two instances
pub fn euclidean_distance_sq(a: &SpatialInstance, b: &SpatialInstance) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx.mul_add(dx, dy * dy)
}

/// Find all unordered cross-type neighbor pairs within the threshold
///
/// Each qualifying pair is reported exactly once as `(i, j)` with `i < j` in
/// arena order, sorted lexicographically, so the output is deterministic for
/// a fixed input order. Instances of the same feature type are never paired.
/// A distance of zero matches only coincident points, since the comparison
/// is inclusive.
///
/// The caller must supply a non-negative, finite threshold; that is a
/// documented precondition, not a runtime check.
pub fn find_neighbor_pairs(dataset: &Dataset, distance_threshold: f64) -> Vec<(usize, usize)> {
    let instances = dataset.instances();
    if instances.len() >= GRID_MIN_INSTANCES {
        if let Some(pairs) = grid_pairs(instances, distance_threshold) {
            return pairs;
        }
    }
    scan_pairs(instances, distance_threshold)
}

/// Exhaustive O(n²) pairwise scan
///
/// Reference path for small inputs and the fallback when the grid cannot be
/// built. Compares every pair exactly once.
pub fn scan_pairs(instances: &[SpatialInstance], distance_threshold: f64) -> Vec<(usize, usize)> {
    let threshold_sq = distance_threshold * distance_threshold;
    let mut pairs = Vec::new();
    for (i, a) in instances.iter().enumerate() {
        for (j, b) in instances.iter().enumerate().skip(i + 1) {
            if a.feature != b.feature && euclidean_distance_sq(a, b) <= threshold_sq {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Grid-accelerated pair search, parallel across instances
///
/// Every instance inspects only its own and adjacent cells. Workers emit
/// into private buffers that are concatenated after the parallel stage; the
/// final sort restores the scan path's lexicographic order so the two paths
/// are interchangeable.
fn grid_pairs(instances: &[SpatialInstance], distance_threshold: f64) -> Option<Vec<(usize, usize)>> {
    let grid = BucketGrid::build(instances, distance_threshold)?;
    let threshold_sq = distance_threshold * distance_threshold;

    let mut pairs: Vec<(usize, usize)> = instances
        .par_iter()
        .enumerate()
        .flat_map_iter(|(i, a)| {
            let mut local = Vec::new();
            grid.for_each_nearby(a.x, a.y, |j| {
                // j > i reports each unordered pair once
                if j > i {
                    if let Some(b) = instances.get(j) {
                        if a.feature != b.feature && euclidean_distance_sq(a, b) <= threshold_sq {
                            local.push((i, j));
                        }
                    }
                }
            });
            local.into_iter()
        })
        .collect();

    pairs.sort_unstable();
    Some(pairs)
}
