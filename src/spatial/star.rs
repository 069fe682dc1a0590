//! Star neighborhoods and the feature-keyed neighborhood index
//!
//! A star neighborhood is one instance (the center) plus every instance
//! paired with it by the neighbor finder. The index groups stars by the
//! center's feature type, which is the lookup the star filter performs at
//! every mining level.

use crate::spatial::instance::{Dataset, FeatureId};

/// One instance and all of its threshold neighbors
///
/// Neighbors always differ in feature type from the center, never include
/// the center itself, and are held sorted ascending with duplicates removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarNeighborhood {
    /// Arena index of the center instance
    pub center: usize,
    /// Arena indices of all neighbors, ascending
    pub neighbors: Vec<usize>,
}

/// Star neighborhoods grouped by center feature type
///
/// Built once from the neighbor-pair list and read-only thereafter. Only
/// instances that appear in at least one pair get a star.
#[derive(Debug, Clone, Default)]
pub struct NeighborhoodIndex {
    by_feature: Vec<Vec<StarNeighborhood>>,
}

impl NeighborhoodIndex {
    /// Build the index from unordered neighbor pairs
    ///
    /// Both orientations of each pair are recorded, so adjacency is
    /// symmetric even though the finder reports each pair once. Duplicate
    /// input pairs collapse to a single adjacency entry.
    pub fn from_pairs(dataset: &Dataset, pairs: &[(usize, usize)]) -> Self {
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); dataset.len()];
        for &(i, j) in pairs {
            if i == j {
                continue;
            }
            if let Some(list) = adjacency.get_mut(i) {
                list.push(j);
            }
            if let Some(list) = adjacency.get_mut(j) {
                list.push(i);
            }
        }

        let mut by_feature: Vec<Vec<StarNeighborhood>> = vec![Vec::new(); dataset.feature_len()];
        for (center, mut neighbors) in adjacency.into_iter().enumerate() {
            if neighbors.is_empty() {
                continue;
            }
            neighbors.sort_unstable();
            neighbors.dedup();
            let Some(instance) = dataset.instance(center) else {
                continue;
            };
            if let Some(group) = by_feature.get_mut(instance.feature) {
                group.push(StarNeighborhood { center, neighbors });
            }
        }

        Self { by_feature }
    }

    /// All stars whose center has the given feature type
    pub fn stars_for(&self, feature: FeatureId) -> &[StarNeighborhood] {
        self.by_feature.get(feature).map_or(&[], Vec::as_slice)
    }

    /// Total number of star neighborhoods across all feature types
    pub fn star_count(&self) -> usize {
        self.by_feature.iter().map(Vec::len).sum()
    }

    /// Check whether the index holds no stars at all
    pub fn is_empty(&self) -> bool {
        self.by_feature.iter().all(Vec::is_empty)
    }
}
