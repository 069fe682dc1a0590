//! Instance filtering: star pass and clique pass
//!
//! The star pass materializes every combination of star neighbors matching a
//! candidate pattern. The clique pass then discards instances whose
//! sub-patterns were not supported by the previous level, which is what
//! turns star-shaped matches into validated cliques.

use crate::mining::pattern::{Colocation, PatternInstance};
use crate::mining::typeset::TypeSet;
use crate::spatial::instance::{Dataset, FeatureId};
use crate::spatial::star::{NeighborhoodIndex, StarNeighborhood};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// Per-candidate instance tables, parallel to a candidate list
pub type InstanceTables = Vec<Vec<PatternInstance>>;

/// Materialize star instances for every candidate
///
/// A star contributes to a candidate only when the candidate's canonically
/// first feature type equals the star's center type; the center occupies the
/// first slot of every emitted instance. When a star holds several neighbors
/// of a required type, one instance is emitted per distinct combination.
pub fn filter_star_instances(
    dataset: &Dataset,
    index: &NeighborhoodIndex,
    candidates: &[Colocation],
) -> InstanceTables {
    let mut tables: InstanceTables = vec![Vec::new(); candidates.len()];

    // Group candidates by first type so each star's neighbor map is built once
    let mut by_first: HashMap<FeatureId, Vec<usize>> = HashMap::new();
    for (slot, candidate) in candidates.iter().enumerate() {
        if let Some(first) = candidate.first_type() {
            by_first.entry(first).or_default().push(slot);
        }
    }

    for (&center_type, relevant) in &by_first {
        for star in index.stars_for(center_type) {
            let neighbors_by_type = group_neighbors_by_type(dataset, star);
            for &slot in relevant {
                let Some(candidate) = candidates.get(slot) else {
                    continue;
                };
                let Some(table) = tables.get_mut(slot) else {
                    continue;
                };
                let mut current = vec![star.center];
                extend_combinations(
                    candidate.types(),
                    1,
                    &neighbors_by_type,
                    &mut current,
                    table,
                );
            }
        }
    }

    tables
}

fn group_neighbors_by_type(
    dataset: &Dataset,
    star: &StarNeighborhood,
) -> HashMap<FeatureId, Vec<usize>> {
    let mut by_type: HashMap<FeatureId, Vec<usize>> = HashMap::new();
    for &neighbor in &star.neighbors {
        if let Some(instance) = dataset.instance(neighbor) {
            by_type.entry(instance.feature).or_default().push(neighbor);
        }
    }
    by_type
}

/// Depth-first Cartesian expansion over the remaining pattern positions
fn extend_combinations(
    types: &[FeatureId],
    position: usize,
    neighbors_by_type: &HashMap<FeatureId, Vec<usize>>,
    current: &mut Vec<usize>,
    results: &mut Vec<PatternInstance>,
) {
    if position == types.len() {
        results.push(PatternInstance {
            members: current.clone(),
        });
        return;
    }
    let Some(required) = types.get(position) else {
        return;
    };
    let Some(matching) = neighbors_by_type.get(required) else {
        return;
    };
    for &neighbor in matching {
        current.push(neighbor);
        extend_combinations(types, position + 1, neighbors_by_type, current, results);
        current.pop();
    }
}

/// Collect the feature-type sets of candidates that retained any instance
///
/// This is the support set the next level's clique pass consults; building
/// it once keeps the per-subset existence check O(1).
pub fn support_sets(
    candidates: &[Colocation],
    tables: &InstanceTables,
    width: usize,
) -> HashSet<TypeSet> {
    candidates
        .iter()
        .zip(tables)
        .filter(|&(_, table)| !table.is_empty())
        .map(|(candidate, _)| candidate.type_set(width))
        .collect()
}

/// Clique pass: retain instances whose sub-patterns were supported before
///
/// For each candidate, every size-(k-1) sub-pattern obtained by dropping one
/// feature must appear as a feature-type set among the previous level's
/// clique instances; otherwise all of the candidate's instances are
/// discarded. Tables are filtered on the worker pool with per-worker output
/// buffers, and the merged result does not depend on scheduling order.
///
/// The level-2 pass is skipped by the miner entirely: every neighbor pair is
/// trivially a valid 2-clique.
pub fn filter_clique_instances(
    candidates: &[Colocation],
    tables: InstanceTables,
    previous_support: &HashSet<TypeSet>,
    width: usize,
) -> InstanceTables {
    candidates
        .par_iter()
        .zip(tables.into_par_iter())
        .map(|(candidate, table)| {
            if table.is_empty() {
                return table;
            }
            let supported = (0..candidate.size())
                .all(|position| previous_support.contains(&candidate.without(position).type_set(width)));
            if supported { table } else { Vec::new() }
        })
        .collect()
}
