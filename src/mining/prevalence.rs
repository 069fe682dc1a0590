//! Participation-ratio computation and prevalence selection

use crate::mining::filter::InstanceTables;
use crate::mining::pattern::{Colocation, PatternInstance};
use std::collections::HashSet;

/// Participation index of one candidate over its instance table
///
/// For every feature slot, the ratio of distinct participating instances to
/// the feature's global count; the index is the minimum ratio. Returns
/// `None` when any required feature has no global count at all, which marks
/// the candidate impossible rather than risking a division by zero. An
/// empty table yields an index of zero.
pub fn participation_index(
    candidate: &Colocation,
    table: &[PatternInstance],
    feature_counts: &[usize],
) -> Option<f64> {
    let totals: Vec<usize> = candidate
        .types()
        .iter()
        .map(|&feature| feature_counts.get(feature).copied().unwrap_or(0))
        .collect();
    if totals.iter().any(|&total| total == 0) {
        return None;
    }

    // One distinct-id set per feature slot; repeated appearances of the same
    // concrete instance across tuples collapse here.
    let mut participants: Vec<HashSet<usize>> = vec![HashSet::new(); candidate.size()];
    for instance in table {
        for (slot, &member) in instance.members.iter().enumerate() {
            if let Some(set) = participants.get_mut(slot) {
                set.insert(member);
            }
        }
    }

    let index = participants
        .iter()
        .zip(&totals)
        .map(|(set, &total)| set.len() as f64 / total as f64)
        .fold(1.0_f64, f64::min);
    Some(index)
}

/// Select candidates whose participation index meets the threshold
///
/// Returns `(candidate position, participation index)` pairs in candidate
/// order. Candidates with an impossible feature (zero global count) are
/// skipped outright.
pub fn select_prevalent(
    candidates: &[Colocation],
    tables: &InstanceTables,
    feature_counts: &[usize],
    min_prevalence: f64,
) -> Vec<(usize, f64)> {
    candidates
        .iter()
        .zip(tables)
        .enumerate()
        .filter_map(|(position, (candidate, table))| {
            let index = participation_index(candidate, table, feature_counts)?;
            (index >= min_prevalence).then_some((position, index))
        })
        .collect()
}
