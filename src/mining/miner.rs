//! The level-wise joinless mining loop
//!
//! Drives candidate generation, star filtering, clique filtering, and
//! prevalence selection for growing pattern sizes until no candidates
//! survive. Levels run strictly in sequence; each level's clique instances
//! are retained only long enough to support the next level's clique pass.

use crate::mining::candidates::{generate_candidates, initial_candidates};
use crate::mining::filter::{
    InstanceTables, filter_clique_instances, filter_star_instances, support_sets,
};
use crate::mining::pattern::{Colocation, PrevalentColocation};
use crate::mining::prevalence::select_prevalent;
use crate::spatial::instance::Dataset;
use crate::spatial::star::NeighborhoodIndex;
use std::collections::HashSet;

/// Milestones reported per mining level
const STAGES_PER_LEVEL: usize = 5;

/// Receiver for coarse-grained mining progress
///
/// Invoked at level start, sub-stage boundaries, and level end. The miner
/// never inspects sink state and keeps no reference after `mine` returns;
/// implementations must not block and must not panic.
pub trait ProgressSink {
    /// Report one milestone
    ///
    /// `total_steps` is an estimate made before mining starts; `percent`
    /// is derived from it and clamped to [0, 100].
    fn report(&mut self, current_step: usize, total_steps: usize, message: &str, percent: f64);
}

/// Joinless colocation miner configured with a prevalence threshold
///
/// The threshold must lie in [0, 1]; that is the documented precondition of
/// [`JoinlessMiner::mine`], enforced by callers rather than re-checked in
/// the mining loop.
#[derive(Debug, Clone, Copy)]
pub struct JoinlessMiner {
    min_prevalence: f64,
}

impl JoinlessMiner {
    /// Create a miner with the given minimum participation index
    pub const fn new(min_prevalence: f64) -> Self {
        Self { min_prevalence }
    }

    /// The configured minimum participation index
    pub const fn min_prevalence(&self) -> f64 {
        self.min_prevalence
    }

    /// Mine all prevalent colocation patterns of size two and up
    ///
    /// Runs the level-wise loop until candidate generation or prevalence
    /// selection comes up empty, accumulating every surviving pattern with
    /// its participation index and clique count. An empty dataset or an
    /// empty neighborhood index terminates immediately with an empty result;
    /// that is a valid output, not an error.
    pub fn mine(
        &self,
        dataset: &Dataset,
        index: &NeighborhoodIndex,
        mut progress: Option<&mut dyn ProgressSink>,
    ) -> Vec<PrevalentColocation> {
        let feature_counts = dataset.feature_counts();
        let width = dataset.feature_len();

        // Level estimate: a pattern can never exceed the feature count
        let level_estimate = width.saturating_sub(1).max(1);
        let total_steps = level_estimate * STAGES_PER_LEVEL;

        let mut prevalent = initial_candidates(dataset);
        let mut previous_support: HashSet<_> = HashSet::new();
        let mut results = Vec::new();
        let mut k = 2_usize;

        while !prevalent.is_empty() {
            let base_step = (k - 2) * STAGES_PER_LEVEL;
            report(
                &mut progress,
                base_step + 1,
                total_steps,
                &format!("level {k}: generating candidates"),
            );

            let mut candidates = generate_candidates(&prevalent);
            if candidates.is_empty() {
                break;
            }

            report(
                &mut progress,
                base_step + 2,
                total_steps,
                &format!("level {k}: star filtering {} candidates", candidates.len()),
            );
            let mut tables = filter_star_instances(dataset, index, &candidates);

            if k > 2 {
                // Star support bounds clique support from above, so pruning
                // on star instances first cannot change the final result.
                let coarse =
                    select_prevalent(&candidates, &tables, &feature_counts, self.min_prevalence);
                (candidates, tables) = retain_selected(candidates, tables, &coarse);

                report(
                    &mut progress,
                    base_step + 3,
                    total_steps,
                    &format!("level {k}: clique filtering {} candidates", candidates.len()),
                );
                tables = filter_clique_instances(&candidates, tables, &previous_support, width);
            }

            previous_support = support_sets(&candidates, &tables, width);

            report(
                &mut progress,
                base_step + 4,
                total_steps,
                &format!("level {k}: selecting prevalent patterns"),
            );
            let selected =
                select_prevalent(&candidates, &tables, &feature_counts, self.min_prevalence);

            prevalent = Vec::with_capacity(selected.len());
            for &(position, participation) in &selected {
                let (Some(candidate), Some(table)) =
                    (candidates.get(position), tables.get(position))
                else {
                    continue;
                };
                prevalent.push(candidate.clone());
                results.push(PrevalentColocation {
                    colocation: candidate.clone(),
                    participation_index: participation,
                    clique_count: table.len(),
                });
            }

            report(
                &mut progress,
                base_step + STAGES_PER_LEVEL,
                total_steps,
                &format!("level {k}: {} prevalent patterns", prevalent.len()),
            );
            k += 1;
        }

        report(&mut progress, total_steps, total_steps, "mining complete");
        results
    }
}

/// Keep only the candidate/table pairs named by a selection
fn retain_selected(
    candidates: Vec<Colocation>,
    tables: InstanceTables,
    selected: &[(usize, f64)],
) -> (Vec<Colocation>, InstanceTables) {
    let keep: HashSet<usize> = selected.iter().map(|&(position, _)| position).collect();
    let mut kept_candidates = Vec::with_capacity(keep.len());
    let mut kept_tables = Vec::with_capacity(keep.len());
    for (position, (candidate, table)) in candidates.into_iter().zip(tables).enumerate() {
        if keep.contains(&position) {
            kept_candidates.push(candidate);
            kept_tables.push(table);
        }
    }
    (kept_candidates, kept_tables)
}

fn report(
    progress: &mut Option<&mut dyn ProgressSink>,
    step: usize,
    total: usize,
    message: &str,
) {
    if let Some(sink) = progress {
        let percent = if total == 0 {
            100.0
        } else {
            ((step * 100) as f64 / total as f64).min(100.0)
        };
        sink.report(step.min(total), total, message, percent);
    }
}
