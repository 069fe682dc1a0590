//! The joinless mining pipeline
//!
//! Candidate generation, instance filtering, and prevalence selection,
//! driven level by level over star neighborhoods built from the spatial
//! layer.

/// Level-wise candidate generation with Apriori pruning
pub mod candidates;
/// Star and clique instance filtering
pub mod filter;
/// The level-wise mining loop and progress reporting
pub mod miner;
/// Colocation patterns and concrete instance tuples
pub mod pattern;
/// Participation-ratio computation and prevalence selection
pub mod prevalence;
/// Feature-id bitsets for subset support lookups
pub mod typeset;

pub use miner::{JoinlessMiner, ProgressSink};
pub use pattern::{Colocation, PatternInstance, PrevalentColocation};
pub use typeset::TypeSet;
