//! Joinless colocation pattern mining for 2D spatial point data
//!
//! Discovers sets of feature types that frequently occur near one another
//! without a full spatial self-join: neighbor pairs become star
//! neighborhoods, and a level-wise loop filters candidate patterns down to
//! the prevalent ones.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// The level-wise mining pipeline
pub mod mining;
/// Spatial data structures and neighbor discovery
pub mod spatial;

pub use io::error::{MiningError, Result};
pub use mining::{Colocation, JoinlessMiner, PrevalentColocation, ProgressSink};
pub use spatial::{Dataset, NeighborhoodIndex, find_neighbor_pairs};
