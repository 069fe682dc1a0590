//! Spatial data structures and neighbor discovery
//!
//! This module contains the spatial side of the pipeline:
//! - The instance arena and feature interning
//! - Bucket-grid binning for threshold queries
//! - Neighbor-pair discovery
//! - Star neighborhoods and the feature-keyed index

/// Uniform bucket grid for threshold-bounded neighbor queries
pub mod grid;
/// Spatial instance records and the owning dataset arena
pub mod instance;
/// Neighbor-pair discovery under the distance threshold
pub mod neighbors;
/// Star neighborhoods grouped by center feature type
pub mod star;

pub use instance::{Dataset, FeatureId, SpatialInstance};
pub use neighbors::find_neighbor_pairs;
pub use star::{NeighborhoodIndex, StarNeighborhood};
