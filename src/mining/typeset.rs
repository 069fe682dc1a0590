use bitvec::prelude::BitVec;
use bitvec::bitvec;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::spatial::instance::FeatureId;

/// Fixed-width bitset over feature ids
///
/// Width equals the dataset's feature count, so every set built during one
/// run is comparable. Provides O(1) membership and the hashable identity the
/// clique pass needs for its previous-level support lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeSet {
    bits: BitVec,
    width: usize,
}

impl TypeSet {
    /// Create a set with no features present
    pub fn new(width: usize) -> Self {
        Self {
            bits: bitvec![0; width],
            width,
        }
    }

    /// Create a set containing the given feature ids
    ///
    /// Ids at or beyond the width are ignored.
    pub fn from_features(features: &[FeatureId], width: usize) -> Self {
        let mut set = Self::new(width);
        for &feature in features {
            set.insert(feature);
        }
        set
    }

    /// Insert a feature id
    pub fn insert(&mut self, feature: FeatureId) {
        if feature < self.width {
            self.bits.set(feature, true);
        }
    }

    /// Remove a feature id
    pub fn remove(&mut self, feature: FeatureId) {
        if feature < self.width {
            self.bits.set(feature, false);
        }
    }

    /// Test feature membership
    pub fn contains(&self, feature: FeatureId) -> bool {
        self.bits.get(feature).as_deref() == Some(&true)
    }

    /// A copy of this set with one feature removed
    #[must_use]
    pub fn without(&self, feature: FeatureId) -> Self {
        let mut subset = self.clone();
        subset.remove(feature);
        subset
    }

    /// Number of features present
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no features are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Extract the feature ids as an ascending vector
    pub fn to_vec(&self) -> Vec<FeatureId> {
        self.bits.iter_ones().collect()
    }
}

impl Hash for TypeSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeSet({} features: {:?})", self.count(), self.to_vec())
    }
}
