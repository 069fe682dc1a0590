//! Colocation patterns and their concrete instance tuples

use crate::mining::typeset::TypeSet;
use crate::spatial::instance::FeatureId;

/// An ordered set of distinct feature types hypothesized to co-occur
///
/// Feature ids are kept strictly ascending, so set-equal patterns compare
/// equal and the first element is well defined for star lookup. Length is
/// the pattern's size k.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Colocation {
    types: Vec<FeatureId>,
}

impl Colocation {
    /// Create a pattern from feature ids, canonicalizing order and dropping
    /// duplicates
    pub fn new(mut types: Vec<FeatureId>) -> Self {
        types.sort_unstable();
        types.dedup();
        Self { types }
    }

    /// The size-1 pattern for a single feature type
    pub fn singleton(feature: FeatureId) -> Self {
        Self {
            types: vec![feature],
        }
    }

    /// Pattern size k
    pub fn size(&self) -> usize {
        self.types.len()
    }

    /// Feature ids in canonical ascending order
    pub fn types(&self) -> &[FeatureId] {
        &self.types
    }

    /// The canonically first feature type, if any
    pub fn first_type(&self) -> Option<FeatureId> {
        self.types.first().copied()
    }

    /// All feature ids except the last, the join prefix
    pub fn prefix(&self) -> &[FeatureId] {
        self.types.split_last().map_or(&[], |(_, rest)| rest)
    }

    /// Apriori-style join with another pattern of the same size
    ///
    /// Succeeds only when both patterns share their full prefix and differ
    /// in the last element, producing the size-(k+1) union. Returns `None`
    /// when the join would be degenerate.
    pub fn join(&self, other: &Self) -> Option<Self> {
        if self.size() != other.size() || self.prefix() != other.prefix() {
            return None;
        }
        let (last_a, last_b) = (self.types.last()?, other.types.last()?);
        if last_a == last_b {
            return None;
        }
        let mut merged = self.types.clone();
        merged.push(*last_b);
        let candidate = Self::new(merged);
        (candidate.size() == self.size() + 1).then_some(candidate)
    }

    /// The sub-pattern obtained by deleting the feature at `position`
    #[must_use]
    pub fn without(&self, position: usize) -> Self {
        let types = self
            .types
            .iter()
            .enumerate()
            .filter(|&(index, _)| index != position)
            .map(|(_, &feature)| feature)
            .collect();
        Self { types }
    }

    /// This pattern's feature types as a bitset of the given width
    pub fn type_set(&self, width: usize) -> TypeSet {
        TypeSet::from_features(&self.types, width)
    }

    /// Human-readable label such as `{A, B, C}` using the dataset's names
    pub fn label(&self, feature_names: &[String]) -> String {
        let names: Vec<&str> = self
            .types
            .iter()
            .map(|&feature| feature_names.get(feature).map_or("?", String::as_str))
            .collect();
        format!("{{{}}}", names.join(", "))
    }
}

/// One concrete spatial realization of a pattern
///
/// Holds arena indices, one per feature type of the owning candidate, in the
/// candidate's canonical order. The star-filter center always occupies the
/// first slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternInstance {
    /// Arena indices aligned with the candidate's feature order
    pub members: Vec<usize>,
}

/// A pattern that survived prevalence selection, with its support evidence
#[derive(Debug, Clone)]
pub struct PrevalentColocation {
    /// The surviving pattern
    pub colocation: Colocation,
    /// Minimum participation ratio across the pattern's feature types
    pub participation_index: f64,
    /// Number of clique instances backing the pattern
    pub clique_count: usize,
}
