use bitvec::prelude::*;
use std::fmt;

use crate::spatial::motifs::{MOTIF_COUNT, MotifId};

/// Fixed-size bitset of motif ids
///
/// Uses 1-based indexing to match motif ids throughout the system; the empty
/// cell id 0 is never a member. Provides O(1) membership testing and cheap
/// intersection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MotifSet {
    bits: BitVec,
}

impl Default for MotifSet {
    fn default() -> Self {
        Self::new()
    }
}

impl MotifSet {
    /// Create a set with no motifs present
    pub fn new() -> Self {
        Self {
            bits: bitvec![0; MOTIF_COUNT],
        }
    }

    /// Insert a motif id
    ///
    /// Takes 1-based ids, storing at id-1 internally; out of range ids are ignored
    pub fn insert(&mut self, id: MotifId) {
        let index = usize::from(id);
        if index > 0 && index <= MOTIF_COUNT {
            self.bits.set(index - 1, true);
        }
    }

    /// Test motif membership
    pub fn contains(&self, id: MotifId) -> bool {
        let index = usize::from(id);
        if index > 0 {
            self.bits.get(index - 1).as_deref() == Some(&true)
        } else {
            false
        }
    }

    /// Intersect this set with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new set containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test if no motifs are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count motifs in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Motif at a position in ascending id order
    pub fn nth(&self, position: usize) -> Option<MotifId> {
        self.bits
            .iter_ones()
            .nth(position)
            .and_then(|index| MotifId::try_from(index + 1).ok())
    }

    /// Extract all motif ids in ascending order
    pub fn to_vec(&self) -> Vec<MotifId> {
        self.bits
            .iter_ones()
            .filter_map(|index| MotifId::try_from(index + 1).ok())
            .collect()
    }

    /// Build a set from a list of ids
    pub fn from_ids(ids: &[MotifId]) -> Self {
        let mut set = Self::new();
        for &id in ids {
            set.insert(id);
        }
        set
    }
}

impl fmt::Display for MotifSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MotifSet({} motifs: {:?})", self.count(), self.to_vec())
    }
}
