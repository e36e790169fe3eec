//! Mirror permutations over motif ids and symmetry classification
//!
//! Flipping a motif's drawing about an axis yields another catalog motif, so
//! each mirror is a relabelling of ids. Horizontal and vertical mirrors build
//! the four-quadrant layout; the diagonal mirror (transpose) supports the
//! stronger "2D" class.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::algorithm::bitset::MotifSet;
use crate::spatial::grid::MotifGrid;
use crate::spatial::motifs::{EMPTY_CELL, MOTIF_COUNT, MotifId};

/// Left-right flip, indexed by id - 1
pub const HORIZONTAL_IMAGES: [MotifId; MOTIF_COUNT] =
    [1, 2, 5, 4, 3, 9, 8, 7, 6, 10, 11, 12, 15, 14, 13, 16];

/// Top-bottom flip, indexed by id - 1
pub const VERTICAL_IMAGES: [MotifId; MOTIF_COUNT] =
    [1, 4, 3, 2, 5, 7, 6, 9, 8, 10, 11, 14, 13, 12, 15, 16];

/// Transpose about the main diagonal, indexed by id - 1
pub const DIAGONAL_IMAGES: [MotifId; MOTIF_COUNT] =
    [1, 3, 2, 5, 4, 6, 9, 8, 7, 11, 10, 13, 12, 15, 14, 16];

/// Axis a mirror flips about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MirrorAxis {
    /// Swaps left and right
    Horizontal,
    /// Swaps up and down
    Vertical,
    /// Swaps up with left and down with right
    Diagonal,
}

/// Involutive relabelling of motif ids
#[derive(Debug, Clone)]
pub struct MirrorPermutation {
    images: [MotifId; MOTIF_COUNT],
    fixed_points: MotifSet,
}

impl MirrorPermutation {
    /// Build a permutation from its image table
    ///
    /// # Panics
    ///
    /// Panics if the table is not an involution over `1..=16`. The tables are
    /// compile-time constants, so this can only fire on a broken build.
    pub fn new(images: [MotifId; MOTIF_COUNT]) -> Self {
        let permutation = Self {
            images,
            fixed_points: MotifSet::new(),
        };
        assert!(
            permutation.is_involution(),
            "mirror table {images:?} is not an involution"
        );

        let fixed: Vec<MotifId> = (1..=MOTIF_COUNT as MotifId)
            .filter(|&id| permutation.apply(id) == id)
            .collect();

        Self {
            images,
            fixed_points: MotifSet::from_ids(&fixed),
        }
    }

    /// Image of an id; the empty cell and unknown ids map to themselves
    pub fn apply(&self, id: MotifId) -> MotifId {
        if id == EMPTY_CELL {
            return EMPTY_CELL;
        }
        self.images
            .get(usize::from(id) - 1)
            .copied()
            .unwrap_or(id)
    }

    /// Motifs left unchanged by this mirror
    pub const fn fixed_points(&self) -> &MotifSet {
        &self.fixed_points
    }

    /// Check `σ(σ(x)) = x` for every motif and that images stay in range
    pub fn is_involution(&self) -> bool {
        (1..=MOTIF_COUNT as MotifId).all(|id| {
            let image = self.apply(id);
            image >= 1 && usize::from(image) <= MOTIF_COUNT && self.apply(image) == id
        })
    }
}

/// The three mirror permutations used by the generator
#[derive(Debug, Clone)]
pub struct SymmetryOperators {
    /// Left-right mirror
    pub horizontal: MirrorPermutation,
    /// Top-bottom mirror
    pub vertical: MirrorPermutation,
    /// Main-diagonal mirror
    pub diagonal: MirrorPermutation,
}

impl Default for SymmetryOperators {
    fn default() -> Self {
        Self::new()
    }
}

impl SymmetryOperators {
    /// Build and verify the standard mirror tables
    ///
    /// # Panics
    ///
    /// Panics if a built-in table is not an involution
    pub fn new() -> Self {
        Self {
            horizontal: MirrorPermutation::new(HORIZONTAL_IMAGES),
            vertical: MirrorPermutation::new(VERTICAL_IMAGES),
            diagonal: MirrorPermutation::new(DIAGONAL_IMAGES),
        }
    }

    /// Permutation for an axis
    pub const fn permutation(&self, axis: MirrorAxis) -> &MirrorPermutation {
        match axis {
            MirrorAxis::Horizontal => &self.horizontal,
            MirrorAxis::Vertical => &self.vertical,
            MirrorAxis::Diagonal => &self.diagonal,
        }
    }

    /// Mirror a single id about an axis
    pub fn mirror(&self, axis: MirrorAxis, id: MotifId) -> MotifId {
        self.permutation(axis).apply(id)
    }

    /// Motifs safe to place on an axis
    pub const fn fixed_points(&self, axis: MirrorAxis) -> &MotifSet {
        self.permutation(axis).fixed_points()
    }
}

/// Symmetry classification tag carried by pattern records and rule sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymmetryClass {
    /// Mirror-symmetric about both central axes
    #[serde(rename = "1D")]
    OneD,
    /// Additionally symmetric about the main diagonal
    #[serde(rename = "2D")]
    TwoD,
    /// Neither
    #[serde(rename = "none")]
    None,
}

impl SymmetryClass {
    /// Classify a finished grid
    pub fn classify(grid: &MotifGrid, operators: &SymmetryOperators) -> Self {
        let bilateral = grid.is_mirror_symmetric(MirrorAxis::Horizontal, operators)
            && grid.is_mirror_symmetric(MirrorAxis::Vertical, operators);

        if !bilateral {
            Self::None
        } else if grid.is_mirror_symmetric(MirrorAxis::Diagonal, operators) {
            Self::TwoD
        } else {
            Self::OneD
        }
    }

    /// Tag as it appears in JSON
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneD => "1D",
            Self::TwoD => "2D",
            Self::None => "none",
        }
    }
}

impl fmt::Display for SymmetryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
