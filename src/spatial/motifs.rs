//! The sixteen kolam curve motifs
//!
//! Every motif is a stroke looping around one dot. It may open toward any of
//! the four cell sides, where it meets the stroke of the neighbouring cell;
//! the sixteen motifs are exactly the sixteen subsets of open sides. Ids run
//! from 1 to 16 and 0 marks an empty cell.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::io::configuration::{
    MOTIF_BASE_RADIUS, MOTIF_LOBE_SHARPNESS, MOTIF_REACH, MOTIF_SAMPLES,
};
use crate::math::curves::{LoopShape, Point, lobed_loop};

/// Motif reference stored in grid cells (0 = empty, 1..=16 = motif)
pub type MotifId = u8;

/// Cell with no dot and no stroke
pub const EMPTY_CELL: MotifId = 0;

/// Closed loop with no connectors, used as seed and fallback
pub const NEUTRAL_MOTIF: MotifId = 1;

/// Number of motifs in the catalog
pub const MOTIF_COUNT: usize = 16;

/// Sides of a cell a stroke can open toward
///
/// Up is the direction of decreasing row index in a grid, which is +y in the
/// cell-local drawing space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Openings {
    /// Continues into the cell above
    pub up: bool,
    /// Continues into the cell below
    pub down: bool,
    /// Continues into the cell to the left
    pub left: bool,
    /// Continues into the cell to the right
    pub right: bool,
}

impl Openings {
    const fn sides(up: bool, down: bool, left: bool, right: bool) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    /// Angles (radians, local space) of the open sides
    pub fn angles(self) -> Vec<f64> {
        [
            (self.right, 0.0),
            (self.up, FRAC_PI_2),
            (self.left, PI),
            (self.down, -FRAC_PI_2),
        ]
        .into_iter()
        .filter_map(|(open, angle)| open.then_some(angle))
        .collect()
    }

    /// Number of open sides
    pub fn count(self) -> usize {
        [self.up, self.down, self.left, self.right]
            .into_iter()
            .filter(|&open| open)
            .count()
    }
}

// Indexed by id - 1
const MOTIF_OPENINGS: [Openings; MOTIF_COUNT] = [
    Openings::sides(false, false, false, false),
    Openings::sides(false, true, false, false),
    Openings::sides(false, false, false, true),
    Openings::sides(true, false, false, false),
    Openings::sides(false, false, true, false),
    Openings::sides(false, true, false, true),
    Openings::sides(true, false, false, true),
    Openings::sides(true, false, true, false),
    Openings::sides(false, true, true, false),
    Openings::sides(false, false, true, true),
    Openings::sides(true, true, false, false),
    Openings::sides(false, true, true, true),
    Openings::sides(true, true, false, true),
    Openings::sides(true, false, true, true),
    Openings::sides(true, true, true, false),
    Openings::sides(true, true, true, true),
];

/// A single curve motif
#[derive(Debug, Clone, PartialEq)]
pub struct Motif {
    /// Catalog id in `1..=16`
    pub id: MotifId,
    /// Stroke polyline in cell-local space, dot at the origin, one cell = 1.0
    pub local_points: Vec<Point>,
    /// Whether the stroke continues into the cell below
    pub has_down_connector: bool,
    /// Whether the stroke continues into the cell to the right
    pub has_right_connector: bool,
    openings: Openings,
}

impl Motif {
    /// All four open sides of the motif
    pub const fn openings(&self) -> Openings {
        self.openings
    }
}

/// Immutable catalog of the sixteen motifs
#[derive(Debug, Clone)]
pub struct MotifCatalog {
    motifs: Vec<Motif>,
}

impl Default for MotifCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MotifCatalog {
    /// Build the catalog, sampling each motif's stroke once
    pub fn new() -> Self {
        let shape = LoopShape {
            base_radius: MOTIF_BASE_RADIUS,
            reach: MOTIF_REACH,
            sharpness: MOTIF_LOBE_SHARPNESS,
            samples: MOTIF_SAMPLES,
        };

        let motifs = (1..=MOTIF_COUNT as MotifId)
            .zip(MOTIF_OPENINGS)
            .map(|(id, openings)| Motif {
                id,
                local_points: lobed_loop(&openings.angles(), shape),
                has_down_connector: openings.down,
                has_right_connector: openings.right,
                openings,
            })
            .collect();

        Self { motifs }
    }

    /// Look up a motif; `None` for the empty cell and out-of-range ids
    pub fn get(&self, id: MotifId) -> Option<&Motif> {
        if id == EMPTY_CELL {
            return None;
        }
        self.motifs.get(usize::from(id) - 1)
    }

    /// Whether `id` names a catalog motif
    pub fn contains(&self, id: MotifId) -> bool {
        self.get(id).is_some()
    }

    /// Down connector flag; empty and unknown ids have none
    pub fn has_down_connector(&self, id: MotifId) -> bool {
        self.get(id).is_some_and(|motif| motif.has_down_connector)
    }

    /// Right connector flag; empty and unknown ids have none
    pub fn has_right_connector(&self, id: MotifId) -> bool {
        self.get(id).is_some_and(|motif| motif.has_right_connector)
    }

    /// Iterate motifs in id order
    pub fn iter(&self) -> std::slice::Iter<'_, Motif> {
        self.motifs.iter()
    }

    /// Number of motifs
    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    /// Always false for a built catalog
    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }
}
