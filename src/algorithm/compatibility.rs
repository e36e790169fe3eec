//! Legal-neighbour lookup derived from the motif catalog
//!
//! A motif's upward connector is the down connector of its vertical mirror
//! image, and its leftward connector is the right connector of its horizontal
//! mirror image. The index groups motifs by those two derived flags so the
//! synthesizer can answer "what may sit below / right of this cell" with a
//! single table lookup.

use crate::algorithm::bitset::MotifSet;
use crate::spatial::motifs::{MotifCatalog, MotifId, NEUTRAL_MOTIF};
use crate::spatial::symmetry::{MirrorAxis, SymmetryOperators};

/// Direction in which a placed cell's connector reaches its neighbour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// From a cell into the cell below it
    Down,
    /// From a cell into the cell to its right
    Right,
}

/// Connectors a new cell must present toward its already-placed neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConnectorRequirement {
    /// The cell above reaches down into this one
    pub up: bool,
    /// The cell to the left reaches right into this one
    pub left: bool,
}

/// Whether a motif's stroke reaches into the cell above
pub fn has_up_connector(
    catalog: &MotifCatalog,
    operators: &SymmetryOperators,
    id: MotifId,
) -> bool {
    catalog.has_down_connector(operators.mirror(MirrorAxis::Vertical, id))
}

/// Whether a motif's stroke reaches into the cell to the left
pub fn has_left_connector(
    catalog: &MotifCatalog,
    operators: &SymmetryOperators,
    id: MotifId,
) -> bool {
    catalog.has_right_connector(operators.mirror(MirrorAxis::Horizontal, id))
}

/// Precomputed `(direction, connector) → legal neighbours` table
///
/// The neutral motif is never listed: it only enters a grid as a seed or
/// as the fallback for an empty candidate set.
#[derive(Debug, Clone)]
pub struct CompatibilityIndex {
    below: [MotifSet; 2],
    beside: [MotifSet; 2],
}

impl CompatibilityIndex {
    /// Build the index from the catalog and its mirror tables
    pub fn build(catalog: &MotifCatalog, operators: &SymmetryOperators) -> Self {
        let mut below = [MotifSet::new(), MotifSet::new()];
        let mut beside = [MotifSet::new(), MotifSet::new()];

        for motif in catalog.iter().filter(|motif| motif.id != NEUTRAL_MOTIF) {
            let up = has_up_connector(catalog, operators, motif.id);
            let left = has_left_connector(catalog, operators, motif.id);

            if let Some(set) = below.get_mut(usize::from(up)) {
                set.insert(motif.id);
            }
            if let Some(set) = beside.get_mut(usize::from(left)) {
                set.insert(motif.id);
            }
        }

        Self { below, beside }
    }

    /// Motifs allowed next to a cell whose connector in `direction` is `connector`
    pub fn candidates(&self, direction: Direction, connector: bool) -> &MotifSet {
        let sets = match direction {
            Direction::Down => &self.below,
            Direction::Right => &self.beside,
        };
        if connector { &sets[1] } else { &sets[0] }
    }

    /// Motifs satisfying both the upper and the left neighbour
    pub fn admissible(&self, requirement: ConnectorRequirement) -> MotifSet {
        self.candidates(Direction::Down, requirement.up)
            .intersection(self.candidates(Direction::Right, requirement.left))
    }
}
