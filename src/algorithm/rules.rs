//! Immutable bundle of the static tables every generation reads
//!
//! Built once, then shared by reference. Nothing in here is mutated after
//! construction, so a single instance can serve concurrent generations.

use std::sync::LazyLock;

use crate::algorithm::compatibility::{
    CompatibilityIndex, ConnectorRequirement, has_left_connector, has_up_connector,
};
use crate::spatial::motifs::{MotifCatalog, MotifId};
use crate::spatial::symmetry::SymmetryOperators;

static SHARED_RULES: LazyLock<KolamRules> = LazyLock::new(KolamRules::new);

/// Motif catalog, compatibility index and mirror tables
#[derive(Debug, Clone)]
pub struct KolamRules {
    catalog: MotifCatalog,
    operators: SymmetryOperators,
    compatibility: CompatibilityIndex,
}

impl Default for KolamRules {
    fn default() -> Self {
        Self::new()
    }
}

impl KolamRules {
    /// Build all tables
    ///
    /// # Panics
    ///
    /// Panics if a built-in mirror table is not an involution
    pub fn new() -> Self {
        let catalog = MotifCatalog::new();
        let operators = SymmetryOperators::new();
        let compatibility = CompatibilityIndex::build(&catalog, &operators);
        Self {
            catalog,
            operators,
            compatibility,
        }
    }

    /// Process-wide instance, built on first use
    pub fn shared() -> &'static Self {
        &SHARED_RULES
    }

    /// The motif catalog
    pub const fn catalog(&self) -> &MotifCatalog {
        &self.catalog
    }

    /// The mirror permutations
    pub const fn operators(&self) -> &SymmetryOperators {
        &self.operators
    }

    /// The legal-neighbour index
    pub const fn compatibility(&self) -> &CompatibilityIndex {
        &self.compatibility
    }

    /// Whether a motif reaches into the cell above
    pub fn has_up_connector(&self, id: MotifId) -> bool {
        has_up_connector(&self.catalog, &self.operators, id)
    }

    /// Whether a motif reaches into the cell to the left
    pub fn has_left_connector(&self, id: MotifId) -> bool {
        has_left_connector(&self.catalog, &self.operators, id)
    }

    /// Connectors a cell must present given its upper and left neighbours
    pub fn requirement(&self, above: MotifId, left: MotifId) -> ConnectorRequirement {
        ConnectorRequirement {
            up: self.catalog.has_down_connector(above),
            left: self.catalog.has_right_connector(left),
        }
    }

    /// Whether a motif presents exactly the required connectors
    pub fn satisfies(&self, id: MotifId, requirement: ConnectorRequirement) -> bool {
        self.has_up_connector(id) == requirement.up
            && self.has_left_connector(id) == requirement.left
    }
}
