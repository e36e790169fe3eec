use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    algorithm::bitset::MotifSet,
    algorithm::composition::SymmetryComposer,
    algorithm::rules::KolamRules,
    algorithm::synthesis::{FallbackPolicy, QuadrantSynthesizer, SymmetryMode, SynthesisStats},
    io::configuration::{DEFAULT_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE},
    io::error::{KolamError, Result, invalid_parameter},
    spatial::geometry::{DrawingStyle, GeometryRealizer, KolamPattern},
    spatial::grid::{MotifGrid, half_size},
    spatial::motifs::MotifId,
    spatial::symmetry::SymmetryClass,
};

/// Seeded random selector for reproducible stochastic choices
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a selector seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Uniform choice among the members of a motif set
    ///
    /// Returns `None` for an empty set
    pub fn choose(&mut self, candidates: &MotifSet) -> Option<MotifId> {
        let count = candidates.count();
        if count == 0 {
            return None;
        }
        candidates.nth(self.rng.random_range(0..count))
    }
}

/// Runtime parameters of a generation
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationConfig {
    /// Edge length of the square grid
    pub size: usize,
    /// Bilateral or diagonal symmetry
    pub mode: SymmetryMode,
    /// Behaviour on empty candidate sets
    pub fallback_policy: FallbackPolicy,
    /// World-space drawing parameters
    pub style: DrawingStyle,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl GenerationConfig {
    /// Lenient bilateral generation with the default style
    pub fn new(size: usize) -> Self {
        Self {
            size,
            mode: SymmetryMode::default(),
            fallback_policy: FallbackPolicy::default(),
            style: DrawingStyle::default(),
        }
    }

    /// Check the size bounds and drawing parameters
    ///
    /// # Errors
    ///
    /// Returns [`KolamError::InvalidSize`] for sizes outside the supported
    /// range, or an invalid-parameter error for a non-positive spacing or
    /// negative dot radius
    pub fn validate(&self) -> Result<()> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.size) {
            return Err(KolamError::InvalidSize {
                size: self.size,
                min: MIN_GRID_SIZE,
                max: MAX_GRID_SIZE,
            });
        }
        if !(self.style.spacing.is_finite() && self.style.spacing > 0.0) {
            return Err(invalid_parameter(
                "spacing",
                &self.style.spacing,
                &"must be a positive finite number",
            ));
        }
        if !(self.style.dot_radius.is_finite() && self.style.dot_radius >= 0.0) {
            return Err(invalid_parameter(
                "dot_radius",
                &self.style.dot_radius,
                &"must be a non-negative finite number",
            ));
        }
        Ok(())
    }
}

/// Counters describing how a grid came about
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Cells drawn at random
    pub cells_synthesized: usize,
    /// Cells that fell back to the neutral motif
    pub fallbacks: usize,
    /// Adjacent pairs with disagreeing connectors in the final grid
    pub seam_violations: usize,
}

/// Result of one generation
#[derive(Clone, Debug)]
pub struct Generation {
    /// The composed motif grid
    pub grid: MotifGrid,
    /// Its world-space realization
    pub pattern: KolamPattern,
    /// Synthesis counters
    pub report: GenerationReport,
}

/// Runs synthesis, composition and realization for one configuration
///
/// The rule tables are borrowed, so one [`KolamRules`] instance can back any
/// number of generators.
pub struct KolamGenerator<'a> {
    rules: &'a KolamRules,
    config: GenerationConfig,
}

impl<'a> KolamGenerator<'a> {
    /// Create a generator after validating the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if [`GenerationConfig::validate`] fails
    pub fn new(rules: &'a KolamRules, config: GenerationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { rules, config })
    }

    /// The configuration in use
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Synthesize a quadrant and compose it into a full grid
    ///
    /// # Errors
    ///
    /// Returns an error under the strict fallback policy when a cell cannot
    /// be filled consistently
    pub fn propose_grid(
        &self,
        selector: &mut RandomSelector,
    ) -> Result<(MotifGrid, SynthesisStats)> {
        let size = self.config.size;
        let mut stats = SynthesisStats::default();

        let quadrant = QuadrantSynthesizer::new(
            self.rules,
            self.config.mode,
            self.config.fallback_policy,
        )
        .synthesize(half_size(size), size % 2 == 1, selector, &mut stats)?;

        let grid = SymmetryComposer::new(self.rules.operators()).compose(&quadrant, size)?;
        Ok((grid, stats))
    }

    /// Realize a finished grid as a pattern record, tagged with its symmetry class
    ///
    /// # Errors
    ///
    /// Returns an error if the grid holds an id unknown to the catalog
    pub fn realize(&self, grid: &MotifGrid) -> Result<KolamPattern> {
        let symmetry = SymmetryClass::classify(grid, self.rules.operators());
        GeometryRealizer::new(self.rules.catalog(), &self.config.style).realize(grid, symmetry)
    }

    /// Generate a kolam from a seed
    ///
    /// # Errors
    ///
    /// See [`Self::generate_with`]
    pub fn generate(&self, seed: u64) -> Result<Generation> {
        self.generate_with(&mut RandomSelector::new(seed))
    }

    /// Generate a kolam drawing from the given selector
    ///
    /// # Errors
    ///
    /// Returns an error under the strict fallback policy when synthesis gets
    /// stuck, or if realization meets an unknown motif
    pub fn generate_with(&self, selector: &mut RandomSelector) -> Result<Generation> {
        let (grid, stats) = self.propose_grid(selector)?;
        let seam_violations = grid.seam_violations(self.rules);
        if seam_violations > 0 {
            tracing::warn!(
                size = self.config.size,
                seam_violations,
                "generated grid has mismatched connectors"
            );
        }

        let pattern = self.realize(&grid)?;
        Ok(Generation {
            grid,
            pattern,
            report: GenerationReport {
                cells_synthesized: stats.cells_synthesized,
                fallbacks: stats.fallbacks,
                seam_violations,
            },
        })
    }
}

/// Generate a bilateral kolam with default settings and the shared rule tables
///
/// # Errors
///
/// Returns [`KolamError::InvalidSize`] when `size` is out of range
pub fn generate_kolam(size: usize, seed: u64) -> Result<KolamPattern> {
    let generator = KolamGenerator::new(KolamRules::shared(), GenerationConfig::new(size))?;
    Ok(generator.generate(seed)?.pattern)
}
