//! Randomized single-pass quadrant synthesis
//!
//! Fills the top-left quadrant in row-major order. Each cell draws uniformly
//! from the motifs compatible with its upper and left neighbours. Row 0 and
//! column 0 are seeded with the neutral motif so the first real row and
//! column see connector-free neighbours. For odd grids an extra row and column
//! are drawn as well; they become the shared mirror axes, so their motifs are
//! restricted to the fixed points of the matching mirror.

use ndarray::{Array2, s};

use crate::algorithm::bitset::MotifSet;
use crate::algorithm::compatibility::ConnectorRequirement;
use crate::algorithm::executor::RandomSelector;
use crate::algorithm::rules::KolamRules;
use crate::io::error::{KolamError, Result};
use crate::spatial::grid::span;
use crate::spatial::motifs::{MotifId, NEUTRAL_MOTIF};
use crate::spatial::symmetry::MirrorAxis;

/// Which symmetry the generated grid must have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymmetryMode {
    /// Mirror symmetry about both central axes ("1D")
    #[default]
    Bilateral,
    /// Bilateral plus symmetry about the main diagonal ("2D")
    Diagonal,
}

/// What to do when no motif fits a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Place the neutral motif and count it
    #[default]
    Lenient,
    /// Fail when the neutral motif would not match the neighbours either
    Strict,
}

/// Counters collected while synthesizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SynthesisStats {
    /// Cells whose motif was drawn at random
    pub cells_synthesized: usize,
    /// Cells that received the neutral motif because no candidate was left
    pub fallbacks: usize,
}

/// A synthesized quadrant inside its `(half + 2)²` working matrix
///
/// Working row/column 0 hold the neutral seed, `1..=half` the quadrant block
/// and `half + 1` the axis row/column (only drawn for odd grids).
#[derive(Debug, Clone)]
pub struct Quadrant {
    half: usize,
    has_axis: bool,
    cells: Array2<MotifId>,
}

impl Quadrant {
    /// Edge length of the quadrant block
    pub const fn half(&self) -> usize {
        self.half
    }

    /// Whether the axis row and column were drawn
    pub const fn has_axis(&self) -> bool {
        self.has_axis
    }

    /// The `half × half` block that becomes the top-left of the grid
    pub fn block(&self) -> Array2<MotifId> {
        self.cells
            .slice(s![span(1, self.half), span(1, self.half)])
            .to_owned()
    }

    /// Axis column cells next to the block, top to bottom, without the corner
    pub fn axis_column(&self) -> Vec<MotifId> {
        self.cells
            .slice(s![span(1, self.half), self.half + 1])
            .to_vec()
    }

    /// Axis row cells below the block, left to right, without the corner
    pub fn axis_row(&self) -> Vec<MotifId> {
        self.cells
            .slice(s![self.half + 1, span(1, self.half)])
            .to_vec()
    }

    /// The cell where both axes cross
    pub fn corner(&self) -> MotifId {
        self.cell(self.half + 1, self.half + 1)
    }

    fn cell(&self, row: usize, col: usize) -> MotifId {
        self.cells.get((row, col)).copied().unwrap_or(NEUTRAL_MOTIF)
    }
}

/// Draw a motif from `candidates`, falling back to the neutral motif
///
/// The fallback is counted in `stats`. Under [`FallbackPolicy::Strict`] it is
/// only accepted when the neutral motif itself meets `requirement`.
///
/// # Errors
///
/// Returns [`KolamError::CandidateSetExhausted`] when the set is empty, the
/// policy is strict and the neutral motif would break the seam
pub fn choose_motif(
    rules: &KolamRules,
    candidates: &MotifSet,
    requirement: ConnectorRequirement,
    policy: FallbackPolicy,
    selector: &mut RandomSelector,
    stats: &mut SynthesisStats,
    position: (usize, usize),
) -> Result<MotifId> {
    if let Some(id) = selector.choose(candidates) {
        stats.cells_synthesized += 1;
        return Ok(id);
    }

    stats.fallbacks += 1;
    let (row, col) = position;
    let consistent = rules.satisfies(NEUTRAL_MOTIF, requirement);
    tracing::debug!(row, col, consistent, "candidate set exhausted, placing neutral motif");

    if policy == FallbackPolicy::Strict && !consistent {
        return Err(KolamError::CandidateSetExhausted { row, col });
    }
    Ok(NEUTRAL_MOTIF)
}

/// Fills one quadrant according to the compatibility rules
pub struct QuadrantSynthesizer<'a> {
    rules: &'a KolamRules,
    mode: SymmetryMode,
    policy: FallbackPolicy,
}

impl<'a> QuadrantSynthesizer<'a> {
    /// Create a synthesizer
    pub const fn new(rules: &'a KolamRules, mode: SymmetryMode, policy: FallbackPolicy) -> Self {
        Self {
            rules,
            mode,
            policy,
        }
    }

    /// Synthesize a quadrant of edge `half`, plus the axis row/column if `with_axis`
    ///
    /// # Errors
    ///
    /// Returns an error only under the strict fallback policy, see [`choose_motif`]
    pub fn synthesize(
        &self,
        half: usize,
        with_axis: bool,
        selector: &mut RandomSelector,
        stats: &mut SynthesisStats,
    ) -> Result<Quadrant> {
        let edge = half + 2;
        let mut quadrant = Quadrant {
            half,
            has_axis: with_axis,
            cells: Array2::from_elem((edge, edge), NEUTRAL_MOTIF),
        };
        let operators = self.rules.operators();
        let diagonal = self.mode == SymmetryMode::Diagonal;

        for i in 1..=half {
            for j in 1..=half {
                if diagonal && j < i {
                    let partner = quadrant.cell(j, i);
                    set_cell(&mut quadrant, i, j, operators.mirror(MirrorAxis::Diagonal, partner));
                    continue;
                }
                let restrict: &[MirrorAxis] = if diagonal && i == j {
                    &[MirrorAxis::Diagonal]
                } else {
                    &[]
                };
                self.draw(&mut quadrant, (i, j), restrict, selector, stats)?;
            }
        }

        if !with_axis {
            return Ok(quadrant);
        }

        let axis = half + 1;
        for i in 1..=half {
            self.draw(&mut quadrant, (i, axis), &[MirrorAxis::Horizontal], selector, stats)?;
        }
        for j in 1..=half {
            if diagonal {
                let partner = quadrant.cell(j, axis);
                set_cell(&mut quadrant, axis, j, operators.mirror(MirrorAxis::Diagonal, partner));
            } else {
                self.draw(&mut quadrant, (axis, j), &[MirrorAxis::Vertical], selector, stats)?;
            }
        }

        let corner_axes: &[MirrorAxis] = if diagonal {
            &[MirrorAxis::Horizontal, MirrorAxis::Vertical, MirrorAxis::Diagonal]
        } else {
            &[MirrorAxis::Horizontal, MirrorAxis::Vertical]
        };
        self.draw(&mut quadrant, (axis, axis), corner_axes, selector, stats)?;

        Ok(quadrant)
    }

    fn draw(
        &self,
        quadrant: &mut Quadrant,
        (row, col): (usize, usize),
        fixed_under: &[MirrorAxis],
        selector: &mut RandomSelector,
        stats: &mut SynthesisStats,
    ) -> Result<()> {
        let requirement = self
            .rules
            .requirement(quadrant.cell(row - 1, col), quadrant.cell(row, col - 1));

        let mut candidates = self.rules.compatibility().admissible(requirement);
        for &axis in fixed_under {
            candidates.intersect_with(self.rules.operators().fixed_points(axis));
        }

        let id = choose_motif(
            self.rules,
            &candidates,
            requirement,
            self.policy,
            selector,
            stats,
            (row, col),
        )?;
        set_cell(quadrant, row, col, id);
        Ok(())
    }
}

fn set_cell(quadrant: &mut Quadrant, row: usize, col: usize, id: MotifId) {
    if let Some(cell) = quadrant.cells.get_mut((row, col)) {
        *cell = id;
    }
}
