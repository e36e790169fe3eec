//! Square motif-id grids with symmetry and seam checks
//!
//! Rows are stored top to bottom in the mathematical orientation used by the
//! generator; the geometry step flips them when placing cells in world space.

use ndarray::{Array2, ArrayView2};
use std::ops::Range;

use crate::algorithm::rules::KolamRules;
use crate::io::error::{Result, invalid_parameter, unknown_motif};
use crate::spatial::motifs::{EMPTY_CELL, MOTIF_COUNT, MotifId};
use crate::spatial::symmetry::{MirrorAxis, SymmetryOperators};

/// Half-open index range covering `len` cells starting at `start`
pub const fn span(start: usize, len: usize) -> Range<usize> {
    start..start + len
}

/// Quadrant edge length for a grid of size `n`
///
/// `floor((n - 1) / 2)` for odd sizes and `n / 2` for even ones; both are
/// `n / 2` in integer arithmetic.
pub const fn half_size(n: usize) -> usize {
    n / 2
}

/// Square matrix of motif ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifGrid {
    cells: Array2<MotifId>,
}

impl MotifGrid {
    /// Wrap a square matrix, validating every id
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square or a cell references an
    /// id outside `0..=16`
    pub fn new(cells: Array2<MotifId>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows != cols {
            return Err(invalid_parameter(
                "grid",
                &format!("{rows}x{cols}"),
                &"motif grids must be square",
            ));
        }

        if let Some(((row, col), &id)) = cells
            .indexed_iter()
            .find(|&(_, &id)| usize::from(id) > MOTIF_COUNT)
        {
            return Err(unknown_motif(id, row, col));
        }

        Ok(Self { cells })
    }

    /// Build a grid from row-major ids
    ///
    /// # Errors
    ///
    /// Returns an error if `ids` does not hold `size * size` entries or an
    /// entry is outside `0..=16`
    pub fn from_row_major(size: usize, ids: &[i64]) -> Result<Self> {
        if ids.len() != size * size {
            return Err(invalid_parameter(
                "motifs",
                &ids.len(),
                &format!("expected {} ids for a {size}x{size} grid", size * size),
            ));
        }

        let mut narrowed = Vec::with_capacity(ids.len());
        for (index, &id) in ids.iter().enumerate() {
            let motif = MotifId::try_from(id)
                .ok()
                .filter(|&motif| usize::from(motif) <= MOTIF_COUNT)
                .ok_or_else(|| unknown_motif(id, index / size.max(1), index % size.max(1)))?;
            narrowed.push(motif);
        }

        let cells = Array2::from_shape_vec((size, size), narrowed).map_err(|e| {
            invalid_parameter("motifs", &ids.len(), &e)
        })?;
        Self::new(cells)
    }

    /// Edge length
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Id at a cell, `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<MotifId> {
        self.cells.get((row, col)).copied()
    }

    /// Read-only view of the cells
    pub fn view(&self) -> ArrayView2<'_, MotifId> {
        self.cells.view()
    }

    /// Ids in row-major order
    pub fn to_row_major(&self) -> Vec<MotifId> {
        self.cells.iter().copied().collect()
    }

    /// Number of non-empty cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&id| id != EMPTY_CELL).count()
    }

    /// Check the mirror invariant about one axis
    ///
    /// Horizontal: `g[i][j] = h(g[i][n-1-j])`. Vertical: `g[i][j] = v(g[n-1-i][j])`.
    /// Diagonal: `g[i][j] = d(g[j][i])`.
    pub fn is_mirror_symmetric(&self, axis: MirrorAxis, operators: &SymmetryOperators) -> bool {
        let n = self.size();
        let permutation = operators.permutation(axis);

        self.cells.indexed_iter().all(|((i, j), &id)| {
            let (pi, pj) = match axis {
                MirrorAxis::Horizontal => (i, n - 1 - j),
                MirrorAxis::Vertical => (n - 1 - i, j),
                MirrorAxis::Diagonal => (j, i),
            };
            self.get(pi, pj)
                .is_some_and(|partner| permutation.apply(partner) == id)
        })
    }

    /// Count facing connector pairs that disagree
    ///
    /// Every shared edge between two cells is checked once, and the outside
    /// of the grid counts as a connector-free neighbour, so a stroke running
    /// off the border is a violation too.
    pub fn seam_violations(&self, rules: &KolamRules) -> usize {
        let n = self.size();
        let catalog = rules.catalog();
        let cell = |row: Option<usize>, col: Option<usize>| -> MotifId {
            match (row, col) {
                (Some(r), Some(c)) => self.get(r, c).unwrap_or(EMPTY_CELL),
                _ => EMPTY_CELL,
            }
        };

        let mut violations = 0;
        // Vertical edges: row boundary r sits above cell row r
        for r in 0..=n {
            for c in 0..n {
                let upper = cell(r.checked_sub(1), Some(c));
                let lower = cell((r < n).then_some(r), Some(c));
                if catalog.has_down_connector(upper) != rules.has_up_connector(lower) {
                    violations += 1;
                }
            }
        }
        // Horizontal edges: column boundary c sits left of cell column c
        for r in 0..n {
            for c in 0..=n {
                let left = cell(Some(r), c.checked_sub(1));
                let right = cell(Some(r), (c < n).then_some(c));
                if catalog.has_right_connector(left) != rules.has_left_connector(right) {
                    violations += 1;
                }
            }
        }
        violations
    }
}
