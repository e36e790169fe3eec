//! Assembles a full grid from a synthesized quadrant
//!
//! The quadrant block is copied to the top-left, mirrored horizontally into
//! the top-right, vertically into the bottom-left and both ways into the
//! bottom-right. Odd grids additionally receive the axis row and column with
//! their mirrored halves.

use ndarray::{Array2, aview1, s};

use crate::algorithm::synthesis::Quadrant;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::{MotifGrid, half_size, span};
use crate::spatial::motifs::EMPTY_CELL;
use crate::spatial::symmetry::{MirrorAxis, SymmetryOperators};

/// Builds symmetric grids by reflecting quadrants
pub struct SymmetryComposer<'a> {
    operators: &'a SymmetryOperators,
}

impl<'a> SymmetryComposer<'a> {
    /// Create a composer over the given mirror tables
    pub const fn new(operators: &'a SymmetryOperators) -> Self {
        Self { operators }
    }

    /// Compose an `size × size` grid
    ///
    /// # Errors
    ///
    /// Returns an error if the quadrant was synthesized for a different size,
    /// either a different half edge or a missing/extra axis
    pub fn compose(&self, quadrant: &Quadrant, size: usize) -> Result<MotifGrid> {
        let half = quadrant.half();
        let odd = size % 2 == 1;
        if half_size(size) != half || quadrant.has_axis() != odd {
            return Err(invalid_parameter(
                "quadrant",
                &half,
                &format!("does not fit a {size}x{size} grid"),
            ));
        }

        let h = |id| self.operators.mirror(MirrorAxis::Horizontal, id);
        let v = |id| self.operators.mirror(MirrorAxis::Vertical, id);

        let top_left = quadrant.block();
        let top_right = top_left.slice(s![.., ..;-1]).mapv(h);
        let bottom_left = top_left.slice(s![..;-1, ..]).mapv(v);
        let bottom_right = top_right.slice(s![..;-1, ..]).mapv(v);

        let far = size - half;
        let mut cells = Array2::from_elem((size, size), EMPTY_CELL);
        cells
            .slice_mut(s![span(0, half), span(0, half)])
            .assign(&top_left);
        cells
            .slice_mut(s![span(0, half), span(far, half)])
            .assign(&top_right);
        cells
            .slice_mut(s![span(far, half), span(0, half)])
            .assign(&bottom_left);
        cells
            .slice_mut(s![span(far, half), span(far, half)])
            .assign(&bottom_right);

        if odd {
            let column = quadrant.axis_column();
            let row = quadrant.axis_row();

            cells
                .slice_mut(s![span(0, half), half])
                .assign(&aview1(&column));
            cells
                .slice_mut(s![half + 1.., half])
                .assign(&aview1(&column).slice(s![..;-1]).mapv(v));
            cells
                .slice_mut(s![half, span(0, half)])
                .assign(&aview1(&row));
            cells
                .slice_mut(s![half, half + 1..])
                .assign(&aview1(&row).slice(s![..;-1]).mapv(h));
            if let Some(center) = cells.get_mut((half, half)) {
                *center = quadrant.corner();
            }
        }

        MotifGrid::new(cells)
    }
}
