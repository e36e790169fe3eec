//! World-space realization of a motif grid
//!
//! Produces the pattern record consumed by renderers: one dot per occupied
//! cell and one stroke polyline per motif with a non-empty shape.

use serde::{Deserialize, Serialize};

use crate::io::configuration::{CELL_SPACING, DOT_RADIUS, STROKE_COLOR};
use crate::io::error::{Result, unknown_motif};
use crate::math::curves::Point;
use crate::spatial::grid::MotifGrid;
use crate::spatial::motifs::{EMPTY_CELL, MotifCatalog, MotifId};
use crate::spatial::symmetry::SymmetryClass;

/// A grid dot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    /// Stable element id, `dot-{row}-{col}`
    pub id: String,
    /// World x
    pub x: f64,
    /// World y
    pub y: f64,
    /// Drawing radius
    pub radius: f64,
    /// Fill colour
    pub color: String,
}

/// A motif stroke placed in world space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curve {
    /// Stable element id, `curve-{row}-{col}`
    pub id: String,
    /// Motif the stroke was drawn from
    pub motif: MotifId,
    /// Polyline in drawing order
    pub ordered_points: Vec<Point>,
    /// First point of the polyline
    pub start_point: Point,
    /// Last point of the polyline
    pub end_point: Point,
}

/// Overall drawing extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in world units
    pub width: f64,
    /// Height in world units
    pub height: f64,
}

/// Finished, renderable kolam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KolamPattern {
    /// Pattern id, `kolam-{n}x{n}`
    pub id: String,
    /// Edge length of the source grid
    pub grid_size: usize,
    /// One dot per occupied cell
    pub dots: Vec<Dot>,
    /// One stroke per occupied cell with a non-empty motif shape
    pub curves: Vec<Curve>,
    /// Extent including a one-spacing margin
    pub dimensions: Dimensions,
    /// Symmetry classification of the grid
    pub symmetry_type: SymmetryClass,
}

/// Drawing parameters applied during realization
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingStyle {
    /// Distance between neighbouring dots
    pub spacing: f64,
    /// Dot radius
    pub dot_radius: f64,
    /// Dot colour
    pub color: String,
}

impl Default for DrawingStyle {
    fn default() -> Self {
        Self {
            spacing: CELL_SPACING,
            dot_radius: DOT_RADIUS,
            color: STROKE_COLOR.to_string(),
        }
    }
}

/// Converts motif grids into pattern records
pub struct GeometryRealizer<'a> {
    catalog: &'a MotifCatalog,
    style: &'a DrawingStyle,
}

impl<'a> GeometryRealizer<'a> {
    /// Create a realizer over a catalog
    pub const fn new(catalog: &'a MotifCatalog, style: &'a DrawingStyle) -> Self {
        Self { catalog, style }
    }

    /// Place every occupied cell of the grid in world space
    ///
    /// Rows are reversed first so that the grid's first row ends up with the
    /// largest y. Cell `(row, col)` of the reversed grid has its dot at
    /// `((col + 1) * spacing, (row + 1) * spacing)`.
    ///
    /// # Errors
    ///
    /// Returns an error if a cell holds an id the catalog does not know
    pub fn realize(&self, grid: &MotifGrid, symmetry: SymmetryClass) -> Result<KolamPattern> {
        let n = grid.size();
        let spacing = self.style.spacing;
        let mut dots = Vec::with_capacity(grid.occupied_count());
        let mut curves = Vec::with_capacity(grid.occupied_count());

        for row in 0..n {
            let source_row = n - 1 - row;
            for col in 0..n {
                let id = grid.get(source_row, col).unwrap_or(EMPTY_CELL);
                if id == EMPTY_CELL {
                    continue;
                }
                let motif = self
                    .catalog
                    .get(id)
                    .ok_or_else(|| unknown_motif(id, source_row, col))?;

                let world_col = (col + 1) as f64;
                let world_row = (row + 1) as f64;

                dots.push(Dot {
                    id: format!("dot-{row}-{col}"),
                    x: world_col * spacing,
                    y: world_row * spacing,
                    radius: self.style.dot_radius,
                    color: self.style.color.clone(),
                });

                let ordered_points: Vec<Point> = motif
                    .local_points
                    .iter()
                    .map(|point| point.place(world_col, world_row, spacing))
                    .collect();

                if let (Some(&start_point), Some(&end_point)) =
                    (ordered_points.first(), ordered_points.last())
                {
                    curves.push(Curve {
                        id: format!("curve-{row}-{col}"),
                        motif: id,
                        ordered_points,
                        start_point,
                        end_point,
                    });
                }
            }
        }

        let extent = (n + 1) as f64 * spacing;
        Ok(KolamPattern {
            id: format!("kolam-{n}x{n}"),
            grid_size: n,
            dots,
            curves,
            dimensions: Dimensions {
                width: extent,
                height: extent,
            },
            symmetry_type: symmetry,
        })
    }
}
