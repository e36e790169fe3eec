//! Point type and loop sampling for motif strokes

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_4, TAU};

/// A point in either cell-local or world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move a cell-local point onto the cell at `(col, row)` and scale to world units
    #[must_use]
    pub fn place(self, col: f64, row: f64, scale: f64) -> Self {
        Self {
            x: (col + self.x) * scale,
            y: (row + self.y) * scale,
        }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Shape parameters for a lobed loop
#[derive(Debug, Clone, Copy)]
pub struct LoopShape {
    /// Radius away from any opening
    pub base_radius: f64,
    /// Radius reached exactly at an opening
    pub reach: f64,
    /// Exponent applied to the cosine falloff; larger is narrower
    pub sharpness: i32,
    /// Number of segments around the loop
    pub samples: usize,
}

/// Sample a closed loop around the origin that bulges out toward each opening
///
/// Openings are angles in radians. Sampling starts on the diagonal at 45°, so
/// for sample counts divisible by 8 every axis direction is hit exactly and
/// an opening on an axis lands precisely at `reach`. The first point is
/// repeated at the end to close the loop.
pub fn lobed_loop(openings: &[f64], shape: LoopShape) -> Vec<Point> {
    let samples = shape.samples.max(3);
    let step = TAU / samples as f64;
    let bulge = shape.reach - shape.base_radius;

    let mut points: Vec<Point> = (0..samples)
        .map(|k| {
            let theta = (k as f64).mul_add(step, FRAC_PI_4);
            let lobes: f64 = openings
                .iter()
                .map(|&phi| (theta - phi).cos().max(0.0).powi(shape.sharpness))
                .sum();
            let radius = bulge.mul_add(lobes.min(1.0), shape.base_radius);
            Point::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect();

    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}
