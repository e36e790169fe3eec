//! Symmetric kolam pattern generation
//!
//! A quadrant of curve motifs is drawn at random so that neighbouring strokes
//! join up, then mirrored into a full grid with bilateral (optionally also
//! diagonal) symmetry, and finally realized as world-space dots and curves.

#![deny(unsafe_code)]

/// Quadrant synthesis, symmetric composition and the generation pipeline
pub mod algorithm;
/// Errors, configuration, CLI, progress display and JSON exchange
pub mod io;
/// Curve sampling
pub mod math;
/// Motif catalog, mirror operators, grids and geometry
pub mod spatial;

pub use algorithm::executor::generate_kolam;
pub use io::error::{KolamError, Result};
