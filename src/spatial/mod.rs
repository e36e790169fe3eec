//! Spatial data: motifs, mirrors, grids and world-space geometry
//!
//! This module contains spatial-related functionality including:
//! - The motif catalog and its connector flags
//! - Mirror permutations and symmetry classification
//! - Square motif grids and their invariant checks
//! - Realization of grids as dots and stroke polylines

/// World-space dots and curves built from a grid
pub mod geometry;
/// Square motif-id grids with symmetry and seam checks
pub mod grid;
/// The sixteen curve motifs
pub mod motifs;
/// Mirror permutations and symmetry classes
pub mod symmetry;

pub use grid::MotifGrid;
