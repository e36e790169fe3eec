//! Mathematical utilities for motif geometry

/// Points and lobed loop sampling for motif strokes
pub mod curves;
