//! Grid brushes and connected-component analysis for tile map painting
//!
//! The engine turns pointer gestures into sets of grid cells (pencil, line,
//! rectangle, ellipse and flood-fill brushes) and partitions rectangular grid
//! regions into connected components under a caller-supplied neighbor rule.
//! A small command-line tool applies both to PNG tile maps.

#![forbid(unsafe_code)]

/// Grid algorithms: flood fill, line and ellipse rasterization, component labeling
pub mod algorithm;
/// Drag-driven brushes producing grid cells
pub mod brush;
/// Points, rectangles and point sets
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Tile map model used as neighbor generator and fill rule
pub mod spatial;

pub use io::error::{GridError, Result};
