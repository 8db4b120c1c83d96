//! Integer grid geometry shared by the brushes and the component analyzer
//!
//! This module contains the value types every grid computation is written in:
//! - Cell coordinates and their `x,y` text form
//! - Normalized rectangles with inclusive corners
//! - Unordered, deduplicating point sets

/// Grid cell coordinates
pub mod point;
/// Deduplicating point collections used as brush output and fill frontiers
pub mod point_set;
/// Axis-aligned rectangles and grid regions
pub mod rect;

pub use point::Point;
pub use point_set::PointSet;
pub use rect::Rect;
