//! Spatial data structures standing in for the map model
//!
//! This module contains the tile grid the command-line tool works on:
//! - Palette-indexed tiles stored in a 2D matrix
//! - Obstacle masks
//! - Same-tile neighbor and fill rules

/// Tile grid storage and traversal rules
pub mod grid;

pub use grid::TileGrid;
