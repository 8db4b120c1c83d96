//! Tile map model feeding the brushes and the component analyzer
//!
//! Cells hold 1-based references into a color palette, stored row-major in an
//! `ndarray` matrix. A separate bit mask marks obstacle cells. The grid is the
//! neighbor generator for connectivity queries: two cells are adjacent when
//! they touch orthogonally, share a tile type and neither is an obstacle.

use bitvec::prelude::*;
use ndarray::Array2;

use crate::algorithm::neighbors::{Pather, cardinal};
use crate::geometry::{Point, Rect};

/// Rectangular tile map with a color palette and an obstacle mask
#[derive(Debug, Clone)]
pub struct TileGrid {
    /// Palette references per cell (indexed by `row`, `col`)
    tiles: Array2<usize>,
    /// Obstacle flags in row-major order
    obstacles: BitVec,
    /// RGBA color of each tile type; tile `n` uses entry `n - 1`
    palette: Vec<[u8; 4]>,
}

impl TileGrid {
    /// Create a grid of one tile type painted with `color`
    pub fn new(width: usize, height: usize, color: [u8; 4]) -> Self {
        Self {
            tiles: Array2::ones((height, width)),
            obstacles: bitvec![0; width * height],
            palette: vec![color],
        }
    }

    /// Create a grid from palette references and the palette they index
    ///
    /// References outside the palette are kept as-is; `color` reports `None`
    /// for them.
    pub fn from_tiles(tiles: Array2<usize>, palette: Vec<[u8; 4]>) -> Self {
        let cells = tiles.len();
        Self {
            tiles,
            obstacles: bitvec![0; cells],
            palette,
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.tiles.nrows()
    }

    /// Region covering every cell, with its origin at `(0, 0)`
    pub fn bounds(&self) -> Rect {
        Rect::with_size(Point::new(0, 0), self.width() as i32, self.height() as i32)
    }

    /// Check if a position lies on the grid
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Colors of the tile types
    pub fn palette(&self) -> &[[u8; 4]] {
        &self.palette
    }

    /// Palette reference at a position
    pub fn tile(&self, p: Point) -> Option<usize> {
        self.cell(p).and_then(|index| self.tiles.get(index)).copied()
    }

    /// Color at a position
    pub fn color(&self, p: Point) -> Option<[u8; 4]> {
        let tile = self.tile(p)?;
        self.palette.get(tile.checked_sub(1)?).copied()
    }

    /// Palette reference for `color`, adding the color when it is new
    pub fn tile_for_color(&mut self, color: [u8; 4]) -> usize {
        if let Some(index) = self.palette.iter().position(|&known| known == color) {
            return index + 1;
        }
        self.palette.push(color);
        self.palette.len()
    }

    /// Replace the tile at a position, reporting whether it was on the grid
    pub fn set_tile(&mut self, p: Point, tile: usize) -> bool {
        let Some(slot) = self.cell(p).and_then(|index| self.tiles.get_mut(index)) else {
            return false;
        };
        *slot = tile;
        true
    }

    /// Paint `cells` with `color`, skipping positions off the grid
    ///
    /// Returns the number of cells painted.
    pub fn paint(&mut self, cells: &[Point], color: [u8; 4]) -> usize {
        let tile = self.tile_for_color(color);
        cells
            .iter()
            .filter(|&&p| self.set_tile(p, tile))
            .count()
    }

    /// Check whether a position is an obstacle
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.bounds()
            .index_of(p)
            .and_then(|index| self.obstacles.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Mark or clear an obstacle, reporting whether the position was on the grid
    pub fn set_obstacle(&mut self, p: Point, blocked: bool) -> bool {
        let Some(index) = self.bounds().index_of(p) else {
            return false;
        };
        match self.obstacles.get_mut(index) {
            Some(mut flag) => {
                *flag = blocked;
                true
            }
            None => false,
        }
    }

    /// Mark every cell painted with one of `colors` as an obstacle
    ///
    /// Returns the number of cells marked.
    pub fn mark_obstacles(&mut self, colors: &[[u8; 4]]) -> usize {
        let blocked: Vec<Point> = self
            .bounds()
            .points()
            .filter(|&p| self.color(p).is_some_and(|color| colors.contains(&color)))
            .collect();
        blocked
            .into_iter()
            .filter(|&p| self.set_obstacle(p, true))
            .count()
    }

    /// Paint-bucket rule: `candidate` is on the grid and has the tile type of `source`
    pub fn same_tile(&self, source: Point, _current: Point, candidate: Point) -> bool {
        self.tile(candidate).is_some_and(|tile| Some(tile) == self.tile(source))
    }

    fn cell(&self, p: Point) -> Option<[usize; 2]> {
        self.in_bounds(p).then(|| [p.y as usize, p.x as usize])
    }
}

impl Pather for &TileGrid {
    fn neighbors(&mut self, p: Point, out: &mut Vec<Point>) {
        let Some(tile) = self.tile(p) else {
            return;
        };
        if self.is_obstacle(p) {
            return;
        }
        out.extend(
            cardinal(p)
                .into_iter()
                .filter(|&q| self.tile(q) == Some(tile) && !self.is_obstacle(q)),
        );
    }
}
