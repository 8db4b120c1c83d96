//! Axis-aligned rectangles with inclusive corners
//!
//! The same type describes brush bounding boxes and the regions analyzed for
//! connectivity. Constructors normalize the corners, so callers can pass the
//! two ends of a drag in any order.

use crate::geometry::Point;

/// Axis-aligned rectangle whose `min` and `max` corners both belong to it
///
/// A rectangle with `max` before `min` on either axis is empty. `with_size`
/// produces such a rectangle for non-positive dimensions, and empty regions
/// turn every grid operation into a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Top-left corner (inclusive)
    pub min: Point,
    /// Bottom-right corner (inclusive)
    pub max: Point,
}

impl Rect {
    /// Rectangle spanning two corners given as raw coordinates
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Rectangle spanning two corner points
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Region of `width` by `height` cells starting at `origin`
    pub fn with_size(origin: Point, width: i32, height: i32) -> Self {
        Self {
            min: origin,
            max: origin.shift(width.max(0) - 1, height.max(0) - 1),
        }
    }

    /// Number of columns covered
    pub fn width(&self) -> i32 {
        (self.max.x - self.min.x + 1).max(0)
    }

    /// Number of rows covered
    pub fn height(&self) -> i32 {
        (self.max.y - self.min.y + 1).max(0)
    }

    /// Cell counts along both axes
    pub fn size(&self) -> Point {
        Point::new(self.width(), self.height())
    }

    /// Check whether the rectangle covers no cells
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Number of cells covered
    pub fn area(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Middle cell, rounding towards the `min` corner
    pub fn mid(&self) -> Point {
        let half = |a: i32, b: i32| (i64::from(a) + i64::from(b)).div_euclid(2) as i32;
        Point::new(half(self.min.x, self.max.x), half(self.min.y, self.max.y))
    }

    /// Check if a point lies within the rectangle
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Row-major position of a contained point
    pub fn index_of(&self, p: Point) -> Option<usize> {
        self.contains(p).then(|| {
            (p.y - self.min.y) as usize * self.width() as usize + (p.x - self.min.x) as usize
        })
    }

    /// Point at a row-major position
    pub fn point_at(&self, index: usize) -> Option<Point> {
        if index >= self.area() {
            return None;
        }
        let width = self.width() as usize;
        Some(self.min.shift((index % width) as i32, (index / width) as i32))
    }

    /// Iterate every cell in row-major order
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let Self { min, max } = *self;
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| Point::new(x, y)))
    }
}
