//! Ellipse brushes
//!
//! The outline comes from the midpoint construction. The filled variant
//! floods the inside of that outline from the rectangle's middle cell; when
//! the ellipse is so thin that the middle cell is already on the outline,
//! there is no inside left to fill.

use crate::algorithm::ellipse::ellipse_outline;
use crate::algorithm::flood_fill::flood_fill_with;
use crate::algorithm::neighbors::BoundedCardinal;
use crate::brush::Brush;
use crate::geometry::{Point, PointSet, Rect};

/// Ellipse inscribed in the rectangle spanning the gesture start and the pointer
#[derive(Debug, Clone, Default)]
pub struct CircleBrush {
    start: Point,
    rect: Rect,
    filled: bool,
}

impl CircleBrush {
    /// Brush marking only the outline
    pub fn outlined() -> Self {
        Self::default()
    }

    /// Brush marking the outline and everything inside it
    pub fn filled() -> Self {
        Self {
            filled: true,
            ..Self::default()
        }
    }

    /// Check whether the interior is marked
    pub const fn is_filled(&self) -> bool {
        self.filled
    }

    /// Bounding rectangle of the gesture in progress
    pub const fn rect(&self) -> Rect {
        self.rect
    }
}

/// Solid ellipse inscribed in `bounds`
pub fn filled_ellipse(bounds: Rect) -> PointSet {
    let mut shape = ellipse_outline(bounds);
    let mid = bounds.mid();
    if bounds.is_empty() || shape.contains(mid) {
        return shape;
    }

    let inside = flood_fill_with(mid, BoundedCardinal::new(bounds), |_, _, to| {
        !shape.contains(to)
    });
    shape.extend(inside);
    shape
}

impl Brush for CircleBrush {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn icon(&self) -> char {
        if self.filled { 'C' } else { 'c' }
    }

    fn start_drawing(&mut self, pos: Point) {
        self.start = pos;
        self.rect = Rect::from_corners(pos, pos);
    }

    fn dragged_over(&mut self, pos: Point) -> Vec<Point> {
        self.rect = Rect::from_corners(self.start, pos);
        if self.filled {
            filled_ellipse(self.rect).to_vec()
        } else {
            ellipse_outline(self.rect).to_vec()
        }
    }
}
