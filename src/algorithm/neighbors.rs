//! Neighbor generators for grid traversals

use crate::geometry::{Point, Rect};

/// Produces the cells reachable in one step from a position
///
/// Generators that model obstacles return no neighbors for blocked cells
/// instead of filtering blocked cells out as targets, which keeps the
/// neighbor relation symmetric. Any closure mapping a point to an iterable
/// of points is a generator.
pub trait Pather {
    /// Append the neighbors of `p` to `out`
    fn neighbors(&mut self, p: Point, out: &mut Vec<Point>);
}

impl<F, I> Pather for F
where
    F: FnMut(Point) -> I,
    I: IntoIterator<Item = Point>,
{
    fn neighbors(&mut self, p: Point, out: &mut Vec<Point>) {
        out.extend(self(p));
    }
}

/// The four orthogonal neighbors of a point: east, west, south, north
pub const fn cardinal(p: Point) -> [Point; 4] {
    [p.shift(1, 0), p.shift(-1, 0), p.shift(0, 1), p.shift(0, -1)]
}

/// Unbounded four-directional neighbor generator
#[derive(Debug, Clone, Copy, Default)]
pub struct Cardinal;

impl Pather for Cardinal {
    fn neighbors(&mut self, p: Point, out: &mut Vec<Point>) {
        out.extend(cardinal(p));
    }
}

/// Four-directional neighbor generator clipped to a rectangle
#[derive(Debug, Clone, Copy)]
pub struct BoundedCardinal {
    bounds: Rect,
}

impl BoundedCardinal {
    /// Generator that never leaves `bounds`
    pub const fn new(bounds: Rect) -> Self {
        Self { bounds }
    }
}

impl Pather for BoundedCardinal {
    fn neighbors(&mut self, p: Point, out: &mut Vec<Point>) {
        out.extend(cardinal(p).into_iter().filter(|q| self.bounds.contains(*q)));
    }
}
