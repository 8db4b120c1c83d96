use crate::algorithm::flood_fill::flood_fill;
use crate::brush::Brush;
use crate::geometry::Point;

/// Flood fill from the pointer position
///
/// The traversal predicate receives `(seed, current, candidate)` and decides
/// whether the fill may enter `candidate`; a typical rule is "same tile type
/// as the seed". It must reject cells outside the map, since the fill has no
/// other bound.
pub struct PaintBucket<F> {
    traversable: F,
}

impl<F> PaintBucket<F>
where
    F: FnMut(Point, Point, Point) -> bool,
{
    /// Create a bucket with the given traversal predicate
    pub const fn new(traversable: F) -> Self {
        Self { traversable }
    }
}

impl<F> Brush for PaintBucket<F>
where
    F: FnMut(Point, Point, Point) -> bool,
{
    fn name(&self) -> &'static str {
        "fill"
    }

    fn icon(&self) -> char {
        'B'
    }

    fn start_drawing(&mut self, _pos: Point) {}

    fn dragged_over(&mut self, pos: Point) -> Vec<Point> {
        flood_fill(pos, &mut self.traversable)
    }
}
