use crate::brush::Brush;
use crate::geometry::{Point, PointSet};

/// Freehand brush marking every cell the pointer visits
///
/// Cells are not interpolated between pointer events; a fast drag leaves
/// gaps.
#[derive(Debug, Clone, Default)]
pub struct Pencil {
    visited: PointSet,
}

impl Pencil {
    /// Create a pencil with no gesture in progress
    pub fn new() -> Self {
        Self::default()
    }
}

impl Brush for Pencil {
    fn name(&self) -> &'static str {
        "pencil"
    }

    fn icon(&self) -> char {
        'p'
    }

    fn start_drawing(&mut self, pos: Point) {
        self.visited.clear();
        self.visited.add(pos);
    }

    fn dragged_over(&mut self, pos: Point) -> Vec<Point> {
        self.visited.add(pos);
        self.visited.to_vec()
    }

    fn stop_drawing(&mut self, pos: Point) -> Vec<Point> {
        let cells = self.dragged_over(pos);
        self.visited.clear();
        cells
    }
}
