use crate::algorithm::line::line_of_sight;
use crate::brush::Brush;
use crate::geometry::Point;

/// Straight line from the gesture start to the pointer
#[derive(Debug, Clone, Default)]
pub struct LineBrush {
    start: Point,
}

impl LineBrush {
    /// Create a line brush with no gesture in progress
    pub fn new() -> Self {
        Self::default()
    }
}

impl Brush for LineBrush {
    fn name(&self) -> &'static str {
        "line"
    }

    fn icon(&self) -> char {
        'L'
    }

    fn start_drawing(&mut self, pos: Point) {
        self.start = pos;
    }

    fn dragged_over(&mut self, pos: Point) -> Vec<Point> {
        line_of_sight(self.start, pos, |_| true)
    }
}
