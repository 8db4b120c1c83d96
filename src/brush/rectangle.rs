use crate::brush::Brush;
use crate::geometry::{Point, PointSet, Rect};

/// Rectangle spanning the gesture start and the pointer
#[derive(Debug, Clone, Default)]
pub struct RectangleBrush {
    start: Point,
    rect: Rect,
    filled: bool,
}

impl RectangleBrush {
    /// Brush marking only the four edges
    pub fn outlined() -> Self {
        Self::default()
    }

    /// Brush marking every covered cell
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

    /// Rectangle of the gesture in progress
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    fn cells(&self) -> Vec<Point> {
        if self.filled {
            self.rect.points().collect()
        } else {
            rectangle_outline(self.rect).to_vec()
        }
    }
}

/// Edge cells of `rect`, each corner once
pub fn rectangle_outline(rect: Rect) -> PointSet {
    let mut outline = PointSet::with_capacity(2 * (rect.width() + rect.height()) as usize);
    for x in rect.min.x..=rect.max.x {
        outline.add(Point::new(x, rect.min.y));
        outline.add(Point::new(x, rect.max.y));
    }
    for y in rect.min.y..=rect.max.y {
        outline.add(Point::new(rect.min.x, y));
        outline.add(Point::new(rect.max.x, y));
    }
    outline
}

impl Brush for RectangleBrush {
    fn name(&self) -> &'static str {
        "rect"
    }

    fn icon(&self) -> char {
        if self.filled { 'F' } else { 'f' }
    }

    fn start_drawing(&mut self, pos: Point) {
        self.start = pos;
        self.rect = Rect::from_corners(pos, pos);
    }

    fn dragged_over(&mut self, pos: Point) -> Vec<Point> {
        self.rect = Rect::from_corners(self.start, pos);
        self.cells()
    }
}
