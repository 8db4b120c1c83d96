//! Drag-driven brushes that turn pointer gestures into grid cells
//!
//! A gesture is one `start_drawing`, any number of `dragged_over` calls and a
//! final `stop_drawing`. Every call returns the complete set of cells the
//! brush would mark at that moment, so callers redraw a preview from scratch
//! instead of accumulating results.

/// Flood-fill brush
pub mod bucket;
/// Ellipse brushes, outlined and filled
pub mod circle;
/// Straight line brush
pub mod line;
/// Freehand brush
pub mod pencil;
/// Rectangle brushes, outlined and filled
pub mod rectangle;

pub use bucket::PaintBucket;
pub use circle::CircleBrush;
pub use line::LineBrush;
pub use pencil::Pencil;
pub use rectangle::RectangleBrush;

use crate::geometry::Point;

/// Common interface of every brush
pub trait Brush {
    /// Short lowercase name
    fn name(&self) -> &'static str;

    /// Single-character toolbar icon
    fn icon(&self) -> char;

    /// Begin a gesture at `pos`, discarding the state of any earlier gesture
    fn start_drawing(&mut self, pos: Point);

    /// Cells marked by the gesture so far, with the pointer at `pos`
    fn dragged_over(&mut self, pos: Point) -> Vec<Point>;

    /// Finish the gesture at `pos`
    ///
    /// Returns what `dragged_over(pos)` would.
    fn stop_drawing(&mut self, pos: Point) -> Vec<Point> {
        self.dragged_over(pos)
    }
}

/// Any of the five brush variants
///
/// `F` is the traversal predicate of the paint bucket; the other variants
/// ignore it.
pub enum AnyBrush<F> {
    /// Freehand accumulation of visited cells
    Pencil(Pencil),
    /// Straight line from the gesture start
    Line(LineBrush),
    /// Axis-aligned rectangle spanning the gesture
    Rectangle(RectangleBrush),
    /// Ellipse inscribed in the gesture rectangle
    Circle(CircleBrush),
    /// Flood fill from the pointer position
    PaintBucket(PaintBucket<F>),
}

impl<F> Brush for AnyBrush<F>
where
    F: FnMut(Point, Point, Point) -> bool,
{
    fn name(&self) -> &'static str {
        match self {
            Self::Pencil(brush) => brush.name(),
            Self::Line(brush) => brush.name(),
            Self::Rectangle(brush) => brush.name(),
            Self::Circle(brush) => brush.name(),
            Self::PaintBucket(brush) => brush.name(),
        }
    }

    fn icon(&self) -> char {
        match self {
            Self::Pencil(brush) => brush.icon(),
            Self::Line(brush) => brush.icon(),
            Self::Rectangle(brush) => brush.icon(),
            Self::Circle(brush) => brush.icon(),
            Self::PaintBucket(brush) => brush.icon(),
        }
    }

    fn start_drawing(&mut self, pos: Point) {
        match self {
            Self::Pencil(brush) => brush.start_drawing(pos),
            Self::Line(brush) => brush.start_drawing(pos),
            Self::Rectangle(brush) => brush.start_drawing(pos),
            Self::Circle(brush) => brush.start_drawing(pos),
            Self::PaintBucket(brush) => brush.start_drawing(pos),
        }
    }

    fn dragged_over(&mut self, pos: Point) -> Vec<Point> {
        match self {
            Self::Pencil(brush) => brush.dragged_over(pos),
            Self::Line(brush) => brush.dragged_over(pos),
            Self::Rectangle(brush) => brush.dragged_over(pos),
            Self::Circle(brush) => brush.dragged_over(pos),
            Self::PaintBucket(brush) => brush.dragged_over(pos),
        }
    }

    fn stop_drawing(&mut self, pos: Point) -> Vec<Point> {
        match self {
            Self::Pencil(brush) => brush.stop_drawing(pos),
            Self::Line(brush) => brush.stop_drawing(pos),
            Self::Rectangle(brush) => brush.stop_drawing(pos),
            Self::Circle(brush) => brush.stop_drawing(pos),
            Self::PaintBucket(brush) => brush.stop_drawing(pos),
        }
    }
}

/// Brush selector for command-line use
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BrushKind {
    /// Freehand
    Pencil,
    /// Straight line
    Line,
    /// Rectangle outline
    Rect,
    /// Solid rectangle
    RectFilled,
    /// Ellipse outline
    Circle,
    /// Solid ellipse
    CircleFilled,
    /// Flood fill
    Fill,
}

impl BrushKind {
    /// Build the selected brush
    ///
    /// `traversable` is only kept by the paint bucket.
    pub fn build<F>(self, traversable: F) -> AnyBrush<F>
    where
        F: FnMut(Point, Point, Point) -> bool,
    {
        match self {
            Self::Pencil => AnyBrush::Pencil(Pencil::new()),
            Self::Line => AnyBrush::Line(LineBrush::new()),
            Self::Rect => AnyBrush::Rectangle(RectangleBrush::outlined()),
            Self::RectFilled => AnyBrush::Rectangle(RectangleBrush::filled()),
            Self::Circle => AnyBrush::Circle(CircleBrush::outlined()),
            Self::CircleFilled => AnyBrush::Circle(CircleBrush::filled()),
            Self::Fill => AnyBrush::PaintBucket(PaintBucket::new(traversable)),
        }
    }
}

/// Replay a whole gesture along `path` and return the cells of the release
///
/// The first point starts the gesture, the last one ends it and everything in
/// between is dragged over. An empty path marks nothing.
pub fn run_gesture<B: Brush + ?Sized>(brush: &mut B, path: &[Point]) -> Vec<Point> {
    let Some((&first, rest)) = path.split_first() else {
        return Vec::new();
    };
    brush.start_drawing(first);

    let Some((&last, middle)) = rest.split_last() else {
        return brush.stop_drawing(first);
    };
    for &pos in middle {
        brush.dragged_over(pos);
    }

    brush.stop_drawing(last)
}
