//! Tests for the flood-fill brush

#[cfg(test)]
mod tests {
    use gridbrush::brush::{Brush, PaintBucket};
    use gridbrush::geometry::{Point, Rect};
    use std::collections::HashSet;

    #[test]
    fn test_identity() {
        let bucket = PaintBucket::new(|_: Point, _: Point, _: Point| true);
        assert_eq!(bucket.name(), "fill");
        assert_eq!(bucket.icon(), 'B');
    }

    #[test]
    fn test_fills_traversable_region() {
        let region = Rect::new(0, 0, 3, 3);
        let mut bucket = PaintBucket::new(|_, _, to: Point| region.contains(to));

        bucket.start_drawing(Point::new(0, 0));
        let cells: HashSet<Point> = bucket.dragged_over(Point::new(1, 1)).into_iter().collect();
        assert_eq!(cells, region.points().collect());
    }

    // Tests the fill starts from the pointer, not the gesture start
    // Verified by remembering the start position
    #[test]
    fn test_fill_follows_pointer() {
        let mut bucket = PaintBucket::new(|_, _, to: Point| to.x != 2 && (0..5).contains(&to.x) && to.y == 0);

        bucket.start_drawing(Point::new(0, 0));
        let cells: HashSet<Point> = bucket.stop_drawing(Point::new(4, 0)).into_iter().collect();
        assert_eq!(cells, HashSet::from([Point::new(3, 0), Point::new(4, 0)]));
    }

    #[test]
    fn test_predicate_receives_fill_source() {
        let mut sources = Vec::new();
        let mut bucket = PaintBucket::new(|source: Point, _, _| {
            sources.push(source);
            false
        });

        assert_eq!(bucket.dragged_over(Point::new(7, 7)), vec![Point::new(7, 7)]);
        assert_eq!(sources, vec![Point::new(7, 7); 4]);
    }
}
