//! Tests for connected component labeling

#[cfg(test)]
mod tests {
    use gridbrush::algorithm::components::ConnectedComponents;
    use gridbrush::algorithm::neighbors::BoundedCardinal;
    use gridbrush::geometry::{Point, Rect};
    use std::collections::HashSet;

    fn isolated(_p: Point) -> Vec<Point> {
        Vec::new()
    }

    /// Cardinal moves inside `region`, with column `wall` impassable
    fn walled(region: Rect, wall: i32) -> impl FnMut(Point) -> Vec<Point> {
        move |p: Point| {
            if p.x == wall {
                return Vec::new();
            }
            [p.shift(1, 0), p.shift(-1, 0), p.shift(0, 1), p.shift(0, -1)]
                .into_iter()
                .filter(|n| region.contains(*n) && n.x != wall)
                .collect()
        }
    }

    #[test]
    fn test_unlabeled_before_any_call() {
        let components = ConnectedComponents::new();
        assert_eq!(components.label_of(Point::new(0, 0)), None);
        assert_eq!(components.component_count(), 0);
    }

    // Tests a generator without neighbors assigns one label per cell in scan order
    // Verified by seeding in column-major order
    #[test]
    fn test_isolated_cells_follow_scan_order() {
        for region in [Rect::with_size(Point::new(0, 0), 4, 3), Rect::with_size(Point::new(2, 5), 3, 2)] {
            let mut components = ConnectedComponents::new();
            components.label_all(region, isolated);

            assert_eq!(components.component_count(), region.area());
            for p in region.points() {
                assert_eq!(components.label_of(p), region.index_of(p));
            }
        }
    }

    #[test]
    fn test_connected_region_is_one_component() {
        let region = Rect::new(0, 0, 9, 6);
        let mut components = ConnectedComponents::new();
        components.label_all(region, BoundedCardinal::new(region));

        assert_eq!(components.component_count(), 1);
        assert!(region.points().all(|p| components.label_of(p) == Some(0)));
    }

    #[test]
    fn test_wall_splits_components() {
        let region = Rect::new(0, 0, 4, 2);
        let mut components = ConnectedComponents::new();
        components.label_all(region, walled(region, 2));

        assert_eq!(components.component_count(), 5);
        assert_eq!(components.label_of(Point::new(0, 0)), Some(0));
        assert_eq!(components.label_of(Point::new(1, 2)), Some(0));
        assert_eq!(components.label_of(Point::new(2, 0)), Some(1));
        assert_eq!(components.label_of(Point::new(3, 0)), Some(2));
        assert_eq!(components.label_of(Point::new(4, 2)), Some(2));
        assert_eq!(components.label_of(Point::new(2, 1)), Some(3));
        assert_eq!(components.label_of(Point::new(2, 2)), Some(4));
    }

    #[test]
    fn test_label_all_is_idempotent() {
        let region = Rect::new(0, 0, 4, 2);
        let mut components = ConnectedComponents::new();

        components.label_all(region, walled(region, 2));
        let first: Vec<Option<usize>> = region.points().map(|p| components.label_of(p)).collect();
        components.label_all(region, walled(region, 2));
        let second: Vec<Option<usize>> = region.points().map(|p| components.label_of(p)).collect();

        assert_eq!(first, second);
    }

    // Tests single-source labeling returns exactly the reachable cells
    // Verified by leaving stale labels from an earlier label_all
    #[test]
    fn test_label_from_reaches_one_component() {
        let region = Rect::new(0, 0, 4, 2);
        let mut components = ConnectedComponents::new();
        components.label_all(region, isolated);

        let reached: HashSet<Point> = components
            .label_from(region, walled(region, 2), Point::new(4, 1))
            .map(|cells| cells.iter().copied().collect())
            .unwrap_or_default();

        let right: HashSet<Point> = Rect::new(3, 0, 4, 2).points().collect();
        assert_eq!(reached, right);
        assert_eq!(components.component_count(), 1);
        for p in region.points() {
            let expected = right.contains(&p).then_some(0);
            assert_eq!(components.label_of(p), expected, "label at {p}");
        }
    }

    #[test]
    fn test_label_from_outside_region() {
        let region = Rect::new(0, 0, 3, 3);
        let mut components = ConnectedComponents::new();
        components.label_all(region, BoundedCardinal::new(region));

        assert!(components.label_from(region, BoundedCardinal::new(region), Point::new(8, 0)).is_none());
        assert!(region.points().all(|p| components.label_of(p).is_none()));
    }

    #[test]
    fn test_label_of_outside_region() {
        let region = Rect::new(1, 1, 3, 3);
        let mut components = ConnectedComponents::new();
        components.label_all(region, BoundedCardinal::new(region));

        assert_eq!(components.region(), region);
        assert_eq!(components.label_of(Point::new(0, 0)), None);
        assert_eq!(components.label_of(Point::new(4, 2)), None);
    }

    #[test]
    fn test_empty_region_is_a_no_op() {
        let empty = Rect::with_size(Point::new(0, 0), 0, 0);
        let mut components = ConnectedComponents::new();

        components.label_all(empty, isolated);
        assert_eq!(components.component_count(), 0);
        assert!(components.label_from(empty, isolated, Point::new(0, 0)).is_none());
    }

    #[test]
    fn test_region_change_resizes_cache() {
        let mut components = ConnectedComponents::new();
        components.label_all(Rect::new(0, 0, 1, 1), isolated);
        assert_eq!(components.component_count(), 4);

        let larger = Rect::new(-5, -5, 5, 5);
        components.label_all(larger, BoundedCardinal::new(larger));
        assert_eq!(components.component_count(), 1);
        assert_eq!(components.label_of(Point::new(-5, 5)), Some(0));
    }

    #[test]
    fn test_large_region_does_not_recurse() {
        let region = Rect::with_size(Point::new(0, 0), 500, 500);
        let mut components = ConnectedComponents::new();
        let reached = components
            .label_from(region, BoundedCardinal::new(region), Point::new(250, 250))
            .map_or(0, <[Point]>::len);
        assert_eq!(reached, region.area());
    }
}
