use crate::geometry::Point;

/// Cells on the straight line from `from` to `to`
///
/// Walks Bresenham's integer error term and stops before the first cell that
/// fails `is_visible`. `from` itself is always part of the result and is never
/// tested.
pub fn line_of_sight<F>(from: Point, to: Point, mut is_visible: F) -> Vec<Point>
where
    F: FnMut(Point) -> bool,
{
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let step_x = if from.x < to.x { 1 } else { -1 };
    let step_y = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;

    let mut path = Vec::with_capacity(dx.max(-dy) as usize + 1);
    let mut current = from;
    path.push(current);

    while current != to {
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            current.x += step_x;
        }
        if e2 <= dx {
            err += dx;
            current.y += step_y;
        }
        if !is_visible(current) {
            break;
        }
        path.push(current);
    }

    path
}
