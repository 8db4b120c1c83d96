//! Midpoint ellipse rasterization inside a bounding rectangle
//!
//! Integer-only error stepping over the first quadrant, mirrored into the
//! other three. Works on the rectangle corners directly, so even and odd
//! diameters both fill the rectangle exactly.

use crate::geometry::{Point, PointSet, Rect};

/// Outline of the axis-aligned ellipse inscribed in `bounds`
///
/// Every cell lies inside `bounds` and the outline touches all four sides.
/// The outline is 8-connected, so a 4-directional fill from inside cannot
/// leak through it. Zero-width or zero-height rectangles give a straight
/// segment, a single cell rectangle gives that cell, and an empty rectangle
/// gives nothing.
pub fn ellipse_outline(bounds: Rect) -> PointSet {
    let mut outline = PointSet::new();
    if bounds.is_empty() {
        return outline;
    }

    let (mut x0, mut x1) = (bounds.min.x, bounds.max.x);
    let a = i64::from(x1 - x0);
    let b = i64::from(bounds.max.y - bounds.min.y);
    let odd_height = b & 1;

    let mut dx = 4 * (1 - a) * b * b;
    let mut dy = 4 * (odd_height + 1) * a * a;
    let mut err = dx + dy + odd_height * a * a;

    let mut y0 = bounds.min.y + ((b + 1) / 2) as i32;
    let mut y1 = y0 - odd_height as i32;
    let step_a = 8 * a * a;
    let step_b = 8 * b * b;

    loop {
        outline.add(Point::new(x1, y0));
        outline.add(Point::new(x0, y0));
        outline.add(Point::new(x0, y1));
        outline.add(Point::new(x1, y1));

        let e2 = 2 * err;
        if e2 <= dy {
            y0 += 1;
            y1 -= 1;
            dy += step_a;
            err += dy;
        }
        if e2 >= dx || 2 * err > dy {
            x0 += 1;
            x1 -= 1;
            dx += step_b;
            err += dx;
        }
        if x0 > x1 {
            break;
        }
    }

    // Flat ellipses leave the loop before reaching their tips
    while i64::from(y0 - y1) <= b {
        outline.add(Point::new(x0 - 1, y0));
        outline.add(Point::new(x1 + 1, y0));
        y0 += 1;
        outline.add(Point::new(x0 - 1, y1));
        outline.add(Point::new(x1 + 1, y1));
        y1 -= 1;
    }

    outline
}
