//! Frontier flood fill over a caller-supplied traversal rule
//!
//! The frontier is an unordered set, so the order in which cells are reached
//! varies between runs. The filled region itself only depends on the
//! traversal predicate and the neighbor generator.

use crate::algorithm::neighbors::{Cardinal, Pather};
use crate::geometry::{Point, PointSet};

/// Flood fill from `source` across the four orthogonal directions
///
/// `can_traverse(source, current, candidate)` decides whether the fill may
/// step from `current` into `candidate`. The predicate is the only bound on
/// the region: one that keeps accepting cells never terminates.
pub fn flood_fill<F>(source: Point, can_traverse: F) -> Vec<Point>
where
    F: FnMut(Point, Point, Point) -> bool,
{
    flood_fill_with(source, Cardinal, can_traverse)
}

/// Flood fill from `source` using an explicit neighbor generator
///
/// Returns every closed cell, `source` included, in unspecified order.
pub fn flood_fill_with<P, F>(source: Point, mut pather: P, mut can_traverse: F) -> Vec<Point>
where
    P: Pather,
    F: FnMut(Point, Point, Point) -> bool,
{
    let mut open = PointSet::new();
    let mut closed = PointSet::new();
    let mut neighbors = Vec::with_capacity(4);
    open.add(source);

    while let Some(current) = open.try_pop() {
        closed.add(current);

        neighbors.clear();
        pather.neighbors(current, &mut neighbors);
        for &neighbor in &neighbors {
            if !closed.contains(neighbor) && can_traverse(source, current, neighbor) {
                open.add(neighbor);
            }
        }
    }

    closed.to_vec()
}
