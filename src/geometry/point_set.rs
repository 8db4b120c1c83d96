//! Unordered point collection with set semantics
//!
//! Iteration order is whatever the underlying hash set yields and must not be
//! relied upon. Brushes export their cells through `to_vec`, so callers only
//! ever see a snapshot.

use crate::geometry::Point;
use std::collections::HashSet;
use std::collections::hash_set;

/// Deduplicating set of grid points
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointSet {
    points: HashSet<Point>,
}

impl PointSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: HashSet::with_capacity(capacity),
        }
    }

    /// Insert a point; inserting a member again has no effect
    pub fn add(&mut self, p: Point) {
        self.points.insert(p);
    }

    /// Remove a point, reporting whether it was present
    pub fn remove(&mut self, p: Point) -> bool {
        self.points.remove(&p)
    }

    /// Test membership
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    /// Remove and return an arbitrary member
    pub fn try_pop(&mut self) -> Option<Point> {
        let p = self.points.iter().next().copied()?;
        self.points.remove(&p);
        Some(p)
    }

    /// Remove and return an arbitrary member
    ///
    /// An empty set yields the origin `(0, 0)`, which is indistinguishable from
    /// a real member at the origin. Check `is_empty` first or use `try_pop`.
    pub fn pop(&mut self) -> Point {
        self.try_pop().unwrap_or_default()
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the set has no members
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Remove every member, keeping the allocation
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Snapshot of the members in unspecified order
    pub fn to_vec(&self) -> Vec<Point> {
        self.points.iter().copied().collect()
    }

    /// Iterate over the members in unspecified order
    pub fn iter(&self) -> hash_set::Iter<'_, Point> {
        self.points.iter()
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for PointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl IntoIterator for PointSet {
    type Item = Point;
    type IntoIter = hash_set::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = hash_set::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
