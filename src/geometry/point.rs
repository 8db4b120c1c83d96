//! Integer grid coordinates with a compact `x,y` text form

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// A cell position on an integer grid
///
/// `x` grows to the right and `y` grows downwards, matching image rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Column coordinate
    pub x: i32,
    /// Row coordinate
    pub y: i32,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset the point by the given deltas
    #[must_use]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Failure to read a point from its `x,y` form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePointError {
    input: String,
}

impl fmt::Display for ParsePointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid point '{}': expected 'x,y'", self.input)
    }
}

impl std::error::Error for ParsePointError {}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParsePointError {
            input: s.to_string(),
        };

        let (x, y) = s.trim().split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_parse_error| invalid())?;
        let y = y.trim().parse().map_err(|_parse_error| invalid())?;

        Ok(Self::new(x, y))
    }
}
