//! The [`Point`] grid coordinate.

use std::fmt;
use std::ops::{Add, Sub};

/// A 2D integer grid coordinate. X grows right, Y grows down
/// (screen coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four cardinal neighbours, in fixed north, east, south, west
    /// order. The order is part of the contract: downstream searches rely
    /// on it for deterministic tie-breaking.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            Self::new(self.x, self.y - 1),
            Self::new(self.x + 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x - 1, self.y),
        ]
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.shift(-1, 1), Point::new(0, 3));
    }

    #[test]
    fn neighbor_order_is_north_east_south_west() {
        let p = Point::new(5, 5);
        assert_eq!(
            p.neighbors_4(),
            [
                Point::new(5, 4),
                Point::new(6, 5),
                Point::new(5, 6),
                Point::new(4, 5),
            ]
        );
    }

    #[test]
    fn ordering_is_row_major() {
        assert!(Point::new(9, 0) < Point::new(0, 1));
        assert!(Point::new(2, 3) < Point::new(3, 3));
    }
}
