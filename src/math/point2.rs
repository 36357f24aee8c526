use std::ops::{Add, Sub};

/// An integer point in pixel coordinates, with (0, 0) at the top-left corner.
///
/// This is the vertex type the fractal subdivision works in. Keeping vertices
/// integral makes subdivision exactly reproducible: every vertex of every
/// sub-triangle is derived from the outer triangle through repeated
/// [`midpoint`](Point2::midpoint) calls, with no accumulated rounding drift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point2 {
    pub x: i32,
    pub y: i32,
}

impl Point2 {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Midpoint of the segment between `self` and `other`, computed per axis
    /// as `(a + b) div 2` with **floor** division.
    ///
    /// Floor (not truncating) division keeps the result exact for negative
    /// coordinates as well: `midpoint((-3, 0), (0, 0))` is `(-2, 0)`, one half
    /// rounded toward negative infinity. For the common case of two positive
    /// coordinates this is plain integer halving, e.g.
    /// `midpoint((1, 1), (2, 2)) == (1, 1)`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x).div_euclid(2),
            y: (self.y + other.y).div_euclid(2),
        }
    }
}

impl Add for Point2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_halves_each_axis() {
        let m = Point2::new(0, 0).midpoint(Point2::new(10, 6));
        assert_eq!(m, Point2::new(5, 3));
    }

    #[test]
    fn midpoint_floors_odd_sums() {
        // (1+2)/2 floors to 1, never rounds up
        assert_eq!(
            Point2::new(1, 1).midpoint(Point2::new(2, 2)),
            Point2::new(1, 1)
        );
    }

    #[test]
    fn midpoint_floors_toward_negative_infinity() {
        // -3 / 2 must give -2, not the truncated -1
        assert_eq!(
            Point2::new(-3, -3).midpoint(Point2::new(0, 0)),
            Point2::new(-2, -2)
        );
    }

    #[test]
    fn midpoint_is_commutative() {
        let a = Point2::new(7, 13);
        let b = Point2::new(4, 2);
        assert_eq!(a.midpoint(b), b.midpoint(a));
    }
}
