//! Geometry primitives for NeoPop surface drawing.
//!
//! This module provides the float-valued primitives the tilt engine and
//! drawing surfaces work in:
//!
//! - [`Point`]: a 2D point in logical units
//! - [`Size`]: a 2D extent
//! - [`Quad`]: an ordered four-corner polygon
//!
//! Coordinates are logical pixels with (0, 0) at the top-left, x growing
//! right and y growing down.

use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A 2D point in logical units.
///
/// # Examples
///
/// ```
/// use neopop_core::geometry::Point;
///
/// let p = Point::new(10.0, 20.0) + Point::new(5.0, 5.0);
/// assert_eq!(p, Point::new(15.0, 25.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point at the given coordinates.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the point moved by the given offsets.
    #[inline]
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the component-wise minimum of two points.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    /// Returns the component-wise maximum of two points.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f32, f32) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// A 2D extent in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// A zero-sized extent.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new size with the given dimensions.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the total area (width × height).
    #[inline]
    pub fn area(self) -> f32 {
        self.width * self.height
    }

    /// Returns whether either dimension is zero (or below).
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Returns the size grown by the given amounts.
    #[inline]
    pub fn expand(self, dw: f32, dh: f32) -> Self {
        Self {
            width: self.width + dw,
            height: self.height + dh,
        }
    }

    /// Returns whether this size can contain the other size.
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.width >= other.width && self.height >= other.height
    }
}

impl From<(f32, f32)> for Size {
    #[inline]
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

impl From<Size> for (f32, f32) {
    #[inline]
    fn from(size: Size) -> Self {
        (size.width, size.height)
    }
}

/// An ordered four-corner polygon.
///
/// Face parallelograms store their corners in
/// top-left, top-right, bottom-right, bottom-left order; the plunk
/// (shadow) quad produced by the tilt engine is ordered by construction
/// from the face's bottom edge instead (see
/// [`tilt`](crate::tilt)).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Quad {
    /// The corner points, in drawing order.
    pub points: [Point; 4],
}

impl Quad {
    /// Creates a quad from four corner points in drawing order.
    #[inline]
    pub const fn new(points: [Point; 4]) -> Self {
        Self { points }
    }

    /// Returns the quad moved by the given offsets.
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            points: self.points.map(|p| p.translate(dx, dy)),
        }
    }

    /// Returns the axis-aligned bounding box as `(top_left, size)`.
    pub fn bounds(self) -> (Point, Size) {
        let mut min = self.points[0];
        let mut max = self.points[0];
        for p in &self.points[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        (min, Size::new(max.x - min.x, max.y - min.y))
    }
}

impl From<[Point; 4]> for Quad {
    #[inline]
    fn from(points: [Point; 4]) -> Self {
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod point_tests {
        use super::*;

        #[test]
        fn test_arithmetic() {
            let p1 = Point::new(10.0, 20.0);
            let p2 = Point::new(5.0, 5.0);
            assert_eq!(p1 + p2, Point::new(15.0, 25.0));
            assert_eq!(p1 - p2, Point::new(5.0, 15.0));
        }

        #[test]
        fn test_translate() {
            let p = Point::new(1.0, 2.0).translate(3.0, -1.0);
            assert_eq!(p, Point::new(4.0, 1.0));
        }

        #[test]
        fn test_min_max() {
            let a = Point::new(1.0, 5.0);
            let b = Point::new(3.0, 2.0);
            assert_eq!(a.min(b), Point::new(1.0, 2.0));
            assert_eq!(a.max(b), Point::new(3.0, 5.0));
        }
    }

    mod size_tests {
        use super::*;

        #[test]
        fn test_area() {
            assert_eq!(Size::new(80.0, 24.0).area(), 1920.0);
        }

        #[test]
        fn test_is_empty() {
            assert!(Size::ZERO.is_empty());
            assert!(Size::new(0.0, 10.0).is_empty());
            assert!(!Size::new(10.0, 10.0).is_empty());
        }

        #[test]
        fn test_expand_contains() {
            let s = Size::new(10.0, 20.0).expand(5.0, 10.0);
            assert_eq!(s, Size::new(15.0, 30.0));
            assert!(s.contains(Size::new(15.0, 30.0)));
            assert!(!s.contains(Size::new(16.0, 30.0)));
        }
    }

    mod quad_tests {
        use super::*;

        fn unit_quad() -> Quad {
            Quad::new([
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(0.0, 1.0),
            ])
        }

        #[test]
        fn test_translate() {
            let q = unit_quad().translate(2.0, 3.0);
            assert_eq!(q.points[0], Point::new(2.0, 3.0));
            assert_eq!(q.points[2], Point::new(3.0, 4.0));
        }

        #[test]
        fn test_bounds_of_skewed_quad() {
            let q = Quad::new([
                Point::new(4.0, 0.0),
                Point::new(9.0, 0.0),
                Point::new(5.0, 3.0),
                Point::new(0.0, 3.0),
            ]);
            let (origin, size) = q.bounds();
            assert_eq!(origin, Point::ZERO);
            assert_eq!(size, Size::new(9.0, 3.0));
        }
    }
}
