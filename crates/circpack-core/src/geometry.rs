//! Geometric primitives for circle packing.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate inside the packing region
//! - [`Region`] - The fixed rectangle `[0, width] × [0, height]` being packed
//!
//! # Coordinate System
//!
//! The region is anchored at the origin and extends towards positive X and Y:
//!
//! ```text
//!   (0,0) ────────► +X      (width, 0)
//!     │
//!     │
//!     ▼
//!    +Y                (width, height)
//! ```
//!
//! Renderers that use a Y-up convention can flip the axis freely; the packing
//! itself is symmetric.

use serde::{Deserialize, Serialize};

/// A 2D point representing a position in region coordinate space.
///
/// # Examples
///
/// ```
/// # use circpack_core::geometry::Point;
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
///
/// assert_eq!(a.distance(b), 5.0);
/// assert_eq!(b.sub_point(a).hypot(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between this point and another point
    pub fn distance(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }
}

/// The axis-aligned rectangle `[0, width] × [0, height]` that circles are
/// packed into.
///
/// A region is set once at the start of a run and never mutated. Validation
/// of its dimensions is left to the packing configuration, so a `Region` can
/// hold any pair of floats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Region {
    width: f32,
    height: f32,
}

impl Region {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width of the region
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height of the region
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the area of the region
    pub fn area(self) -> f32 {
        self.width * self.height
    }

    /// Returns true if both dimensions are finite and strictly positive
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Returns true if a circle of `radius` can be placed strictly inside
    /// the region, i.e. both dimensions exceed the diameter.
    ///
    /// This is the precondition for drawing a center from
    /// `[radius, width - radius)` without an empty range.
    ///
    /// # Examples
    ///
    /// ```
    /// # use circpack_core::geometry::Region;
    /// let region = Region::new(100.0, 40.0);
    ///
    /// assert!(region.fits_diameter(19.0));
    /// assert!(!region.fits_diameter(20.0));
    /// ```
    pub fn fits_diameter(self, radius: f32) -> bool {
        let diameter = radius * 2.0;
        self.width > diameter && self.height > diameter
    }

    /// Returns true if the point lies inside the closed rectangle
    pub fn contains_point(self, point: Point) -> bool {
        point.x() >= 0.0 && point.x() <= self.width && point.y() >= 0.0 && point.y() <= self.height
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_sub() {
        let result = Point::new(5.0, 8.0).sub_point(Point::new(2.0, 3.0));
        assert_eq!(result.x(), 3.0);
        assert_eq!(result.y(), 5.0);
    }

    #[test]
    fn test_point_distance() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert_approx_eq!(f32, a.distance(b), 5.0);
        assert_approx_eq!(f32, b.distance(a), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn test_region_accessors() {
        let region = Region::new(600.0, 400.0);
        assert_eq!(region.width(), 600.0);
        assert_eq!(region.height(), 400.0);
        assert_eq!(region.area(), 240_000.0);
    }

    #[test]
    fn test_region_is_valid() {
        assert!(Region::new(1.0, 1.0).is_valid());
        assert!(!Region::new(0.0, 10.0).is_valid());
        assert!(!Region::new(10.0, -1.0).is_valid());
        assert!(!Region::new(f32::NAN, 10.0).is_valid());
        assert!(!Region::new(10.0, f32::INFINITY).is_valid());
    }

    #[test]
    fn test_region_fits_diameter_is_strict() {
        let region = Region::new(99.0, 99.0);
        assert!(region.fits_diameter(49.0));
        assert!(!region.fits_diameter(49.5));
        assert!(!region.fits_diameter(50.0));
    }

    #[test]
    fn test_region_contains_point() {
        let region = Region::new(10.0, 20.0);
        assert!(region.contains_point(Point::new(0.0, 0.0)));
        assert!(region.contains_point(Point::new(10.0, 20.0)));
        assert!(!region.contains_point(Point::new(10.1, 5.0)));
        assert!(!region.contains_point(Point::new(5.0, -0.1)));
    }
}
