//! The circle value type and the two placement predicates.
//!
//! A [`Circle`] carries no behavior of its own beyond simple derived
//! quantities. Collision and containment are free functions over values so
//! the packing engine can test a candidate without constructing anything
//! heavier than a `Copy` struct.

use std::f32::consts::PI;

use serde::Serialize;

use crate::geometry::{Point, Region};

/// A placed (or candidate) circle.
///
/// Circles are immutable; once accepted into a packing they are never moved
/// or resized.
///
/// # Examples
///
/// ```
/// # use circpack_core::{circle::Circle, geometry::Point};
/// let circle = Circle::new(Point::new(10.0, 10.0), 4.0);
///
/// assert_eq!(circle.radius(), 4.0);
/// assert_eq!(circle.diameter(), 8.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    center: Point,
    radius: f32,
}

impl Circle {
    pub fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Returns the center of the circle
    pub fn center(self) -> Point {
        self.center
    }

    /// Returns the radius of the circle
    pub fn radius(self) -> f32 {
        self.radius
    }

    /// Returns twice the radius
    pub fn diameter(self) -> f32 {
        self.radius * 2.0
    }

    /// Returns the area of the disk
    pub fn area(self) -> f32 {
        PI * self.radius * self.radius
    }
}

/// Returns true if the two disks overlap.
///
/// The test is strict: circles whose centers are exactly `a.radius + b.radius`
/// apart are tangent, not overlapping.
///
/// # Examples
///
/// ```
/// # use circpack_core::{circle::{Circle, overlaps}, geometry::Point};
/// let a = Circle::new(Point::new(0.0, 0.0), 5.0);
/// let tangent = Circle::new(Point::new(10.0, 0.0), 5.0);
/// let intersecting = Circle::new(Point::new(9.0, 0.0), 5.0);
///
/// assert!(!overlaps(a, tangent));
/// assert!(overlaps(a, intersecting));
/// ```
pub fn overlaps(a: Circle, b: Circle) -> bool {
    a.center.distance(b.center) < a.radius + b.radius
}

/// Returns true if any part of the disk lies outside `region`.
///
/// A disk touching the region edge from inside is still contained.
pub fn exits_region(circle: Circle, region: Region) -> bool {
    let Circle { center, radius } = circle;

    center.x() - radius < 0.0
        || center.x() + radius > region.width()
        || center.y() - radius < 0.0
        || center.y() + radius > region.height()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn circle(x: f32, y: f32, radius: f32) -> Circle {
        Circle::new(Point::new(x, y), radius)
    }

    #[test]
    fn test_circle_derived_values() {
        let c = circle(1.0, 2.0, 3.0);
        assert_eq!(c.center(), Point::new(1.0, 2.0));
        assert_eq!(c.diameter(), 6.0);
        assert_approx_eq!(f32, c.area(), 9.0 * PI);
    }

    #[test]
    fn test_overlaps_when_centers_close() {
        assert!(overlaps(circle(0.0, 0.0, 5.0), circle(3.0, 4.0, 1.0)));
    }

    #[test]
    fn test_overlaps_concentric() {
        assert!(overlaps(circle(50.0, 50.0, 10.0), circle(50.0, 50.0, 2.0)));
    }

    #[test]
    fn test_tangent_circles_do_not_overlap() {
        // 3-4-5 triangle keeps the distance exact in f32
        let a = circle(0.0, 0.0, 2.0);
        let b = circle(3.0, 4.0, 3.0);
        assert!(!overlaps(a, b));
        assert!(!overlaps(b, a));
    }

    #[test]
    fn test_separated_circles_do_not_overlap() {
        assert!(!overlaps(circle(0.0, 0.0, 1.0), circle(100.0, 0.0, 1.0)));
    }

    #[test]
    fn test_exits_region_each_edge() {
        let region = Region::new(100.0, 50.0);
        assert!(exits_region(circle(4.0, 25.0, 5.0), region));
        assert!(exits_region(circle(96.0, 25.0, 5.0), region));
        assert!(exits_region(circle(50.0, 4.0, 5.0), region));
        assert!(exits_region(circle(50.0, 46.0, 5.0), region));
    }

    #[test]
    fn test_circle_touching_edge_is_inside() {
        let region = Region::new(100.0, 50.0);
        assert!(!exits_region(circle(5.0, 5.0, 5.0), region));
        assert!(!exits_region(circle(95.0, 45.0, 5.0), region));
    }

    #[test]
    fn test_circle_larger_than_region_exits() {
        let region = Region::new(10.0, 10.0);
        assert!(exits_region(circle(5.0, 5.0, 6.0), region));
    }
}
