//! Splitting plane (an infinite line in 2D) and operations on it.

use nalgebra::{Point2, Vector2};

use crate::error::GeometryError;
use crate::relative_position::{point_position_with_epsilon, PlaneSide};
use crate::Polygon;

/// Default epsilon for plane classification.
/// Points within this distance of the plane are considered "on" the plane.
pub const PLANE_EPSILON: f32 = 1e-5;

/// An infinite dividing line, stored as a point on it and a unit normal.
///
/// The normal side is "front", the opposite side is "back".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane2D {
    origin: Point2<f32>,
    normal: Vector2<f32>,
}

impl Plane2D {
    /// Creates a plane through `origin` with the given normal.
    /// The normal will be normalized automatically.
    pub fn new(origin: Point2<f32>, normal: Vector2<f32>) -> Result<Self, GeometryError> {
        let normal = normal
            .try_normalize(f32::EPSILON)
            .ok_or(GeometryError::ZeroNormal)?;
        Ok(Self { origin, normal })
    }

    /// Builds a plane from parts already known to be valid.
    pub(crate) fn from_unit(origin: Point2<f32>, normal: Vector2<f32>) -> Self {
        Self { origin, normal }
    }

    /// Returns the point the plane was built through.
    #[inline]
    pub fn origin(&self) -> Point2<f32> {
        self.origin
    }

    /// Returns the unit normal vector of the plane.
    #[inline]
    pub fn normal(&self) -> Vector2<f32> {
        self.normal
    }

    /// Computes the signed distance from a point to the plane.
    /// - Positive: point is in front (same side as normal)
    /// - Negative: point is behind (opposite side from normal)
    /// - Zero: point is on the plane
    #[inline]
    pub fn signed_distance(&self, point: Point2<f32>) -> f32 {
        self.normal.dot(&(point - self.origin))
    }

    /// Classifies which side of the plane a point lies on.
    /// Uses the default `PLANE_EPSILON` tolerance.
    #[inline]
    pub fn classify_point(&self, point: Point2<f32>) -> PlaneSide {
        self.classify_point_with_epsilon(point, PLANE_EPSILON)
    }

    /// Classifies which side of the plane a point lies on, with a custom epsilon.
    #[inline]
    pub fn classify_point_with_epsilon(&self, point: Point2<f32>, epsilon: f32) -> PlaneSide {
        point_position_with_epsilon(self, point, epsilon)
    }

    /// Returns a new plane with the normal flipped (facing the opposite direction).
    #[inline]
    pub fn flipped(&self) -> Self {
        Self {
            origin: self.origin,
            normal: -self.normal,
        }
    }

    /// Computes the intersection of a line segment with the plane.
    ///
    /// Returns `Some((t, point))` where:
    /// - `t` is the interpolation parameter (0.0 = start, 1.0 = end)
    /// - `point` is the intersection point
    ///
    /// Returns `None` if the segment is parallel to the plane or doesn't intersect.
    pub fn intersect_segment(
        &self,
        start: Point2<f32>,
        end: Point2<f32>,
    ) -> Option<(f32, Point2<f32>)> {
        let direction = end - start;
        let denom = self.normal.dot(&direction);

        if denom.abs() < f32::EPSILON {
            return None;
        }

        let t = self.normal.dot(&(self.origin - start)) / denom;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }

        Some((t, start + direction * t))
    }
}

impl From<&Polygon> for Plane2D {
    fn from(polygon: &Polygon) -> Self {
        polygon.plane()
    }
}

impl From<Polygon> for Plane2D {
    fn from(polygon: Polygon) -> Self {
        polygon.plane()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(origin: [f32; 2], normal: [f32; 2]) -> Plane2D {
        Plane2D::new(Point2::new(origin[0], origin[1]), Vector2::new(normal[0], normal[1])).unwrap()
    }

    #[test]
    fn normal_is_normalized() {
        let p = plane([0.0, 0.0], [0.0, 5.0]);
        assert_eq!(p.normal(), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn zero_normal_rejected() {
        let err = Plane2D::new(Point2::origin(), Vector2::zeros()).unwrap_err();
        assert_eq!(err, GeometryError::ZeroNormal);
    }

    #[test]
    fn signed_distance_sign() {
        let p = plane([1.0, 1.0], [1.0, 0.0]);
        assert!((p.signed_distance(Point2::new(3.0, 7.0)) - 2.0).abs() < 1e-6);
        assert!((p.signed_distance(Point2::new(0.0, -4.0)) + 1.0).abs() < 1e-6);
        assert_eq!(p.signed_distance(Point2::new(1.0, 100.0)), 0.0);
    }

    #[test]
    fn flipped_swaps_sides() {
        let p = plane([0.0, 0.0], [1.0, 0.0]);
        let q = p.flipped();
        let pt = Point2::new(2.0, 0.0);
        assert_eq!(p.classify_point(pt), PlaneSide::Front);
        assert_eq!(q.classify_point(pt), PlaneSide::Back);
        assert_eq!(q.origin(), p.origin());
    }

    #[test]
    fn intersect_crossing_segment() {
        let p = plane([0.0, 0.0], [1.0, 0.0]);
        let (t, hit) = p
            .intersect_segment(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0))
            .unwrap();
        assert!((t - 0.5).abs() < 1e-6);
        assert_eq!(hit, Point2::new(0.0, 0.0));
    }

    #[test]
    fn intersect_oblique_segment() {
        let p = plane([0.0, 0.0], [1.0, 0.0]);
        let (t, hit) = p
            .intersect_segment(Point2::new(-1.0, -1.0), Point2::new(3.0, 3.0))
            .unwrap();
        assert!((t - 0.25).abs() < 1e-6);
        assert!(hit.x.abs() < 1e-6 && hit.y.abs() < 1e-6);
    }

    #[test]
    fn intersect_parallel_is_none() {
        let p = plane([0.0, 0.0], [1.0, 0.0]);
        assert!(p
            .intersect_segment(Point2::new(1.0, -1.0), Point2::new(1.0, 1.0))
            .is_none());
    }

    #[test]
    fn intersect_outside_segment_is_none() {
        let p = plane([0.0, 0.0], [1.0, 0.0]);
        assert!(p
            .intersect_segment(Point2::new(1.0, 0.0), Point2::new(2.0, 0.0))
            .is_none());
    }
}
