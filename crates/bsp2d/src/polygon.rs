//! Wall segment ("polygon" in 2D BSP terms) representation.

use nalgebra::{Point2, Vector2};

use crate::error::GeometryError;
use crate::relative_position::polygon_position;
use crate::vector::perp_left;
use crate::{Classification, Plane2D, PLANE_EPSILON};

/// Largest |cos| allowed between a polygon's normal and its direction.
pub const PERPENDICULAR_TOLERANCE: f32 = 1e-3;

/// A directed wall segment from `start` to `end` with a unit normal.
///
/// The normal points toward the front side of the wall. All walls that bound
/// solid space from the same side should use a consistent orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polygon {
    start: Point2<f32>,
    end: Point2<f32>,
    normal: Vector2<f32>,
}

impl Polygon {
    /// Creates a new polygon, validating the geometry.
    ///
    /// The normal is normalized. Fails if a coordinate is not finite, the
    /// segment has no length, the normal is zero, or the normal is not
    /// perpendicular to the segment.
    pub fn new(
        start: Point2<f32>,
        end: Point2<f32>,
        normal: Vector2<f32>,
    ) -> Result<Self, GeometryError> {
        let finite = start
            .coords
            .iter()
            .chain(end.coords.iter())
            .chain(normal.iter())
            .all(|c| c.is_finite());
        if !finite {
            return Err(GeometryError::NonFinite { start, end });
        }

        let direction = end - start;
        let length = direction.norm();
        if length <= PLANE_EPSILON {
            return Err(GeometryError::DegenerateSegment { start, end });
        }

        let normal = normal
            .try_normalize(f32::EPSILON)
            .ok_or(GeometryError::ZeroNormal)?;

        let cosine = normal.dot(&(direction / length));
        if cosine.abs() > PERPENDICULAR_TOLERANCE {
            return Err(GeometryError::NormalNotPerpendicular { normal, cosine });
        }

        Ok(Self { start, end, normal })
    }

    /// Creates a polygon whose normal is the left-hand perpendicular of
    /// `end - start`.
    ///
    /// Walls listed counter-clockwise around a room therefore face inward.
    pub fn from_endpoints(start: Point2<f32>, end: Point2<f32>) -> Result<Self, GeometryError> {
        Self::new(start, end, perp_left(&(end - start)))
    }

    #[inline]
    pub fn start(&self) -> Point2<f32> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point2<f32> {
        self.end
    }

    /// Returns the unit normal.
    #[inline]
    pub fn normal(&self) -> Vector2<f32> {
        self.normal
    }

    /// Returns `end - start`.
    #[inline]
    pub fn direction(&self) -> Vector2<f32> {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.direction().norm()
    }

    #[inline]
    pub fn midpoint(&self) -> Point2<f32> {
        nalgebra::center(&self.start, &self.end)
    }

    /// Returns the plane this polygon lies on: through `start`, along `normal`.
    #[inline]
    pub fn plane(&self) -> Plane2D {
        Plane2D::from_unit(self.start, self.normal)
    }

    /// Classifies this polygon relative to a plane.
    ///
    /// Returns:
    /// - `Front` if no endpoint is behind and at least one is in front
    /// - `Back` if no endpoint is in front and at least one is behind
    /// - `Coplanar` if both endpoints lie on the plane
    /// - `Spanning` if the endpoints are on opposite sides
    #[inline]
    pub fn classify(&self, plane: &Plane2D) -> Classification {
        polygon_position(plane, self)
    }

    /// Splits the segment at `point`, which must lie on it.
    ///
    /// Returns `(start -> point, point -> end)`, both carrying this polygon's
    /// normal. Fails if either fragment would have zero length.
    pub fn split_at(&self, point: Point2<f32>) -> Result<(Polygon, Polygon), GeometryError> {
        debug_assert!(
            self.normal.dot(&(point - self.start)).abs()
                <= PERPENDICULAR_TOLERANCE * (1.0 + self.length() + self.start.coords.amax()),
            "split point must lie on the segment"
        );

        if (point - self.start).norm() <= f32::EPSILON || (self.end - point).norm() <= f32::EPSILON {
            return Err(GeometryError::DegenerateFragment { point });
        }

        let head = Self {
            start: self.start,
            end: point,
            normal: self.normal,
        };
        let tail = Self {
            start: point,
            end: self.end,
            normal: self.normal,
        };
        Ok((head, tail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point2<f32> {
        Point2::new(x, y)
    }

    #[test]
    fn from_endpoints_normal_points_left() {
        let poly = Polygon::from_endpoints(p(0.0, 0.0), p(2.0, 0.0)).unwrap();
        assert_eq!(poly.normal(), Vector2::new(0.0, 1.0));
        assert_eq!(poly.length(), 2.0);
        assert_eq!(poly.midpoint(), p(1.0, 0.0));
    }

    #[test]
    fn new_normalizes_normal() {
        let poly = Polygon::new(p(0.0, 0.0), p(0.0, 3.0), Vector2::new(-4.0, 0.0)).unwrap();
        assert_eq!(poly.normal(), Vector2::new(-1.0, 0.0));
    }

    #[test]
    fn degenerate_segment_rejected() {
        let err = Polygon::from_endpoints(p(1.0, 1.0), p(1.0, 1.0)).unwrap_err();
        assert!(matches!(err, GeometryError::DegenerateSegment { .. }));
    }

    #[test]
    fn zero_normal_rejected() {
        let err = Polygon::new(p(0.0, 0.0), p(1.0, 0.0), Vector2::zeros()).unwrap_err();
        assert_eq!(err, GeometryError::ZeroNormal);
    }

    #[test]
    fn skewed_normal_rejected() {
        let err = Polygon::new(p(0.0, 0.0), p(1.0, 0.0), Vector2::new(1.0, 1.0)).unwrap_err();
        assert!(matches!(err, GeometryError::NormalNotPerpendicular { .. }));
    }

    #[test]
    fn non_finite_rejected() {
        let err = Polygon::from_endpoints(p(f32::NAN, 0.0), p(1.0, 0.0)).unwrap_err();
        assert!(matches!(err, GeometryError::NonFinite { .. }));
    }

    #[test]
    fn split_recomposes_segment() {
        let poly = Polygon::from_endpoints(p(-1.0, 0.0), p(1.0, 0.0)).unwrap();
        let (head, tail) = poly.split_at(p(0.0, 0.0)).unwrap();

        assert_eq!(head.start(), poly.start());
        assert_eq!(head.end(), p(0.0, 0.0));
        assert_eq!(tail.start(), head.end());
        assert_eq!(tail.end(), poly.end());
        assert_eq!(head.normal(), poly.normal());
        assert_eq!(tail.normal(), poly.normal());
        assert!(head.length() < poly.length());
        assert!(tail.length() < poly.length());
        assert!((head.length() + tail.length() - poly.length()).abs() < 1e-6);
    }

    #[test]
    fn split_fragments_classify_on_either_side() {
        let plane = Plane2D::new(p(0.0, 0.0), Vector2::new(1.0, 0.0)).unwrap();
        let poly = Polygon::from_endpoints(p(-1.0, 0.0), p(1.0, 0.0)).unwrap();
        assert_eq!(poly.classify(&plane), Classification::Spanning);

        let (_, hit) = plane.intersect_segment(poly.start(), poly.end()).unwrap();
        assert_eq!(hit, p(0.0, 0.0));

        let (head, tail) = poly.split_at(hit).unwrap();
        assert_eq!(head.classify(&plane), Classification::Back);
        assert_eq!(tail.classify(&plane), Classification::Front);
    }

    #[test]
    fn split_at_endpoint_is_degenerate() {
        let poly = Polygon::from_endpoints(p(0.0, 0.0), p(1.0, 0.0)).unwrap();
        let err = poly.split_at(p(0.0, 0.0)).unwrap_err();
        assert!(matches!(err, GeometryError::DegenerateFragment { .. }));
    }

    #[test]
    fn plane_runs_through_start() {
        let poly = Polygon::from_endpoints(p(2.0, 1.0), p(2.0, 5.0)).unwrap();
        let plane = poly.plane();
        assert_eq!(plane.origin(), p(2.0, 1.0));
        assert_eq!(plane.normal(), Vector2::new(-1.0, 0.0));
        assert_eq!(poly.classify(&plane), Classification::Coplanar);
    }
}
