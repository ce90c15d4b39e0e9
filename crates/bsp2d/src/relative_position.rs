//! Classification of points and segments against a splitting plane.
//!
//! These are the pure predicates every other part of the crate builds on.
//! Comparisons use an epsilon band around the plane instead of exact float
//! equality, so accumulated rounding does not make endpoints flap between
//! sides.

use nalgebra::Point2;

use crate::{Plane2D, Polygon, PLANE_EPSILON};

/// Which side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneSide {
    /// Point is in front of the plane (positive side of normal)
    Front,
    /// Point is behind the plane (negative side of normal)
    Back,
    /// Point lies on the plane (within epsilon tolerance)
    OnPlane,
}

/// Classification of a segment relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Both endpoints are in front, or one is in front and the other on the plane
    Front,
    /// Both endpoints are behind, or one is behind and the other on the plane
    Back,
    /// Both endpoints are on the plane
    Coplanar,
    /// One endpoint is in front and the other behind
    Spanning,
}

impl From<PlaneSide> for Classification {
    fn from(side: PlaneSide) -> Self {
        match side {
            PlaneSide::Front => Classification::Front,
            PlaneSide::Back => Classification::Back,
            PlaneSide::OnPlane => Classification::Coplanar,
        }
    }
}

/// Classifies a point against a plane using [`PLANE_EPSILON`].
#[inline]
pub fn point_position(plane: &Plane2D, point: Point2<f32>) -> PlaneSide {
    point_position_with_epsilon(plane, point, PLANE_EPSILON)
}

/// Classifies a point by the sign of its signed distance to the plane.
///
/// Distances within `epsilon` of zero count as [`PlaneSide::OnPlane`].
pub fn point_position_with_epsilon(plane: &Plane2D, point: Point2<f32>, epsilon: f32) -> PlaneSide {
    let dist = plane.signed_distance(point);
    if dist > epsilon {
        PlaneSide::Front
    } else if dist < -epsilon {
        PlaneSide::Back
    } else {
        PlaneSide::OnPlane
    }
}

/// Classifies a segment against a plane using [`PLANE_EPSILON`].
#[inline]
pub fn polygon_position(plane: &Plane2D, polygon: &Polygon) -> Classification {
    polygon_position_with_epsilon(plane, polygon, PLANE_EPSILON)
}

/// Classifies a segment from its two endpoint classifications.
///
/// A segment that merely touches the plane with one endpoint is not
/// considered to cross it.
pub fn polygon_position_with_epsilon(
    plane: &Plane2D,
    polygon: &Polygon,
    epsilon: f32,
) -> Classification {
    let start = point_position_with_epsilon(plane, polygon.start(), epsilon);
    let end = point_position_with_epsilon(plane, polygon.end(), epsilon);
    combine(start, end)
}

fn combine(start: PlaneSide, end: PlaneSide) -> Classification {
    match (start, end) {
        (a, b) if a == b => a.into(),
        (PlaneSide::OnPlane, other) | (other, PlaneSide::OnPlane) => other.into(),
        _ => Classification::Spanning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    fn x_plane() -> Plane2D {
        Plane2D::new(Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0)).unwrap()
    }

    fn segment(a: [f32; 2], b: [f32; 2]) -> Polygon {
        Polygon::from_endpoints(Point2::new(a[0], a[1]), Point2::new(b[0], b[1])).unwrap()
    }

    #[test]
    fn point_front_back_on() {
        let plane = x_plane();
        assert_eq!(point_position(&plane, Point2::new(1.0, 0.0)), PlaneSide::Front);
        assert_eq!(point_position(&plane, Point2::new(-1.0, 0.0)), PlaneSide::Back);
        assert_eq!(point_position(&plane, Point2::new(0.0, 0.0)), PlaneSide::OnPlane);
    }

    #[test]
    fn point_within_epsilon_is_on_plane() {
        let plane = x_plane();
        let nudge = PLANE_EPSILON * 0.5;
        assert_eq!(point_position(&plane, Point2::new(nudge, 3.0)), PlaneSide::OnPlane);
        assert_eq!(point_position(&plane, Point2::new(-nudge, -3.0)), PlaneSide::OnPlane);
    }

    #[test]
    fn custom_epsilon_widens_band() {
        let plane = x_plane();
        let p = Point2::new(0.05, 0.0);
        assert_eq!(point_position(&plane, p), PlaneSide::Front);
        assert_eq!(point_position_with_epsilon(&plane, p, 0.1), PlaneSide::OnPlane);
    }

    #[test]
    fn crossing_segment_is_spanning() {
        let plane = x_plane();
        let poly = segment([-1.0, 0.0], [1.0, 0.0]);
        assert_eq!(polygon_position(&plane, &poly), Classification::Spanning);
    }

    #[test]
    fn parallel_segment_off_plane_is_front() {
        // Distance 1 from the plane, far outside the epsilon band.
        let plane = x_plane();
        let poly = segment([1.0, -1.0], [1.0, 1.0]);
        assert_eq!(polygon_position(&plane, &poly), Classification::Front);
    }

    #[test]
    fn segment_on_plane_is_coplanar() {
        let plane = x_plane();
        let poly = segment([0.0, -1.0], [0.0, 1.0]);
        assert_eq!(polygon_position(&plane, &poly), Classification::Coplanar);
    }

    #[test]
    fn touching_one_end_takes_other_side() {
        let plane = x_plane();
        let front = segment([0.0, 0.0], [2.0, 1.0]);
        let back = segment([-2.0, 1.0], [0.0, 0.0]);
        assert_eq!(polygon_position(&plane, &front), Classification::Front);
        assert_eq!(polygon_position(&plane, &back), Classification::Back);
    }

    #[test]
    fn both_behind_is_back() {
        let plane = x_plane();
        let poly = segment([-1.0, -1.0], [-3.0, 2.0]);
        assert_eq!(polygon_position(&plane, &poly), Classification::Back);
    }
}
