//! Polygon cutting/splitting operations for BSP trees.

use log::trace;

use crate::error::GeometryError;
use crate::relative_position::polygon_position_with_epsilon;
use crate::{Classification, Plane2D, Polygon, PLANE_EPSILON};

/// Trait for geometry that can be cut by a plane.
pub trait Cuttable: Sized {
    /// Cuts the geometry by a plane.
    ///
    /// Returns `(front, back)` where:
    /// - `front`: `Some(piece)` containing the part on the front side of the plane
    /// - `back`: `Some(piece)` containing the part on the back side of the plane
    ///
    /// # Return values by classification
    ///
    /// - **Front**: `(Some(self), None)` - entire geometry is in front
    /// - **Back**: `(None, Some(self))` - entire geometry is behind
    /// - **Coplanar**: `(Some(self), None)` - treated as front
    /// - **Spanning**: `(Some(front_part), Some(back_part))` - split into two pieces
    fn cut(&self, plane: &Plane2D) -> Result<(Option<Self>, Option<Self>), GeometryError> {
        self.cut_with_epsilon(plane, PLANE_EPSILON)
    }

    /// Same as [`cut`](Cuttable::cut), classifying with a custom epsilon.
    fn cut_with_epsilon(
        &self,
        plane: &Plane2D,
        epsilon: f32,
    ) -> Result<(Option<Self>, Option<Self>), GeometryError>;
}

impl Cuttable for Polygon {
    fn cut_with_epsilon(
        &self,
        plane: &Plane2D,
        epsilon: f32,
    ) -> Result<(Option<Polygon>, Option<Polygon>), GeometryError> {
        match polygon_position_with_epsilon(plane, self, epsilon) {
            Classification::Front | Classification::Coplanar => Ok((Some(*self), None)),
            Classification::Back => Ok((None, Some(*self))),
            Classification::Spanning => split_polygon(self, plane).map(|(f, b)| (Some(f), Some(b))),
        }
    }
}

/// Splits a spanning segment where it crosses the plane.
///
/// The fragment holding `start` goes to whichever side `start` is on.
fn split_polygon(polygon: &Polygon, plane: &Plane2D) -> Result<(Polygon, Polygon), GeometryError> {
    let (_, point) = plane
        .intersect_segment(polygon.start(), polygon.end())
        // A spanning segment always crosses; missing hit means the split point is at an end.
        .ok_or(GeometryError::DegenerateFragment {
            point: polygon.start(),
        })?;

    let (head, tail) = polygon.split_at(point)?;
    trace!(
        "split {} -> {} at {}",
        polygon.start(),
        polygon.end(),
        point
    );

    if plane.signed_distance(polygon.start()) > 0.0 {
        Ok((head, tail))
    } else {
        Ok((tail, head))
    }
}
