//! Plane selection strategies for BSP tree construction.
//!
//! The choice of splitting plane affects tree balance and the number of
//! polygon splits during construction. Traversal order stays correct for any
//! choice; only the shape of the tree changes.

use crate::relative_position::polygon_position_with_epsilon;
use crate::{Classification, Polygon};

/// Strategy for selecting which polygon's plane to use for splitting.
///
/// Selection must be deterministic: the same input slice must always give
/// the same index, so rebuilding a tree reproduces the same traversal order.
pub trait PlaneSelector {
    /// Select the index of the polygon whose plane splits the slice.
    ///
    /// `epsilon` is the on-plane tolerance construction classifies with.
    /// Returns `None` if the slice is empty.
    fn select(&self, polygons: &[Polygon], epsilon: f32) -> Option<usize>;
}

/// Selects the first polygon in the list.
///
/// This is the simplest and fastest selector, but may produce unbalanced
/// trees depending on input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPolygon;

impl PlaneSelector for FirstPolygon {
    fn select(&self, polygons: &[Polygon], _epsilon: f32) -> Option<usize> {
        if polygons.is_empty() { None } else { Some(0) }
    }
}

/// Selects the polygon whose plane cuts the fewest other polygons.
///
/// Quadratic in the slice length. Ties go to the earliest candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastSplits;

impl PlaneSelector for LeastSplits {
    fn select(&self, polygons: &[Polygon], epsilon: f32) -> Option<usize> {
        polygons
            .iter()
            .enumerate()
            .map(|(idx, candidate)| {
                let plane = candidate.plane();
                let splits = polygons
                    .iter()
                    .filter(|p| {
                        polygon_position_with_epsilon(&plane, p, epsilon) == Classification::Spanning
                    })
                    .count();
                (splits, idx)
            })
            .min()
            .map(|(_, idx)| idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PLANE_EPSILON;
    use nalgebra::Point2;

    fn wall(a: [f32; 2], b: [f32; 2]) -> Polygon {
        Polygon::from_endpoints(Point2::new(a[0], a[1]), Point2::new(b[0], b[1])).unwrap()
    }

    #[test]
    fn first_polygon_empty_list() {
        assert!(FirstPolygon.select(&[], PLANE_EPSILON).is_none());
    }

    #[test]
    fn first_polygon_multiple() {
        let polygons = vec![wall([0.0, 0.0], [1.0, 0.0]), wall([0.0, 1.0], [1.0, 1.0])];
        assert_eq!(FirstPolygon.select(&polygons, PLANE_EPSILON), Some(0));
    }

    #[test]
    fn least_splits_empty_list() {
        assert!(LeastSplits.select(&[], PLANE_EPSILON).is_none());
    }

    #[test]
    fn least_splits_avoids_cutting_plane() {
        // The long horizontal wall's line crosses the vertical one; the
        // vertical wall's line misses the horizontal wall entirely.
        let polygons = vec![
            wall([-5.0, 0.0], [5.0, 0.0]),
            wall([8.0, -1.0], [8.0, 1.0]),
        ];
        assert_eq!(LeastSplits.select(&polygons, PLANE_EPSILON), Some(1));
    }

    #[test]
    fn least_splits_ties_take_first() {
        let polygons = vec![wall([0.0, 0.0], [1.0, 0.0]), wall([0.0, 1.0], [1.0, 1.0])];
        assert_eq!(LeastSplits.select(&polygons, PLANE_EPSILON), Some(0));
    }

    #[test]
    fn least_splits_counts_with_build_epsilon() {
        // At the default tolerance the first wall's line cuts the shallow
        // wall; with a 0.1 band the shallow wall only touches it.
        let polygons = vec![
            wall([0.0, -2.0], [0.0, 2.0]),
            wall([-0.05, 3.0], [0.05, 4.0]),
            wall([5.0, -1.0], [5.0, 1.0]),
        ];
        assert_eq!(LeastSplits.select(&polygons, PLANE_EPSILON), Some(1));
        assert_eq!(LeastSplits.select(&polygons, 0.1), Some(0));
    }
}
