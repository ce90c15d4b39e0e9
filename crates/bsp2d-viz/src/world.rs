//! Container for a level's walls and its bounding box.

use bsp2d::{BspError, BspTree, Point2, Polygon};

/// The walls of a level plus the axis-aligned box enclosing them.
///
/// Read-only once created; the BSP tree is built from a copy of the walls.
#[derive(Debug, Clone)]
pub struct World {
    polygons: Vec<Polygon>,
    min: Point2<f32>,
    max: Point2<f32>,
}

impl World {
    /// Creates a world whose bounds enclose every wall endpoint.
    ///
    /// An empty world gets the unit box at the origin.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let (min, max) = bounds(&polygons);
        Self { polygons, min, max }
    }

    /// Creates a world with explicit bounds.
    pub fn with_bounds(polygons: Vec<Polygon>, min: Point2<f32>, max: Point2<f32>) -> Self {
        Self { polygons, min, max }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn min(&self) -> Point2<f32> {
        self.min
    }

    pub fn max(&self) -> Point2<f32> {
        self.max
    }

    /// Centre of the bounding box.
    pub fn center(&self) -> Point2<f32> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Builds a BSP tree over this world's walls.
    pub fn bsp_tree(&self) -> Result<BspTree, BspError> {
        BspTree::from_polygons(self.polygons.clone())
    }
}

fn bounds(polygons: &[Polygon]) -> (Point2<f32>, Point2<f32>) {
    let mut points = polygons.iter().flat_map(|p| [p.start(), p.end()]);
    match points.next() {
        Some(first) => points.fold((first, first), |(lo, hi), p| {
            (
                Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }),
        None => (Point2::origin(), Point2::new(1.0, 1.0)),
    }
}
