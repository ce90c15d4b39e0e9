//! Per-node callbacks for BSP traversal.
//!
//! A visitor sees each node once, as the line it splits on together with the
//! walls lying along that line. Use it when a renderer wants whole wall runs
//! (for example to clip against the node's line); for a flat stream of walls
//! use [`BspTree::iter`](super::BspTree::iter) instead.

use crate::{Plane2D, Polygon};

/// Receives each non-empty node of a traversal.
pub trait BspVisitor {
    /// Called with a node's splitting line and the walls lying on it.
    fn visit(&mut self, plane: &Plane2D, polygons: &[Polygon]);
}

/// Records the walls and splitting lines in the order they were visited.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    planes: Vec<Plane2D>,
    collected: Vec<Polygon>,
}

impl CollectingVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_polygons(self) -> Vec<Polygon> {
        self.collected
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.collected
    }

    /// One splitting line per visited node.
    pub fn planes(&self) -> &[Plane2D] {
        &self.planes
    }
}

impl BspVisitor for CollectingVisitor {
    fn visit(&mut self, plane: &Plane2D, polygons: &[Polygon]) {
        self.planes.push(*plane);
        self.collected.extend_from_slice(polygons);
    }
}

/// Adapts a closure into a [`BspVisitor`].
pub struct FnVisitor<F>
where
    F: FnMut(&Plane2D, &[Polygon]),
{
    func: F,
}

impl<F> FnVisitor<F>
where
    F: FnMut(&Plane2D, &[Polygon]),
{
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> BspVisitor for FnVisitor<F>
where
    F: FnMut(&Plane2D, &[Polygon]),
{
    fn visit(&mut self, plane: &Plane2D, polygons: &[Polygon]) {
        (self.func)(plane, polygons);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    fn wall(a: [f32; 2], b: [f32; 2]) -> Polygon {
        Polygon::from_endpoints(Point2::new(a[0], a[1]), Point2::new(b[0], b[1])).unwrap()
    }

    #[test]
    fn collecting_visitor_records_lines_and_walls() {
        let mut visitor = CollectingVisitor::new();
        let w1 = wall([0.0, 0.0], [1.0, 0.0]);
        let w2 = wall([0.0, 1.0], [1.0, 1.0]);

        visitor.visit(&w1.plane(), &[w1]);
        visitor.visit(&w2.plane(), &[w2]);

        assert_eq!(visitor.planes(), &[w1.plane(), w2.plane()]);
        assert_eq!(visitor.polygons(), &[w1, w2]);
        assert_eq!(visitor.into_polygons(), vec![w1, w2]);
    }

    #[test]
    fn fn_visitor_calls_closure() {
        let mut groups = 0;
        let mut count = 0;
        {
            let mut visitor = FnVisitor::new(|_: &Plane2D, polys: &[Polygon]| {
                groups += 1;
                count += polys.len();
            });
            let w = wall([0.0, 0.0], [1.0, 0.0]);
            visitor.visit(&w.plane(), &[w, w]);
            visitor.visit(&w.plane(), &[w]);
        }
        assert_eq!(groups, 2);
        assert_eq!(count, 3);
    }
}
