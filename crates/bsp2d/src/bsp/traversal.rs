//! Lazy, viewpoint-ordered iteration over a BSP tree.
//!
//! The iterator keeps an explicit stack instead of recursing, so a deep tree
//! costs heap, not call stack, and the caller can stop at any point.

use std::iter::FusedIterator;

use nalgebra::Point2;

use super::node::BspNode;
use crate::{PlaneSide, Polygon};

/// Direction of a traversal relative to the viewpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Farthest polygons first (painter's algorithm).
    BackToFront,
    /// Nearest polygons first.
    FrontToBack,
}

/// Splits a node's children into `(near, far)` as seen from `eye`.
///
/// An eye lying on the plane counts as being in front of it.
pub(crate) fn near_far(
    node: &BspNode,
    eye: Point2<f32>,
    epsilon: f32,
) -> (Option<&BspNode>, Option<&BspNode>) {
    match node.plane().classify_point_with_epsilon(eye, epsilon) {
        PlaneSide::Front | PlaneSide::OnPlane => (node.front(), node.back()),
        PlaneSide::Back => (node.back(), node.front()),
    }
}

enum Pending<'a> {
    Node(&'a BspNode),
    Polygons(&'a [Polygon]),
}

/// Iterator over the polygons of a tree in viewpoint order.
///
/// Created by [`BspTree::iter`](super::BspTree::iter) and
/// [`BspTree::iter_front_to_back`](super::BspTree::iter_front_to_back).
/// The two orders are exact reverses of each other.
pub struct Traversal<'a> {
    eye: Point2<f32>,
    epsilon: f32,
    order: Order,
    stack: Vec<Pending<'a>>,
}

impl<'a> Traversal<'a> {
    pub(crate) fn new(root: Option<&'a BspNode>, eye: Point2<f32>, epsilon: f32, order: Order) -> Self {
        Self {
            eye,
            epsilon,
            order,
            stack: root.map(Pending::Node).into_iter().collect(),
        }
    }

    /// Returns the viewpoint this traversal is ordered for.
    pub fn eye(&self) -> Point2<f32> {
        self.eye
    }

    pub fn order(&self) -> Order {
        self.order
    }

    /// Schedules a node's parts; the stack pops them in emission order.
    fn expand(&mut self, node: &'a BspNode) {
        let (near, far) = near_far(node, self.eye, self.epsilon);
        let (first, last) = match self.order {
            Order::BackToFront => (far, near),
            Order::FrontToBack => (near, far),
        };

        if let Some(last) = last {
            self.stack.push(Pending::Node(last));
        }
        if !node.coplanar().is_empty() {
            self.stack.push(Pending::Polygons(node.coplanar()));
        }
        if let Some(first) = first {
            self.stack.push(Pending::Node(first));
        }
    }
}

impl<'a> Iterator for Traversal<'a> {
    type Item = &'a Polygon;

    fn next(&mut self) -> Option<&'a Polygon> {
        loop {
            match self.stack.pop()? {
                Pending::Node(node) => self.expand(node),
                Pending::Polygons(polygons) => {
                    let split = match self.order {
                        Order::BackToFront => polygons.split_first(),
                        Order::FrontToBack => polygons.split_last(),
                    };
                    if let Some((polygon, rest)) = split {
                        if !rest.is_empty() {
                            self.stack.push(Pending::Polygons(rest));
                        }
                        return Some(polygon);
                    }
                }
            }
        }
    }
}

impl FusedIterator for Traversal<'_> {}
