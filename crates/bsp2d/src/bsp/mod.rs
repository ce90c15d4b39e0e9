//! Binary Space Partitioning tree for 2D wall segments.
//!
//! This module provides a BSP tree that recursively partitions the plane
//! using lines derived from input walls. The tree enables:
//!
//! - Back-to-front and front-to-back traversal relative to a viewpoint
//! - Painter's-algorithm rendering without per-pixel depth tests
//!
//! # Example
//!
//! ```
//! use bsp2d::{BspTree, Point2, Polygon};
//!
//! let walls = vec![
//!     Polygon::from_endpoints(Point2::new(1.0, 1.0), Point2::new(-1.0, 1.0)).unwrap(),
//!     Polygon::from_endpoints(Point2::new(1.0, 2.0), Point2::new(-1.0, 2.0)).unwrap(),
//! ];
//! let tree = BspTree::from_polygons(walls).unwrap();
//!
//! // Seen from below, the wall at y = 2 is hidden by the one at y = 1,
//! // so it comes first.
//! let order: Vec<_> = tree.iter(Point2::new(0.0, 0.0)).collect();
//! assert_eq!(order[0].start(), Point2::new(1.0, 2.0));
//! assert_eq!(order.len(), tree.polygon_count());
//! ```
//!
//! # Architecture
//!
//! - [`BspTree`]: The main container holding the root node
//! - [`BspNode`]: Nodes storing a splitting plane and coplanar polygons
//! - [`PlaneSelector`]: Strategy trait for choosing splitting planes
//! - [`Traversal`]: Lazy viewpoint-ordered iterator
//! - [`BspVisitor`]: Visitor trait for per-node traversal

mod node;
mod selector;
mod traversal;
mod tree;
mod visitor;

pub use node::BspNode;
pub use selector::{FirstPolygon, LeastSplits, PlaneSelector};
pub use traversal::{Order, Traversal};
pub use tree::BspTree;
pub use visitor::{BspVisitor, CollectingVisitor, FnVisitor};
