//! 2D BSP (Binary Space Partitioning) tree over wall segments.
//!
//! Build a [`BspTree`] once from a list of [`Polygon`]s, then ask it for a
//! back-to-front ordering from any viewpoint with [`BspTree::iter`]. Drawing
//! in that order is enough for a painter's-algorithm renderer to get
//! occlusion right without a depth buffer.

pub mod bsp;
mod config;
mod cuttable;
pub mod error;
mod plane;
mod polygon;
pub mod relative_position;
mod vector;

pub use bsp::{
    BspNode, BspTree, BspVisitor, CollectingVisitor, FirstPolygon, FnVisitor, LeastSplits, Order,
    PlaneSelector, Traversal,
};
pub use config::{BuildConfig, DEFAULT_MAX_DEPTH};
pub use cuttable::Cuttable;
pub use error::{BspError, GeometryError};
pub use plane::{Plane2D, PLANE_EPSILON};
pub use polygon::{Polygon, PERPENDICULAR_TOLERANCE};
pub use relative_position::{Classification, PlaneSide};
pub use vector::{perp_left, SafeNormalize, NORMALIZE_EPSILON};

pub use nalgebra::{Point2, Vector2};
