//! Error types for geometry validation and tree construction.

use nalgebra::{Point2, Vector2};

/// Input geometry that cannot take part in partitioning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate in segment {start} -> {end}")]
    NonFinite { start: Point2<f32>, end: Point2<f32> },

    /// Start and end coincide, so the segment has no direction.
    #[error("degenerate segment: start {start} and end {end} coincide")]
    DegenerateSegment { start: Point2<f32>, end: Point2<f32> },

    /// The normal vector has zero length.
    #[error("normal vector has zero length")]
    ZeroNormal,

    /// The normal is not perpendicular to the segment direction.
    #[error("normal {normal} is not perpendicular to the segment (cosine {cosine})")]
    NormalNotPerpendicular { normal: Vector2<f32>, cosine: f32 },

    /// Splitting produced a fragment with no length.
    #[error("split at {point} produces a zero-length fragment")]
    DegenerateFragment { point: Point2<f32> },
}

/// Failure while building a [`BspTree`](crate::BspTree).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BspError {
    /// An input segment failed validation.
    #[error("invalid polygon at index {index}: {source}")]
    InvalidPolygon {
        index: usize,
        #[source]
        source: GeometryError,
    },

    /// Geometry became invalid during construction (e.g. while splitting).
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Recursion went deeper than the configured bound.
    #[error("BSP construction exceeded the depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },
}
