//! BSP tree container and construction.

use log::{debug, trace, warn};
use nalgebra::{Point2, Vector2};

use crate::error::{BspError, GeometryError};
use crate::relative_position::polygon_position_with_epsilon;
use crate::{BuildConfig, Classification, Cuttable, Plane2D, Polygon};

use super::node::BspNode;
use super::selector::{FirstPolygon, PlaneSelector};
use super::traversal::{near_far, Order, Traversal};
use super::visitor::BspVisitor;

/// A Binary Space Partitioning tree over 2D wall segments.
///
/// Each node contains the polygons lying on its splitting plane, while the
/// rest are stored in front or back subtrees. Polygons crossing a plane are
/// split into fragments, so [`polygon_count`](Self::polygon_count) may exceed
/// the input length.
///
/// The tree is immutable once built. Rebuilding means constructing a new one.
///
/// # Traversal
///
/// [`iter`](Self::iter) yields every fragment back-to-front relative to a
/// viewpoint, the order a painter's-algorithm renderer draws in:
///
/// ```ignore
/// for wall in tree.iter(eye) {
///     draw(wall);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BspTree {
    root: Option<BspNode>,
    epsilon: f32,
}

impl Default for BspTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BspTree {
    /// Creates an empty BSP tree.
    pub fn new() -> Self {
        Self {
            root: None,
            epsilon: BuildConfig::default().epsilon,
        }
    }

    /// Builds a BSP tree from a collection of polygons.
    ///
    /// Uses the provided [`PlaneSelector`] to choose splitting planes during
    /// construction. Polygons that span a splitting plane are split using the
    /// [`Cuttable`] trait.
    ///
    /// Returns an empty tree if the input is empty.
    pub fn build<S: PlaneSelector>(polygons: Vec<Polygon>, selector: &S) -> Result<Self, BspError> {
        Self::build_with_config(polygons, selector, &BuildConfig::default())
    }

    /// Builds a BSP tree with explicit construction settings.
    pub fn build_with_config<S: PlaneSelector>(
        polygons: Vec<Polygon>,
        selector: &S,
        config: &BuildConfig,
    ) -> Result<Self, BspError> {
        let input = polygons.len();
        debug!("building BSP tree from {} polygons", input);

        let root = build_node(polygons, selector, config, 1)?;
        let tree = Self {
            root,
            epsilon: config.epsilon,
        };

        debug!(
            "BSP tree built: {} fragments from {} polygons, depth {}",
            tree.polygon_count(),
            input,
            tree.depth()
        );
        Ok(tree)
    }

    /// Builds a BSP tree using the default plane selector ([`FirstPolygon`]).
    pub fn from_polygons(polygons: Vec<Polygon>) -> Result<Self, BspError> {
        Self::build(polygons, &FirstPolygon)
    }

    /// Validates raw `(start, end, normal)` segments and builds a tree from them.
    ///
    /// The first invalid segment is reported with its position in the input.
    pub fn from_segments<I>(segments: I) -> Result<Self, BspError>
    where
        I: IntoIterator<Item = (Point2<f32>, Point2<f32>, Vector2<f32>)>,
    {
        let polygons = segments
            .into_iter()
            .enumerate()
            .map(|(index, (start, end, normal))| {
                Polygon::new(start, end, normal)
                    .map_err(|source| BspError::InvalidPolygon { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_polygons(polygons)
    }

    /// Returns `true` if the tree contains no polygons.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a reference to the root node, if any.
    #[inline]
    pub fn root(&self) -> Option<&BspNode> {
        self.root.as_ref()
    }

    /// Returns the classification tolerance the tree was built with.
    #[inline]
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Returns the total number of polygon fragments stored in the tree.
    pub fn polygon_count(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.polygon_count())
    }

    /// Returns the maximum depth of the tree (0 for empty tree).
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.depth())
    }

    /// Iterates over every fragment back-to-front as seen from `eye`.
    ///
    /// Farther polygons come first, so drawing in iteration order lets nearer
    /// walls overdraw the ones they hide. Calling again with the same eye
    /// gives the same sequence.
    pub fn iter(&self, eye: Point2<f32>) -> Traversal<'_> {
        Traversal::new(self.root.as_ref(), eye, self.epsilon, Order::BackToFront)
    }

    /// Iterates over every fragment front-to-back as seen from `eye`.
    ///
    /// This is exactly the reverse of [`iter`](Self::iter).
    pub fn iter_front_to_back(&self, eye: Point2<f32>) -> Traversal<'_> {
        Traversal::new(self.root.as_ref(), eye, self.epsilon, Order::FrontToBack)
    }

    /// Traverses the tree front-to-back relative to the given viewpoint.
    ///
    /// The visitor's `visit` method is called for each group of coplanar
    /// polygons, nearest group first.
    pub fn traverse_front_to_back<V: BspVisitor>(&self, eye: Point2<f32>, visitor: &mut V) {
        if let Some(ref root) = self.root {
            traverse_node(root, eye, self.epsilon, Order::FrontToBack, visitor);
        }
    }

    /// Traverses the tree back-to-front relative to the given viewpoint.
    ///
    /// This is the grouping counterpart of [`iter`](Self::iter).
    pub fn traverse_back_to_front<V: BspVisitor>(&self, eye: Point2<f32>, visitor: &mut V) {
        if let Some(ref root) = self.root {
            traverse_node(root, eye, self.epsilon, Order::BackToFront, visitor);
        }
    }

    /// Collects all polygons in the tree into a vector.
    ///
    /// The order of polygons is not guaranteed.
    pub fn collect_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::with_capacity(self.polygon_count());
        collect_polygons_recursive(self.root.as_ref(), &mut result);
        result
    }
}

/// Recursively builds a BSP node from a list of polygons.
fn build_node<S: PlaneSelector>(
    mut polygons: Vec<Polygon>,
    selector: &S,
    config: &BuildConfig,
    depth: usize,
) -> Result<Option<BspNode>, BspError> {
    if polygons.is_empty() {
        return Ok(None);
    }
    if depth > config.max_depth {
        warn!(
            "BSP construction hit depth limit {} with {} polygons left",
            config.max_depth,
            polygons.len()
        );
        return Err(BspError::DepthLimitExceeded {
            limit: config.max_depth,
        });
    }

    // An out-of-range pick falls back to the first polygon.
    let splitter_idx = selector
        .select(&polygons, config.epsilon)
        .filter(|&idx| idx < polygons.len())
        .unwrap_or(0);

    let splitter = polygons.remove(splitter_idx);
    let plane = splitter.plane();

    let mut coplanar = vec![splitter];
    let mut front_list = Vec::new();
    let mut back_list = Vec::new();

    for polygon in polygons {
        match polygon_position_with_epsilon(&plane, &polygon, config.epsilon) {
            Classification::Front => front_list.push(polygon),
            Classification::Back => back_list.push(polygon),
            Classification::Coplanar => coplanar.push(polygon),
            Classification::Spanning => match polygon.cut_with_epsilon(&plane, config.epsilon) {
                Ok((front_part, back_part)) => {
                    debug_assert!(front_part.is_some_and(|f| reaches_side(&plane, &f, 1.0)));
                    debug_assert!(back_part.is_some_and(|b| reaches_side(&plane, &b, -1.0)));
                    front_list.extend(front_part);
                    back_list.extend(back_part);
                }
                // The crossing rounded onto an endpoint: keep the wall whole on
                // the side that holds nearly all of it.
                Err(GeometryError::DegenerateFragment { point }) => {
                    trace!("sliver crossing at {}, routing wall whole", point);
                    if dominant_side(&plane, &polygon) > 0.0 {
                        front_list.push(polygon);
                    } else {
                        back_list.push(polygon);
                    }
                }
                Err(err) => return Err(err.into()),
            },
        }
    }

    let mut node = BspNode::with_coplanar(plane, coplanar);
    node.set_front(build_node(front_list, selector, config, depth + 1)?);
    node.set_back(build_node(back_list, selector, config, depth + 1)?);

    Ok(Some(node))
}

/// Signed distance of whichever endpoint lies farther from the plane.
fn dominant_side(plane: &Plane2D, polygon: &Polygon) -> f32 {
    let start = plane.signed_distance(polygon.start());
    let end = plane.signed_distance(polygon.end());
    if start.abs() >= end.abs() { start } else { end }
}

/// Whether either endpoint of a fragment lies strictly on the side given by `sign`.
fn reaches_side(plane: &Plane2D, fragment: &Polygon, sign: f32) -> bool {
    let start = plane.signed_distance(fragment.start()) * sign;
    let end = plane.signed_distance(fragment.end()) * sign;
    start.max(end) > 0.0
}

/// Visits a node subtree in the given order.
fn traverse_node<V: BspVisitor>(
    node: &BspNode,
    eye: Point2<f32>,
    epsilon: f32,
    order: Order,
    visitor: &mut V,
) {
    let (near, far) = near_far(node, eye, epsilon);
    let (first, last) = match order {
        Order::BackToFront => (far, near),
        Order::FrontToBack => (near, far),
    };

    if let Some(first) = first {
        traverse_node(first, eye, epsilon, order, visitor);
    }
    if !node.coplanar().is_empty() {
        visitor.visit(node.plane(), node.coplanar());
    }
    if let Some(last) = last {
        traverse_node(last, eye, epsilon, order, visitor);
    }
}

/// Recursively collects all polygons from a node subtree.
fn collect_polygons_recursive(node: Option<&BspNode>, result: &mut Vec<Polygon>) {
    if let Some(n) = node {
        result.extend_from_slice(n.coplanar());
        collect_polygons_recursive(n.front(), result);
        collect_polygons_recursive(n.back(), result);
    }
}
