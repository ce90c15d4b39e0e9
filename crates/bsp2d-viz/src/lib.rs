//! Top-down viewer for 2D BSP trees.
//!
//! Walls are drawn in the tree's back-to-front order from a viewpoint picked
//! with the mouse, each labelled with its position in that order.

use bsp2d::{BspTree, Point2, Polygon, SafeNormalize, Vector2};
use macroquad::prelude::*;

pub mod demo;
mod world;

pub use world::World;

/// Viewer settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    pub window_width: i32,
    pub window_height: i32,
    /// Padding around the world bounds, as a fraction of their extent.
    pub margin: f32,
    /// On-screen length of normal arrows, in pixels.
    pub arrow_length: f32,
    /// Side of the square endpoint and viewpoint markers, in pixels.
    pub marker_size: f32,
    pub line_thickness: f32,
    pub font_size: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            window_width: 500,
            window_height: 500,
            margin: 0.05,
            arrow_length: 50.0,
            marker_size: 5.0,
            line_thickness: 2.0,
            font_size: 16.0,
        }
    }
}

/// Maps world coordinates to screen pixels and back.
///
/// Screen y grows downward, world y upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapping {
    min: Point2<f32>,
    scale: Vector2<f32>,
    height: f32,
}

impl ScreenMapping {
    /// Fits the box `min..max`, padded by `margin` of its extent, to a
    /// `width` × `height` screen.
    pub fn new(min: Point2<f32>, max: Point2<f32>, width: f32, height: f32, margin: f32) -> Self {
        let extent = max - min;
        let pad = extent * margin;
        let span = extent + pad * 2.0;
        Self {
            min: min - pad,
            scale: Vector2::new(
                width / span.x.max(f32::EPSILON),
                height / span.y.max(f32::EPSILON),
            ),
            height,
        }
    }

    pub fn to_screen(&self, point: Point2<f32>) -> Point2<f32> {
        let scaled = (point - self.min).component_mul(&self.scale);
        Point2::new(scaled.x, self.height - scaled.y)
    }

    pub fn to_world(&self, screen: Point2<f32>) -> Point2<f32> {
        let scaled = Vector2::new(screen.x, self.height - screen.y);
        self.min + scaled.component_div(&self.scale)
    }
}

/// Status line shown above the scene.
pub fn overlay_text(world: &World, tree: &BspTree, viewpoint: Point2<f32>) -> String {
    format!(
        "World polys: {}  Partitioned polys: {}  Viewpoint: ({:.2}, {:.2})",
        world.polygons().len(),
        tree.polygon_count(),
        viewpoint.x,
        viewpoint.y
    )
}

/// Screen-space arrow for a wall's normal, `length` pixels from its midpoint.
///
/// Collapses to zero when the normal projects to a single pixel.
pub fn normal_arrow(polygon: &Polygon, mapping: &ScreenMapping, length: f32) -> (Point2<f32>, Point2<f32>) {
    let mid = polygon.midpoint();
    let from = mapping.to_screen(mid);
    let to = mapping.to_screen(mid + polygon.normal());
    (from, from + (to - from).normalize_or_zero() * length)
}

fn draw_marker(at: Point2<f32>, size: f32, color: Color) {
    draw_rectangle(at.x - size / 2.0, at.y - size / 2.0, size, size, color);
}

fn draw_wall(index: usize, polygon: &Polygon, mapping: &ScreenMapping, config: &ViewConfig) {
    let start = mapping.to_screen(polygon.start());
    let end = mapping.to_screen(polygon.end());
    draw_line(start.x, start.y, end.x, end.y, config.line_thickness, RED);

    let (from, to) = normal_arrow(polygon, mapping, config.arrow_length);
    draw_line(from.x, from.y, to.x, to.y, config.line_thickness / 2.0, GREEN);
    draw_text(&index.to_string(), from.x, from.y, config.font_size, BLACK);

    draw_marker(start, config.marker_size, BLACK);
    draw_marker(end, config.marker_size, BLACK);
}

/// Draws every wall back-to-front from `viewpoint`, then the viewpoint and
/// the status line.
pub fn draw_scene(
    world: &World,
    tree: &BspTree,
    viewpoint: Point2<f32>,
    mapping: &ScreenMapping,
    config: &ViewConfig,
) {
    for (index, polygon) in tree.iter(viewpoint).enumerate() {
        draw_wall(index, polygon, mapping, config);
    }

    draw_marker(mapping.to_screen(viewpoint), config.marker_size, BLUE);
    draw_text(
        &overlay_text(world, tree, viewpoint),
        4.0,
        config.font_size,
        config.font_size,
        BLACK,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point2<f32>, b: Point2<f32>) -> bool {
        (a - b).norm() < 1e-3
    }

    #[test]
    fn mapping_flips_y_and_fits_box() {
        let mapping = ScreenMapping::new(Point2::new(-1.0, -1.0), Point2::new(1.0, 1.0), 400.0, 200.0, 0.0);
        assert!(close(mapping.to_screen(Point2::new(-1.0, -1.0)), Point2::new(0.0, 200.0)));
        assert!(close(mapping.to_screen(Point2::new(1.0, 1.0)), Point2::new(400.0, 0.0)));
        assert!(close(mapping.to_screen(Point2::new(0.0, 0.0)), Point2::new(200.0, 100.0)));
    }

    #[test]
    fn mapping_round_trips() {
        let mapping = ScreenMapping::new(Point2::new(-4.0, -2.0), Point2::new(6.0, 3.0), 500.0, 500.0, 0.05);
        let p = Point2::new(1.25, -0.75);
        assert!(close(mapping.to_world(mapping.to_screen(p)), p));
    }

    #[test]
    fn mapping_tolerates_flat_bounds() {
        let mapping = ScreenMapping::new(Point2::new(0.0, 0.0), Point2::new(5.0, 0.0), 100.0, 100.0, 0.1);
        let s = mapping.to_screen(Point2::new(2.0, 0.0));
        assert!(s.x.is_finite() && s.y.is_finite());
    }

    #[test]
    fn normal_arrow_has_fixed_length() {
        let wall = Polygon::from_endpoints(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0)).unwrap();
        let mapping = ScreenMapping::new(Point2::new(-1.0, -1.0), Point2::new(1.0, 1.0), 200.0, 200.0, 0.0);
        let (from, to) = normal_arrow(&wall, &mapping, 50.0);
        assert!(close(from, Point2::new(100.0, 100.0)));
        // Normal is +y in the world, so the arrow points up the screen.
        assert!(close(to, Point2::new(100.0, 50.0)));
    }

    #[test]
    fn overlay_reports_counts() {
        let world = World::new(demo::room_with_pillars().unwrap());
        let tree = world.bsp_tree().unwrap();
        let text = overlay_text(&world, &tree, Point2::new(0.5, -1.0));
        assert_eq!(text, "World polys: 13  Partitioned polys: 15  Viewpoint: (0.50, -1.00)");
    }
}
