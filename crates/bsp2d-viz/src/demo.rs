//! Built-in levels for the viewer.

use bsp2d::{GeometryError, Point2, Polygon};

/// Closed loop of walls through `corners`, each facing to its left.
///
/// Counter-clockwise corners give an inward-facing room, clockwise corners
/// an outward-facing pillar.
pub fn wall_loop(corners: &[[f32; 2]]) -> Result<Vec<Polygon>, GeometryError> {
    corners
        .iter()
        .zip(corners.iter().cycle().skip(1))
        .map(|(a, b)| Polygon::from_endpoints(Point2::new(a[0], a[1]), Point2::new(b[0], b[1])))
        .collect()
}

/// Square room with inward-facing walls at x = ±half and y = ±half.
pub fn square_room(half: f32) -> Result<Vec<Polygon>, GeometryError> {
    wall_loop(&[[-half, -half], [half, -half], [half, half], [-half, half]])
}

/// A room with two pillars and a free-standing slanted wall.
///
/// The slanted wall comes first, so its line splits two of the room walls.
pub fn room_with_pillars() -> Result<Vec<Polygon>, GeometryError> {
    let mut walls = vec![Polygon::from_endpoints(
        Point2::new(-3.0, -1.0),
        Point2::new(3.0, 2.0),
    )?];
    walls.extend(square_room(4.0)?);
    walls.extend(wall_loop(&[[1.0, -3.0], [1.0, -2.0], [2.0, -2.0], [2.0, -3.0]])?);
    walls.extend(wall_loop(&[[-2.5, 1.5], [-2.5, 2.5], [-1.5, 2.5], [-1.5, 1.5]])?);
    Ok(walls)
}
