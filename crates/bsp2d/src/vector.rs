//! Vector helpers on top of `nalgebra::Vector2`.
//!
//! Arithmetic, `dot` and `norm` come straight from nalgebra. The only thing
//! added here is a normalization that tolerates the zero vector, which the
//! drawing side needs for normal arrows that collapse to a point on screen.

use nalgebra::Vector2;

/// Lengths at or below this are treated as zero when normalizing.
pub const NORMALIZE_EPSILON: f32 = f32::EPSILON;

/// Normalization that never divides by zero.
pub trait SafeNormalize {
    /// Returns the unit vector in the same direction, or the zero vector
    /// when the length is (near) zero.
    fn normalize_or_zero(&self) -> Self;
}

impl SafeNormalize for Vector2<f32> {
    #[inline]
    fn normalize_or_zero(&self) -> Self {
        self.try_normalize(NORMALIZE_EPSILON)
            .unwrap_or_else(Vector2::zeros)
    }
}

/// The left-hand perpendicular of `v`, i.e. `v` rotated a quarter turn counter-clockwise.
#[inline]
pub fn perp_left(v: &Vector2<f32>) -> Vector2<f32> {
    Vector2::new(-v.y, v.x)
}
