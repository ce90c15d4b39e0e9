//! Tunables for tree construction.

use crate::PLANE_EPSILON;

/// Default bound on recursion depth during construction.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Construction settings.
///
/// `epsilon` is the half-width of the band around each splitting plane that
/// counts as "on" the plane. `max_depth` bounds recursion so pathological
/// input fails with an error instead of exhausting the stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuildConfig {
    pub epsilon: f32,
    pub max_depth: usize,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            epsilon: PLANE_EPSILON,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl BuildConfig {
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
