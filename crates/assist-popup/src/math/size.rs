//! 2D size type for popup and viewport dimensions

use serde::{Deserialize, Serialize};
use super::Vec2;

/// Width and height pair
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert to Vec2
    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Check if size is zero or negative
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check that both dimensions are finite and strictly positive
    #[inline]
    pub fn is_positive(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && !self.is_empty()
    }

    /// Check if either dimension is smaller than `other`'s
    #[inline]
    pub fn is_smaller_than(self, other: Size) -> bool {
        self.width < other.width || self.height < other.height
    }
}
