//! Popup position and size

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size};

/// Current width, height and top-left position of the popup
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
}

impl Geometry {
    /// Create a new geometry
    #[inline]
    pub const fn new(width: f32, height: f32, x: f32, y: f32) -> Self {
        Self { width, height, x, y }
    }

    /// Geometry of `size` centered in a viewport of `viewport` size
    pub fn centered(size: Size, viewport: Size) -> Self {
        let rect = Rect::from_center_size(viewport.as_vec2() * 0.5, size);
        Self::from_rect(rect)
    }

    /// Build from a rectangle
    #[inline]
    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.width, rect.height, rect.x, rect.y)
    }

    /// Bounding box in client coordinates
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Height left for the hosted widget below a header of `header_height`
    #[inline]
    pub fn content_height(&self, header_height: f32) -> f32 {
        (self.height - header_height).max(0.0)
    }
}
