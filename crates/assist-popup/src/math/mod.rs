//! Core geometry types for the popup
//!
//! These types provide basic 2D math for pointer positions,
//! popup sizes and bounding boxes.

mod vec2;
mod rect;
mod size;
mod style;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
pub use style::{PopupStyle, POPUP_STYLE};
