//! Resizable, draggable popup for the shopping assistant
//!
//! This crate provides the geometry engine behind the assistant popup:
//! - Opening centered in the viewport
//! - Resizing from eight edge/corner handles with minimum-size clamping
//! - Moving by dragging the header
//! - Hit testing handles, header, close button and content
//! - Scoped pointer capture while a gesture is active
//!
//! ## Architecture
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`) and chrome constants
//! - [`popup`]: Configuration, geometry, resize handles and regions
//! - [`input`]: Gesture state, resize/move math, cursors and pointer capture
//! - [`PopupGeometryController`]: the gesture state machine
//! - [`PopupHost`]: open/closed flag and pointer routing around the controller
//!
//! ## Example
//!
//! ```rust
//! use assist_popup::{Geometry, PopupConfig, PopupGeometryController, Rect, ResizeHandle};
//!
//! let mut popup = PopupGeometryController::new(PopupConfig::default());
//! popup.open(1200.0, 800.0);
//! assert_eq!(popup.geometry(), Geometry::new(800.0, 600.0, 200.0, 100.0));
//!
//! popup.begin_resize(ResizeHandle::BottomRight);
//! popup.on_pointer_move(900.0, 500.0, Rect::from_edges(200.0, 100.0, 1000.0, 700.0));
//! popup.end_gesture();
//! assert_eq!(popup.geometry(), Geometry::new(700.0, 400.0, 200.0, 100.0));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without browser
//! 2. **Total Operations**: Gestures clamp instead of failing
//! 3. **Minimal Dependencies**: Core types have no browser dependencies

pub mod math;
pub mod popup;
pub mod input;

mod controller;
mod host;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{PopupStyle, Rect, Size, Vec2, POPUP_STYLE};
pub use popup::{
    ConfigError, Geometry, ParseHandleError, PopupConfig, PopupRegion, ResizeHandle,
};
pub use input::{cursor_for, Cursor, GestureState, NoCapture, PointerCapture, PointerOutcome};

pub use controller::PopupGeometryController;
pub use host::PopupHost;
