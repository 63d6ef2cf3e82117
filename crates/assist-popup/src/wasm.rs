//! WASM exports for the popup
//!
//! This module provides wasm-bindgen exports for [`PopupHost`],
//! allowing the React view to drive popup geometry directly. Body styling
//! during a gesture is handled here; document listeners stay on the JS side.
//!
//! The view forwards `mousedown` on the popup to `pointer_down`. When
//! `is_gesture_active()` turns true after that call (or after
//! `begin_resize`/`begin_drag`), it adds `mousemove` and `mouseup`
//! listeners on `document`, passing moves to `on_pointer_move` with the
//! popup's `getBoundingClientRect()`. On `mouseup` it calls `pointer_up`
//! and removes both listeners. A press on the close button keeps
//! `is_gesture_active()` false, so its release arrives through the popup's
//! own `mouseup` handler. Unmounting calls `end_gesture` (or `close`) so
//! the listeners and body styling never outlive the view.

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::host::PopupHost;
use crate::input::{Cursor, PointerCapture, PointerOutcome};
use crate::math::{Rect, Size, Vec2};
use crate::popup::{PopupConfig, ResizeHandle};

/// Applies gesture styling to `document.body`
#[derive(Default)]
pub struct BodyStyleCapture;

/// Restores `document.body` styling on drop
pub struct BodyStyleGuard {
    body: Option<HtmlElement>,
}

fn document_body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

fn set_body_style(body: &HtmlElement, user_select: &str, cursor: &str) {
    let style = body.style();
    if style.set_property("user-select", user_select).is_err()
        || style.set_property("cursor", cursor).is_err()
    {
        web_sys::console::warn_1(&"popup: failed to update body style".into());
    }
}

impl PointerCapture for BodyStyleCapture {
    type Guard = BodyStyleGuard;

    fn acquire(&mut self, cursor: Cursor) -> BodyStyleGuard {
        let body = document_body();
        if let Some(body) = &body {
            set_body_style(body, "none", cursor.css());
        }
        BodyStyleGuard { body }
    }
}

impl Drop for BodyStyleGuard {
    fn drop(&mut self) {
        if let Some(body) = &self.body {
            set_body_style(body, "", "");
        }
    }
}

/// Popup controller for WASM - wraps PopupHost with a JS-friendly API
#[wasm_bindgen]
pub struct PopupController {
    host: PopupHost<BodyStyleCapture>,
}

#[wasm_bindgen]
impl PopupController {
    /// Create a popup controller from default and minimum dimensions
    #[wasm_bindgen(constructor)]
    pub fn new(default_width: f32, default_height: f32, min_width: f32, min_height: f32) -> Self {
        let config = PopupConfig::new(default_width, default_height, min_width, min_height);
        Self {
            host: PopupHost::new(config, BodyStyleCapture),
        }
    }

    /// Create a popup controller from a JSON config
    #[wasm_bindgen]
    pub fn from_config_json(json: &str) -> Result<PopupController, JsValue> {
        let config = PopupConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            host: PopupHost::new(config, BodyStyleCapture),
        })
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open the popup centered in the viewport
    #[wasm_bindgen]
    pub fn open(&mut self, viewport_width: f32, viewport_height: f32) {
        self.host.open(Size::new(viewport_width, viewport_height));
    }

    /// Close the popup
    #[wasm_bindgen]
    pub fn close(&mut self) {
        self.host.close();
    }

    #[wasm_bindgen]
    pub fn is_open(&self) -> bool {
        self.host.is_open()
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Start a resize from a handle name such as `"bottom-right"`
    #[wasm_bindgen]
    pub fn begin_resize(&mut self, handle: &str) {
        match handle.parse::<ResizeHandle>() {
            Ok(handle) => self.host.begin_resize(handle),
            Err(e) => {
                debug_assert!(false, "{e}");
                tracing::warn!(error = %e, "ignoring resize request");
                web_sys::console::warn_1(&format!("popup: {}", e).into());
            }
        }
    }

    /// Start dragging by the header
    #[wasm_bindgen]
    pub fn begin_drag(&mut self) {
        self.host.begin_drag();
    }

    /// Route a pointer-down by hit testing; returns the outcome as JSON
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> String {
        outcome_json(self.host.pointer_down(Vec2::new(x, y)))
    }

    /// Apply a pointer move with the popup's measured bounding box
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn on_pointer_move(&mut self, x: f32, y: f32, left: f32, top: f32, right: f32, bottom: f32) {
        let rect = Rect::from_edges(left, top, right, bottom);
        self.host.pointer_move_in(Vec2::new(x, y), rect);
    }

    /// Route a pointer-up; returns the outcome as JSON
    ///
    /// `{"type":"closed"}` means the close button was clicked.
    #[wasm_bindgen]
    pub fn pointer_up(&mut self, x: f32, y: f32) -> String {
        outcome_json(self.host.pointer_up(Vec2::new(x, y)))
    }

    /// End the current gesture without routing a release
    #[wasm_bindgen]
    pub fn end_gesture(&mut self) {
        self.host.end_gesture();
    }

    #[wasm_bindgen]
    pub fn is_gesture_active(&self) -> bool {
        self.host.controller().is_gesture_active()
    }

    /// CSS cursor for the current gesture
    #[wasm_bindgen]
    pub fn cursor(&self) -> String {
        self.host.controller().cursor().css().to_string()
    }

    /// Height left for the hosted widget below the header
    #[wasm_bindgen]
    pub fn content_height(&self) -> f32 {
        self.host.content_height()
    }

    /// Get geometry as JSON
    #[wasm_bindgen]
    pub fn get_geometry_json(&self) -> String {
        serde_json::to_string(&self.host.geometry()).unwrap_or_else(|_| "{}".to_string())
    }
}

fn outcome_json(outcome: PointerOutcome) -> String {
    serde_json::to_string(&outcome).unwrap_or_else(|_| "{}".to_string())
}
