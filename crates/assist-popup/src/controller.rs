//! Popup geometry controller
//!
//! Owns the popup's geometry and gesture state and turns pointer input
//! into clamped geometry updates.

use tracing::{debug, trace};

use crate::input::{calculate_drag, calculate_resize, cursor_for, Cursor, GestureState};
use crate::math::{Rect, Size, Vec2, POPUP_STYLE};
use crate::popup::{Geometry, PopupConfig, ResizeHandle};

/// Geometry and gesture state for one popup
///
/// State machine: `Idle -> Resizing(h)` via [`begin_resize`],
/// `Idle -> Dragging` via [`begin_drag`], and back to `Idle` via
/// [`end_gesture`] or [`close`]. Reusable across open/close cycles.
///
/// [`begin_resize`]: PopupGeometryController::begin_resize
/// [`begin_drag`]: PopupGeometryController::begin_drag
/// [`end_gesture`]: PopupGeometryController::end_gesture
/// [`close`]: PopupGeometryController::close
#[derive(Clone, Debug)]
pub struct PopupGeometryController {
    config: PopupConfig,
    geometry: Geometry,
    gesture: GestureState,
}

impl Default for PopupGeometryController {
    fn default() -> Self {
        Self::new(PopupConfig::default())
    }
}

impl PopupGeometryController {
    /// Create a controller; geometry starts at the default size at the origin
    pub fn new(config: PopupConfig) -> Self {
        Self {
            config,
            geometry: Geometry::from_rect(Rect::from_pos_size(Vec2::ZERO, config.default_size)),
            gesture: GestureState::Idle,
        }
    }

    /// Configuration supplied at construction
    #[inline]
    pub fn config(&self) -> &PopupConfig {
        &self.config
    }

    /// Current geometry
    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Current gesture
    #[inline]
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// Check if a resize or drag is in progress
    #[inline]
    pub fn is_gesture_active(&self) -> bool {
        !self.gesture.is_idle()
    }

    /// Cursor for the current gesture
    #[inline]
    pub fn cursor(&self) -> Cursor {
        cursor_for(self.gesture)
    }

    /// Reset geometry to the default size centered in the viewport
    pub fn open(&mut self, viewport_width: f32, viewport_height: f32) {
        let viewport = Size::new(viewport_width, viewport_height);
        self.geometry = Geometry::centered(self.config.default_size, viewport);
        self.gesture = GestureState::Idle;
        debug!(?viewport, geometry = ?self.geometry, "popup opened");
    }

    /// End any gesture when the popup closes
    pub fn close(&mut self) {
        self.end_gesture();
        debug!("popup closed");
    }

    /// Start resizing from `handle`, replacing any current gesture
    pub fn begin_resize(&mut self, handle: ResizeHandle) {
        self.gesture = GestureState::Resizing(handle);
        debug!(%handle, "resize started");
    }

    /// Start moving the popup
    ///
    /// The caller must not start a drag for a pointer-down that landed on
    /// a control embedded in the header.
    pub fn begin_drag(&mut self) {
        self.gesture = GestureState::Dragging;
        debug!("drag started");
    }

    /// Apply a pointer move; `current_rect` is the popup's laid-out bounds
    ///
    /// Returns true if the geometry changed.
    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32, current_rect: Rect) -> bool {
        let pointer = Vec2::new(client_x, client_y);

        let next = match self.gesture {
            GestureState::Idle => return false,
            GestureState::Resizing(handle) => {
                calculate_resize(handle, pointer, current_rect, self.geometry, self.config.min_size)
            }
            GestureState::Dragging => {
                calculate_drag(pointer, self.geometry, POPUP_STYLE.header_grab_offset)
            }
        };

        let changed = next != self.geometry;
        self.geometry = next;
        trace!(?pointer, geometry = ?self.geometry, changed, "pointer move");
        changed
    }

    /// Return to `Idle`; safe to call at any time
    pub fn end_gesture(&mut self) {
        if !self.gesture.is_idle() {
            debug!(gesture = ?self.gesture, "gesture ended");
        }
        self.gesture = GestureState::Idle;
    }
}
