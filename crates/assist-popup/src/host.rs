//! Host view wiring for the popup
//!
//! Owns the open/closed flag, routes pointer events by region into the
//! controller and holds a pointer capture guard while a gesture runs.
//! The close button acts on click: a press over it only arms the close,
//! and the release must land on it too.

use tracing::debug;

use crate::controller::PopupGeometryController;
use crate::input::{PointerCapture, PointerOutcome};
use crate::math::{Rect, Size, Vec2, POPUP_STYLE};
use crate::popup::{region_at, Geometry, PopupConfig, PopupRegion, ResizeHandle};

/// Popup host driving a [`PopupGeometryController`]
pub struct PopupHost<C: PointerCapture> {
    controller: PopupGeometryController,
    capture: C,
    guard: Option<C::Guard>,
    open: bool,
    pending_close: bool,
}

impl<C: PointerCapture> PopupHost<C> {
    /// Create a closed popup host
    pub fn new(config: PopupConfig, capture: C) -> Self {
        Self {
            controller: PopupGeometryController::new(config),
            capture,
            guard: None,
            open: false,
            pending_close: false,
        }
    }

    /// Check if the popup is open
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Check if a capture guard is held
    #[inline]
    pub fn is_capturing(&self) -> bool {
        self.guard.is_some()
    }

    /// The underlying controller
    #[inline]
    pub fn controller(&self) -> &PopupGeometryController {
        &self.controller
    }

    /// Current geometry
    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.controller.geometry()
    }

    /// Height available to the hosted widget below the header
    #[inline]
    pub fn content_height(&self) -> f32 {
        self.geometry().content_height(POPUP_STYLE.header_height)
    }

    /// Open the popup centered in `viewport`
    ///
    /// Geometry is only reset on the closed to open transition.
    pub fn open(&mut self, viewport: Size) {
        if self.open {
            return;
        }
        self.open = true;
        self.controller.open(viewport.width, viewport.height);
    }

    /// Close the popup, ending any gesture and releasing capture
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.pending_close = false;
        self.controller.close();
        self.release();
    }

    /// Region under a client position, if the popup is open
    pub fn region_at(&self, pos: Vec2) -> Option<PopupRegion> {
        if !self.open {
            return None;
        }
        region_at(&self.controller.geometry(), pos, &POPUP_STYLE)
    }

    /// Handle pointer down
    pub fn pointer_down(&mut self, pos: Vec2) -> PointerOutcome {
        self.pending_close = false;
        let region = match self.region_at(pos) {
            Some(region) => region,
            None => return PointerOutcome::Unhandled,
        };

        match region {
            PopupRegion::Resize(handle) => {
                self.begin_resize(handle);
                PointerOutcome::Handled
            }
            PopupRegion::Header => {
                self.begin_drag();
                PointerOutcome::Handled
            }
            PopupRegion::CloseButton => {
                self.pending_close = true;
                PointerOutcome::Handled
            }
            PopupRegion::Content => PointerOutcome::Unhandled,
        }
    }

    /// Start a resize gesture from `handle` and acquire capture
    ///
    /// Ignored while the popup is closed.
    pub fn begin_resize(&mut self, handle: ResizeHandle) {
        if !self.open {
            return;
        }
        self.controller.begin_resize(handle);
        self.acquire();
    }

    /// Start a drag gesture and acquire capture
    ///
    /// Ignored while the popup is closed. The caller filters pointer-downs
    /// on header controls; [`pointer_down`](Self::pointer_down) does this
    /// through hit testing.
    pub fn begin_drag(&mut self) {
        if !self.open {
            return;
        }
        self.controller.begin_drag();
        self.acquire();
    }

    /// Handle pointer move, using the current geometry as the laid-out rect
    pub fn pointer_move(&mut self, pos: Vec2) -> PointerOutcome {
        let rect = self.controller.geometry().rect();
        self.pointer_move_in(pos, rect)
    }

    /// Handle pointer move against a rect measured by the host view
    pub fn pointer_move_in(&mut self, pos: Vec2, rect: Rect) -> PointerOutcome {
        if !self.open || !self.controller.is_gesture_active() {
            return PointerOutcome::Unhandled;
        }
        self.controller.on_pointer_move(pos.x, pos.y, rect);
        PointerOutcome::Handled
    }

    /// Handle pointer up
    ///
    /// Closes the popup when a press on the close button is released over
    /// it as well; otherwise ends any gesture.
    pub fn pointer_up(&mut self, pos: Vec2) -> PointerOutcome {
        if self.pending_close && self.region_at(pos) == Some(PopupRegion::CloseButton) {
            self.close();
            return PointerOutcome::Closed;
        }
        let was_pending = self.pending_close;
        if self.end_gesture() || was_pending {
            PointerOutcome::Handled
        } else {
            PointerOutcome::Unhandled
        }
    }

    /// End any gesture, release capture and drop an armed close
    ///
    /// Returns whether a gesture was active.
    pub fn end_gesture(&mut self) -> bool {
        self.pending_close = false;
        let was_active = self.controller.is_gesture_active();
        self.controller.end_gesture();
        self.release();
        was_active
    }

    fn acquire(&mut self) {
        // Drop the previous guard before taking a new one
        self.release();
        let cursor = self.controller.cursor();
        debug!(cursor = cursor.css(), "pointer capture acquired");
        self.guard = Some(self.capture.acquire(cursor));
    }

    fn release(&mut self) {
        if self.guard.take().is_some() {
            debug!("pointer capture released");
        }
    }
}
