//! Pointer input module
//!
//! Provides the gesture state machine inputs, the resize/move math and
//! the scoped pointer capture used while a gesture is active.

mod capture;
mod cursor;
mod gesture;
mod outcome;

pub use capture::{NoCapture, PointerCapture};
pub use cursor::{cursor_for, Cursor};
pub use gesture::GestureState;
pub use outcome::PointerOutcome;

#[cfg(test)]
pub(crate) use capture::testing;

use crate::math::{Rect, Size, Vec2};
use crate::popup::{Geometry, ResizeHandle};

/// Calculate new geometry for a resize gesture
///
/// `pointer` and `rect` share client coordinates; `rect` is the popup's
/// bounding box as last laid out. Each axis is updated only when the
/// handle touches one of its edges. Right/bottom clamp up to `min`.
/// Left/top stop following the pointer once the candidate size would
/// drop below `min` and leave that axis as it was.
pub fn calculate_resize(
    handle: ResizeHandle,
    pointer: Vec2,
    rect: Rect,
    current: Geometry,
    min: Size,
) -> Geometry {
    let mut next = current;

    if handle.has_right() {
        next.width = (pointer.x - rect.left()).max(min.width);
    }
    if handle.has_left() {
        let candidate = rect.right() - pointer.x;
        if candidate >= min.width {
            next.width = candidate;
            next.x = pointer.x;
        }
    }
    if handle.has_bottom() {
        next.height = (pointer.y - rect.top()).max(min.height);
    }
    if handle.has_top() {
        let candidate = rect.bottom() - pointer.y;
        if candidate >= min.height {
            next.height = candidate;
            next.y = pointer.y;
        }
    }

    next
}

/// Calculate new geometry for a header drag
///
/// Centers the popup horizontally under the pointer and keeps the pointer
/// `grab_offset` below the top edge. The result is not clamped to the
/// viewport.
pub fn calculate_drag(pointer: Vec2, current: Geometry, grab_offset: f32) -> Geometry {
    Geometry {
        x: pointer.x - current.width / 2.0,
        y: pointer.y - grab_offset,
        ..current
    }
}
