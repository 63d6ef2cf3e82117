//! Scoped pointer capture for the lifetime of a gesture
//!
//! While a gesture is active the host needs page-wide pointer-move and
//! pointer-up events, text selection suppressed, and the gesture cursor
//! shown everywhere. A [`PointerCapture`] hands out a guard for that
//! state; dropping the guard releases it.

use super::Cursor;

/// Source of page-wide pointer capture
pub trait PointerCapture {
    /// Held while the gesture runs. Releases the capture on drop.
    type Guard;

    /// Start capturing, showing `cursor` until released
    fn acquire(&mut self, cursor: Cursor) -> Self::Guard;
}

/// Capture backend for hosts that route pointer events themselves
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCapture;

impl PointerCapture for NoCapture {
    type Guard = ();

    fn acquire(&mut self, _cursor: Cursor) -> Self::Guard {}
}
