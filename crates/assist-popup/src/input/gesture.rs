//! Gesture state for pointer interaction

use crate::popup::ResizeHandle;

/// Current pointer gesture
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Resizing from a handle
    Resizing(ResizeHandle),
    /// Moving the popup by its header
    Dragging,
}

impl GestureState {
    /// Check if no gesture is active
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }
}
