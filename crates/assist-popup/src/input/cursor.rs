//! Cursor shown while a gesture is active

use super::GestureState;

/// Directional cursor symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Grabbing,
    /// Vertical resize
    NsResize,
    /// Horizontal resize
    EwResize,
    NwResize,
    NeResize,
    SwResize,
    SeResize,
}

impl Cursor {
    /// CSS `cursor` keyword
    pub fn css(&self) -> &'static str {
        match self {
            Cursor::Default => "default",
            Cursor::Grabbing => "grabbing",
            Cursor::NsResize => "ns-resize",
            Cursor::EwResize => "ew-resize",
            Cursor::NwResize => "nw-resize",
            Cursor::NeResize => "ne-resize",
            Cursor::SwResize => "sw-resize",
            Cursor::SeResize => "se-resize",
        }
    }
}

/// Map a gesture to the cursor the host should display
pub fn cursor_for(gesture: GestureState) -> Cursor {
    let handle = match gesture {
        GestureState::Idle => return Cursor::Default,
        GestureState::Dragging => return Cursor::Grabbing,
        GestureState::Resizing(handle) => handle,
    };

    match (handle.has_top(), handle.has_bottom(), handle.has_left(), handle.has_right()) {
        (true, _, true, _) => Cursor::NwResize,
        (true, _, _, true) => Cursor::NeResize,
        (_, true, true, _) => Cursor::SwResize,
        (_, true, _, true) => Cursor::SeResize,
        (true, _, _, _) | (_, true, _, _) => Cursor::NsResize,
        _ => Cursor::EwResize,
    }
}
