//! Popup regions for hit testing

use crate::math::{PopupStyle, Rect, Vec2};
use super::{Geometry, ResizeHandle};

/// Part of the popup under a pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupRegion {
    /// Header bar (drag to move)
    Header,
    /// Close button embedded in the header
    CloseButton,
    /// Hosted widget area
    Content,
    /// One of the resize handles
    Resize(ResizeHandle),
}

/// Find which region of the popup is at a client position
///
/// Returns `None` outside the popup. Precedence follows stacking in the
/// popup's markup: resize handles sit on top, then the close button,
/// then the header, then content.
pub fn region_at(geometry: &Geometry, pos: Vec2, style: &PopupStyle) -> Option<PopupRegion> {
    let rect = geometry.rect();
    if !rect.contains(pos) {
        return None;
    }

    if let Some(handle) = hit_test_corners(&rect, pos, style) {
        return Some(PopupRegion::Resize(handle));
    }
    if let Some(handle) = hit_test_edges(&rect, pos, style) {
        return Some(PopupRegion::Resize(handle));
    }
    if close_button_rect(&rect, style).contains(pos) {
        return Some(PopupRegion::CloseButton);
    }
    if pos.y < rect.y + style.header_height {
        return Some(PopupRegion::Header);
    }
    Some(PopupRegion::Content)
}

/// Close button bounds, vertically centered in the header
pub fn close_button_rect(rect: &Rect, style: &PopupStyle) -> Rect {
    let size = style.close_button_size;
    Rect::new(
        rect.right() - style.close_button_margin - size,
        rect.y + (style.header_height - size) / 2.0,
        size,
        size,
    )
}

/// Hit test the square corner handles
fn hit_test_corners(rect: &Rect, pos: Vec2, style: &PopupStyle) -> Option<ResizeHandle> {
    let corner = style.corner_handle_size;

    let in_left = pos.x < rect.x + corner;
    let in_right = pos.x >= rect.right() - corner;
    let in_top = pos.y < rect.y + corner;
    let in_bottom = pos.y >= rect.bottom() - corner;

    match (in_top, in_bottom, in_left, in_right) {
        (true, _, true, _) => Some(ResizeHandle::TopLeft),
        (true, _, _, true) => Some(ResizeHandle::TopRight),
        (_, true, true, _) => Some(ResizeHandle::BottomLeft),
        (_, true, _, true) => Some(ResizeHandle::BottomRight),
        _ => None,
    }
}

/// Hit test the thin edge strips between the corners
fn hit_test_edges(rect: &Rect, pos: Vec2, style: &PopupStyle) -> Option<ResizeHandle> {
    let edge = style.edge_handle_size;

    if pos.y < rect.y + edge {
        return Some(ResizeHandle::Top);
    }
    if pos.y >= rect.bottom() - edge {
        return Some(ResizeHandle::Bottom);
    }
    if pos.x < rect.x + edge {
        return Some(ResizeHandle::Left);
    }
    if pos.x >= rect.right() - edge {
        return Some(ResizeHandle::Right);
    }
    None
}
