//! Popup chrome constants

/// Chrome dimensions shared by hit testing and gesture math
pub struct PopupStyle {
    /// Height of the draggable header bar
    pub header_height: f32,
    /// Vertical distance kept between the pointer and the popup top while dragging
    pub header_grab_offset: f32,
    /// Side length of the square corner resize handles
    pub corner_handle_size: f32,
    /// Thickness of the edge resize strips
    pub edge_handle_size: f32,
    /// Side length of the close button in the header
    pub close_button_size: f32,
    /// Distance from the popup's right edge to the close button
    pub close_button_margin: f32,
}

/// Default popup style matching the assistant UI
pub const POPUP_STYLE: PopupStyle = PopupStyle {
    header_height: 60.0,
    header_grab_offset: 20.0,
    corner_handle_size: 12.0,
    edge_handle_size: 4.0,
    close_button_size: 32.0,
    close_button_margin: 16.0,
};
