//! Popup model
//!
//! Provides the popup's configuration, geometry, resize handles and
//! region hit testing.

mod config;
mod geometry;
mod handle;
mod region;

pub use config::{ConfigError, PopupConfig, DEFAULT_POPUP_SIZE, MIN_POPUP_SIZE};
pub use geometry::Geometry;
pub use handle::{ParseHandleError, ResizeHandle};
pub use region::{close_button_rect, region_at, PopupRegion};
