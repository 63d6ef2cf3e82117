//! Pointer outcome type

use serde::Serialize;

/// Result of routing a pointer event through the popup host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerOutcome {
    /// Event was consumed by the popup
    Handled,
    /// Event was not for the popup (pass through to content)
    Unhandled,
    /// Event closed the popup
    Closed,
}
