mod drag;
mod host;

pub use drag::{DragState, classify_pointer, hover_cursor, propose_range};
pub use host::{NullPointerHost, PointerHost};

use serde::{Deserialize, Serialize};

/// Width of the grab zone on each side of a selector edge, in pixels.
pub const DEFAULT_RESIZE_BORDER_PX: f64 = 10.0;

/// Drag state machine mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragMode {
    #[default]
    Idle,
    /// Whole selection follows the pointer, keeping its width.
    Moving,
    /// Left edge follows the pointer.
    ResizingStart,
    /// Right edge follows the pointer.
    ResizingEnd,
}

impl DragMode {
    #[must_use]
    pub fn is_dragging(self) -> bool {
        self != Self::Idle
    }
}

/// Cursor shapes the slider asks the host to show application-wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorShape {
    #[default]
    Default,
    Pointer,
    EwResize,
    Move,
}

impl CursorShape {
    /// CSS cursor keyword.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pointer => "pointer",
            Self::EwResize => "ew-resize",
            Self::Move => "move",
        }
    }
}
