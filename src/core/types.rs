use serde::{Deserialize, Serialize};

/// Rendered size of the slider strip in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 45,
        }
    }
}

/// Half-open selection `[start, end)` expressed in unit indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitRange {
    pub start: i64,
    pub end: i64,
}

impl UnitRange {
    #[must_use]
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn width(self) -> i64 {
        self.end - self.start
    }

    #[must_use]
    pub fn is_ordered(self) -> bool {
        self.start < self.end
    }
}

/// Horizontal placement of a selector element relative to the strip's left edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectorGeometry {
    pub left_px: f64,
    pub width_px: f64,
}

impl SelectorGeometry {
    #[must_use]
    pub fn new(left_px: f64, width_px: f64) -> Self {
        Self { left_px, width_px }
    }

    #[must_use]
    pub fn right_px(self) -> f64 {
        self.left_px + self.width_px
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.left_px.is_finite() && self.width_px.is_finite() && self.width_px >= 0.0
    }
}
