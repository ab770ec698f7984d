use crate::core::{SelectorGeometry, UnitRange};

use super::{CursorShape, DragMode};

/// Runtime state of an in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    mode: DragMode,
    grab_offset_px: f64,
}

impl DragState {
    #[must_use]
    pub fn mode(self) -> DragMode {
        self.mode
    }

    /// Distance between the pointer and the selector's left edge at grab time.
    #[must_use]
    pub fn grab_offset_px(self) -> f64 {
        self.grab_offset_px
    }

    pub fn begin(&mut self, mode: DragMode, grab_offset_px: f64) {
        self.mode = mode;
        self.grab_offset_px = grab_offset_px;
    }

    /// Returns the mode that was active and resets to idle.
    pub fn finish(&mut self) -> DragMode {
        let mode = self.mode;
        *self = Self::default();
        mode
    }
}

/// Decides what a pointer-down at `pointer_x` would start.
///
/// The left grab zone wins over the right one when a narrow selector makes
/// them overlap.
#[must_use]
pub fn classify_pointer(pointer_x: f64, selector: SelectorGeometry, border_px: f64) -> DragMode {
    let left = selector.left_px;
    let right = selector.right_px();

    if pointer_x >= left - border_px && pointer_x <= left + border_px {
        DragMode::ResizingStart
    } else if pointer_x >= right - border_px && pointer_x <= right + border_px {
        DragMode::ResizingEnd
    } else if pointer_x < left - border_px || pointer_x > right + border_px {
        DragMode::Idle
    } else {
        DragMode::Moving
    }
}

/// Cursor suggested while hovering without a drag in progress.
#[must_use]
pub fn hover_cursor(mode: DragMode) -> CursorShape {
    match mode {
        DragMode::Idle => CursorShape::Default,
        DragMode::Moving => CursorShape::Pointer,
        DragMode::ResizingStart | DragMode::ResizingEnd => CursorShape::EwResize,
    }
}

/// Computes the range a drag would produce with its edge at `pointer_unit`.
///
/// `lower..upper` is the unit space. Moves keep the current width and are
/// pushed back inside the bounds; resizes never shrink below one unit.
#[must_use]
pub fn propose_range(
    mode: DragMode,
    pointer_unit: i64,
    current: UnitRange,
    lower: i64,
    upper: i64,
) -> Option<UnitRange> {
    // Pointers far outside the strip act like pointers on its edge.
    let pointer_unit = pointer_unit.max(lower).min(upper);
    match mode {
        DragMode::Idle => None,
        DragMode::Moving => {
            let width = current.width();
            let mut start = pointer_unit;
            if start.saturating_add(width) > upper {
                start = upper - width;
            } else if start < lower {
                start = lower;
            }
            Some(UnitRange::new(start, start + width))
        }
        DragMode::ResizingEnd => {
            let start = current.start;
            let mut end = pointer_unit;
            if end <= start {
                end = start + 1;
            }
            if end > upper {
                end = upper;
            }
            Some(UnitRange::new(start, end))
        }
        DragMode::ResizingStart => {
            let end = current.end;
            let mut start = pointer_unit;
            if start >= end {
                start = end - 1;
            }
            Some(UnitRange::new(start, end))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_uses_edge_zones() {
        let selector = SelectorGeometry::new(20.0, 30.0);
        assert_eq!(classify_pointer(15.0, selector, 10.0), DragMode::ResizingStart);
        assert_eq!(classify_pointer(30.0, selector, 10.0), DragMode::ResizingStart);
        assert_eq!(classify_pointer(35.0, selector, 10.0), DragMode::Moving);
        assert_eq!(classify_pointer(58.0, selector, 10.0), DragMode::ResizingEnd);
        assert_eq!(classify_pointer(61.0, selector, 10.0), DragMode::Idle);
        assert_eq!(classify_pointer(5.0, selector, 10.0), DragMode::Idle);
    }

    #[test]
    fn move_keeps_width_at_both_bounds() {
        let current = UnitRange::new(2, 5);
        assert_eq!(
            propose_range(DragMode::Moving, 9, current, 0, 10),
            Some(UnitRange::new(7, 10))
        );
        assert_eq!(
            propose_range(DragMode::Moving, -4, current, 0, 10),
            Some(UnitRange::new(0, 3))
        );
    }

    #[test]
    fn extreme_pointer_units_clamp_to_bounds() {
        let current = UnitRange::new(2, 5);
        assert_eq!(
            propose_range(DragMode::Moving, i64::MAX, current, 0, 10),
            Some(UnitRange::new(7, 10))
        );
        assert_eq!(
            propose_range(DragMode::Moving, i64::MIN, current, 0, 10),
            Some(UnitRange::new(0, 3))
        );
        assert_eq!(
            propose_range(DragMode::ResizingEnd, i64::MAX, current, 0, 10),
            Some(UnitRange::new(2, 10))
        );
        assert_eq!(
            propose_range(DragMode::ResizingStart, i64::MIN, current, 0, 10),
            Some(UnitRange::new(0, 5))
        );
    }

    #[test]
    fn resizes_keep_one_unit_minimum() {
        assert_eq!(
            propose_range(DragMode::ResizingEnd, 2, UnitRange::new(3, 6), 0, 10),
            Some(UnitRange::new(3, 4))
        );
        assert_eq!(
            propose_range(DragMode::ResizingStart, 8, UnitRange::new(3, 6), 0, 10),
            Some(UnitRange::new(5, 6))
        );
        assert_eq!(
            propose_range(DragMode::ResizingStart, -3, UnitRange::new(3, 6), 0, 10),
            Some(UnitRange::new(0, 6))
        );
        assert_eq!(
            propose_range(DragMode::ResizingEnd, 42, UnitRange::new(3, 6), 0, 10),
            Some(UnitRange::new(3, 10))
        );
    }

    #[test]
    fn finish_resets_to_idle() {
        let mut state = DragState::default();
        state.begin(DragMode::Moving, 12.0);
        assert_eq!(state.finish(), DragMode::Moving);
        assert_eq!(state.mode(), DragMode::Idle);
        assert_eq!(state.grab_offset_px(), 0.0);
    }
}
