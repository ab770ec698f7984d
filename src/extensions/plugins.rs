use serde::{Deserialize, Serialize};

use crate::core::{Granularity, TimeFrame, UnitRange, Viewport};
use crate::interaction::DragMode;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderContext {
    pub viewport: Viewport,
    pub unit_offset: i64,
    pub unit_count: i64,
    pub selection_range: Option<UnitRange>,
    pub drag_mode: DragMode,
}

/// Event stream exposed to plugins.
///
/// `SelectionRangeChanged` fires only when a committed range actually
/// changes; drag feedback never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SliderEvent {
    Resized { width: u32, height: u32 },
    UnitCountChanged { unit_count: i64 },
    SelectionRangeChanged { range: Option<UnitRange> },
    DragStarted { mode: DragMode },
    DragEnded { mode: DragMode },
    UnitTypeChanged { unit_type: Granularity },
    TimeFrameChanged { frame: TimeFrame },
    TimeSelectionChanged { selection: Option<TimeFrame> },
}

/// Extension hook interface for bounded custom logic.
pub trait SliderPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: SliderEvent, context: SliderContext);
}
