use serde::{Deserialize, Serialize};

use crate::core::{Granularity, SelectorGeometry, TimeFrame, UnitRange, Viewport};
use crate::interaction::DragMode;
use crate::render::Renderer;

use super::{TimeSlider, UnitSlider};

/// Serializable state snapshot used by regression tests and host diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshot {
    pub viewport: Viewport,
    pub unit_offset: i64,
    pub unit_count: i64,
    pub pixels_per_unit: f64,
    pub selection_range: Option<UnitRange>,
    pub selector: Option<SelectorGeometry>,
    pub feedback: Option<SelectorGeometry>,
    pub drag_mode: DragMode,
    pub captions: Vec<String>,
    #[serde(default)]
    pub unit_type: Option<Granularity>,
    #[serde(default)]
    pub time_frame: Option<TimeFrame>,
    #[serde(default)]
    pub time_selection: Option<TimeFrame>,
    #[serde(default)]
    pub raster_size_ms: i64,
}

impl<R: Renderer> UnitSlider<R> {
    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            viewport: self.viewport,
            unit_offset: self.scale.unit_offset(),
            unit_count: self.scale.unit_count(),
            pixels_per_unit: self.scale.pixels_per_unit(),
            selection_range: self.selection,
            selector: self.selector,
            feedback: self.feedback,
            drag_mode: self.drag.mode(),
            captions: (self.scale.unit_offset()..self.scale.upper_bound())
                .map(|unit| self.unit_caption(unit))
                .collect(),
            unit_type: None,
            time_frame: None,
            time_selection: None,
            raster_size_ms: 0,
        }
    }
}

impl<R: Renderer> TimeSlider<R> {
    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        SliderSnapshot {
            unit_type: Some(self.granularity),
            time_frame: self.frame,
            time_selection: self.selection,
            raster_size_ms: self.raster_size_ms,
            ..self.slider.snapshot()
        }
    }
}
