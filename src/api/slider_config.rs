use serde::{Deserialize, Serialize};

use crate::core::{Granularity, TimeFrame, UnitRange, Viewport};
use crate::error::{SliderError, SliderResult};
use crate::interaction::DEFAULT_RESIZE_BORDER_PX;

/// Public slider bootstrap configuration.
///
/// Serializable so hosts can keep widget setup in their own config files.
/// `unit_count` and `selection_range` drive a bare [`super::UnitSlider`];
/// a [`super::TimeSlider`] derives both from `time_frame` and
/// `time_selection` instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub unit_offset: i64,
    #[serde(default)]
    pub unit_count: i64,
    #[serde(default)]
    pub selection_range: Option<UnitRange>,
    #[serde(default)]
    pub time_frame: Option<TimeFrame>,
    #[serde(default)]
    pub time_selection: Option<TimeFrame>,
    #[serde(default)]
    pub unit_type: Granularity,
    /// Snap interval for committed edges in milliseconds; `0` disables snapping.
    #[serde(default)]
    pub raster_size_ms: i64,
    #[serde(default = "default_resize_border_px")]
    pub resize_border_px: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl SliderConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            unit_offset: 0,
            unit_count: 0,
            selection_range: None,
            time_frame: None,
            time_selection: None,
            unit_type: Granularity::default(),
            raster_size_ms: 0,
            resize_border_px: default_resize_border_px(),
        }
    }

    #[must_use]
    pub fn with_unit_offset(mut self, unit_offset: i64) -> Self {
        self.unit_offset = unit_offset;
        self
    }

    #[must_use]
    pub fn with_unit_count(mut self, unit_count: i64) -> Self {
        self.unit_count = unit_count;
        self
    }

    #[must_use]
    pub fn with_selection_range(mut self, range: UnitRange) -> Self {
        self.selection_range = Some(range);
        self
    }

    #[must_use]
    pub fn with_time_frame(mut self, frame: TimeFrame) -> Self {
        self.time_frame = Some(frame);
        self
    }

    #[must_use]
    pub fn with_time_selection(mut self, selection: TimeFrame) -> Self {
        self.time_selection = Some(selection);
        self
    }

    #[must_use]
    pub fn with_unit_type(mut self, unit_type: Granularity) -> Self {
        self.unit_type = unit_type;
        self
    }

    #[must_use]
    pub fn with_raster_size_ms(mut self, raster_size_ms: i64) -> Self {
        self.raster_size_ms = raster_size_ms;
        self
    }

    #[must_use]
    pub fn with_resize_border_px(mut self, resize_border_px: f64) -> Self {
        self.resize_border_px = resize_border_px;
        self
    }

    pub(super) fn validate(self) -> SliderResult<Self> {
        if !self.viewport.is_valid() {
            return Err(SliderError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.resize_border_px.is_finite() || self.resize_border_px < 0.0 {
            return Err(SliderError::InvalidData(
                "resize border must be finite and >= 0".to_owned(),
            ));
        }
        if self.raster_size_ms < 0 {
            return Err(SliderError::InvalidData(
                "raster size must be >= 0 milliseconds".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_resize_border_px() -> f64 {
    DEFAULT_RESIZE_BORDER_PX
}
