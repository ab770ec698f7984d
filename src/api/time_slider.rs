use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::core::{Granularity, TimeFrame, UnitRange};
use crate::error::{SliderError, SliderResult};
use crate::extensions::SliderPlugin;
use crate::interaction::{DragMode, PointerHost};
use crate::render::Renderer;

use super::{SliderConfig, SliderEvent, UnitCaptionContext, UnitSlider, UpdateSource};

/// Calendar adapter over a [`UnitSlider`].
///
/// Holds the normalized time frame and time selection, keeps the wrapped
/// slider's unit count and selection range in sync with them, and turns
/// committed unit ranges back into date ranges.
pub struct TimeSlider<R: Renderer> {
    pub(super) slider: UnitSlider<R>,
    pub(super) granularity: Granularity,
    pub(super) frame: Option<TimeFrame>,
    pub(super) selection: Option<TimeFrame>,
    pub(super) raster_size_ms: i64,
}

impl<R: Renderer> TimeSlider<R> {
    pub fn new(renderer: R, host: Box<dyn PointerHost>, config: SliderConfig) -> SliderResult<Self> {
        let granularity = config.unit_type.ensure_implemented()?;
        let slider_config = SliderConfig {
            unit_count: 0,
            selection_range: None,
            ..config
        };

        let mut time_slider = Self {
            slider: UnitSlider::new(renderer, host, slider_config)?,
            granularity,
            frame: None,
            selection: None,
            raster_size_ms: 0,
        };
        time_slider.set_raster_size_ms(config.raster_size_ms)?;
        if let Some(frame) = config.time_frame {
            time_slider.set_time_frame(frame)?;
        }
        if config.time_selection.is_some() {
            time_slider.set_time_selection(config.time_selection)?;
        }
        Ok(time_slider)
    }

    /// Read access to the wrapped unit slider.
    #[must_use]
    pub fn slider(&self) -> &UnitSlider<R> {
        &self.slider
    }

    #[must_use]
    pub fn unit_type(&self) -> Granularity {
        self.granularity
    }

    /// Normalized time frame, if one was set.
    #[must_use]
    pub fn time_frame(&self) -> Option<TimeFrame> {
        self.frame
    }

    /// Normalized time selection, if any.
    #[must_use]
    pub fn time_selection(&self) -> Option<TimeFrame> {
        self.selection
    }

    #[must_use]
    pub fn selection_range(&self) -> Option<UnitRange> {
        self.slider.selection_range()
    }

    #[must_use]
    pub fn unit_count(&self) -> i64 {
        self.slider.unit_count()
    }

    #[must_use]
    pub fn unit_offset(&self) -> i64 {
        self.slider.unit_offset()
    }

    #[must_use]
    pub fn drag_mode(&self) -> DragMode {
        self.slider.drag_mode()
    }

    #[must_use]
    pub fn raster_size_ms(&self) -> i64 {
        self.raster_size_ms
    }

    /// Switches the calendar unit, re-deriving unit count, captions and
    /// selector position from the stored dates.
    ///
    /// Fails without touching the slider when the stored dates cannot be
    /// expressed in the new unit.
    pub fn set_unit_type(&mut self, unit_type: Granularity) -> SliderResult<()> {
        let unit_type = unit_type.ensure_implemented()?;
        if unit_type == self.granularity {
            return Ok(());
        }

        if let Some(frame) = self.frame {
            let normalized = normalize_with(unit_type, frame)?;
            unit_type.unit_count(normalized.start(), normalized.end())?;
        }
        let renormalized = self
            .selection
            .map(|frame| normalize_with(unit_type, frame))
            .transpose()?;

        let previous = self.granularity;
        self.granularity = unit_type;
        if let Err(err) = self.sync_raster() {
            self.granularity = previous;
            return Err(err);
        }
        self.slider
            .emit_plugin_event(SliderEvent::UnitTypeChanged { unit_type });

        // Taking the frame forces a full recount even when it normalizes to
        // the same instants under the new unit.
        match self.frame.take() {
            Some(frame) => self.set_time_frame(frame).inspect_err(|_| {
                self.granularity = previous;
                self.frame = Some(frame);
            }),
            None => {
                self.store_time_selection(renormalized);
                self.install_caption_formatter()
            }
        }
    }

    /// Sets the commit snap interval in milliseconds; `0` disables snapping.
    pub fn set_raster_size_ms(&mut self, raster_size_ms: i64) -> SliderResult<()> {
        if raster_size_ms < 0 {
            return Err(SliderError::InvalidData(
                "raster size must be >= 0 milliseconds".to_owned(),
            ));
        }
        self.raster_size_ms = raster_size_ms;
        self.sync_raster()
    }

    /// Number of units of the active granularity touched by `start..=end`.
    pub fn calc_unit_count(&self, start: NaiveDateTime, end: NaiveDateTime) -> SliderResult<i64> {
        self.granularity.unit_count(start, end)
    }

    /// First instant of `unit`, counted in whole steps from the frame start.
    pub fn unit_to_date(&self, unit: i64) -> SliderResult<NaiveDateTime> {
        let frame = self.frame.ok_or(SliderError::TimeFrameNotSet)?;
        self.granularity
            .step(frame.start(), unit - self.slider.unit_offset())
    }

    /// Converts a unit range into the normalized dates it covers.
    pub fn range_to_time_frame(&self, range: UnitRange) -> SliderResult<TimeFrame> {
        let start = self
            .granularity
            .normalize_start(self.unit_to_date(range.start)?)?;
        let end = self
            .granularity
            .normalize_end(self.unit_to_date(range.end - 1)?)?;
        TimeFrame::new(start, end)
    }

    /// Snaps both endpoints of `frame` to unit boundaries.
    pub fn normalize(&self, frame: TimeFrame) -> SliderResult<TimeFrame> {
        normalize_with(self.granularity, frame)
    }

    /// Shifts the first displayed unit; the selected dates stay put.
    pub fn set_unit_offset(&mut self, unit_offset: i64) -> SliderResult<()> {
        if unit_offset == self.slider.unit_offset() {
            return Ok(());
        }
        self.shift_unit_offset(unit_offset)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> SliderResult<()> {
        self.slider.resize(width, height)
    }

    pub fn pointer_down(&mut self, x: f64) -> SliderResult<()> {
        self.slider.pointer_down(x)
    }

    pub fn pointer_move(&mut self, x: f64) -> SliderResult<()> {
        self.slider.pointer_move(x)
    }

    pub fn pointer_out(&mut self) {
        self.slider.pointer_out();
    }

    /// Commits a drag and publishes the resulting time selection.
    pub fn pointer_up(&mut self, x: f64) -> SliderResult<()> {
        if self.slider.pointer_up(x)? {
            let committed = self.selection_from_slider()?;
            self.apply_time_selection(committed, UpdateSource::Internal)?;
        }
        Ok(())
    }

    pub fn register_plugin(&mut self, plugin: Box<dyn SliderPlugin>) -> SliderResult<()> {
        self.slider.register_plugin(plugin)
    }

    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        self.slider.unregister_plugin(plugin_id)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.slider.into_renderer()
    }

    pub(super) fn install_caption_formatter(&mut self) -> SliderResult<()> {
        let Some(frame) = self.frame else {
            return self.slider.clear_unit_caption_formatter();
        };
        let granularity = self.granularity;
        self.slider
            .set_unit_caption_formatter(Arc::new(move |context: UnitCaptionContext| {
                granularity
                    .step(frame.start(), context.position())
                    .and_then(|date| granularity.caption(date))
                    .unwrap_or_else(|_| context.unit.to_string())
            }))
    }

    fn sync_raster(&mut self) -> SliderResult<()> {
        let raster_units =
            self.raster_size_ms as f64 / self.granularity.nominal_unit_millis() as f64;
        debug!(
            raster_size_ms = self.raster_size_ms,
            raster_units,
            unit_type = %self.granularity,
            "raster synced"
        );
        self.slider.set_raster_units(raster_units)
    }
}

fn normalize_with(granularity: Granularity, frame: TimeFrame) -> SliderResult<TimeFrame> {
    TimeFrame::new(
        granularity.normalize_start(frame.start())?,
        granularity.normalize_end(frame.end())?,
    )
}
