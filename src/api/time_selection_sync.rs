use tracing::{debug, trace};

use crate::core::{TimeFrame, UnitRange};
use crate::error::{SliderError, SliderResult};
use crate::render::Renderer;

use super::{SliderEvent, TimeSlider};

/// Direction of a time-selection update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateSource {
    /// Assigned by the host; dates drive the slider's unit range.
    External,
    /// Derived from a range the slider committed; never pushed back.
    Internal,
}

impl<R: Renderer> TimeSlider<R> {
    /// Replaces the displayed span.
    ///
    /// Unchanged normalized frames are ignored. A selection outside the new
    /// frame is cleared, otherwise it is repositioned. Unit count and
    /// selection range move together, so plugins never observe the stale
    /// range under the new count.
    pub fn set_time_frame(&mut self, frame: TimeFrame) -> SliderResult<()> {
        let normalized = self.normalize(frame)?;
        if self.frame == Some(normalized) {
            debug!(frame = %normalized, "same time frame again, not updating");
            return Ok(());
        }

        let unit_count = self
            .granularity
            .unit_count(normalized.start(), normalized.end())?;
        let selection = match self.selection {
            Some(selection) if !normalized.contains(selection) => {
                debug!(
                    selection = %selection,
                    frame = %normalized,
                    "time selection outside new time frame, clearing"
                );
                None
            }
            selection => selection,
        };

        self.frame = Some(normalized);
        let unit_offset = self.slider.unit_offset();
        let range = selection
            .map(|selection| self.unit_range_for(selection, unit_offset, unit_count))
            .transpose()?;
        self.install_caption_formatter()?;
        self.slider.set_unit_window(unit_offset, unit_count, range)?;
        self.slider
            .emit_plugin_event(SliderEvent::TimeFrameChanged { frame: normalized });

        let accepted = self.selection_from_slider()?;
        self.store_time_selection(accepted);
        Ok(())
    }

    /// Assigns the selected dates from outside, e.g. from host state.
    pub fn set_time_selection(&mut self, selection: Option<TimeFrame>) -> SliderResult<()> {
        self.apply_time_selection(selection, UpdateSource::External)
    }

    pub fn clear_time_selection(&mut self) -> SliderResult<()> {
        self.apply_time_selection(None, UpdateSource::External)
    }

    pub(super) fn apply_time_selection(
        &mut self,
        selection: Option<TimeFrame>,
        source: UpdateSource,
    ) -> SliderResult<()> {
        let normalized = selection.map(|frame| self.normalize(frame)).transpose()?;
        if normalized == self.selection {
            trace!(?source, "time selection unchanged after normalization");
            return Ok(());
        }

        let accepted = match source {
            UpdateSource::Internal => normalized,
            UpdateSource::External if self.frame.is_some() => {
                self.position_slider(normalized)?;
                self.selection_from_slider()?
            }
            UpdateSource::External => normalized,
        };
        self.store_time_selection(accepted);
        Ok(())
    }

    /// Shifts the unit window while keeping the selected dates.
    pub(super) fn shift_unit_offset(&mut self, unit_offset: i64) -> SliderResult<()> {
        let unit_count = self.slider.unit_count();
        let range = match self.selection {
            Some(selection) if self.frame.is_some() => {
                Some(self.unit_range_for(selection, unit_offset, unit_count)?)
            }
            _ => self.slider.selection_range(),
        };
        self.slider.set_unit_window(unit_offset, unit_count, range)?;

        if self.frame.is_some() {
            let accepted = self.selection_from_slider()?;
            self.store_time_selection(accepted);
        }
        Ok(())
    }

    /// Dates of the slider's committed range, if any.
    pub(super) fn selection_from_slider(&self) -> SliderResult<Option<TimeFrame>> {
        self.slider
            .selection_range()
            .map(|range| self.range_to_time_frame(range))
            .transpose()
    }

    fn position_slider(&mut self, selection: Option<TimeFrame>) -> SliderResult<()> {
        let range = match selection {
            Some(selection) => Some(self.unit_range_for(
                selection,
                self.slider.unit_offset(),
                self.slider.unit_count(),
            )?),
            None => None,
        };
        self.slider.set_selection_range(range)?;
        Ok(())
    }

    /// Unit range covering `selection` in a window of `unit_count` units
    /// starting at `unit_offset`, or the first unit when it does not fit.
    fn unit_range_for(
        &self,
        selection: TimeFrame,
        unit_offset: i64,
        unit_count: i64,
    ) -> SliderResult<UnitRange> {
        let Some(frame) = self.frame else {
            return Err(SliderError::TimeFrameNotSet);
        };
        let start = unit_offset + self.calc_unit_count(frame.start(), selection.start())? - 1;
        let end = unit_offset + self.calc_unit_count(frame.start(), selection.end())?;

        if start >= unit_offset && end <= unit_offset + unit_count {
            return Ok(UnitRange::new(start, end));
        }
        debug!(
            start,
            end,
            unit_count,
            "time selection outside displayed units, defaulting to first unit"
        );
        Ok(UnitRange::new(unit_offset, unit_offset + 1))
    }

    pub(super) fn store_time_selection(&mut self, selection: Option<TimeFrame>) {
        if selection == self.selection {
            return;
        }
        self.selection = selection;
        match selection {
            Some(selection) => debug!(selection = %selection, "new time selection"),
            None => debug!("time selection cleared"),
        }
        self.slider
            .emit_plugin_event(SliderEvent::TimeSelectionChanged { selection });
    }
}
