use tracing::{debug, trace};

use crate::core::{UnitRange, Viewport};
use crate::error::{SliderError, SliderResult};
use crate::render::Renderer;

use super::selection_validation::accept_selection_range;
use super::{SliderEvent, UnitSlider};

impl<R: Renderer> UnitSlider<R> {
    /// Replaces the committed selection and notifies plugins on change.
    ///
    /// Ranges violating `unit_offset <= start < end <= unit_offset + unit_count`
    /// are replaced with `None`. Returns `true` when the stored range changed.
    pub fn set_selection_range(&mut self, range: Option<UnitRange>) -> SliderResult<bool> {
        let accepted = range.and_then(|range| accept_selection_range(range, self.scale));
        if accepted == self.selection {
            debug!(range = ?accepted, "same selection range again, not updating");
            return Ok(false);
        }

        self.selection = accepted;
        self.refresh_background();
        self.reposition_selector();
        self.present()?;

        match accepted {
            Some(range) => debug!(start = range.start, end = range.end, "new selection range"),
            None => debug!("selection range cleared"),
        }
        self.emit_plugin_event(SliderEvent::SelectionRangeChanged { range: accepted });
        Ok(true)
    }

    /// Sets the number of displayed units.
    ///
    /// Non-positive counts are ignored. A selection that still fits is only
    /// repositioned; one that no longer fits is cleared.
    pub fn set_unit_count(&mut self, unit_count: i64) -> SliderResult<()> {
        if unit_count <= 0 {
            trace!(unit_count, "ignoring non-positive unit count");
            return Ok(());
        }
        if unit_count == self.scale.unit_count() {
            return Ok(());
        }

        self.scale.set_unit_count(unit_count);
        self.emit_plugin_event(SliderEvent::UnitCountChanged { unit_count });

        if let Some(range) = self.selection {
            if !self.scale.accepts(range) {
                self.set_selection_range(None)?;
                return Ok(());
            }
        }
        self.refresh_background();
        self.reposition_selector();
        self.present()
    }

    /// Shifts the index of the first displayed unit.
    ///
    /// A selection left outside the shifted window is reset to the first unit.
    pub fn set_unit_offset(&mut self, unit_offset: i64) -> SliderResult<()> {
        if unit_offset == self.scale.unit_offset() {
            return Ok(());
        }
        self.scale.set_unit_offset(unit_offset);

        if let Some(range) = self.selection {
            if !self.scale.accepts(range) {
                let fallback = UnitRange::new(unit_offset, unit_offset + 1);
                if self.set_selection_range(Some(fallback))? {
                    return Ok(());
                }
            }
        }
        self.refresh_background();
        self.reposition_selector();
        self.present()
    }

    /// Moves the unit window and replaces the selection in one step.
    ///
    /// Plugins see the final state only: at most one `UnitCountChanged`
    /// followed by at most one `SelectionRangeChanged`.
    pub(super) fn set_unit_window(
        &mut self,
        unit_offset: i64,
        unit_count: i64,
        range: Option<UnitRange>,
    ) -> SliderResult<()> {
        let count_changed = unit_count > 0 && unit_count != self.scale.unit_count();
        self.scale.set_unit_offset(unit_offset);
        if count_changed {
            self.scale.set_unit_count(unit_count);
        }

        let accepted = range.and_then(|range| accept_selection_range(range, self.scale));
        let range_changed = accepted != self.selection;
        self.selection = accepted;
        self.refresh_background();
        self.reposition_selector();
        self.present()?;

        if count_changed {
            self.emit_plugin_event(SliderEvent::UnitCountChanged { unit_count });
        }
        if range_changed {
            debug!(range = ?accepted, unit_offset, "selection range moved with unit window");
            self.emit_plugin_event(SliderEvent::SelectionRangeChanged { range: accepted });
        }
        Ok(())
    }

    /// Handles a host resize notification.
    pub fn resize(&mut self, width: u32, height: u32) -> SliderResult<()> {
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            return Err(SliderError::InvalidViewport { width, height });
        }

        self.viewport = viewport;
        self.scale.set_width_px(f64::from(width));
        self.refresh_background();
        self.reposition_selector();
        self.present()?;
        self.emit_plugin_event(SliderEvent::Resized { width, height });
        Ok(())
    }

    /// Marks along the strip are not supported.
    pub fn set_marks(&mut self, _marks: &[i64]) -> SliderResult<()> {
        Err(SliderError::NotImplemented("mark rendering"))
    }
}
