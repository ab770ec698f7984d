use tracing::trace;

use crate::core::UnitRange;
use crate::error::{SliderError, SliderResult};
use crate::interaction::{CursorShape, DragMode, classify_pointer, hover_cursor, propose_range};
use crate::render::Renderer;

use super::{SliderEvent, UnitSlider};

impl<R: Renderer> UnitSlider<R> {
    /// Starts a move or resize when the pointer lands on the selector.
    ///
    /// `x` is relative to the strip's left edge.
    pub fn pointer_down(&mut self, x: f64) -> SliderResult<()> {
        validate_pointer_x(x)?;
        if self.drag.mode().is_dragging() {
            return Ok(());
        }
        let Some(selector) = self.selector else {
            return Ok(());
        };

        let mode = classify_pointer(x, selector, self.resize_border_px);
        let grab_offset_px = match mode {
            DragMode::Idle => return Ok(()),
            DragMode::Moving => x - selector.left_px,
            DragMode::ResizingStart | DragMode::ResizingEnd => 0.0,
        };
        self.drag.begin(mode, grab_offset_px);
        trace!(?mode, x, grab_offset_px, "drag started");
        self.emit_plugin_event(SliderEvent::DragStarted { mode });
        Ok(())
    }

    /// Updates the feedback overlay during a drag, or the hover cursor otherwise.
    pub fn pointer_move(&mut self, x: f64) -> SliderResult<()> {
        validate_pointer_x(x)?;
        let mode = self.drag.mode();
        if !mode.is_dragging() {
            let hover = self.selector.map_or(DragMode::Idle, |selector| {
                classify_pointer(x, selector, self.resize_border_px)
            });
            self.host.set_global_cursor(hover_cursor(hover));
            return Ok(());
        }

        self.host.set_global_cursor(CursorShape::Move);
        let Some(range) = self.drag_proposal(mode, x, false) else {
            return Ok(());
        };
        self.feedback = Some(self.scale.geometry(range));
        self.present()
    }

    /// Commits the drag in progress. Returns `true` when the committed
    /// selection changed.
    ///
    /// Hosts deliver this from application-root scope, so the pointer may be
    /// outside the strip.
    pub fn pointer_up(&mut self, x: f64) -> SliderResult<bool> {
        validate_pointer_x(x)?;
        let mode = self.drag.mode();
        if !mode.is_dragging() {
            return Ok(false);
        }

        let proposal = self.drag_proposal(mode, x, true);
        self.drag.finish();
        self.feedback = None;

        let changed = match proposal {
            Some(range) => self.set_selection_range(Some(range))?,
            None => false,
        };
        if !changed {
            self.present()?;
        }
        trace!(?mode, ?proposal, changed, "drag committed");
        self.emit_plugin_event(SliderEvent::DragEnded { mode });
        Ok(changed)
    }

    /// Pointer left the strip. A drag in progress keeps going.
    pub fn pointer_out(&mut self) {
        self.host.set_global_cursor(CursorShape::Default);
    }

    fn drag_proposal(&self, mode: DragMode, x: f64, commit: bool) -> Option<UnitRange> {
        let current = self.selection?;
        let mut edge_px = match mode {
            DragMode::Moving => x - self.drag.grab_offset_px(),
            _ => x,
        };
        if commit {
            edge_px = self.scale.snap_px(edge_px, self.raster_units);
        }
        propose_range(
            mode,
            self.scale.pixel_to_unit(edge_px),
            current,
            self.scale.unit_offset(),
            self.scale.upper_bound(),
        )
    }
}

fn validate_pointer_x(x: f64) -> SliderResult<()> {
    if !x.is_finite() {
        return Err(SliderError::InvalidData(
            "pointer x must be finite".to_owned(),
        ));
    }
    Ok(())
}
