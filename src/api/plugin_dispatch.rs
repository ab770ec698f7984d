use crate::extensions::SliderContext;
use crate::render::Renderer;

use super::{SliderEvent, UnitSlider};

impl<R: Renderer> UnitSlider<R> {
    pub(super) fn plugin_context(&self) -> SliderContext {
        SliderContext {
            viewport: self.viewport,
            unit_offset: self.scale.unit_offset(),
            unit_count: self.scale.unit_count(),
            selection_range: self.selection,
            drag_mode: self.drag.mode(),
        }
    }

    /// Dispatches in registration order.
    pub(super) fn emit_plugin_event(&mut self, event: SliderEvent) {
        let context = self.plugin_context();
        for plugin in self.plugins.values_mut() {
            plugin.on_event(event, context);
        }
    }
}
