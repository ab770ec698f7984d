use indexmap::map::Entry;
use tracing::debug;

use crate::error::{SliderError, SliderResult};
use crate::extensions::SliderPlugin;
use crate::render::Renderer;

use super::UnitSlider;

impl<R: Renderer> UnitSlider<R> {
    /// Registers a plugin with unique identifier.
    pub fn register_plugin(&mut self, plugin: Box<dyn SliderPlugin>) -> SliderResult<()> {
        let plugin_id = plugin.id().to_owned();
        if plugin_id.is_empty() {
            return Err(SliderError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        match self.plugins.entry(plugin_id) {
            Entry::Occupied(entry) => Err(SliderError::InvalidData(format!(
                "plugin with id `{}` is already registered",
                entry.key()
            ))),
            Entry::Vacant(entry) => {
                debug!(plugin_id = entry.key().as_str(), "plugin registered");
                entry.insert(plugin);
                Ok(())
            }
        }
    }

    /// Unregisters a plugin by id. Returns `true` when removed.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        self.plugins.shift_remove(plugin_id).is_some()
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.contains_key(plugin_id)
    }
}
