mod caption_formatter;
mod drag_controller;
mod json_contract;
mod plugin_dispatch;
mod plugin_registry;
mod selection_controller;
mod selection_validation;
mod slider_config;
mod snapshot;
mod time_selection_sync;
mod time_slider;
mod unit_slider;

pub use crate::extensions::SliderEvent;
pub use caption_formatter::{UnitCaptionContext, UnitCaptionFormatterFn};
pub use json_contract::{
    SLIDER_CONFIG_JSON_SCHEMA_V1, SLIDER_SNAPSHOT_JSON_SCHEMA_V1, SliderConfigJsonContractV1,
    SliderSnapshotJsonContractV1,
};
pub use slider_config::SliderConfig;
pub use snapshot::SliderSnapshot;
pub use time_selection_sync::UpdateSource;
pub use time_slider::TimeSlider;
pub use unit_slider::UnitSlider;
