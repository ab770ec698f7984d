//! Observer hooks for hosts and add-ons.
//!
//! Plugins only observe; they never mutate slider internals.

pub mod plugins;

pub use plugins::{SliderContext, SliderEvent, SliderPlugin};
