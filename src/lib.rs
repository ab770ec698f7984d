//! timeslider-rs: headless time-range selector.
//!
//! The crate is split in two cooperating layers. [`api::UnitSlider`] owns an
//! integer unit coordinate system, maps pointer pixels onto it and drives the
//! drag/resize state machine. [`api::TimeSlider`] wraps it and translates
//! between unit indices and calendar dates for a chosen [`core::Granularity`].
//! Painting, theming and event wiring stay with the host through the
//! [`render::Renderer`] and [`interaction::PointerHost`] traits.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{SliderConfig, TimeSlider, UnitSlider};
pub use error::{SliderError, SliderResult};
