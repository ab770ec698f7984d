pub mod granularity;
pub mod time_frame;
pub mod types;
pub mod unit_scale;

pub use granularity::Granularity;
pub use time_frame::TimeFrame;
pub use types::{SelectorGeometry, UnitRange, Viewport};
pub use unit_scale::UnitScale;
