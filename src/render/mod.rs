mod frame;
mod markup;
mod null_renderer;

pub use frame::SliderFrame;
pub use markup::{background_markup, escape_html};
pub use null_renderer::NullRenderer;

use crate::error::SliderResult;

/// Contract implemented by the host's painting layer.
///
/// Backends receive a fully materialized `SliderFrame` so drawing code stays
/// isolated from unit math and drag handling.
pub trait Renderer {
    fn render(&mut self, frame: &SliderFrame) -> SliderResult<()>;
}
