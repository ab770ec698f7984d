use crate::error::SliderResult;
use crate::render::{Renderer, SliderFrame};

/// No-op renderer used by tests and headless usage.
///
/// Frames are still validated and the last one is kept for inspection.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_frame: Option<SliderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SliderFrame) -> SliderResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
