use crate::core::{SelectorGeometry, Viewport};
use crate::error::{SliderError, SliderResult};

/// Visual state of the slider for one paint pass.
///
/// `selector` is the committed selection; `feedback` is the uncommitted
/// preview shown only while a drag is in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderFrame {
    pub viewport: Viewport,
    pub background_html: String,
    pub selector: Option<SelectorGeometry>,
    pub feedback: Option<SelectorGeometry>,
}

impl SliderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            background_html: String::new(),
            selector: None,
            feedback: None,
        }
    }

    #[must_use]
    pub fn with_background_html(mut self, html: impl Into<String>) -> Self {
        self.background_html = html.into();
        self
    }

    #[must_use]
    pub fn with_selector(mut self, selector: Option<SelectorGeometry>) -> Self {
        self.selector = selector;
        self
    }

    #[must_use]
    pub fn with_feedback(mut self, feedback: Option<SelectorGeometry>) -> Self {
        self.feedback = feedback;
        self
    }

    pub fn validate(&self) -> SliderResult<()> {
        if !self.viewport.is_valid() {
            return Err(SliderError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for geometry in self.selector.iter().chain(self.feedback.iter()) {
            if !geometry.is_valid() {
                return Err(SliderError::InvalidData(format!(
                    "selector geometry must be finite with width >= 0, got {geometry:?}"
                )));
            }
        }

        Ok(())
    }
}
