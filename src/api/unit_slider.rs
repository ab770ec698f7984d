use indexmap::IndexMap;
use tracing::trace;

use crate::core::{SelectorGeometry, UnitRange, UnitScale, Viewport};
use crate::error::{SliderError, SliderResult};
use crate::extensions::SliderPlugin;
use crate::interaction::{DragMode, DragState, PointerHost};
use crate::render::{Renderer, SliderFrame, background_markup};

use super::{SliderConfig, UnitCaptionContext, UnitCaptionFormatterFn};

/// Unit-space slider core.
///
/// Owns the integer coordinate system of `unit_count` cells starting at
/// `unit_offset`, the committed selection range and the pixel caches derived
/// from the last known width. Unit indices are authoritative; every setter
/// recomputes the pixel caches from them before returning.
pub struct UnitSlider<R: Renderer> {
    pub(super) renderer: R,
    pub(super) host: Box<dyn PointerHost>,
    pub(super) viewport: Viewport,
    pub(super) scale: UnitScale,
    pub(super) selection: Option<UnitRange>,
    pub(super) selector: Option<SelectorGeometry>,
    pub(super) feedback: Option<SelectorGeometry>,
    pub(super) drag: DragState,
    pub(super) resize_border_px: f64,
    pub(super) raster_units: f64,
    pub(super) caption_formatter: Option<UnitCaptionFormatterFn>,
    pub(super) background_html: String,
    pub(super) plugins: IndexMap<String, Box<dyn SliderPlugin>>,
}

impl<R: Renderer> UnitSlider<R> {
    /// Creates a slider and subscribes it to root-scope pointer-up events.
    ///
    /// `config.raster_size_ms` is interpreted by [`super::TimeSlider`]; a bare
    /// unit slider has no time axis and does not snap.
    pub fn new(
        renderer: R,
        mut host: Box<dyn PointerHost>,
        config: SliderConfig,
    ) -> SliderResult<Self> {
        let config = config.validate()?;
        host.subscribe_global_pointer_up();

        let mut slider = Self {
            renderer,
            host,
            viewport: config.viewport,
            scale: UnitScale::new(config.unit_offset, 0, f64::from(config.viewport.width)),
            selection: None,
            selector: None,
            feedback: None,
            drag: DragState::default(),
            resize_border_px: config.resize_border_px,
            raster_units: 0.0,
            caption_formatter: None,
            background_html: String::new(),
            plugins: IndexMap::new(),
        };

        slider.set_unit_count(config.unit_count)?;
        if config.selection_range.is_some() {
            slider.set_selection_range(config.selection_range)?;
        }
        Ok(slider)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn unit_offset(&self) -> i64 {
        self.scale.unit_offset()
    }

    #[must_use]
    pub fn unit_count(&self) -> i64 {
        self.scale.unit_count()
    }

    #[must_use]
    pub fn unit_scale(&self) -> UnitScale {
        self.scale
    }

    #[must_use]
    pub fn pixels_per_unit(&self) -> f64 {
        self.scale.pixels_per_unit()
    }

    #[must_use]
    pub fn pixel_to_unit(&self, px: f64) -> i64 {
        self.scale.pixel_to_unit(px)
    }

    #[must_use]
    pub fn selection_range(&self) -> Option<UnitRange> {
        self.selection
    }

    /// Committed selector geometry; `None` while nothing is selected.
    #[must_use]
    pub fn selector_geometry(&self) -> Option<SelectorGeometry> {
        self.selector
    }

    /// Uncommitted drag preview; `None` outside of a drag.
    #[must_use]
    pub fn feedback_geometry(&self) -> Option<SelectorGeometry> {
        self.feedback
    }

    #[must_use]
    pub fn drag_mode(&self) -> DragMode {
        self.drag.mode()
    }

    #[must_use]
    pub fn resize_border_px(&self) -> f64 {
        self.resize_border_px
    }

    #[must_use]
    pub fn raster_units(&self) -> f64 {
        self.raster_units
    }

    /// Sets the commit snap interval as a (possibly fractional) unit count.
    pub fn set_raster_units(&mut self, raster_units: f64) -> SliderResult<()> {
        if !raster_units.is_finite() || raster_units < 0.0 {
            return Err(SliderError::InvalidData(
                "raster units must be finite and >= 0".to_owned(),
            ));
        }
        self.raster_units = raster_units;
        Ok(())
    }

    #[must_use]
    pub fn background_html(&self) -> &str {
        &self.background_html
    }

    /// Caption for `unit`: the formatter's text, or the unit index.
    #[must_use]
    pub fn unit_caption(&self, unit: i64) -> String {
        match &self.caption_formatter {
            Some(formatter) => formatter(UnitCaptionContext {
                unit,
                unit_offset: self.scale.unit_offset(),
            }),
            None => unit.to_string(),
        }
    }

    pub fn set_unit_caption_formatter(
        &mut self,
        formatter: UnitCaptionFormatterFn,
    ) -> SliderResult<()> {
        self.caption_formatter = Some(formatter);
        self.refresh_background();
        self.present()
    }

    pub fn clear_unit_caption_formatter(&mut self) -> SliderResult<()> {
        self.caption_formatter = None;
        self.refresh_background();
        self.present()
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub(super) fn refresh_background(&mut self) {
        if self.scale.unit_count() <= 0 {
            self.background_html.clear();
            return;
        }
        let captions: Vec<String> = (self.scale.unit_offset()..self.scale.upper_bound())
            .map(|unit| self.unit_caption(unit))
            .collect();
        self.background_html = background_markup(captions, self.viewport);
    }

    pub(super) fn reposition_selector(&mut self) {
        self.selector = self.selection.map(|range| self.scale.geometry(range));
    }

    pub(super) fn present(&mut self) -> SliderResult<()> {
        let frame = SliderFrame::new(self.viewport)
            .with_background_html(self.background_html.clone())
            .with_selector(self.selector)
            .with_feedback(self.feedback);
        trace!(
            selector = ?frame.selector,
            feedback = ?frame.feedback,
            "present slider frame"
        );
        self.renderer.render(&frame)
    }
}
