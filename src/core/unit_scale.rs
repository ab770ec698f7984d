use serde::{Deserialize, Serialize};

use crate::core::{SelectorGeometry, UnitRange};

/// Integer unit coordinate system laid over a strip of `width_px` pixels.
///
/// Unit `unit_offset` occupies the leftmost cell; the strip holds
/// `unit_count` equally wide cells. Pixel values are derived from the unit
/// indices and never the other way round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitScale {
    unit_offset: i64,
    unit_count: i64,
    width_px: f64,
}

impl UnitScale {
    #[must_use]
    pub fn new(unit_offset: i64, unit_count: i64, width_px: f64) -> Self {
        Self {
            unit_offset,
            unit_count: unit_count.max(0),
            width_px: width_px.max(0.0),
        }
    }

    #[must_use]
    pub fn unit_offset(self) -> i64 {
        self.unit_offset
    }

    #[must_use]
    pub fn unit_count(self) -> i64 {
        self.unit_count
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        self.width_px
    }

    /// Exclusive upper bound of the unit space.
    #[must_use]
    pub fn upper_bound(self) -> i64 {
        self.unit_offset.saturating_add(self.unit_count)
    }

    pub fn set_unit_offset(&mut self, unit_offset: i64) {
        self.unit_offset = unit_offset;
    }

    pub fn set_unit_count(&mut self, unit_count: i64) {
        self.unit_count = unit_count.max(0);
    }

    pub fn set_width_px(&mut self, width_px: f64) {
        self.width_px = width_px.max(0.0);
    }

    /// Fractional pixel width of one unit; `0.0` while the scale is empty.
    #[must_use]
    pub fn pixels_per_unit(self) -> f64 {
        if self.unit_count <= 0 {
            return 0.0;
        }
        self.width_px / self.unit_count as f64
    }

    /// Maps a strip-relative pixel onto the unit it falls in.
    ///
    /// Uses floor semantics: a pixel on a cell boundary belongs to the cell on
    /// its right. An empty scale maps everything onto `unit_offset`.
    #[must_use]
    pub fn pixel_to_unit(self, px: f64) -> i64 {
        let per_unit = self.pixels_per_unit();
        if per_unit <= 0.0 || !px.is_finite() {
            return self.unit_offset;
        }
        // `as` saturates, so pixels far off the strip stay representable.
        self.unit_offset.saturating_add((px / per_unit).floor() as i64)
    }

    /// Left pixel edge of `unit`, floored to a whole pixel.
    #[must_use]
    pub fn unit_to_pixel(self, unit: i64) -> f64 {
        (self.pixels_per_unit() * (unit - self.unit_offset) as f64).floor()
    }

    #[must_use]
    pub fn geometry(self, range: UnitRange) -> SelectorGeometry {
        let per_unit = self.pixels_per_unit();
        SelectorGeometry::new(
            self.unit_to_pixel(range.start),
            (per_unit * range.width() as f64).floor(),
        )
    }

    /// Whether `range` is ordered and lies fully inside the unit space.
    #[must_use]
    pub fn accepts(self, range: UnitRange) -> bool {
        range.is_ordered() && range.start >= self.unit_offset && range.end <= self.upper_bound()
    }

    /// Snaps a pixel down to a multiple of `raster_units` unit widths.
    ///
    /// A non-positive raster leaves the pixel untouched.
    #[must_use]
    pub fn snap_px(self, px: f64, raster_units: f64) -> f64 {
        let raster_px = raster_units * self.pixels_per_unit();
        if !raster_px.is_finite() || raster_px <= 0.0 {
            return px;
        }
        (px / raster_px).floor() * raster_px
    }
}
