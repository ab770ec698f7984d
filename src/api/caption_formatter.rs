use std::sync::Arc;

/// Position of a unit whose caption is being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitCaptionContext {
    pub unit: i64,
    pub unit_offset: i64,
}

impl UnitCaptionContext {
    /// Zero-based index of the unit within the displayed window.
    #[must_use]
    pub fn position(self) -> i64 {
        self.unit - self.unit_offset
    }
}

pub type UnitCaptionFormatterFn =
    Arc<dyn Fn(UnitCaptionContext) -> String + Send + Sync + 'static>;
