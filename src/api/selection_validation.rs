use tracing::debug;

use crate::core::{UnitRange, UnitScale};

/// Filters a requested range through the unit-space invariant.
///
/// Out-of-bounds or inverted ranges are not errors: they collapse to "no
/// selection" so a bad caller can never leave a partially valid range behind.
pub(super) fn accept_selection_range(range: UnitRange, scale: UnitScale) -> Option<UnitRange> {
    if scale.accepts(range) {
        return Some(range);
    }
    debug!(
        start = range.start,
        end = range.end,
        unit_offset = scale.unit_offset(),
        unit_count = scale.unit_count(),
        "selection out of range, defaulting selection range to none"
    );
    None
}
