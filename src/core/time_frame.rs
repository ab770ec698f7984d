use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

/// Ordered date-time pair used both for the displayed span and the selection.
///
/// Values are immutable; callers replace a frame wholesale instead of
/// editing its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeFrame")]
pub struct TimeFrame {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

#[derive(Deserialize)]
struct RawTimeFrame {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TryFrom<RawTimeFrame> for TimeFrame {
    type Error = SliderError;

    fn try_from(raw: RawTimeFrame) -> SliderResult<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl TimeFrame {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> SliderResult<Self> {
        if start > end {
            return Err(SliderError::InvalidData(format!(
                "time frame start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> NaiveDateTime {
        self.start
    }

    #[must_use]
    pub fn end(self) -> NaiveDateTime {
        self.end
    }

    /// Whether `other` lies fully inside this frame, endpoints included.
    #[must_use]
    pub fn contains(self, other: TimeFrame) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Start: {} End: {}", self.start, self.end)
    }
}
