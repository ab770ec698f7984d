use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

const HOUR_MILLIS: i64 = 3_600_000;
const DAY_MILLIS: i64 = 24 * HOUR_MILLIS;

/// Calendar unit that one slider cell represents.
///
/// Each variant supplies the same fixed set of pure conversions: start and
/// end normalization, unit counting between two dates, stepping by whole
/// units and per-unit captions. `Week` is accepted by name but every
/// conversion reports [`SliderError::NotImplemented`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Year,
    #[default]
    Month,
    Week,
    Day,
    Hour,
}

impl Granularity {
    pub const ALL: [Granularity; 5] = [
        Granularity::Year,
        Granularity::Month,
        Granularity::Week,
        Granularity::Day,
        Granularity::Hour,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }

    /// Returns `self` when the granularity has working conversions.
    pub fn ensure_implemented(self) -> SliderResult<Self> {
        match self {
            Self::Week => Err(SliderError::NotImplemented("week granularity")),
            _ => Ok(self),
        }
    }

    /// Rounds `date` down to the first instant of its unit.
    pub fn normalize_start(self, date: NaiveDateTime) -> SliderResult<NaiveDateTime> {
        let normalized = match self {
            Self::Year => midnight(date.year(), 1, 1),
            Self::Month => midnight(date.year(), date.month(), 1),
            Self::Day => date.date().and_hms_opt(0, 0, 0),
            Self::Hour => date.date().and_hms_opt(date.hour(), 0, 0),
            Self::Week => return Err(SliderError::NotImplemented("week granularity")),
        };
        normalized.ok_or_else(|| out_of_range("normalize", date))
    }

    /// Rounds `date` to the last instant (one millisecond before the next
    /// unit boundary) of its unit.
    pub fn normalize_end(self, date: NaiveDateTime) -> SliderResult<NaiveDateTime> {
        let next_boundary = self.step(self.normalize_start(date)?, 1)?;
        next_boundary
            .checked_sub_signed(TimeDelta::milliseconds(1))
            .ok_or_else(|| out_of_range("normalize end", date))
    }

    /// Advances `date` by `units` whole units (negative values step back).
    pub fn step(self, date: NaiveDateTime, units: i64) -> SliderResult<NaiveDateTime> {
        let stepped = match self {
            Self::Year => add_months(date, units.checked_mul(12)),
            Self::Month => add_months(date, Some(units)),
            Self::Day => TimeDelta::try_days(units).and_then(|delta| date.checked_add_signed(delta)),
            Self::Hour => {
                TimeDelta::try_hours(units).and_then(|delta| date.checked_add_signed(delta))
            }
            Self::Week => return Err(SliderError::NotImplemented("week granularity")),
        };
        stepped.ok_or_else(|| out_of_range("step", date))
    }

    /// Number of units touched by the inclusive span `start..=end`.
    pub fn unit_count(self, start: NaiveDateTime, end: NaiveDateTime) -> SliderResult<i64> {
        match self {
            Self::Year => Ok(1 + i64::from(end.year()) - i64::from(start.year())),
            Self::Month => {
                let years = i64::from(end.year()) - i64::from(start.year());
                let months = i64::from(end.month0()) - i64::from(start.month0());
                Ok(years * 12 + months + 1)
            }
            Self::Day => Ok((end.date() - start.date()).num_days() + 1),
            Self::Hour => {
                let span = self.normalize_start(end)? - self.normalize_start(start)?;
                Ok(span.num_milliseconds().div_euclid(HOUR_MILLIS) + 1)
            }
            Self::Week => Err(SliderError::NotImplemented("week granularity")),
        }
    }

    /// Text shown in the background cell for the unit starting at `date`.
    pub fn caption(self, date: NaiveDateTime) -> SliderResult<String> {
        match self {
            Self::Year => Ok(date.year().to_string()),
            Self::Month => Ok(date.format("%b").to_string()),
            Self::Day => Ok(date.day().to_string()),
            Self::Hour => Ok(format!("{:02}:00", date.hour())),
            Self::Week => Err(SliderError::NotImplemented("week granularity")),
        }
    }

    /// Average length of one unit, used to convert millisecond rasters into
    /// unit fractions.
    #[must_use]
    pub fn nominal_unit_millis(self) -> i64 {
        match self {
            // 365.2425 days, the Gregorian mean year.
            Self::Year => 31_556_952_000,
            Self::Month => 31_556_952_000 / 12,
            Self::Week => 7 * DAY_MILLIS,
            Self::Day => DAY_MILLIS,
            Self::Hour => HOUR_MILLIS,
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Granularity {
    type Err = SliderError;

    fn from_str(value: &str) -> SliderResult<Self> {
        Self::ALL
            .into_iter()
            .find(|granularity| granularity.name() == value)
            .ok_or_else(|| {
                SliderError::InvalidData(format!(
                    "unknown unit type `{value}`; expected one of year, month, week, day, hour"
                ))
            })
    }
}

fn midnight(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn add_months(date: NaiveDateTime, months: Option<i64>) -> Option<NaiveDateTime> {
    let months = months?;
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(magnitude)
    } else {
        date.checked_sub_months(magnitude)
    }
}

fn out_of_range(operation: &str, date: NaiveDateTime) -> SliderError {
    SliderError::DateOutOfRange(format!("cannot {operation} {date}"))
}
