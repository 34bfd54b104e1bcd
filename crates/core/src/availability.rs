//! Weekly availability: day enumeration and per-day hour ranges.

use std::collections::BTreeMap;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Weekday
// ---------------------------------------------------------------------------

/// Valid weekday strings.
pub const DAY_MONDAY: &str = "monday";
pub const DAY_TUESDAY: &str = "tuesday";
pub const DAY_WEDNESDAY: &str = "wednesday";
pub const DAY_THURSDAY: &str = "thursday";
pub const DAY_FRIDAY: &str = "friday";
pub const DAY_SATURDAY: &str = "saturday";
pub const DAY_SUNDAY: &str = "sunday";

/// All valid weekday strings, Monday first.
pub const VALID_WEEKDAYS: &[&str] = &[
    DAY_MONDAY,
    DAY_TUESDAY,
    DAY_WEDNESDAY,
    DAY_THURSDAY,
    DAY_FRIDAY,
    DAY_SATURDAY,
    DAY_SUNDAY,
];

/// Day of the week an ad can declare availability for.
///
/// `Ord` follows declaration order (Monday first) so that hour maps keyed
/// by weekday iterate in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Parse a weekday from its stored string value.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            DAY_MONDAY => Ok(Self::Monday),
            DAY_TUESDAY => Ok(Self::Tuesday),
            DAY_WEDNESDAY => Ok(Self::Wednesday),
            DAY_THURSDAY => Ok(Self::Thursday),
            DAY_FRIDAY => Ok(Self::Friday),
            DAY_SATURDAY => Ok(Self::Saturday),
            DAY_SUNDAY => Ok(Self::Sunday),
            _ => Err(CoreError::Validation(format!(
                "Invalid weekday '{s}'. Must be one of: {}",
                VALID_WEEKDAYS.join(", ")
            ))),
        }
    }

    /// Convert to the stored string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => DAY_MONDAY,
            Self::Tuesday => DAY_TUESDAY,
            Self::Wednesday => DAY_WEDNESDAY,
            Self::Thursday => DAY_THURSDAY,
            Self::Friday => DAY_FRIDAY,
            Self::Saturday => DAY_SATURDAY,
            Self::Sunday => DAY_SUNDAY,
        }
    }
}

// ---------------------------------------------------------------------------
// Hour range
// ---------------------------------------------------------------------------

/// Opening and closing time for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Per-day hour ranges, keyed in calendar order.
pub type HoursByDay = BTreeMap<Weekday, HourRange>;

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// Report hour entries whose day is no longer in the selected-days list.
///
/// Removing a day from `availability_days` does not prune its entry from
/// `availability_hours`; the stale entry is retained until the caller
/// overwrites the whole map. This returns the dangling days (in calendar
/// order) so a UI can surface them. It never mutates anything.
pub fn stale_hour_days(days: &[Weekday], hours: &HoursByDay) -> Vec<Weekday> {
    hours
        .keys()
        .filter(|day| !days.contains(day))
        .copied()
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
