//! Wall-clock time of day, held as minutes since midnight.
//!
//! Booking and slot boundaries arrive as `HH:MM` strings. Comparing them as
//! strings breaks as soon as one side drops its leading zero, so every
//! boundary is converted to minutes before any arithmetic happens.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::BookingError;

pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// A time of day in the range `00:00..=24:00`.
///
/// `24:00` only exists as an end boundary: the end of the last slot, or a
/// booking that runs until midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(MINUTES_PER_DAY);

    /// Builds a time from an hour and minute, rejecting anything past `24:00`.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if minute >= MINUTES_PER_HOUR {
            return None;
        }
        let minutes = hour.checked_mul(MINUTES_PER_HOUR)?.checked_add(minute)?;
        (minutes <= MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0 / MINUTES_PER_HOUR
    }

    pub fn minute(self) -> u32 {
        self.0 % MINUTES_PER_HOUR
    }

    /// Adds minutes, saturating at `24:00`.
    pub fn saturating_add_minutes(self, minutes: u32) -> Self {
        Self(self.0.saturating_add(minutes).min(MINUTES_PER_DAY))
    }

    /// Converts to a chrono time. `24:00` has no `NaiveTime` representation.
    pub fn to_naive_time(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self(time.num_seconds_from_midnight() / 60)
    }
}

impl FromStr for TimeOfDay {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "24:00" || trimmed == "24:00:00" {
            return Ok(Self::END_OF_DAY);
        }

        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map(Self::from)
            .map_err(|_| BookingError::InvalidTimeFormat(format!("'{}' is not HH:MM", s)))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
