use serde::{Deserialize, Serialize};

use crate::{
    errors::{BookingError, BookingResult},
    time_of_day::TimeOfDay,
};

pub const DEFAULT_OPEN_HOUR: u32 = 5;
pub const DEFAULT_CLOSE_HOUR: u32 = 23;

/// Bookable window of a day, as inclusive first and last slot start hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingHours {
    open_hour: u32,
    close_hour: u32,
}

impl OperatingHours {
    pub fn new(open_hour: u32, close_hour: u32) -> BookingResult<Self> {
        if close_hour > 23 {
            return Err(BookingError::Validation(format!(
                "Last slot hour must be at most 23, got {}",
                close_hour
            )));
        }
        if open_hour > close_hour {
            return Err(BookingError::Validation(format!(
                "Opening hour {} is after closing hour {}",
                open_hour, close_hour
            )));
        }
        Ok(Self {
            open_hour,
            close_hour,
        })
    }

    pub fn open_hour(&self) -> u32 {
        self.open_hour
    }

    pub fn close_hour(&self) -> u32 {
        self.close_hour
    }

    pub fn slot_starts(&self) -> Vec<TimeOfDay> {
        (self.open_hour..=self.close_hour)
            .filter_map(|hour| TimeOfDay::from_hm(hour, 0))
            .collect()
    }

    /// Slot starts formatted as `HH:00`, the shape the resolver takes.
    pub fn slot_labels(&self) -> Vec<String> {
        self.slot_starts()
            .into_iter()
            .map(|start| start.to_string())
            .collect()
    }
}

impl Default for OperatingHours {
    fn default() -> Self {
        Self {
            open_hour: DEFAULT_OPEN_HOUR,
            close_hour: DEFAULT_CLOSE_HOUR,
        }
    }
}
