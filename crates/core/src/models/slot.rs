use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    models::booking::{Booking, BookingStatus},
    time_of_day::TimeOfDay,
};

/// Summary of the booking that claimed a slot, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingInfo {
    pub user_name: String,
    pub purpose: Option<String>,
    pub time_range: String,
    pub status: BookingStatus,
}

impl From<&Booking> for BookingInfo {
    fn from(booking: &Booking) -> Self {
        Self {
            user_name: booking.user_name().to_string(),
            purpose: booking.purpose.clone(),
            time_range: booking.time_range(),
            status: booking.status,
        }
    }
}

/// Classification of a single hourly slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotStatus {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub occupied: bool,
    /// Set only for unoccupied slots whose start is not after "now".
    pub past: bool,
    pub status: Option<BookingStatus>,
    pub booking_info: Option<BookingInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Free,
    Booked(BookingStatus),
    Expired,
}

impl SlotStatus {
    pub fn state(&self) -> SlotState {
        match (self.occupied, self.status) {
            (true, Some(status)) => SlotState::Booked(status),
            _ if self.past => SlotState::Expired,
            _ => SlotState::Free,
        }
    }

    pub fn is_bookable(&self) -> bool {
        self.state() == SlotState::Free
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Slot,
    Booking,
}

/// An input the resolver could not parse and therefore left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedEntry {
    pub kind: EntryKind,
    pub index: usize,
    pub booking_id: Option<String>,
    pub value: String,
    pub reason: String,
}

/// One room's classified day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub date: NaiveDate,
    pub slots: Vec<SlotStatus>,
    pub rejected: Vec<RejectedEntry>,
}

impl Availability {
    pub fn free_slots(&self) -> impl Iterator<Item = &SlotStatus> {
        self.slots.iter().filter(|slot| slot.is_bookable())
    }

    pub fn slot_at(&self, start: TimeOfDay) -> Option<&SlotStatus> {
        self.slots.iter().find(|slot| slot.start == start)
    }
}
