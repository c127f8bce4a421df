use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{errors::BookingResult, time_of_day::TimeOfDay};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
    History,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::History => "history",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The person who made a booking.
///
/// Reads `name`, falling back to `fullName`; `name` wins when both are sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BookingUserFields")]
pub struct BookingUser {
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingUserFields {
    name: Option<String>,
    full_name: Option<String>,
}

impl TryFrom<BookingUserFields> for BookingUser {
    type Error = &'static str;

    fn try_from(fields: BookingUserFields) -> Result<Self, Self::Error> {
        fields
            .name
            .or(fields.full_name)
            .map(|name| BookingUser { name })
            .ok_or("user has neither `name` nor `fullName`")
    }
}

/// A reservation as returned by the booking backend.
///
/// Start and end stay as the raw strings the backend sent; they are only
/// parsed when the booking is resolved against a day's slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(alias = "_id")]
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
    #[serde(default, deserialize_with = "deserialize_calendar_date")]
    pub booking_date: Option<NaiveDate>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub user: Option<BookingUser>,
}

impl Booking {
    /// Parses start and end into minutes since midnight.
    pub fn interval(&self) -> BookingResult<(TimeOfDay, TimeOfDay)> {
        Ok((self.start_time.parse()?, self.end_time.parse()?))
    }

    pub fn user_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|user| user.name.as_str())
            .unwrap_or("Unknown user")
    }

    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time.trim(), self.end_time.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

/// Accepts `YYYY-MM-DD` or any ISO date-time that starts with one.
fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(value) => {
            let date_part = value.get(..10).unwrap_or(&value);
            NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("invalid booking date: {}", value)))
        }
    }
}
