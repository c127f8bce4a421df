//! # Availability Handlers
//!
//! HTTP entry points to the availability resolver.
//!
//! - `room_availability` fetches one room's bookings for a day from the
//!   booking backend, keeps those dated on that day, and classifies the
//!   configured operating-hour slots.
//! - `resolve` classifies caller-supplied bookings and slots without touching
//!   the backend.
//! - `slots` lists the configured slot starts.
//!
//! When `now` is not given it defaults to this server's local wall-clock
//! time, so "past" is judged in the server's timezone.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::HeaderMap,
};
use chrono::{Local, NaiveDate, NaiveDateTime};
use roombook_core::{
    availability::resolve_availability,
    models::{booking::Booking, envelope::Envelope, slot::Availability},
};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    ApiState,
    middleware::{error_handling::AppError, session::session_from_headers},
};

/// Query parameters for the room availability endpoint
///
/// # Fields
///
/// * `date` - Calendar day to resolve, `YYYY-MM-DD`
/// * `now` - Reference time for the past check, `YYYY-MM-DDTHH:MM:SS` (default: server local time)
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: NaiveDate,
    pub now: Option<NaiveDateTime>,
}

/// Body of the pure resolve endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    pub date: NaiveDate,
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
    /// Slot starts; the configured operating hours when absent
    #[serde(default)]
    pub slots: Option<Vec<String>>,
    /// Bookings already scoped to one room and `date`; anything but an array means none
    #[serde(default, deserialize_with = "bookings_or_empty")]
    pub bookings: Vec<Booking>,
}

fn bookings_or_empty<'de, D>(deserializer: D) -> Result<Vec<Booking>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        items @ Value::Array(_) => serde_json::from_value(items).map_err(de::Error::custom),
        _ => Ok(Vec::new()),
    }
}

fn log_rejections(availability: &Availability) {
    for entry in &availability.rejected {
        warn!(
            "Skipped {:?} #{} ({}): {}",
            entry.kind, entry.index, entry.value, entry.reason
        );
    }
}

/// Classifies a room's day against its bookings
///
/// # Endpoint
///
/// ```text
/// GET /api/rooms/:room_id/availability?date=2030-01-15&now=2030-01-15T09:30:00
/// ```
///
/// # Errors
///
/// * `BookingError::Validation` - `date` or `now` is missing or malformed
/// * `BookingError::Authentication` - The backend refused the session
/// * `BookingError::NotFound` - The backend does not know the room
/// * `BookingError::UnexpectedResponse` - The backend answered with an unexpected body
/// * `BookingError::Upstream` - The backend could not be reached
#[axum::debug_handler]
pub async fn room_availability(
    State(state): State<Arc<ApiState>>,
    Path(room_id): Path<String>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
    headers: HeaderMap,
) -> Result<Json<Envelope<Availability>>, AppError> {
    let Query(query) = query?;
    let session = session_from_headers(&headers, state.service_token.as_deref());

    let bookings = state
        .backend
        .bookings_for_day(&session, &room_id, query.date)
        .await?;

    // Only bookings dated on the requested day take part
    let total = bookings.len();
    let bookings: Vec<Booking> = bookings
        .into_iter()
        .filter(|booking| booking.booking_date.is_none_or(|day| day == query.date))
        .collect();
    if bookings.len() != total {
        debug!(
            "Dropped {} bookings of room {} dated outside {}",
            total - bookings.len(),
            room_id,
            query.date
        );
    }

    let now = query.now.unwrap_or_else(|| Local::now().naive_local());
    let availability =
        resolve_availability(query.date, &state.hours.slot_labels(), &bookings, now);
    log_rejections(&availability);

    Ok(Json(Envelope::new(availability)))
}

/// Classifies caller-supplied bookings
///
/// # Endpoint
///
/// ```text
/// POST /api/availability/resolve
/// { "date": "2030-01-15", "slots": ["09:00"], "bookings": [...] }
/// ```
///
/// # Errors
///
/// * `BookingError::Validation` - The body is not valid JSON or a field has the wrong shape
#[axum::debug_handler]
pub async fn resolve(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<ResolveRequest>, JsonRejection>,
) -> Result<Json<Envelope<Availability>>, AppError> {
    let Json(payload) = payload?;
    let slots = payload
        .slots
        .unwrap_or_else(|| state.hours.slot_labels());
    let now = payload.now.unwrap_or_else(|| Local::now().naive_local());

    let availability = resolve_availability(payload.date, &slots, &payload.bookings, now);
    log_rejections(&availability);

    Ok(Json(Envelope::new(availability)))
}

/// Lists the configured slot starts
///
/// # Endpoint
///
/// ```text
/// GET /api/availability/slots
/// ```
pub async fn slots(State(state): State<Arc<ApiState>>) -> Json<Envelope<Vec<String>>> {
    Json(Envelope::new(state.hours.slot_labels()))
}
