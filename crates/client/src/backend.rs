use async_trait::async_trait;
use chrono::NaiveDate;
use roombook_core::{
    errors::BookingResult,
    models::booking::{Booking, BookingStatus},
};

use crate::session::Session;

/// The booking operations this workspace needs from the REST backend.
#[async_trait]
pub trait BookingBackend: Send + Sync {
    /// Bookings of one room on one day, in the order the backend returns them.
    async fn bookings_for_day(
        &self,
        session: &Session,
        room_id: &str,
        date: NaiveDate,
    ) -> BookingResult<Vec<Booking>>;

    async fn update_status(
        &self,
        session: &Session,
        booking_id: &str,
        status: BookingStatus,
    ) -> BookingResult<Booking>;

    async fn delete_booking(&self, session: &Session, booking_id: &str) -> BookingResult<()>;
}
