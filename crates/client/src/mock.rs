use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use roombook_core::{
    errors::BookingResult,
    models::booking::{Booking, BookingStatus},
};

use crate::{backend::BookingBackend, session::Session};

// Mock backend for testing
mock! {
    pub BookingBackend {}

    #[async_trait]
    impl BookingBackend for BookingBackend {
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
}
