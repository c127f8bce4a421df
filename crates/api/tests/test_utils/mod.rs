use std::sync::Arc;

use axum_test::TestServer;
use chrono::NaiveDate;
use roombook_api::{ApiState, router};
use roombook_client::mock::MockBookingBackend;
use roombook_core::{
    hours::OperatingHours,
    models::booking::{Booking, BookingStatus, BookingUser},
};

pub const SERVICE_TOKEN: &str = "service-token";

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 15).unwrap()
}

pub fn booking(id: &str, date: NaiveDate, start: &str, end: &str, status: BookingStatus) -> Booking {
    Booking {
        id: id.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        status,
        booking_date: Some(date),
        purpose: Some("Retro".to_string()),
        user: Some(BookingUser {
            name: "Ari".to_string(),
        }),
    }
}

/// Serves the router over a mock backend with slots 08:00 through 12:00.
pub fn build_server(backend: MockBookingBackend) -> TestServer {
    let state = Arc::new(ApiState {
        backend: Arc::new(backend),
        hours: OperatingHours::new(8, 12).expect("Failed to build hours"),
        service_token: Some(SERVICE_TOKEN.to_string()),
    });

    TestServer::new(router(state)).expect("Failed to start test server")
}
