//! # REST Client
//!
//! `reqwest` implementation of [`BookingBackend`]. Every response body is
//! decoded as an [`Envelope`]; anything else is reported as
//! [`BookingError::UnexpectedResponse`].

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::{WrapErr, eyre};
use reqwest::{Client, Response, StatusCode};
use roombook_core::{
    errors::{BookingError, BookingResult},
    models::{
        booking::{Booking, BookingStatus, UpdateBookingStatusRequest},
        envelope::Envelope,
    },
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{backend::BookingBackend, session::Session};

#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
}

impl RestClient {
    /// Creates a client for the backend rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Fails when the underlying HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> BookingResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL of a single booking, with the id encoded as one path segment.
    fn booking_url(&self, booking_id: &str) -> BookingResult<String> {
        if matches!(booking_id, "" | "." | "..") {
            return Err(BookingError::Validation(format!(
                "'{}' is not a booking id",
                booking_id
            )));
        }
        Ok(self.url(&format!("/bookings/{}", urlencoding::encode(booking_id))))
    }
}

/// Maps non-success statuses onto the error taxonomy.
fn check_status(response: Response, what: &str) -> BookingResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(BookingError::Authentication(
            format!("Backend refused {} ({})", what, status),
        )),
        StatusCode::NOT_FOUND => Err(BookingError::NotFound(format!(
            "Backend has no {}",
            what
        ))),
        _ => Err(BookingError::Upstream(eyre!(
            "Backend answered {} for {}",
            status,
            what
        ))),
    }
}

async fn decode<T: DeserializeOwned>(response: Response, what: &str) -> BookingResult<T> {
    let body = response
        .bytes()
        .await
        .wrap_err_with(|| format!("Failed to read {} response", what))?;

    serde_json::from_slice::<Envelope<T>>(&body)
        .map(Envelope::into_data)
        .map_err(|e| BookingError::UnexpectedResponse(format!("{}: {}", what, e)))
}

#[async_trait]
impl BookingBackend for RestClient {
    async fn bookings_for_day(
        &self,
        session: &Session,
        room_id: &str,
        date: NaiveDate,
    ) -> BookingResult<Vec<Booking>> {
        let url = self.url("/bookings");
        let date = date.format("%Y-%m-%d").to_string();
        debug!("GET {} roomId={} date={}", url, room_id, date);

        let request = self
            .http
            .get(&url)
            .query(&[("roomId", room_id), ("date", date.as_str())]);
        let response = session
            .apply(request)
            .send()
            .await
            .wrap_err_with(|| format!("GET {} failed", url))?;

        let what = format!("bookings for room {}", room_id);
        let response = check_status(response, &what)?;
        decode(response, &what).await
    }

    async fn update_status(
        &self,
        session: &Session,
        booking_id: &str,
        status: BookingStatus,
    ) -> BookingResult<Booking> {
        let url = self.booking_url(booking_id)?;
        debug!("PATCH {} status={}", url, status);

        let request = self
            .http
            .patch(&url)
            .json(&UpdateBookingStatusRequest { status });
        let response = session
            .apply(request)
            .send()
            .await
            .wrap_err_with(|| format!("PATCH {} failed", url))?;

        let what = format!("booking {}", booking_id);
        let response = check_status(response, &what)?;
        decode(response, &what).await
    }

    async fn delete_booking(&self, session: &Session, booking_id: &str) -> BookingResult<()> {
        let url = self.booking_url(booking_id)?;
        debug!("DELETE {}", url);

        let response = session
            .apply(self.http.delete(&url))
            .send()
            .await
            .wrap_err_with(|| format!("DELETE {} failed", url))?;

        check_status(response, &format!("booking {}", booking_id))?;
        Ok(())
    }
}
