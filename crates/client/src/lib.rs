//! # RoomBook Client
//!
//! Typed access to the external booking backend: the explicit [`Session`],
//! the [`BookingBackend`] trait with its `reqwest` implementation, and the
//! confirmation-gated review flow.

pub mod backend;
pub mod mock;
pub mod rest;
pub mod review;
pub mod session;

pub use backend::BookingBackend;
pub use rest::RestClient;
pub use review::review_booking;
pub use session::Session;
