//! # RoomBook Core
//!
//! Domain types and pure logic for meeting-room booking: time-of-day parsing,
//! operating hours, the per-slot availability resolver, the response envelope
//! and the review-action rules. Nothing in this crate performs I/O.

pub mod availability;
pub mod errors;
pub mod hours;
pub mod models;
pub mod review;
pub mod time_of_day;
