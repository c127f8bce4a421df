//! # Availability Resolver
//!
//! Classifies a day's hourly slots for one room against that room's bookings.
//!
//! ## Rules
//!
//! 1. All boundaries are converted to minutes since midnight.
//! 2. Slot `[s, s + 60)` overlaps booking `[bs, be)` when `bs < s + 60` and
//!    `be > s`. A booking that ends exactly at `s` also overlaps.
//! 3. The first overlapping booking, in input order, decides the slot's
//!    status and booking info.
//! 4. An unoccupied slot whose start is at or before `now` is past.
//!
//! Inputs that do not parse are dropped one by one and listed in
//! [`Availability::rejected`]; the rest of the day still resolves.
//!
//! The past check joins `date` with the slot start as a naive date-time and
//! compares it to the caller's naive `now`. Both must come from the same
//! wall clock; mixing zones shifts which slots read as expired.

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    models::{
        booking::Booking,
        slot::{Availability, BookingInfo, EntryKind, RejectedEntry, SlotStatus},
    },
    time_of_day::{MINUTES_PER_HOUR, TimeOfDay},
};

/// Overlap test between a slot and a booking.
///
/// Half-open intersection, plus a booking that ends exactly where the slot
/// starts: that booking also claims the slot.
pub fn overlaps(
    slot_start: TimeOfDay,
    slot_end: TimeOfDay,
    booking_start: TimeOfDay,
    booking_end: TimeOfDay,
) -> bool {
    (booking_start < slot_end && booking_end > slot_start) || booking_end == slot_start
}

struct ParsedBooking<'a> {
    booking: &'a Booking,
    start: TimeOfDay,
    end: TimeOfDay,
}

/// Resolves every slot of `date` against `bookings`.
///
/// `bookings` must already be scoped to the room and the day.
pub fn resolve_availability<S: AsRef<str>>(
    date: NaiveDate,
    slots: &[S],
    bookings: &[Booking],
    now: NaiveDateTime,
) -> Availability {
    let mut rejected = Vec::new();

    let parsed: Vec<ParsedBooking<'_>> = bookings
        .iter()
        .enumerate()
        .filter_map(|(index, booking)| match booking.interval() {
            Ok((start, end)) => Some(ParsedBooking {
                booking,
                start,
                end,
            }),
            Err(err) => {
                rejected.push(RejectedEntry {
                    kind: EntryKind::Booking,
                    index,
                    booking_id: Some(booking.id.clone()),
                    value: booking.time_range(),
                    reason: err.to_string(),
                });
                None
            }
        })
        .collect();

    let mut resolved = Vec::with_capacity(slots.len());
    for (index, raw) in slots.iter().enumerate() {
        let raw = raw.as_ref();
        match raw.parse::<TimeOfDay>() {
            Ok(start) if start < TimeOfDay::END_OF_DAY => {
                resolved.push(classify_slot(date, start, &parsed, now));
            }
            Ok(_) => rejected.push(RejectedEntry {
                kind: EntryKind::Slot,
                index,
                booking_id: None,
                value: raw.to_string(),
                reason: "A slot cannot start at 24:00".to_string(),
            }),
            Err(err) => rejected.push(RejectedEntry {
                kind: EntryKind::Slot,
                index,
                booking_id: None,
                value: raw.to_string(),
                reason: err.to_string(),
            }),
        }
    }

    Availability {
        date,
        slots: resolved,
        rejected,
    }
}

fn classify_slot(
    date: NaiveDate,
    start: TimeOfDay,
    bookings: &[ParsedBooking<'_>],
    now: NaiveDateTime,
) -> SlotStatus {
    let end = start.saturating_add_minutes(MINUTES_PER_HOUR);

    let claimed = bookings
        .iter()
        .find(|parsed| overlaps(start, end, parsed.start, parsed.end));

    match claimed {
        Some(parsed) => SlotStatus {
            start,
            end,
            occupied: true,
            past: false,
            status: Some(parsed.booking.status),
            booking_info: Some(BookingInfo::from(parsed.booking)),
        },
        None => {
            let past = start
                .to_naive_time()
                .map(|time| date.and_time(time) <= now)
                .unwrap_or(false);
            SlotStatus {
                start,
                end,
                occupied: false,
                past,
                status: None,
                booking_info: None,
            }
        }
    }
}
