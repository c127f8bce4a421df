use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use rstest::rstest;
use roombook_core::{
    availability::{overlaps, resolve_availability},
    hours::OperatingHours,
    models::{
        booking::{Booking, BookingStatus, BookingUser},
        slot::{EntryKind, SlotState},
    },
    time_of_day::TimeOfDay,
};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 15).unwrap()
}

fn at(date: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    date.and_hms_opt(hour, minute, 0).unwrap()
}

/// A "now" well before the resolved day, so no slot reads as past.
fn day_before() -> NaiveDateTime {
    at(NaiveDate::from_ymd_opt(2030, 1, 14).unwrap(), 0, 0)
}

fn booking(id: &str, start: &str, end: &str, status: BookingStatus) -> Booking {
    Booking {
        id: id.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        status,
        booking_date: Some(day()),
        purpose: Some("Standup".to_string()),
        user: Some(BookingUser {
            name: "Dana".to_string(),
        }),
    }
}

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

#[test]
fn test_booking_spanning_two_slots() {
    let slots = ["09:00", "10:00", "11:00"];
    let bookings = vec![booking("b1", "09:30", "10:30", BookingStatus::Approved)];

    let availability = resolve_availability(day(), &slots, &bookings, day_before());

    assert_eq!(availability.slots.len(), 3);
    assert!(availability.rejected.is_empty());

    let states: Vec<SlotState> = availability.slots.iter().map(|s| s.state()).collect();
    assert_eq!(
        states,
        vec![
            SlotState::Booked(BookingStatus::Approved),
            SlotState::Booked(BookingStatus::Approved),
            SlotState::Free,
        ]
    );
    assert_eq!(availability.slots[0].status, Some(BookingStatus::Approved));
    assert!(!availability.slots[2].occupied);
    assert_eq!(availability.slots[2].status, None);
}

#[test]
fn test_booking_ending_at_slot_start_claims_slot() {
    let slots = ["08:00", "09:00", "10:00"];
    let bookings = vec![booking("b1", "08:00", "09:00", BookingStatus::Pending)];

    let availability = resolve_availability(day(), &slots, &bookings, day_before());

    let nine = availability.slot_at(t("09:00")).unwrap();
    assert!(nine.occupied);
    assert_eq!(nine.status, Some(BookingStatus::Pending));

    assert!(availability.slot_at(t("08:00")).unwrap().occupied);
    assert!(!availability.slot_at(t("10:00")).unwrap().occupied);
}

#[test]
fn test_no_bookings_leaves_future_slots_free() {
    let hours = OperatingHours::default();
    let slots = hours.slot_labels();

    let availability = resolve_availability(day(), &slots, &[], day_before());

    assert_eq!(availability.slots.len(), 19);
    assert!(availability.slots.iter().all(|slot| !slot.occupied && !slot.past));
    assert_eq!(availability.free_slots().count(), 19);
}

#[test]
fn test_past_slots_are_expired_unless_booked() {
    let slots = ["09:00", "10:00", "11:00"];
    let bookings = vec![booking("b1", "09:00", "09:30", BookingStatus::Approved)];
    let now = at(day(), 10, 30);

    let availability = resolve_availability(day(), &slots, &bookings, now);

    let nine = availability.slot_at(t("09:00")).unwrap();
    assert_eq!(nine.state(), SlotState::Booked(BookingStatus::Approved));
    assert!(!nine.past);

    let ten = availability.slot_at(t("10:00")).unwrap();
    assert_eq!(ten.state(), SlotState::Expired);
    assert!(ten.past);
    assert!(!ten.occupied);

    let eleven = availability.slot_at(t("11:00")).unwrap();
    assert_eq!(eleven.state(), SlotState::Free);
}

#[test]
fn test_slot_starting_exactly_now_is_past() {
    let availability = resolve_availability(day(), &["14:00"], &[], at(day(), 14, 0));

    assert!(availability.slots[0].past);
    assert!(!availability.slots[0].is_bookable());
}

#[test]
fn test_first_overlapping_booking_decides_status() {
    let slots = ["10:00"];
    let bookings = vec![
        booking("first", "10:00", "10:30", BookingStatus::Pending),
        booking("second", "10:15", "11:00", BookingStatus::Approved),
    ];

    let availability = resolve_availability(day(), &slots, &bookings, day_before());

    assert_eq!(availability.slots[0].status, Some(BookingStatus::Pending));
}

#[test]
fn test_rejected_and_cancelled_bookings_are_still_reported() {
    let slots = ["13:00", "15:00"];
    let bookings = vec![
        booking("r", "13:00", "13:45", BookingStatus::Rejected),
        booking("c", "15:10", "15:20", BookingStatus::Cancelled),
    ];

    let availability = resolve_availability(day(), &slots, &bookings, day_before());

    assert_eq!(availability.slots[0].status, Some(BookingStatus::Rejected));
    assert_eq!(availability.slots[1].status, Some(BookingStatus::Cancelled));
}

#[test]
fn test_booking_info_is_attached() {
    let bookings = vec![booking("b1", "09:30", "10:30", BookingStatus::Approved)];

    let availability = resolve_availability(day(), &["09:00"], &bookings, day_before());

    let info = availability.slots[0].booking_info.as_ref().unwrap();
    assert_eq!(info.user_name, "Dana");
    assert_eq!(info.purpose.as_deref(), Some("Standup"));
    assert_eq!(info.time_range, "09:30 - 10:30");
    assert_eq!(info.status, BookingStatus::Approved);
}

#[test]
fn test_malformed_booking_is_rejected_alone() {
    let slots = ["08:00", "10:00"];
    let bookings = vec![
        booking("broken", "nine", "10:00", BookingStatus::Approved),
        booking("good", "10:00", "10:45", BookingStatus::Pending),
    ];

    let availability = resolve_availability(day(), &slots, &bookings, day_before());

    assert_eq!(availability.rejected.len(), 1);
    let rejected = &availability.rejected[0];
    assert_eq!(rejected.kind, EntryKind::Booking);
    assert_eq!(rejected.index, 0);
    assert_eq!(rejected.booking_id.as_deref(), Some("broken"));
    assert!(rejected.reason.contains("Invalid time format"));

    assert!(!availability.slot_at(t("08:00")).unwrap().occupied);
    assert_eq!(
        availability.slot_at(t("10:00")).unwrap().status,
        Some(BookingStatus::Pending)
    );
}

#[test]
fn test_malformed_slots_are_rejected_alone() {
    let slots = ["09:00", "25:00", "24:00", "10:00"];

    let availability = resolve_availability(day(), &slots, &[], day_before());

    assert_eq!(availability.slots.len(), 2);
    assert_eq!(availability.slots[0].start, t("09:00"));
    assert_eq!(availability.slots[1].start, t("10:00"));

    let indexes: Vec<usize> = availability.rejected.iter().map(|r| r.index).collect();
    assert_eq!(indexes, vec![1, 2]);
    assert!(availability.rejected.iter().all(|r| r.kind == EntryKind::Slot));
    assert_eq!(availability.rejected[0].value, "25:00");
}

#[test]
fn test_seconds_and_end_of_day_are_accepted() {
    let slots = ["22:00", "23:00"];
    let bookings = vec![booking("late", "22:30:00", "24:00", BookingStatus::Approved)];

    let availability = resolve_availability(day(), &slots, &bookings, day_before());

    assert!(availability.rejected.is_empty());
    assert!(availability.slots.iter().all(|slot| slot.occupied));
    assert_eq!(availability.slots[1].end, TimeOfDay::END_OF_DAY);
}

#[test]
fn test_resolution_is_idempotent() {
    let slots = OperatingHours::default().slot_labels();
    let bookings = vec![
        booking("a", "07:15", "08:45", BookingStatus::Approved),
        booking("b", "12:00", "13:00", BookingStatus::Pending),
        booking("c", "bad", "13:00", BookingStatus::Pending),
    ];
    let now = at(day(), 9, 0);

    let first = resolve_availability(day(), &slots, &bookings, now);
    let second = resolve_availability(day(), &slots, &bookings, now);

    assert_eq!(first, second);
}

#[rstest]
#[case("09:00", "09:30", "09:00", true)]
#[case("08:30", "09:01", "09:00", true)]
#[case("08:00", "12:00", "10:00", true)]
#[case("09:59", "10:30", "09:00", true)]
#[case("08:00", "09:00", "09:00", true)]
#[case("10:00", "11:00", "09:00", false)]
#[case("07:00", "08:00", "09:00", false)]
#[case("11:00", "12:00", "10:00", false)]
fn test_overlap_rule(
    #[case] booking_start: &str,
    #[case] booking_end: &str,
    #[case] slot_start: &str,
    #[case] expected: bool,
) {
    let start = t(slot_start);
    let end = start.saturating_add_minutes(60);

    assert_eq!(
        overlaps(start, end, t(booking_start), t(booking_end)),
        expected
    );
}

#[rstest]
#[case(BookingStatus::Pending)]
#[case(BookingStatus::Approved)]
#[case(BookingStatus::History)]
fn test_overlapping_slot_reports_booking_status(#[case] status: BookingStatus) {
    let bookings = vec![booking("b", "16:20", "17:40", status)];

    let availability =
        resolve_availability(day(), &["15:00", "16:00", "17:00", "18:00"], &bookings, day_before());

    let states: Vec<SlotState> = availability.slots.iter().map(|s| s.state()).collect();
    assert_eq!(
        states,
        vec![
            SlotState::Free,
            SlotState::Booked(status),
            SlotState::Booked(status),
            SlotState::Free,
        ]
    );
}
