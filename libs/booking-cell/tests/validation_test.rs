// libs/booking-cell/tests/validation_test.rs
// Pure validation logic behind the booking form: shift windows, duplicate
// detection, and the wrong-input detector.

use chrono::{NaiveDate, NaiveTime};

use booking_cell::{conflict_in_same_window, is_wrong_input, time_in_windows, BookingField};
use directory_cell::{ShiftStatus, WorkShift};

fn t(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn shift(start: NaiveTime, end: NaiveTime) -> WorkShift {
    WorkShift {
        date: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
        start,
        end,
        status: ShiftStatus::Working,
    }
}

fn split_day() -> Vec<WorkShift> {
    vec![
        shift(t(8, 0), t(12, 0)),
        shift(t(13, 0), t(17, 0)),
    ]
}

// ------------------------------------------------------------------
// Time windows
// ------------------------------------------------------------------

#[test]
fn time_outside_every_window_is_rejected() {
    let shifts = split_day();
    // 07:30 against 08:00-12:00 and 13:00-17:00
    assert!(!time_in_windows(t(7, 30), &shifts));
    assert!(!time_in_windows(t(12, 30), &shifts));
    assert!(!time_in_windows(t(17, 0), &shifts));
}

#[test]
fn time_inside_either_window_is_accepted() {
    let shifts = split_day();
    assert!(time_in_windows(t(8, 0), &shifts));
    assert!(time_in_windows(t(10, 15), &shifts));
    assert!(time_in_windows(t(16, 59), &shifts));
}

#[test]
fn no_shifts_means_no_valid_time() {
    assert!(!time_in_windows(t(9, 0), &[]));
}

// ------------------------------------------------------------------
// Duplicate booking inside one shift window
// ------------------------------------------------------------------

#[test]
fn existing_appointment_in_same_window_conflicts() {
    let shifts = split_day();
    // Already booked 09:00; a new 10:30 visit shares the morning shift.
    assert!(conflict_in_same_window(t(10, 30), &[t(9, 0)], &shifts));
}

#[test]
fn appointment_in_the_other_window_does_not_conflict() {
    let shifts = split_day();
    assert!(!conflict_in_same_window(t(14, 0), &[t(9, 0)], &shifts));
}

#[test]
fn no_existing_appointments_never_conflicts() {
    let shifts = split_day();
    assert!(!conflict_in_same_window(t(10, 30), &[], &shifts));
}

#[test]
fn requested_time_outside_all_windows_has_no_conflict_window() {
    let shifts = split_day();
    // The time validator rejects this earlier; the conflict check itself
    // stays quiet.
    assert!(!conflict_in_same_window(t(7, 0), &[t(9, 0)], &shifts));
}

// ------------------------------------------------------------------
// Wrong-input detector
// ------------------------------------------------------------------

#[test]
fn date_typed_into_the_description_is_flagged() {
    assert!(is_wrong_input(BookingField::Description, "10/10/2026"));
    assert!(is_wrong_input(BookingField::Description, "7h30"));
}

#[test]
fn a_real_complaint_passes_the_description_check() {
    assert!(!is_wrong_input(
        BookingField::Description,
        "đau bụng âm ỉ hai ngày nay"
    ));
}

#[test]
fn symptom_sentence_typed_into_the_date_is_flagged() {
    assert!(is_wrong_input(BookingField::Date, "tôi bị đau bụng"));
    assert!(is_wrong_input(BookingField::Date, "bác sĩ ơi"));
}

#[test]
fn a_plain_date_passes_the_date_check() {
    assert!(!is_wrong_input(BookingField::Date, "10/10/2026"));
    assert!(!is_wrong_input(BookingField::Date, "25-12-2026"));
}

#[test]
fn time_typed_into_the_date_field_is_flagged() {
    assert!(is_wrong_input(BookingField::Date, "07:30"));
}

#[test]
fn date_typed_into_the_time_field_is_flagged() {
    assert!(is_wrong_input(BookingField::Time, "10/10/2026"));
    assert!(!is_wrong_input(BookingField::Time, "07:30"));
}

#[test]
fn doctor_mention_in_the_specialty_field_is_flagged() {
    assert!(is_wrong_input(BookingField::Specialty, "bác sĩ Nguyễn Văn An"));
    assert!(!is_wrong_input(BookingField::Specialty, "Nội khoa"));
}

#[test]
fn specialty_typed_into_the_doctor_field_is_flagged() {
    assert!(is_wrong_input(BookingField::DoctorName, "nội khoa"));
    assert!(!is_wrong_input(BookingField::DoctorName, "Nguyễn Văn An"));
}
