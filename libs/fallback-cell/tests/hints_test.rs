// libs/fallback-cell/tests/hints_test.rs

use fallback_cell::{bundle_for, hint_for};
use shared_models::domain::{slots, tasks};

#[test]
fn every_form_slot_has_a_specific_hint() {
    let form_slots = [
        slots::SYMPTOMS,
        slots::SPECIALTY,
        slots::DOCTOR_NAME,
        slots::BOOKING_DATE,
        slots::BOOKING_TIME,
        slots::DESCRIPTION,
        slots::CANCEL_DATE,
        slots::CANCEL_APPOINTMENT_ID,
    ];

    let generic = hint_for("no_such_slot");
    for slot in form_slots {
        assert_ne!(hint_for(slot), generic, "missing hint for {slot}");
    }
}

#[test]
fn date_hints_show_the_expected_format() {
    assert!(hint_for(slots::BOOKING_DATE).contains("ngày/tháng/năm"));
    assert!(hint_for(slots::BOOKING_TIME).contains("giờ:phút"));
}

#[test]
fn deny_bundles_cover_exactly_the_tasks_slots() {
    assert_eq!(
        bundle_for(tasks::BOOK_APPOINTMENT),
        &[
            slots::SPECIALTY,
            slots::DOCTOR_NAME,
            slots::BOOKING_DATE,
            slots::BOOKING_TIME,
            slots::DESCRIPTION,
        ]
    );
    assert_eq!(
        bundle_for(tasks::CANCEL_APPOINTMENT),
        &[slots::CANCEL_DATE, slots::CANCEL_APPOINTMENT_ID]
    );
    assert_eq!(
        bundle_for(tasks::RECOMMEND_DOCTOR),
        &[slots::SYMPTOMS, slots::SPECIALTY_SUGGESTED]
    );
    assert!(bundle_for("unknown_task").is_empty());
}
