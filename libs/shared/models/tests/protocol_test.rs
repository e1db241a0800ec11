// libs/shared/models/tests/protocol_test.rs
// Wire-format coverage for the dialogue engine's webhook contract.

use serde_json::{json, Value};

use shared_models::domain::slots;
use shared_models::{ActionRequest, BotMessage, Button, CollectingDispatcher, Event, Tracker};

fn sample_request() -> Value {
    json!({
        "next_action": "validate_book_appointment_form",
        "sender_id": "BN001",
        "version": "3.1.0",
        "tracker": {
            "sender_id": "BN001",
            "slots": {
                "requested_slot": "booking_date",
                "doctor_name": "Nguyễn Văn An",
                "specialty": null
            },
            "latest_message": {
                "text": "10/10/2020",
                "intent": {"name": "inform", "confidence": 0.93},
                "entities": [{"entity": "symptom", "value": "đau đầu"}]
            },
            "active_loop": {"name": "book_appointment_form"}
        }
    })
}

#[test]
fn deserializes_a_full_webhook_request() {
    let request: ActionRequest = serde_json::from_value(sample_request()).unwrap();

    assert_eq!(request.next_action, "validate_book_appointment_form");
    assert_eq!(request.sender_id, "BN001");

    let tracker = &request.tracker;
    assert_eq!(tracker.requested_slot(), Some("booking_date"));
    assert_eq!(tracker.slot_str("doctor_name"), Some("Nguyễn Văn An"));
    assert_eq!(tracker.intent(), "inform");
    assert_eq!(tracker.message_text(), Some("10/10/2020"));
    assert_eq!(tracker.active_form(), Some("book_appointment_form"));
}

#[test]
fn null_slots_read_as_unset() {
    let request: ActionRequest = serde_json::from_value(sample_request()).unwrap();
    assert_eq!(request.tracker.slot("specialty"), None);
    assert_eq!(request.tracker.slot("never_mentioned"), None);
}

#[test]
fn candidate_prefers_entities_over_text() {
    let tracker: Tracker = serde_json::from_value(json!({
        "sender_id": "BN001",
        "slots": {},
        "latest_message": {
            "text": "chọn bác sĩ An nhé",
            "intent": {"name": "inform", "confidence": 1.0},
            "entities": [{"entity": "doctor_name", "value": "Nguyễn Văn An"}]
        }
    }))
    .unwrap();

    assert_eq!(
        tracker.candidate("doctor_name").as_deref(),
        Some("Nguyễn Văn An")
    );
    // No matching entity: falls back to the trimmed message text.
    assert_eq!(
        tracker.candidate("booking_date").as_deref(),
        Some("chọn bác sĩ An nhé")
    );
}

#[test]
fn events_serialize_to_the_host_tags() {
    let set = serde_json::to_value(Event::set_slot(slots::BOOKING_DATE, "10/12/2026")).unwrap();
    assert_eq!(
        set,
        json!({"event": "slot", "name": "booking_date", "value": "10/12/2026"})
    );

    let cleared = serde_json::to_value(Event::clear_slot(slots::BOOKING_DATE)).unwrap();
    assert_eq!(
        cleared,
        json!({"event": "slot", "name": "booking_date", "value": null})
    );

    let deactivate = serde_json::to_value(Event::deactivate_form()).unwrap();
    assert_eq!(deactivate, json!({"event": "active_loop", "name": null}));

    let followup = serde_json::to_value(Event::followup("book_appointment_form")).unwrap();
    assert_eq!(
        followup,
        json!({"event": "followup", "name": "book_appointment_form"})
    );
}

#[test]
fn button_payloads_are_intent_plus_json() {
    let button = Button::command(
        "Đặt lịch",
        "book_with_doctor",
        &json!({"doctor_id": "BS01", "specialty": "Thần kinh"}),
    );

    assert_eq!(button.title, "Đặt lịch");
    assert!(button.payload.starts_with("/book_with_doctor{"));

    // The JSON half round-trips back into a structured object.
    let raw = button.payload.trim_start_matches("/book_with_doctor");
    let parsed: Value = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed["doctor_id"], "BS01");
    assert_eq!(parsed["specialty"], "Thần kinh");

    let plain = Button::command("Đồng ý", "affirm", &json!({}));
    assert_eq!(plain.payload, "/affirm");
}

#[test]
fn dispatcher_collects_in_order() {
    let mut dispatcher = CollectingDispatcher::new();
    dispatcher.utter("xin chào");
    dispatcher.utter_buttons("chọn một", vec![Button::new("A", "/a")]);

    let messages = dispatcher.into_messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], BotMessage::text("xin chào"));
    assert_eq!(messages[1].buttons.len(), 1);
}

#[test]
fn empty_buttons_are_omitted_from_the_wire() {
    let raw = serde_json::to_value(BotMessage::text("chào")).unwrap();
    assert_eq!(raw, json!({"text": "chào"}));
}
