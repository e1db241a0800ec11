//! Slot, form, intent, and entity names shared with the dialogue engine's
//! domain file. One authoritative copy; every cell imports from here.

pub mod slots {
    pub const REQUESTED_SLOT: &str = "requested_slot";
    pub const CURRENT_TASK: &str = "current_task";

    // Triage
    pub const SYMPTOMS: &str = "symptoms";
    pub const SPECIALTY_SUGGESTED: &str = "specialty_suggested";

    // Booking form
    pub const SPECIALTY: &str = "specialty";
    pub const DOCTOR_NAME: &str = "doctor_name";
    pub const BOOKING_DATE: &str = "booking_date";
    pub const BOOKING_TIME: &str = "booking_time";
    pub const DESCRIPTION: &str = "description";

    // Cancellation form
    pub const CANCEL_DATE: &str = "cancel_date";
    pub const CANCEL_APPOINTMENT_ID: &str = "cancel_appointment_id";

    // Prescription lookup
    pub const EXAM_DATE: &str = "exam_date";
}

pub mod forms {
    pub const RECOMMEND_DOCTOR: &str = "recommend_doctor_form";
    pub const BOOK_APPOINTMENT: &str = "book_appointment_form";
    pub const CANCEL_APPOINTMENT: &str = "cancel_appointment_form";
}

pub mod tasks {
    pub const RECOMMEND_DOCTOR: &str = "request_doctor";
    pub const BOOK_APPOINTMENT: &str = "request_booking";
    pub const CANCEL_APPOINTMENT: &str = "request_cancellation";
}

pub mod intents {
    pub const INFORM: &str = "inform";
    pub const AFFIRM: &str = "affirm";
    pub const DENY: &str = "deny";

    pub const REQUEST_DOCTOR: &str = "request_doctor";
    pub const REQUEST_BOOKING: &str = "request_booking";
    pub const REQUEST_CANCELLATION: &str = "request_cancellation";
    pub const BOOK_WITH_DOCTOR: &str = "book_with_doctor";

    // Mid-form interruptions
    pub const ASK_SPECIALTY_INFO: &str = "ask_specialty_info";
    pub const ASK_DOCTOR_LIST: &str = "ask_doctor_list";
    pub const ASK_DOCTOR_INFO: &str = "ask_doctor_info";
    pub const ASK_DOCTOR_SCHEDULE: &str = "ask_doctor_schedule";
    pub const ASK_LAST_EXAMINER: &str = "ask_last_examiner";
}

pub mod entities {
    pub const SYMPTOM: &str = "symptom";
    pub const SPECIALTY: &str = "specialty";
    pub const DOCTOR_NAME: &str = "doctor_name";
    pub const DOCTOR_ID: &str = "doctor_id";
    pub const EXAM_DATE: &str = "exam_date";
    pub const CANCEL_APPOINTMENT_ID: &str = "cancel_appointment_id";
}
