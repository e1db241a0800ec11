//! Per-field "wrong input" detector.
//!
//! Users regularly answer the wrong question mid-form: a date typed into
//! the description prompt, a symptom sentence typed into the date prompt.
//! Each field rejects input carrying another field's unmistakable markers;
//! everything subtler is left to the field's own parser or lookup.

use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    Specialty,
    DoctorName,
    Date,
    Time,
    Description,
}

const DOCTOR_MARKERS: &[&str] = &["bác sĩ", "bac si", "bs."];
const SYMPTOM_MARKERS: &[&str] = &["đau", "sốt", "ngứa", "mệt", "triệu chứng", "khó chịu", "bị bệnh"];

fn date_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\d{1,2}[/-]\d{1,2}([/-]\d{2,4})?\b").unwrap())
}

fn time_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b\d{1,2}[:h]\d{2}\b").unwrap())
}

fn bare_date_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{1,2}[/-]\d{1,2}([/-]\d{2,4})?$").unwrap())
}

fn bare_time_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{1,2}[:h]\d{2}$").unwrap())
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Does this input plainly belong to a different booking field?
pub fn is_wrong_input(field: BookingField, input: &str) -> bool {
    let normalized = input.trim().to_lowercase();

    let has_date = date_pattern().is_match(&normalized);
    let has_time = time_pattern().is_match(&normalized);
    let has_doctor = contains_any(&normalized, DOCTOR_MARKERS);
    let has_specialty = normalized.contains("khoa");
    let has_symptom = contains_any(&normalized, SYMPTOM_MARKERS);

    match field {
        BookingField::Specialty => has_date || has_time || has_doctor || has_symptom,
        BookingField::DoctorName => has_date || has_time || (has_specialty && !has_doctor),
        BookingField::Date => has_doctor || has_symptom || (has_time && !has_date),
        BookingField::Time => has_doctor || has_symptom || (has_date && !has_time),
        // The description legitimately talks about symptoms; only a bare
        // date or time token is clearly misplaced here.
        BookingField::Description => {
            bare_date_pattern().is_match(&normalized) || bare_time_pattern().is_match(&normalized)
        }
    }
}
