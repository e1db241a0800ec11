// libs/cancellation-cell/tests/summary_test.rs

use chrono::{NaiveDate, NaiveTime};

use cancellation_cell::AppointmentSummary;

fn summary(description: Option<&str>) -> AppointmentSummary {
    AppointmentSummary {
        id: "LK1733300000".into(),
        doctor_name: "Trần Thị Bình".into(),
        specialty: "Nội khoa".into(),
        date: NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
        time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        description: description.map(str::to_string),
    }
}

#[test]
fn render_includes_code_doctor_and_local_date_format() {
    let rendered = summary(Some("đau bụng âm ỉ")).render();
    assert!(rendered.contains("LK1733300000"));
    assert!(rendered.contains("Trần Thị Bình"));
    assert!(rendered.contains("chuyên khoa Nội khoa"));
    assert!(rendered.contains("09:30 ngày 20/08/2026"));
    assert!(rendered.contains("Mô tả: đau bụng âm ỉ"));
}

#[test]
fn render_omits_missing_description() {
    let rendered = summary(None).render();
    assert!(!rendered.contains("Mô tả"));
}

#[test]
fn button_label_is_time_plus_doctor() {
    assert_eq!(summary(None).button_label(), "09:30 - BS Trần Thị Bình");
}
