// libs/directory-cell/tests/models_test.rs

use chrono::{NaiveDate, NaiveTime};

use directory_cell::models::{format_windows, DoctorCard, ShiftStatus, WorkShift};

fn shift(start: (u32, u32), end: (u32, u32)) -> WorkShift {
    WorkShift {
        date: NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(),
        start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
        end: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        status: ShiftStatus::Working,
    }
}

#[test]
fn shift_window_is_half_open() {
    let morning = shift((8, 0), (12, 0));
    assert!(morning.contains(NaiveTime::from_hms_opt(8, 0, 0).unwrap()));
    assert!(morning.contains(NaiveTime::from_hms_opt(11, 59, 0).unwrap()));
    assert!(!morning.contains(NaiveTime::from_hms_opt(12, 0, 0).unwrap()));
    assert!(!morning.contains(NaiveTime::from_hms_opt(7, 30, 0).unwrap()));
}

#[test]
fn windows_format_verbatim() {
    let shifts = vec![shift((8, 0), (12, 0)), shift((13, 0), (17, 0))];
    assert_eq!(format_windows(&shifts), "08:00 - 12:00, 13:00 - 17:00");
}

#[test]
fn shift_status_parses_from_db_strings() {
    assert_eq!(ShiftStatus::from_db("off"), ShiftStatus::Off);
    assert_eq!(ShiftStatus::from_db("OFF"), ShiftStatus::Off);
    assert_eq!(ShiftStatus::from_db("working"), ShiftStatus::Working);
}

#[test]
fn doctor_card_lists_optional_lines_only_when_present() {
    let full = DoctorCard {
        id: "BS01".into(),
        name: "Nguyễn Văn An".into(),
        phone: "0901234567".into(),
        email: Some("an@phongkham.vn".into()),
        bio: Some("15 năm kinh nghiệm nội khoa".into()),
        specialty: "Nội khoa".into(),
    };
    let rendered = full.render();
    assert!(rendered.contains("Bác sĩ Nguyễn Văn An"));
    assert!(rendered.contains("Chuyên khoa: Nội khoa"));
    assert!(rendered.contains("Email: an@phongkham.vn"));
    assert!(rendered.contains("Giới thiệu: 15 năm kinh nghiệm nội khoa"));

    let bare = DoctorCard {
        email: None,
        bio: None,
        ..full
    };
    let rendered = bare.render();
    assert!(!rendered.contains("Email:"));
    assert!(!rendered.contains("Giới thiệu:"));
}
