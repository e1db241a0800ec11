// libs/triage-cell/tests/symptom_map_test.rs

use triage_cell::{specialty_for, suggested_specialties, GENERAL_SPECIALTY};

#[test]
fn known_symptoms_route_to_their_specialty() {
    assert_eq!(specialty_for("đau đầu"), "Thần kinh");
    assert_eq!(specialty_for("đau bụng"), "Nội khoa");
    assert_eq!(specialty_for("gãy xương"), "Ngoại khoa");
    assert_eq!(specialty_for("nôn trớ"), "Nhi khoa");
    assert_eq!(specialty_for("trễ kinh"), "Sản khoa");
    assert_eq!(specialty_for("sâu răng"), "Răng Hàm Mặt");
    assert_eq!(specialty_for("viêm da"), "Da liễu");
    assert_eq!(specialty_for("viêm xoang"), "Tai Mũi Họng");
    assert_eq!(specialty_for("mờ mắt"), "Mắt");
    assert_eq!(specialty_for("tim đập nhanh"), "Tim mạch");
}

#[test]
fn lookup_ignores_case_and_whitespace() {
    assert_eq!(specialty_for("  Đau Đầu "), "Thần kinh");
    assert_eq!(specialty_for("SỐT"), "Nội khoa");
}

#[test]
fn unknown_symptoms_fall_back_to_general() {
    assert_eq!(specialty_for("thấy người là lạ"), GENERAL_SPECIALTY);
    assert_eq!(specialty_for(""), GENERAL_SPECIALTY);
}

#[test]
fn suggestions_are_distinct_and_ordered() {
    let symptoms = vec![
        "đau đầu".to_string(),
        "chóng mặt".to_string(),
        "sốt".to_string(),
        "mất ngủ".to_string(),
    ];
    assert_eq!(suggested_specialties(&symptoms), vec!["Thần kinh", "Nội khoa"]);
}

#[test]
fn mixed_known_and_unknown_symptoms_include_general() {
    let symptoms = vec!["đau răng".to_string(), "mỏi cổ chân trái".to_string()];
    assert_eq!(
        suggested_specialties(&symptoms),
        vec!["Răng Hàm Mặt", GENERAL_SPECIALTY]
    );
}
