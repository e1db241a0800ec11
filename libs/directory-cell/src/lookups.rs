//! Directory lookups that answer with chat messages.
//!
//! Used twice: by the standalone directory actions, and by the booking form
//! validator when the user interrupts slot filling with a side question.

use serde_json::json;
use sqlx::MySqlPool;

use shared_models::domain::{entities, intents};
use shared_models::{Button, CollectingDispatcher};
use shared_utils::{format_date, today};

use crate::models::DirectoryError;
use crate::services::{DoctorDirectoryService, ShiftService, SpecialtyDirectoryService};

/// Describe a named specialty, or list the available ones when the name is
/// missing or unknown.
pub async fn explain_specialty(
    pool: &MySqlPool,
    dispatcher: &mut CollectingDispatcher,
    name: Option<&str>,
) -> Result<(), DirectoryError> {
    let service = SpecialtyDirectoryService::new(pool.clone());

    let Some(name) = name else {
        utter_specialty_menu(&service, dispatcher, "Bạn muốn tìm hiểu chuyên khoa nào?").await?;
        return Ok(());
    };

    match service.find(name).await? {
        Some(specialty) => {
            let description = specialty
                .description
                .unwrap_or_else(|| "chưa có mô tả chi tiết".to_string());
            dispatcher.utter(format!("Chuyên khoa {}: {}", specialty.name, description));
        }
        None => {
            let intro = format!("Tôi không tìm thấy chuyên khoa \"{name}\".");
            utter_specialty_menu(&service, dispatcher, &intro).await?;
        }
    }

    Ok(())
}

/// List doctors, optionally restricted to one specialty, as cards with a
/// booking affordance.
pub async fn list_doctors(
    pool: &MySqlPool,
    dispatcher: &mut CollectingDispatcher,
    specialty: Option<&str>,
) -> Result<(), DirectoryError> {
    let service = DoctorDirectoryService::new(pool.clone());
    let doctors = service.list(specialty).await?;

    if doctors.is_empty() {
        dispatcher.utter(match specialty {
            Some(specialty) => format!("Hiện chưa có bác sĩ nào thuộc chuyên khoa {specialty}."),
            None => "Hiện chưa có bác sĩ nào trong danh bạ.".to_string(),
        });
        return Ok(());
    }

    dispatcher.utter(match specialty {
        Some(specialty) => format!("Danh sách bác sĩ chuyên khoa {specialty}:"),
        None => "Danh sách bác sĩ của phòng khám:".to_string(),
    });

    for doctor in &doctors {
        dispatcher.utter_buttons(
            doctor.render(),
            vec![Button::command(
                "Đặt lịch",
                intents::BOOK_WITH_DOCTOR,
                &json!({
                    (entities::DOCTOR_ID): doctor.id,
                    (entities::DOCTOR_NAME): doctor.name,
                    (entities::SPECIALTY): doctor.specialty,
                }),
            )],
        );
    }

    Ok(())
}

/// A doctor's contact card(s); one card per specialty the doctor holds.
pub async fn doctor_info(
    pool: &MySqlPool,
    dispatcher: &mut CollectingDispatcher,
    name: Option<&str>,
) -> Result<(), DirectoryError> {
    let Some(name) = name else {
        dispatcher.utter("Bạn muốn xem thông tin của bác sĩ nào?");
        return Ok(());
    };

    let service = DoctorDirectoryService::new(pool.clone());
    let cards = service.find_by_name(name, None).await?;

    if cards.is_empty() {
        dispatcher.utter(format!("Tôi không tìm thấy bác sĩ nào tên \"{name}\"."));
        return Ok(());
    }

    for card in &cards {
        dispatcher.utter(card.render());
    }

    Ok(())
}

/// The doctor's working shifts for the coming week.
pub async fn doctor_schedule(
    pool: &MySqlPool,
    dispatcher: &mut CollectingDispatcher,
    name: Option<&str>,
) -> Result<(), DirectoryError> {
    let Some(name) = name else {
        dispatcher.utter("Bạn muốn xem lịch làm việc của bác sĩ nào?");
        return Ok(());
    };

    let doctors = DoctorDirectoryService::new(pool.clone());
    let Some(doctor) = doctors.resolve(name, None).await? else {
        dispatcher.utter(format!("Tôi không tìm thấy bác sĩ nào tên \"{name}\"."));
        return Ok(());
    };

    let shifts = ShiftService::new(pool.clone())
        .upcoming(&doctor.id, today(), 7)
        .await?;

    if shifts.is_empty() {
        dispatcher.utter(format!(
            "Bác sĩ {} không có ca làm việc nào trong 7 ngày tới.",
            doctor.name
        ));
        return Ok(());
    }

    let lines: Vec<String> = shifts.iter().map(|s| format!("- {}", s.day_label())).collect();
    dispatcher.utter(format!(
        "Lịch làm việc của bác sĩ {} trong 7 ngày tới:\n{}",
        doctor.name,
        lines.join("\n")
    ));

    Ok(())
}

/// The doctor who most recently examined this patient.
pub async fn last_examiner(
    pool: &MySqlPool,
    dispatcher: &mut CollectingDispatcher,
    patient_id: &str,
) -> Result<(), DirectoryError> {
    let service = DoctorDirectoryService::new(pool.clone());

    match service.last_examiner(patient_id).await? {
        Some(visit) => dispatcher.utter(format!(
            "Lần khám gần nhất của bạn là ngày {} với bác sĩ {}.",
            format_date(visit.exam_date),
            visit.doctor_name
        )),
        None => dispatcher.utter("Bạn chưa có lịch sử khám nào tại phòng khám."),
    }

    Ok(())
}

async fn utter_specialty_menu(
    service: &SpecialtyDirectoryService,
    dispatcher: &mut CollectingDispatcher,
    intro: &str,
) -> Result<(), DirectoryError> {
    let names: Vec<String> = service.all().await?.into_iter().map(|s| s.name).collect();
    if names.is_empty() {
        dispatcher.utter(intro.to_string());
    } else {
        dispatcher.utter(format!("{intro} Các chuyên khoa hiện có: {}.", names.join(", ")));
    }
    Ok(())
}
