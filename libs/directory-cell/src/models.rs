use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::AppError;
use shared_utils::{format_date, format_time};

/// One doctor/specialty pairing from the `bacsi` × `chuyenmon` ×
/// `chuyenkhoa` join. A doctor with two specialties yields two cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorCard {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub specialty: String,
}

impl DoctorCard {
    /// The chat card shown for this doctor, in the bot's message style.
    pub fn render(&self) -> String {
        let mut card = format!("🩺 Bác sĩ {}\n- Chuyên khoa: {}", self.name, self.specialty);
        card.push_str(&format!("\n- Liên hệ: {}", self.phone));
        if let Some(email) = &self.email {
            card.push_str(&format!("\n- Email: {email}"));
        }
        if let Some(bio) = &self.bio {
            card.push_str(&format!("\n- Giới thiệu: {bio}"));
        }
        card
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specialty {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    Working,
    Off,
}

impl ShiftStatus {
    /// The `calamviec.trangThai` column stores `working` / `off`.
    pub fn from_db(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("off") {
            ShiftStatus::Off
        } else {
            ShiftStatus::Working
        }
    }
}

/// One work-shift row of a doctor on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkShift {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub status: ShiftStatus,
}

impl WorkShift {
    pub fn is_working(&self) -> bool {
        self.status == ShiftStatus::Working
    }

    /// Half-open window: a shift 08:00-12:00 accepts 08:00 but not 12:00.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }

    pub fn window_label(&self) -> String {
        format!("{} - {}", format_time(self.start), format_time(self.end))
    }

    pub fn day_label(&self) -> String {
        format!("{}: {}", format_date(self.date), self.window_label())
    }
}

/// The windows of a day, verbatim, for corrective messages.
pub fn format_windows(shifts: &[WorkShift]) -> String {
    shifts
        .iter()
        .map(WorkShift::window_label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Latest exam visit of a patient, for the "who examined me last" lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamVisit {
    pub doctor_name: String,
    pub exam_date: NaiveDate,
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::Database(e) => AppError::Database(e.to_string()),
        }
    }
}
