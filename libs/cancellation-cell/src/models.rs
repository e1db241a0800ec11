use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::AppError;
use shared_utils::{format_date, format_time};

/// One of the patient's appointments, joined with doctor and specialty
/// names for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentSummary {
    pub id: String,
    pub doctor_name: String,
    pub specialty: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub description: Option<String>,
}

impl AppointmentSummary {
    /// Chat rendering of the appointment, used by the selection list and
    /// the confirmation step.
    pub fn render(&self) -> String {
        let mut card = format!(
            "📅 Lịch khám {}\n- Bác sĩ: {} (chuyên khoa {})\n- Thời gian: {} ngày {}",
            self.id,
            self.doctor_name,
            self.specialty,
            format_time(self.time),
            format_date(self.date)
        );
        if let Some(description) = &self.description {
            card.push_str(&format!("\n- Mô tả: {description}"));
        }
        card
    }

    /// Short one-line label for selection buttons.
    pub fn button_label(&self) -> String {
        format!("{} - BS {}", format_time(self.time), self.doctor_name)
    }
}

#[derive(Debug, Error)]
pub enum CancellationError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<CancellationError> for AppError {
    fn from(err: CancellationError) -> Self {
        match err {
            CancellationError::Database(e) => AppError::Database(e.to_string()),
        }
    }
}
