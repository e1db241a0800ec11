use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::AppError;

/// One medication line of an exam's prescription, joined with the exam
/// date for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationLine {
    pub exam_date: NaiveDate,
    pub name: String,
    pub dosage: String,
    pub quantity: i32,
    pub unit: String,
    pub duration: String,
}

#[derive(Debug, Error)]
pub enum PrescriptionError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<PrescriptionError> for AppError {
    fn from(err: PrescriptionError) -> Self {
        match err {
            PrescriptionError::Database(e) => AppError::Database(e.to_string()),
        }
    }
}
