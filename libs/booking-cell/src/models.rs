use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use directory_cell::WorkShift;
use shared_models::AppError;

/// Descriptions shorter than this are asked again.
pub const MIN_DESCRIPTION_CHARS: usize = 5;

/// Appointment row about to be inserted into `lichkham`.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub specialty_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub description: String,
}

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Appointment conflicts with an existing booking in the same shift")]
    Conflict,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Conflict => AppError::BadRequest(err.to_string()),
            BookingError::Database(e) => AppError::Database(e.to_string()),
        }
    }
}

/// True when the time falls inside any of the day's shift windows.
pub fn time_in_windows(time: NaiveTime, shifts: &[WorkShift]) -> bool {
    shifts.iter().any(|shift| shift.contains(time))
}

/// True when an existing appointment time shares the shift window the
/// requested time falls into. One visit per doctor per shift.
pub fn conflict_in_same_window(
    requested: NaiveTime,
    existing: &[NaiveTime],
    shifts: &[WorkShift],
) -> bool {
    let Some(window) = shifts.iter().find(|shift| shift.contains(requested)) else {
        return false;
    };
    existing.iter().any(|time| window.contains(*time))
}
