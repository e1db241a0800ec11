use chrono::NaiveDate;
use sqlx::{MySqlPool, Row};
use tracing::{debug, info, warn};

use directory_cell::WorkShift;

use crate::models::{conflict_in_same_window, BookingError, NewAppointment};

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_CANCELLED: &str = "cancelled";

/// Writes against the `lichkham` appointment table.
pub struct AppointmentService {
    pool: MySqlPool,
}

impl AppointmentService {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Times of the patient's non-cancelled appointments with this doctor
    /// on this date.
    pub async fn booked_times(
        &self,
        patient_id: &str,
        doctor_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<chrono::NaiveTime>, BookingError> {
        let rows = sqlx::query(
            "SELECT gioKham FROM lichkham \
             WHERE maBN = ? AND maBS = ? AND ngayKham = ? AND trangThai <> ?",
        )
        .bind(patient_id)
        .bind(doctor_id)
        .bind(date)
        .bind(STATUS_CANCELLED)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| row.try_get("gioKham"))
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    /// Insert the appointment row.
    ///
    /// The duplicate-booking check and the INSERT run inside one
    /// transaction, with the patient's rows locked, so two concurrent
    /// submissions cannot both pass the check (see DESIGN.md).
    pub async fn insert(
        &self,
        appointment: &NewAppointment,
        shifts: &[WorkShift],
    ) -> Result<(), BookingError> {
        debug!(
            "Inserting appointment {} for patient {} with doctor {}",
            appointment.id, appointment.patient_id, appointment.doctor_id
        );

        let mut tx = self.pool.begin().await?;

        let rows = sqlx::query(
            "SELECT gioKham FROM lichkham \
             WHERE maBN = ? AND maBS = ? AND ngayKham = ? AND trangThai <> ? \
             FOR UPDATE",
        )
        .bind(&appointment.patient_id)
        .bind(&appointment.doctor_id)
        .bind(appointment.date)
        .bind(STATUS_CANCELLED)
        .fetch_all(&mut *tx)
        .await?;

        let existing: Vec<chrono::NaiveTime> = rows
            .iter()
            .map(|row| row.try_get("gioKham"))
            .collect::<Result<Vec<_>, _>>()?;

        if conflict_in_same_window(appointment.time, &existing, shifts) {
            warn!(
                "Rejected duplicate booking for patient {} with doctor {} on {}",
                appointment.patient_id, appointment.doctor_id, appointment.date
            );
            tx.rollback().await?;
            return Err(BookingError::Conflict);
        }

        sqlx::query(
            "INSERT INTO lichkham (maLK, maBN, maBS, maCK, ngayKham, gioKham, trangThai, moTa) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&appointment.id)
        .bind(&appointment.patient_id)
        .bind(&appointment.doctor_id)
        .bind(&appointment.specialty_id)
        .bind(appointment.date)
        .bind(appointment.time)
        .bind(STATUS_PENDING)
        .bind(&appointment.description)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("Appointment {} booked", appointment.id);
        Ok(())
    }
}
