use chrono::NaiveDate;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use tracing::{debug, info};

use crate::models::{AppointmentSummary, CancellationError};

const STATUS_CANCELLED: &str = "cancelled";

const SUMMARY_SELECT: &str = "SELECT lk.maLK, bs.tenBS, ck.tenCK, lk.ngayKham, lk.gioKham, lk.moTa \
     FROM lichkham lk \
     JOIN bacsi bs ON lk.maBS = bs.maBS \
     JOIN chuyenkhoa ck ON lk.maCK = ck.maCK";

fn map_summary(row: &MySqlRow) -> Result<AppointmentSummary, sqlx::Error> {
    Ok(AppointmentSummary {
        id: row.try_get("maLK")?,
        doctor_name: row.try_get("tenBS")?,
        specialty: row.try_get("tenCK")?,
        date: row.try_get("ngayKham")?,
        time: row.try_get("gioKham")?,
        description: row.try_get("moTa")?,
    })
}

pub struct CancellationService {
    pool: MySqlPool,
}

impl CancellationService {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// The patient's non-cancelled appointments on one date.
    pub async fn list_on(
        &self,
        patient_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<AppointmentSummary>, CancellationError> {
        debug!("Listing appointments of patient {} on {}", patient_id, date);

        let sql = format!(
            "{SUMMARY_SELECT} \
             WHERE lk.maBN = ? AND lk.ngayKham = ? AND lk.trangThai <> ? \
             ORDER BY lk.gioKham"
        );
        let rows = sqlx::query(&sql)
            .bind(patient_id)
            .bind(date)
            .bind(STATUS_CANCELLED)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(map_summary)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    /// The appointment, only if it belongs to this patient and is not
    /// already cancelled.
    pub async fn get_owned(
        &self,
        patient_id: &str,
        appointment_id: &str,
    ) -> Result<Option<AppointmentSummary>, CancellationError> {
        let sql = format!(
            "{SUMMARY_SELECT} \
             WHERE lk.maLK = ? AND lk.maBN = ? AND lk.trangThai <> ?"
        );
        let row = sqlx::query(&sql)
            .bind(appointment_id.trim())
            .bind(patient_id)
            .bind(STATUS_CANCELLED)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| map_summary(&row))
            .transpose()
            .map_err(Into::into)
    }

    /// Flip the appointment's status to cancelled. Returns false when no
    /// row matched (foreign, unknown, or already cancelled).
    pub async fn cancel(
        &self,
        patient_id: &str,
        appointment_id: &str,
    ) -> Result<bool, CancellationError> {
        let result = sqlx::query(
            "UPDATE lichkham SET trangThai = ? \
             WHERE maLK = ? AND maBN = ? AND trangThai <> ?",
        )
        .bind(STATUS_CANCELLED)
        .bind(appointment_id.trim())
        .bind(patient_id)
        .bind(STATUS_CANCELLED)
        .execute(&self.pool)
        .await?;

        let cancelled = result.rows_affected() > 0;
        if cancelled {
            info!("Appointment {} cancelled by patient {}", appointment_id, patient_id);
        }
        Ok(cancelled)
    }
}
