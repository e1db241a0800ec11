use chrono::{Duration, NaiveDate};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use crate::models::{DirectoryError, ShiftStatus, WorkShift};

fn map_shift(row: &MySqlRow) -> Result<WorkShift, sqlx::Error> {
    let status: String = row.try_get("trangThai")?;
    Ok(WorkShift {
        date: row.try_get("ngayLam")?,
        start: row.try_get("gioBatDau")?,
        end: row.try_get("gioKetThuc")?,
        status: ShiftStatus::from_db(&status),
    })
}

/// Read queries over the `calamviec` work-shift table.
pub struct ShiftService {
    pool: MySqlPool,
}

impl ShiftService {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// The doctor's shifts on one day that are not marked off.
    pub async fn working_shifts_on(
        &self,
        doctor_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<WorkShift>, DirectoryError> {
        let rows = sqlx::query(
            "SELECT ngayLam, gioBatDau, gioKetThuc, trangThai \
             FROM calamviec \
             WHERE maBS = ? AND ngayLam = ? \
             ORDER BY gioBatDau",
        )
        .bind(doctor_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        let shifts = rows
            .iter()
            .map(map_shift)
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter(WorkShift::is_working)
            .collect();

        Ok(shifts)
    }

    /// The doctor's working shifts over the next `days` days, for the
    /// schedule lookup.
    pub async fn upcoming(
        &self,
        doctor_id: &str,
        from: NaiveDate,
        days: i64,
    ) -> Result<Vec<WorkShift>, DirectoryError> {
        let until = from + Duration::days(days);
        let rows = sqlx::query(
            "SELECT ngayLam, gioBatDau, gioKetThuc, trangThai \
             FROM calamviec \
             WHERE maBS = ? AND ngayLam BETWEEN ? AND ? AND trangThai <> 'off' \
             ORDER BY ngayLam, gioBatDau",
        )
        .bind(doctor_id)
        .bind(from)
        .bind(until)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(map_shift)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }
}
