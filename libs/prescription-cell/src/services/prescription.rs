use chrono::NaiveDate;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use tracing::debug;

use crate::models::{MedicationLine, PrescriptionError};

/// Newest-first cap for the "latest prescriptions" view. A single exam's
/// lines are never capped.
const LATEST_LINES_LIMIT: i64 = 20;

const LINE_SELECT: &str = "SELECT pk.ngayKham, ct.tenThuoc, ct.lieuDung, ct.soLuong, ct.donVi, ct.thoiGianDung \
     FROM chitietdonthuoc ct \
     JOIN phieukham pk ON ct.maPK = pk.maPK";

fn map_line(row: &MySqlRow) -> Result<MedicationLine, sqlx::Error> {
    Ok(MedicationLine {
        exam_date: row.try_get("ngayKham")?,
        name: row.try_get("tenThuoc")?,
        dosage: row.try_get("lieuDung")?,
        quantity: row.try_get("soLuong")?,
        unit: row.try_get("donVi")?,
        duration: row.try_get("thoiGianDung")?,
    })
}

pub struct PrescriptionService {
    pool: MySqlPool,
}

impl PrescriptionService {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// The patient's most recent medication lines across exams.
    pub async fn latest_lines(
        &self,
        patient_id: &str,
    ) -> Result<Vec<MedicationLine>, PrescriptionError> {
        debug!("Fetching latest prescriptions of patient {}", patient_id);

        let sql = format!(
            "{LINE_SELECT} \
             WHERE pk.maBN = ? \
             ORDER BY pk.ngayKham DESC, ct.tenThuoc \
             LIMIT {LATEST_LINES_LIMIT}"
        );
        let rows = sqlx::query(&sql).bind(patient_id).fetch_all(&self.pool).await?;

        rows.iter()
            .map(map_line)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    /// All medication lines of the exam on one date.
    pub async fn lines_on(
        &self,
        patient_id: &str,
        exam_date: NaiveDate,
    ) -> Result<Vec<MedicationLine>, PrescriptionError> {
        let sql = format!(
            "{LINE_SELECT} \
             WHERE pk.maBN = ? AND pk.ngayKham = ? \
             ORDER BY ct.tenThuoc"
        );
        let rows = sqlx::query(&sql)
            .bind(patient_id)
            .bind(exam_date)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(map_line)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }
}
