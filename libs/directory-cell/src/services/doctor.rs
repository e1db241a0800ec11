use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use tracing::debug;

use crate::models::{DirectoryError, DoctorCard, ExamVisit};

const DOCTOR_COLUMNS: &str = "bs.maBS, bs.tenBS, bs.sdtBS, bs.emailBS, bs.moTaBS, ck.tenCK";
const DOCTOR_JOIN: &str = "FROM bacsi bs \
     JOIN chuyenmon cm ON bs.maBS = cm.maBS \
     JOIN chuyenkhoa ck ON cm.maCK = ck.maCK";

fn map_doctor(row: &MySqlRow) -> Result<DoctorCard, sqlx::Error> {
    Ok(DoctorCard {
        id: row.try_get("maBS")?,
        name: row.try_get("tenBS")?,
        phone: row.try_get("sdtBS")?,
        email: row.try_get("emailBS")?,
        bio: row.try_get("moTaBS")?,
        specialty: row.try_get("tenCK")?,
    })
}

fn map_doctors(rows: Vec<MySqlRow>) -> Result<Vec<DoctorCard>, DirectoryError> {
    rows.iter()
        .map(map_doctor)
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}

/// Read queries over the doctor directory.
pub struct DoctorDirectoryService {
    pool: MySqlPool,
}

impl DoctorDirectoryService {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Substring match on the doctor's name, optionally scoped to one
    /// specialty. Returns one card per (doctor, specialty) pairing.
    pub async fn find_by_name(
        &self,
        name: &str,
        specialty: Option<&str>,
    ) -> Result<Vec<DoctorCard>, DirectoryError> {
        debug!("Searching doctors by name {:?} in specialty {:?}", name, specialty);

        let pattern = format!("%{}%", name.trim().to_lowercase());
        let rows = match specialty {
            Some(specialty) => {
                let sql = format!(
                    "SELECT {DOCTOR_COLUMNS} {DOCTOR_JOIN} \
                     WHERE LOWER(bs.tenBS) LIKE ? AND LOWER(ck.tenCK) = LOWER(?) \
                     ORDER BY bs.tenBS, ck.tenCK"
                );
                sqlx::query(&sql)
                    .bind(&pattern)
                    .bind(specialty)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let sql = format!(
                    "SELECT {DOCTOR_COLUMNS} {DOCTOR_JOIN} \
                     WHERE LOWER(bs.tenBS) LIKE ? \
                     ORDER BY bs.tenBS, ck.tenCK"
                );
                sqlx::query(&sql).bind(&pattern).fetch_all(&self.pool).await?
            }
        };

        map_doctors(rows)
    }

    /// All doctors, optionally restricted to one specialty.
    pub async fn list(&self, specialty: Option<&str>) -> Result<Vec<DoctorCard>, DirectoryError> {
        let rows = match specialty {
            Some(specialty) => {
                let sql = format!(
                    "SELECT {DOCTOR_COLUMNS} {DOCTOR_JOIN} \
                     WHERE LOWER(ck.tenCK) = LOWER(?) \
                     ORDER BY bs.tenBS"
                );
                sqlx::query(&sql).bind(specialty).fetch_all(&self.pool).await?
            }
            None => {
                let sql =
                    format!("SELECT {DOCTOR_COLUMNS} {DOCTOR_JOIN} ORDER BY ck.tenCK, bs.tenBS");
                sqlx::query(&sql).fetch_all(&self.pool).await?
            }
        };

        map_doctors(rows)
    }

    /// Doctors belonging to any of the given specialties, for the triage
    /// recommendation. An empty set short-circuits to no rows.
    pub async fn list_by_specialties(
        &self,
        specialties: &[String],
    ) -> Result<Vec<DoctorCard>, DirectoryError> {
        if specialties.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; specialties.len()].join(", ");
        let sql = format!(
            "SELECT {DOCTOR_COLUMNS} {DOCTOR_JOIN} \
             WHERE ck.tenCK IN ({placeholders}) \
             ORDER BY ck.tenCK, bs.tenBS"
        );

        let mut query = sqlx::query(&sql);
        for specialty in specialties {
            query = query.bind(specialty);
        }

        map_doctors(query.fetch_all(&self.pool).await?)
    }

    /// Resolve an already-validated doctor name to its directory row.
    pub async fn resolve(
        &self,
        name: &str,
        specialty: Option<&str>,
    ) -> Result<Option<DoctorCard>, DirectoryError> {
        Ok(self.find_by_name(name, specialty).await?.into_iter().next())
    }

    /// The doctor who most recently examined this patient.
    pub async fn last_examiner(
        &self,
        patient_id: &str,
    ) -> Result<Option<ExamVisit>, DirectoryError> {
        let row = sqlx::query(
            "SELECT bs.tenBS, pk.ngayKham \
             FROM phieukham pk \
             JOIN bacsi bs ON pk.maBS = bs.maBS \
             WHERE pk.maBN = ? \
             ORDER BY pk.ngayKham DESC \
             LIMIT 1",
        )
        .bind(patient_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| {
            Ok(ExamVisit {
                doctor_name: row.try_get("tenBS")?,
                exam_date: row.try_get("ngayKham")?,
            })
        })
        .transpose()
        .map_err(DirectoryError::Database)
    }
}
