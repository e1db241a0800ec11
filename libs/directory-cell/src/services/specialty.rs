use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use crate::models::{DirectoryError, Specialty};

fn map_specialty(row: &MySqlRow) -> Result<Specialty, sqlx::Error> {
    Ok(Specialty {
        id: row.try_get("maCK")?,
        name: row.try_get("tenCK")?,
        description: row.try_get("moTaCK")?,
    })
}

pub struct SpecialtyDirectoryService {
    pool: MySqlPool,
}

impl SpecialtyDirectoryService {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn all(&self) -> Result<Vec<Specialty>, DirectoryError> {
        let rows = sqlx::query("SELECT maCK, tenCK, moTaCK FROM chuyenkhoa ORDER BY tenCK")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(map_specialty)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    /// Case-insensitive exact match first, substring fallback second.
    pub async fn find(&self, name: &str) -> Result<Option<Specialty>, DirectoryError> {
        let trimmed = name.trim();

        let exact = sqlx::query("SELECT maCK, tenCK, moTaCK FROM chuyenkhoa WHERE LOWER(tenCK) = LOWER(?)")
            .bind(trimmed)
            .fetch_optional(&self.pool)
            .await?;
        if let Some(row) = exact {
            return Ok(Some(map_specialty(&row)?));
        }

        let fuzzy = sqlx::query(
            "SELECT maCK, tenCK, moTaCK FROM chuyenkhoa WHERE LOWER(tenCK) LIKE ? ORDER BY tenCK LIMIT 1",
        )
        .bind(format!("%{}%", trimmed.to_lowercase()))
        .fetch_optional(&self.pool)
        .await?;

        fuzzy
            .map(|row| map_specialty(&row))
            .transpose()
            .map_err(Into::into)
    }
}
