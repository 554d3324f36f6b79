//! PostgreSQL File Catalog

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::PdfFile;
use crate::domain::repository::FileCatalog;
use crate::domain::value_objects::{FileName, PdfFileId};
use crate::error::FilesResult;

/// PostgreSQL-backed file catalog
#[derive(Clone)]
pub struct PgFileCatalog {
    pool: PgPool,
}

impl PgFileCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl FileCatalog for PgFileCatalog {
    async fn create(&self, file: &PdfFile) -> FilesResult<()> {
        sqlx::query(
            r#"
            INSERT INTO pdf_files (
                file_id,
                title,
                pdf,
                created_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(file.file_id.as_uuid())
        .bind(&file.title)
        .bind(file.pdf.as_str())
        .bind(file.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self) -> FilesResult<Vec<PdfFile>> {
        let rows = sqlx::query_as::<_, PdfFileRow>(
            r#"
            SELECT
                file_id,
                title,
                pdf,
                created_at
            FROM pdf_files
            ORDER BY created_at ASC, file_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PdfFileRow::into_file).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PdfFileRow {
    file_id: Uuid,
    title: String,
    pdf: String,
    created_at: DateTime<Utc>,
}

impl PdfFileRow {
    fn into_file(self) -> PdfFile {
        PdfFile {
            file_id: PdfFileId::from_uuid(self.file_id),
            title: self.title,
            pdf: FileName::from_db(self.pdf),
            created_at: self.created_at,
        }
    }
}
