//! Upload File Use Case
//!
//! Stores the bytes under `assets/<name>` and records a catalog entry.

use std::sync::Arc;

use crate::application::config::FilesConfig;
use crate::domain::entities::PdfFile;
use crate::domain::repository::{FileCatalog, ObjectStore};
use crate::domain::value_objects::FileName;
use crate::error::{FilesError, FilesResult};

/// Upload input
pub struct UploadFileInput {
    pub title: String,
    /// Original client-side file name
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Upload output
#[derive(Debug, Clone)]
pub struct UploadFileOutput {
    pub file: PdfFile,
    /// Unsigned link to the stored object
    pub media_link: String,
}

/// Upload file use case
pub struct UploadFileUseCase<C, O>
where
    C: FileCatalog,
    O: ObjectStore,
{
    catalog: Arc<C>,
    objects: Arc<O>,
    config: Arc<FilesConfig>,
}

impl<C, O> UploadFileUseCase<C, O>
where
    C: FileCatalog,
    O: ObjectStore,
{
    pub fn new(catalog: Arc<C>, objects: Arc<O>, config: Arc<FilesConfig>) -> Self {
        Self {
            catalog,
            objects,
            config,
        }
    }

    pub async fn execute(&self, input: UploadFileInput) -> FilesResult<UploadFileOutput> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(FilesError::Validation("Title is required".into()));
        }
        let file_name = FileName::new(input.file_name)?;
        let key = file_name.object_key();

        let stored = self
            .objects
            .put(&key, input.bytes, &self.config.upload_content_type)
            .await?;

        // The object stays in place if the catalog write fails
        let file = PdfFile::new(title, file_name);
        self.catalog.create(&file).await?;

        tracing::info!(
            file_id = %file.file_id,
            key = %stored.key,
            size = stored.size,
            "File uploaded"
        );

        Ok(UploadFileOutput {
            media_link: format!("{}/blob/{}", self.config.base_url(), key.url_path()),
            file,
        })
    }
}
