//! Domain Entities

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{FileName, PdfFileId};

/// Catalog record of an uploaded PDF
#[derive(Debug, Clone)]
pub struct PdfFile {
    pub file_id: PdfFileId,
    pub title: String,
    /// Stored file name; the object lives at `assets/<pdf>`
    pub pdf: FileName,
    pub created_at: DateTime<Utc>,
}

impl PdfFile {
    pub fn new(title: String, pdf: FileName) -> Self {
        Self {
            file_id: PdfFileId::new(),
            title,
            pdf,
            created_at: Utc::now(),
        }
    }
}

/// Metadata of a stored object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub key: String,
    pub content_type: String,
    pub size: u64,
}

/// Object bytes with their metadata
#[derive(Debug, Clone)]
pub struct ObjectBlob {
    pub meta: StoredObject,
    pub bytes: Vec<u8>,
}
