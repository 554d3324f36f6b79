//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entities::{ObjectBlob, PdfFile, StoredObject};
use crate::domain::value_objects::ObjectKey;
use crate::error::FilesResult;

/// Catalog of uploaded files
#[trait_variant::make(FileCatalog: Send)]
pub trait LocalFileCatalog {
    /// Persist a record
    async fn create(&self, file: &PdfFile) -> FilesResult<()>;

    /// All records, oldest first
    async fn list(&self) -> FilesResult<Vec<PdfFile>>;
}

/// Bucket of file bytes addressed by key
#[trait_variant::make(ObjectStore: Send)]
pub trait LocalObjectStore {
    /// Write (or replace) the object at `key`
    async fn put(
        &self,
        key: &ObjectKey,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> FilesResult<StoredObject>;

    /// Read the object at `key`. `None` means no such object.
    async fn get(&self, key: &ObjectKey) -> FilesResult<Option<ObjectBlob>>;
}
