//! In-Memory Implementations
//!
//! Process-local catalog and object store for tests and database-less runs.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::domain::entities::{ObjectBlob, PdfFile, StoredObject};
use crate::domain::repository::{FileCatalog, ObjectStore};
use crate::domain::value_objects::ObjectKey;
use crate::error::FilesResult;

/// Catalog kept in insertion order
#[derive(Debug, Default)]
pub struct InMemoryFileCatalog {
    files: RwLock<Vec<PdfFile>>,
}

impl InMemoryFileCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileCatalog for InMemoryFileCatalog {
    async fn create(&self, file: &PdfFile) -> FilesResult<()> {
        self.files.write().await.push(file.clone());
        Ok(())
    }

    async fn list(&self) -> FilesResult<Vec<PdfFile>> {
        Ok(self.files.read().await.clone())
    }
}

/// Objects keyed by their full key
#[derive(Debug, Default)]
pub struct InMemoryObjectStore {
    objects: RwLock<HashMap<String, ObjectBlob>>,
}

impl InMemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.objects.read().await.contains_key(key)
    }
}

impl ObjectStore for InMemoryObjectStore {
    async fn put(
        &self,
        key: &ObjectKey,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> FilesResult<StoredObject> {
        let meta = StoredObject {
            key: key.to_string(),
            content_type: content_type.to_string(),
            size: bytes.len() as u64,
        };
        self.objects.write().await.insert(
            key.to_string(),
            ObjectBlob {
                meta: meta.clone(),
                bytes,
            },
        );
        Ok(meta)
    }

    async fn get(&self, key: &ObjectKey) -> FilesResult<Option<ObjectBlob>> {
        Ok(self.objects.read().await.get(key.as_str()).cloned())
    }
}
