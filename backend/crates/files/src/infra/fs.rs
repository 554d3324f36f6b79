//! Filesystem Object Store
//!
//! Layout under `<root>/<bucket>/`:
//! - `objects/<key>` holds the bytes
//! - `metadata/<key>.json` holds content type, size and write time

use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{ObjectBlob, StoredObject};
use crate::domain::repository::ObjectStore;
use crate::domain::value_objects::ObjectKey;
use crate::error::{FilesError, FilesResult};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Serialize, Deserialize)]
struct ObjectMeta {
    content_type: String,
    size: u64,
    updated_at: DateTime<Utc>,
}

/// Object store backed by a local directory
#[derive(Debug, Clone)]
pub struct FsObjectStore {
    bucket_dir: PathBuf,
}

impl FsObjectStore {
    pub fn new(root: impl AsRef<Path>, bucket: &str) -> Self {
        Self {
            bucket_dir: root.as_ref().join(bucket),
        }
    }

    /// Create the bucket directories
    pub async fn init(&self) -> FilesResult<()> {
        tokio::fs::create_dir_all(self.bucket_dir.join("objects")).await?;
        tokio::fs::create_dir_all(self.bucket_dir.join("metadata")).await?;
        tracing::info!(bucket_dir = %self.bucket_dir.display(), "Object store ready");
        Ok(())
    }

    fn object_path(&self, key: &ObjectKey) -> PathBuf {
        let mut path = self.bucket_dir.join("objects");
        path.extend(key.segments());
        path
    }

    fn meta_path(&self, key: &ObjectKey) -> PathBuf {
        let mut path = self.bucket_dir.join("metadata");
        path.extend(key.segments());
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".json");
        path.set_file_name(name);
        path
    }
}

/// Write via a sibling temp file and rename, so readers never see a partial object
async fn write_atomic(path: &Path, bytes: &[u8]) -> FilesResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(format!(".{}.tmp", Uuid::new_v4()));
    let tmp = path.with_file_name(tmp_name);

    tokio::fs::write(&tmp, bytes).await?;
    if let Err(e) = tokio::fs::rename(&tmp, path).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    Ok(())
}

impl ObjectStore for FsObjectStore {
    async fn put(
        &self,
        key: &ObjectKey,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> FilesResult<StoredObject> {
        let meta = ObjectMeta {
            content_type: content_type.to_string(),
            size: bytes.len() as u64,
            updated_at: Utc::now(),
        };
        let meta_json = serde_json::to_vec(&meta)
            .map_err(|e| FilesError::Internal(format!("Object metadata encoding: {}", e)))?;

        write_atomic(&self.object_path(key), &bytes).await?;
        write_atomic(&self.meta_path(key), &meta_json).await?;

        tracing::debug!(key = %key, size = meta.size, "Object stored");

        Ok(StoredObject {
            key: key.to_string(),
            content_type: meta.content_type,
            size: meta.size,
        })
    }

    async fn get(&self, key: &ObjectKey) -> FilesResult<Option<ObjectBlob>> {
        let bytes = match tokio::fs::read(self.object_path(key)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let content_type = match tokio::fs::read(self.meta_path(key)).await {
            Ok(raw) => serde_json::from_slice::<ObjectMeta>(&raw)
                .map(|meta| meta.content_type)
                .unwrap_or_else(|e| {
                    tracing::warn!(key = %key, error = %e, "Unreadable object metadata");
                    FALLBACK_CONTENT_TYPE.to_string()
                }),
            Err(e) if e.kind() == IoErrorKind::NotFound => FALLBACK_CONTENT_TYPE.to_string(),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(ObjectBlob {
            meta: StoredObject {
                key: key.to_string(),
                content_type,
                size: bytes.len() as u64,
            },
            bytes,
        }))
    }
}
