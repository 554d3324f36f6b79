//! Fetch Object Use Case
//!
//! Serves object bytes behind a signed read URL.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::ObjectBlob;
use crate::domain::repository::ObjectStore;
use crate::domain::services::UrlSigner;
use crate::domain::value_objects::ObjectKey;
use crate::error::{FilesError, FilesResult};

/// Fetch input, straight from the request
pub struct FetchObjectInput {
    pub key: String,
    pub expires: Option<String>,
    pub signature: Option<String>,
}

/// Fetch object use case
pub struct FetchObjectUseCase<O>
where
    O: ObjectStore,
{
    objects: Arc<O>,
    signer: UrlSigner,
}

impl<O> FetchObjectUseCase<O>
where
    O: ObjectStore,
{
    pub fn new(objects: Arc<O>, signer: UrlSigner) -> Self {
        Self { objects, signer }
    }

    pub async fn execute(&self, input: FetchObjectInput) -> FilesResult<ObjectBlob> {
        self.execute_at(input, Utc::now().timestamp()).await
    }

    /// Verify relative to an explicit clock reading (Unix seconds)
    pub async fn execute_at(&self, input: FetchObjectInput, now: i64) -> FilesResult<ObjectBlob> {
        let key = ObjectKey::parse(input.key)?;

        let expires = input
            .expires
            .as_deref()
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or(FilesError::InvalidSignature)?;
        let signature = input.signature.ok_or(FilesError::InvalidSignature)?;

        self.signer.verify(&key, expires, &signature, now)?;

        self.objects
            .get(&key)
            .await?
            .ok_or_else(|| FilesError::ObjectNotFound(key.to_string()))
    }
}
