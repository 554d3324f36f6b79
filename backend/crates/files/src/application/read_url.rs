//! Read URL Use Case
//!
//! Mints a time-limited signed URL for `assets/<filename>`. The object is
//! not looked up; a URL for a missing object yields 404 when fetched.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::FilesConfig;
use crate::domain::services::UrlSigner;
use crate::domain::value_objects::FileName;
use crate::error::FilesResult;

/// Read URL use case
pub struct ReadUrlUseCase {
    signer: UrlSigner,
    config: Arc<FilesConfig>,
}

impl ReadUrlUseCase {
    pub fn new(signer: UrlSigner, config: Arc<FilesConfig>) -> Self {
        Self { signer, config }
    }

    pub fn execute(&self, file_name: String) -> FilesResult<String> {
        self.execute_at(file_name, Utc::now().timestamp())
    }

    /// Sign relative to an explicit clock reading (Unix seconds)
    pub fn execute_at(&self, file_name: String, now: i64) -> FilesResult<String> {
        let key = FileName::new(file_name)?.object_key();
        let expires = now.saturating_add(self.config.signed_url_ttl_secs());
        let signature = self.signer.sign(&key, expires);

        tracing::debug!(key = %key, expires, "Signed read URL issued");

        Ok(format!(
            "{}/blob/{}?expires={}&signature={}",
            self.config.base_url(),
            key.url_path(),
            expires,
            signature
        ))
    }
}
