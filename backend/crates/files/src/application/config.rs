//! Application Configuration
//!
//! Configuration for the Files application layer.

use std::fmt;
use std::time::Duration;

use platform::crypto::random_bytes;

/// Files application configuration
#[derive(Clone)]
pub struct FilesConfig {
    /// HMAC key for signed read URLs
    pub signing_secret: Vec<u8>,
    /// Externally reachable origin, without trailing slash
    pub public_base_url: String,
    /// Lifetime of a signed read URL
    pub signed_url_ttl: Duration,
    /// Request body limit for uploads
    pub max_upload_bytes: usize,
    /// Content type recorded for every upload
    pub upload_content_type: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            signing_secret: Vec::new(),
            public_base_url: "http://localhost:3000".to_string(),
            signed_url_ttl: Duration::from_secs(3600), // 1 hour
            max_upload_bytes: 25 * 1024 * 1024,        // 25 MiB
            upload_content_type: "application/pdf".to_string(),
        }
    }
}

impl FilesConfig {
    /// Create config with a random signing secret (URLs die with the process)
    pub fn with_random_secret() -> Self {
        Self {
            signing_secret: random_bytes(32),
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        self.public_base_url.trim_end_matches('/')
    }

    /// Signed URL TTL in whole seconds
    pub fn signed_url_ttl_secs(&self) -> i64 {
        i64::try_from(self.signed_url_ttl.as_secs()).unwrap_or(i64::MAX)
    }
}

impl fmt::Debug for FilesConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilesConfig")
            .field("signing_secret", &"[REDACTED]")
            .field("public_base_url", &self.public_base_url)
            .field("signed_url_ttl", &self.signed_url_ttl)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .field("upload_content_type", &self.upload_content_type)
            .finish()
    }
}
