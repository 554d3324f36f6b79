//! User Name Value Object
//!
//! Free-form display name shown to other users. Not unique and not used
//! for login; the email is the identifier.

use derive_more::Display;
use kernel::error::app_error::{AppError, AppResult};
use unicode_normalization::UnicodeNormalization;

/// Maximum display name length in characters
pub const USER_NAME_MAX_LENGTH: usize = 100;

/// Display name value object
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct UserName(String);

impl UserName {
    /// NFKC-normalize, trim, then validate
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let normalized: String = raw.as_ref().nfkc().collect();
        let name = normalized.trim();

        if name.is_empty() {
            return Err(AppError::bad_request("Name is required"));
        }

        let len = name.chars().count();
        if len > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Name must be at most {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        if name.chars().any(char::is_control) {
            return Err(AppError::bad_request("Name contains invalid characters"));
        }

        Ok(Self(name.to_string()))
    }

    /// Rebuild from a stored value
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
