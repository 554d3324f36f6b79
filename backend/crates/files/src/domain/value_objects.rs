//! Domain Value Objects
//!
//! File names and object keys. Both are validated once at construction
//! and are safe to join onto a filesystem root afterwards.

use std::fmt;

use kernel::error::app_error::{AppError, AppResult};

pub use kernel::id::PdfFileId;

/// Longest accepted file name, in bytes
///
/// Leaves room under the 255-byte filesystem limit for the store's
/// `.json` sidecar and `.<uuid>.tmp` suffixes.
pub const FILE_NAME_MAX_BYTES: usize = 200;

/// Prefix under which uploads are stored
pub const ASSETS_PREFIX: &str = "assets";

fn check_segment(segment: &str, what: &str) -> AppResult<()> {
    if segment.is_empty() {
        return Err(AppError::bad_request(format!("{what} is required")));
    }
    if segment.len() > FILE_NAME_MAX_BYTES {
        return Err(AppError::bad_request(format!("{what} is too long")));
    }
    if segment == "." || segment == ".." {
        return Err(AppError::bad_request(format!("Invalid {what}")));
    }
    if segment
        .chars()
        .any(|c| c == '/' || c == '\\' || c.is_control())
    {
        return Err(AppError::bad_request(format!("Invalid {what}")));
    }
    Ok(())
}

/// Name of an uploaded file, as supplied by the client
///
/// A single path segment: no separators, no `.`/`..`, no control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName(String);

impl FileName {
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        check_segment(&name, "File name")?;
        Ok(Self(name))
    }

    /// Reconstruct from database (already validated on write)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Object key the file is stored under: `assets/<name>`
    pub fn object_key(&self) -> ObjectKey {
        ObjectKey(format!("{ASSETS_PREFIX}/{}", self.0))
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Slash-separated object key inside the bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Parse a key; every segment must be a valid file name
    pub fn parse(key: impl Into<String>) -> AppResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(AppError::bad_request("Object key is required"));
        }
        for segment in key.split('/') {
            check_segment(segment, "Object key")?;
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Percent-encoded form for use in a URL path
    pub fn url_path(&self) -> String {
        self.segments()
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
