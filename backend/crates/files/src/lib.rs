//! Files Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Catalog entities, file names and object keys, URL signing
//! - `application/` - Upload, listing, signed read URL and fetch use cases
//! - `infra/` - PostgreSQL catalog, filesystem and in-memory stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Storage Model
//! - Uploads land at `assets/<original file name>` inside one bucket
//! - A catalog record `{_id, title, pdf}` is written after the bytes
//! - Reads go through HMAC-signed, time-limited URLs

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::FilesConfig;
pub use error::{FilesError, FilesResult};
pub use infra::{
    fs::FsObjectStore,
    memory::{InMemoryFileCatalog, InMemoryObjectStore},
    postgres::PgFileCatalog,
};
pub use presentation::router::{files_router, files_router_generic};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
