//! Infrastructure Layer
//!
//! Catalog and object store implementations.

pub mod fs;
pub mod memory;
pub mod postgres;

pub use fs::FsObjectStore;
pub use memory::{InMemoryFileCatalog, InMemoryObjectStore};
pub use postgres::PgFileCatalog;
