//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (PdfFile, StoredObject)
//! - Domain value objects (FileName, ObjectKey)
//! - Domain services (signed read URLs)
//! - Repository traits (FileCatalog, ObjectStore)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
