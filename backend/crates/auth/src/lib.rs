//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, credential store trait
//! - `application/` - Register and login use cases
//! - `infra/` - PostgreSQL and in-memory credential stores
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Registration with name + email + password (email is unique)
//! - Login by email + password, answered with a signed HS256 token
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional application-wide pepper
//! - Tokens are stateless; verification needs only the signing secret
//! - Hashing runs on the blocking thread pool

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult, CredentialFailure};
pub use infra::{memory::InMemoryCredentialStore, postgres::PgCredentialStore};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
