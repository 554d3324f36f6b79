//! Repository Traits
//!
//! Interfaces for data persistence. Implementations are in the infra layer.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Credential store
///
/// The only persistence surface the auth flows depend on.
#[trait_variant::make(CredentialStore: Send)]
pub trait LocalCredentialStore {
    /// Insert a user, atomically enforcing email uniqueness.
    ///
    /// Fails with `AuthError::DuplicateEmail` and stores nothing if a
    /// record with the same email exists. Implementations must not
    /// check-then-insert.
    async fn create_user(&self, new_user: NewUser) -> AuthResult<User>;

    /// Look up by normalized email. `None` means no such user.
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;
}
