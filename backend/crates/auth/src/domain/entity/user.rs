//! User Entity
//!
//! Identity record. Created once at registration and never mutated or
//! deleted by this service.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use platform::token::IdentityClaims;

use crate::domain::value_object::{email::Email, user_id::UserId, user_name::UserName};

/// Registration data handed to the credential store
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: UserName,
    pub email: Email,
    pub password_hash: HashedPassword,
}

/// Stored user
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub name: UserName,
    /// Unique login identifier
    pub email: Email,
    /// Argon2id PHC string, never the plaintext
    pub password_hash: HashedPassword,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Materialize a new record; the store persists it
    pub fn create(new_user: NewUser) -> Self {
        Self {
            user_id: UserId::new(),
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: Utc::now(),
        }
    }

    /// Claims embedded in a login token
    pub fn identity_claims(&self) -> IdentityClaims {
        IdentityClaims {
            name: self.name.to_string(),
            email: self.email.to_string(),
        }
    }
}
