//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use platform::password::{Argon2Hasher, ClearTextPassword};

use crate::application::config::AuthConfig;
use crate::domain::entity::NewUser;
use crate::domain::repository::CredentialStore;
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AuthResult;

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
    hasher: Argon2Hasher,
    config: Arc<AuthConfig>,
}

impl<S> RegisterUseCase<S>
where
    S: CredentialStore,
{
    pub fn new(store: Arc<S>, hasher: Argon2Hasher, config: Arc<AuthConfig>) -> Self {
        Self {
            store,
            hasher,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<()> {
        // Validate fields before doing any expensive work
        let name = UserName::new(&input.name)?;
        let email = Email::new(input.email)?;
        let password = ClearTextPassword::new(input.password);
        self.config.password_policy.check(&password)?;

        let password_hash = self.hasher.hash_blocking(password).await?;

        // Uniqueness is enforced by the store's insert, not a prior lookup
        let user = self
            .store
            .create_user(NewUser {
                name,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User registered"
        );

        Ok(())
    }
}
