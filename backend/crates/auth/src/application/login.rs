//! Login Use Case
//!
//! Verifies credentials and issues an identity token.

use std::sync::Arc;

use platform::password::{Argon2Hasher, ClearTextPassword};
use platform::token::TokenIssuer;

use crate::domain::repository::CredentialStore;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult, CredentialFailure};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Signed token asserting `{name, email}`
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<S>
where
    S: CredentialStore,
{
    store: Arc<S>,
    hasher: Argon2Hasher,
    tokens: TokenIssuer,
}

impl<S> LoginUseCase<S>
where
    S: CredentialStore,
{
    pub fn new(store: Arc<S>, hasher: Argon2Hasher, tokens: TokenIssuer) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // An email that cannot exist in the store is an unknown email
        let email = Email::new(input.email)
            .map_err(|_| AuthError::InvalidCredentials(CredentialFailure::UnknownEmail))?;

        let user = self
            .store
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials(CredentialFailure::UnknownEmail))?;

        let password = ClearTextPassword::new(input.password);
        let valid = self
            .hasher
            .verify_blocking(password, user.password_hash.clone())
            .await?;

        if !valid {
            return Err(AuthError::InvalidCredentials(
                CredentialFailure::PasswordMismatch,
            ));
        }

        let token = self.tokens.issue(&user.identity_claims())?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User logged in"
        );

        Ok(LoginOutput { token })
    }
}
