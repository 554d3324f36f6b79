//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use platform::password::Argon2Hasher;
use platform::token::TokenIssuer;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::CredentialStore;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginRequest, RegisterRequest, StatusResponse};

/// Shared state for auth handlers
pub struct AuthAppState<S>
where
    S: CredentialStore + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub config: Arc<AuthConfig>,
    pub hasher: Argon2Hasher,
    pub tokens: TokenIssuer,
}

// Manual impl: `S` itself need not be Clone behind the Arc.
impl<S> Clone for AuthAppState<S>
where
    S: CredentialStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            config: self.config.clone(),
            hasher: self.hasher.clone(),
            tokens: self.tokens.clone(),
        }
    }
}

impl<S> AuthAppState<S>
where
    S: CredentialStore + Send + Sync + 'static,
{
    /// Build hasher and token issuer from config; fails on bad cost or empty secret
    pub fn new(store: Arc<S>, config: AuthConfig) -> AuthResult<Self> {
        let hasher = Argon2Hasher::new(config.hash_cost, config.pepper())?;
        let tokens = TokenIssuer::new(&config.jwt_secret, config.token_ttl)?;

        Ok(Self {
            store,
            config: Arc::new(config),
            hasher,
            tokens,
        })
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/register
pub async fn register<S>(
    State(state): State<AuthAppState<S>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<Json<StatusResponse>>
where
    S: CredentialStore + Send + Sync + 'static,
{
    let Json(req) = body?;

    let use_case = RegisterUseCase::new(
        state.store.clone(),
        state.hasher.clone(),
        state.config.clone(),
    );

    let input = RegisterInput {
        name: req.name,
        email: req.email,
        password: req.password,
    };

    match use_case.execute(input).await {
        Ok(()) => Ok(Json(StatusResponse::ok())),
        Err(err) if err.is_infrastructure() && state.config.collapse_registration_errors => {
            // Clients only ever see "Duplicate email"; keep the cause in the log
            err.log();
            Err(AuthError::DuplicateEmail)
        }
        Err(err) => Err(err),
    }
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<S>(
    State(state): State<AuthAppState<S>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<StatusResponse>>
where
    S: CredentialStore + Send + Sync + 'static,
{
    let Json(req) = body?;

    let use_case = LoginUseCase::new(
        state.store.clone(),
        state.hasher.clone(),
        state.tokens.clone(),
    );

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(StatusResponse::ok_with_token(output.token)))
}
