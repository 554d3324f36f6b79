//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::CredentialStore;
use crate::error::AuthResult;
use crate::infra::postgres::PgCredentialStore;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with the PostgreSQL credential store
///
/// Routes are relative; the binary nests them under `/api`.
pub fn auth_router(store: PgCredentialStore, config: AuthConfig) -> AuthResult<Router> {
    auth_router_generic(store, config)
}

/// Create a generic Auth router for any credential store implementation
pub fn auth_router_generic<S>(store: S, config: AuthConfig) -> AuthResult<Router>
where
    S: CredentialStore + Send + Sync + 'static,
{
    let state = AuthAppState::new(Arc::new(store), config)?;

    Ok(Router::new()
        .route("/register", post(handlers::register::<S>))
        .route("/login", post(handlers::login::<S>))
        .with_state(state))
}
