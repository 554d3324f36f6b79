//! Router Assembly

use anyhow::Context;
use auth::{auth_router_generic, domain::CredentialStore};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::{Router, routing::get};
use files::domain::repository::{FileCatalog, ObjectStore};
use files::files_router_generic;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;

/// GET /
async fn root() -> &'static str {
    "Success!!"
}

fn cors_layer(origins: Option<&[String]>) -> anyhow::Result<CorsLayer> {
    let Some(origins) = origins else {
        return Ok(CorsLayer::permissive());
    };

    let allowed_origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid FRONTEND_ORIGINS entry {origin:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ])))
}

/// Wire every feature router plus static assets
pub fn build_router<S, C, O>(
    config: &ApiConfig,
    credentials: S,
    catalog: C,
    objects: O,
) -> anyhow::Result<Router>
where
    S: CredentialStore + Send + Sync + 'static,
    C: FileCatalog + Send + Sync + 'static,
    O: ObjectStore + Send + Sync + 'static,
{
    let auth = auth_router_generic(credentials, config.auth.clone())
        .context("building auth router")?;
    let files = files_router_generic(catalog, objects, config.files.clone())
        .context("building files router")?;
    let cors = cors_layer(config.frontend_origins.as_deref())?;

    Ok(Router::new()
        .route("/", get(root))
        .nest("/api", auth)
        .merge(files)
        .fallback_service(ServeDir::new(&config.assets_dir))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}
