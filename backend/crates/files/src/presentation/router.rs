//! Files Router

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::FilesConfig;
use crate::domain::repository::{FileCatalog, ObjectStore};
use crate::error::FilesResult;
use crate::infra::{fs::FsObjectStore, postgres::PgFileCatalog};
use crate::presentation::handlers::{self, FilesAppState};

/// Create the Files router with the PostgreSQL catalog and filesystem bucket
pub fn files_router(
    catalog: PgFileCatalog,
    objects: FsObjectStore,
    config: FilesConfig,
) -> FilesResult<Router> {
    files_router_generic(catalog, objects, config)
}

/// Create a generic Files router for any catalog and object store
pub fn files_router_generic<C, O>(catalog: C, objects: O, config: FilesConfig) -> FilesResult<Router>
where
    C: FileCatalog + Send + Sync + 'static,
    O: ObjectStore + Send + Sync + 'static,
{
    let upload_limit = config.max_upload_bytes;
    let state = FilesAppState::new(Arc::new(catalog), Arc::new(objects), config)?;

    Ok(Router::new()
        .route(
            "/upload-files",
            post(handlers::upload_files::<C, O>).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/get-files", get(handlers::get_files::<C, O>))
        .route("/pdf/{filename}", get(handlers::pdf_url::<C, O>))
        .route("/blob/{*key}", get(handlers::get_blob::<C, O>))
        .with_state(state))
}
