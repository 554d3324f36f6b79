//! HTTP Handlers

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::FilesConfig;
use crate::application::{
    FetchObjectInput, FetchObjectUseCase, ListFilesUseCase, ReadUrlUseCase, UploadFileInput,
    UploadFileUseCase,
};
use crate::domain::repository::{FileCatalog, ObjectStore};
use crate::domain::services::UrlSigner;
use crate::error::{FilesError, FilesResult};
use crate::presentation::dto::{FileListResponse, PdfFileDto, SignedReadQuery, UploadResponse};

/// Shared state for files handlers
pub struct FilesAppState<C, O>
where
    C: FileCatalog + Send + Sync + 'static,
    O: ObjectStore + Send + Sync + 'static,
{
    pub catalog: Arc<C>,
    pub objects: Arc<O>,
    pub config: Arc<FilesConfig>,
    pub signer: UrlSigner,
}

// Manual impl: the stores sit behind Arc and need not be Clone.
impl<C, O> Clone for FilesAppState<C, O>
where
    C: FileCatalog + Send + Sync + 'static,
    O: ObjectStore + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
            objects: self.objects.clone(),
            config: self.config.clone(),
            signer: self.signer.clone(),
        }
    }
}

impl<C, O> FilesAppState<C, O>
where
    C: FileCatalog + Send + Sync + 'static,
    O: ObjectStore + Send + Sync + 'static,
{
    pub fn new(catalog: Arc<C>, objects: Arc<O>, config: FilesConfig) -> FilesResult<Self> {
        let signer = UrlSigner::new(&config.signing_secret)?;
        Ok(Self {
            catalog,
            objects,
            config: Arc::new(config),
            signer,
        })
    }
}

// ============================================================================
// Upload
// ============================================================================

/// POST /upload-files (multipart: `title`, `file`)
pub async fn upload_files<C, O>(
    State(state): State<FilesAppState<C, O>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> FilesResult<Json<UploadResponse>>
where
    C: FileCatalog + Send + Sync + 'static,
    O: ObjectStore + Send + Sync + 'static,
{
    let input = read_upload_form(multipart?).await?;

    let use_case = UploadFileUseCase::new(
        state.catalog.clone(),
        state.objects.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(input)
        .await
        .map_err(FilesError::into_upload_failure)?;

    Ok(Json(UploadResponse {
        status: "ok",
        media_link: output.media_link,
    }))
}

async fn read_upload_form(mut multipart: Multipart) -> FilesResult<UploadFileInput> {
    let mut title = None;
    let mut file = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => title = Some(field.text().await?),
            "file" => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| FilesError::Validation("File name is required".into()))?;
                let bytes = field.bytes().await?;
                file = Some((file_name, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let (file_name, bytes) =
        file.ok_or_else(|| FilesError::Validation("File is required".into()))?;

    Ok(UploadFileInput {
        title: title.unwrap_or_default(),
        file_name,
        bytes,
    })
}

// ============================================================================
// Listing
// ============================================================================

/// GET /get-files
pub async fn get_files<C, O>(
    State(state): State<FilesAppState<C, O>>,
) -> FilesResult<Json<FileListResponse>>
where
    C: FileCatalog + Send + Sync + 'static,
    O: ObjectStore + Send + Sync + 'static,
{
    let files = ListFilesUseCase::new(state.catalog.clone()).execute().await?;

    Ok(Json(FileListResponse {
        status: "ok",
        data: files.into_iter().map(PdfFileDto::from).collect(),
    }))
}

// ============================================================================
// Signed Reads
// ============================================================================

/// GET /pdf/{filename}
///
/// Responds with the signed URL as plain text.
pub async fn pdf_url<C, O>(
    State(state): State<FilesAppState<C, O>>,
    Path(filename): Path<String>,
) -> FilesResult<String>
where
    C: FileCatalog + Send + Sync + 'static,
    O: ObjectStore + Send + Sync + 'static,
{
    ReadUrlUseCase::new(state.signer.clone(), state.config.clone()).execute(filename)
}

/// GET /blob/{*key}?expires=..&signature=..
pub async fn get_blob<C, O>(
    State(state): State<FilesAppState<C, O>>,
    Path(key): Path<String>,
    query: Result<Query<SignedReadQuery>, QueryRejection>,
) -> FilesResult<Response>
where
    C: FileCatalog + Send + Sync + 'static,
    O: ObjectStore + Send + Sync + 'static,
{
    let Query(query) = query.map_err(|e| FilesError::Validation(e.body_text()))?;

    let use_case = FetchObjectUseCase::new(state.objects.clone(), state.signer.clone());
    let blob = use_case
        .execute(FetchObjectInput {
            key,
            expires: query.expires,
            signature: query.signature,
        })
        .await?;

    Ok(([(header::CONTENT_TYPE, blob.meta.content_type)], blob.bytes).into_response())
}
