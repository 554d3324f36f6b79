//! Flow tests for the files crate

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::application::{
        FetchObjectInput, FetchObjectUseCase, FilesConfig, ListFilesUseCase, ReadUrlUseCase,
        UploadFileInput, UploadFileUseCase,
    };
    use crate::domain::entities::PdfFile;
    use crate::domain::repository::FileCatalog;
    use crate::domain::services::UrlSigner;
    use crate::error::{FilesError, FilesResult};
    use crate::infra::memory::{InMemoryFileCatalog, InMemoryObjectStore};

    /// Catalog whose database is always down
    struct BrokenCatalog;

    impl FileCatalog for BrokenCatalog {
        async fn create(&self, _file: &PdfFile) -> FilesResult<()> {
            Err(FilesError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn list(&self) -> FilesResult<Vec<PdfFile>> {
            Err(FilesError::Database(sqlx::Error::PoolTimedOut))
        }
    }

    fn config() -> Arc<FilesConfig> {
        Arc::new(FilesConfig {
            public_base_url: "http://files.test/".into(),
            signed_url_ttl: Duration::from_secs(60),
            ..FilesConfig::development()
        })
    }

    fn upload(title: &str, name: &str) -> UploadFileInput {
        UploadFileInput {
            title: title.into(),
            file_name: name.into(),
            bytes: b"%PDF-1.7 test".to_vec(),
        }
    }

    /// Pull `expires` and `signature` out of a signed URL
    fn split_signed(url: &str) -> (String, Option<String>, Option<String>) {
        let (path, query) = url.split_once('?').unwrap();
        let key = path.split_once("/blob/").unwrap().1.to_string();
        let mut expires = None;
        let mut signature = None;
        for pair in query.split('&') {
            match pair.split_once('=') {
                Some(("expires", v)) => expires = Some(v.to_string()),
                Some(("signature", v)) => signature = Some(v.to_string()),
                _ => {}
            }
        }
        (key, expires, signature)
    }

    #[tokio::test]
    async fn test_upload_stores_bytes_and_catalogs() {
        let catalog = Arc::new(InMemoryFileCatalog::new());
        let objects = Arc::new(InMemoryObjectStore::new());
        let use_case = UploadFileUseCase::new(catalog.clone(), objects.clone(), config());

        let output = use_case.execute(upload("Report", "report.pdf")).await.unwrap();
        assert_eq!(output.media_link, "http://files.test/blob/assets/report.pdf");
        assert!(objects.contains("assets/report.pdf").await);

        let files = ListFilesUseCase::new(catalog).execute().await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].title, "Report");
        assert_eq!(files[0].pdf.as_str(), "report.pdf");
    }

    #[tokio::test]
    async fn test_upload_rejects_unsafe_names_and_empty_title() {
        let catalog = Arc::new(InMemoryFileCatalog::new());
        let objects = Arc::new(InMemoryObjectStore::new());
        let use_case = UploadFileUseCase::new(catalog.clone(), objects.clone(), config());

        for name in ["../escape.pdf", "dir/file.pdf", ""] {
            assert!(matches!(
                use_case.execute(upload("T", name)).await,
                Err(FilesError::Validation(_))
            ));
        }
        assert!(matches!(
            use_case.execute(upload("  ", "ok.pdf")).await,
            Err(FilesError::Validation(_))
        ));

        assert!(ListFilesUseCase::new(catalog).execute().await.unwrap().is_empty());
        assert!(!objects.contains("assets/ok.pdf").await);
    }

    #[tokio::test]
    async fn test_upload_catalog_failure_is_upload_failure() {
        let objects = Arc::new(InMemoryObjectStore::new());
        let use_case = UploadFileUseCase::new(Arc::new(BrokenCatalog), objects, config());

        let err = use_case
            .execute(upload("Report", "report.pdf"))
            .await
            .unwrap_err()
            .into_upload_failure();
        assert!(matches!(err, FilesError::UploadFailed(_)));
    }

    #[tokio::test]
    async fn test_signed_url_roundtrip_and_expiry() {
        let config = config();
        let signer = UrlSigner::new(&config.signing_secret).unwrap();
        let objects = Arc::new(InMemoryObjectStore::new());
        UploadFileUseCase::new(
            Arc::new(InMemoryFileCatalog::new()),
            objects.clone(),
            config.clone(),
        )
        .execute(upload("Report", "report.pdf"))
        .await
        .unwrap();

        let url = ReadUrlUseCase::new(signer.clone(), config.clone())
            .execute_at("report.pdf".into(), 1_000)
            .unwrap();
        assert!(url.starts_with("http://files.test/blob/assets/report.pdf?expires=1060&signature="));

        let (key, expires, signature) = split_signed(&url);
        let fetch = FetchObjectUseCase::new(objects, signer);

        let blob = fetch
            .execute_at(
                FetchObjectInput {
                    key: key.clone(),
                    expires: expires.clone(),
                    signature: signature.clone(),
                },
                1_060,
            )
            .await
            .unwrap();
        assert_eq!(blob.bytes, b"%PDF-1.7 test");
        assert_eq!(blob.meta.content_type, "application/pdf");

        let expired = fetch
            .execute_at(
                FetchObjectInput {
                    key,
                    expires,
                    signature,
                },
                1_061,
            )
            .await;
        assert!(matches!(expired, Err(FilesError::SignatureExpired)));
    }

    #[tokio::test]
    async fn test_fetch_rejects_tampering_and_missing_params() {
        let config = config();
        let signer = UrlSigner::new(&config.signing_secret).unwrap();
        let fetch = FetchObjectUseCase::new(Arc::new(InMemoryObjectStore::new()), signer.clone());

        let url = ReadUrlUseCase::new(signer, config)
            .execute_at("report.pdf".into(), 1_000)
            .unwrap();
        let (key, expires, signature) = split_signed(&url);

        let other_key = fetch
            .execute_at(
                FetchObjectInput {
                    key: "assets/other.pdf".into(),
                    expires: expires.clone(),
                    signature: signature.clone(),
                },
                1_000,
            )
            .await;
        assert!(matches!(other_key, Err(FilesError::InvalidSignature)));

        let missing = fetch
            .execute_at(
                FetchObjectInput {
                    key: key.clone(),
                    expires: None,
                    signature: signature.clone(),
                },
                1_000,
            )
            .await;
        assert!(matches!(missing, Err(FilesError::InvalidSignature)));

        // Valid signature for an object never uploaded
        let absent = fetch
            .execute_at(
                FetchObjectInput {
                    key,
                    expires,
                    signature,
                },
                1_000,
            )
            .await;
        assert!(matches!(absent, Err(FilesError::ObjectNotFound(_))));
    }

    #[test]
    fn test_read_url_rejects_unsafe_name() {
        let config = config();
        let signer = UrlSigner::new(&config.signing_secret).unwrap();
        let use_case = ReadUrlUseCase::new(signer, config);

        assert!(matches!(
            use_case.execute("..".into()),
            Err(FilesError::Validation(_))
        ));
        assert!(use_case.execute("a b.pdf".into()).unwrap().contains("/blob/assets/a%20b.pdf?"));
    }
}

#[cfg(test)]
mod router_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::application::FilesConfig;
    use crate::infra::memory::{InMemoryFileCatalog, InMemoryObjectStore};
    use crate::presentation::router::files_router_generic;

    const BOUNDARY: &str = "X-TEST-BOUNDARY";

    fn app(config: FilesConfig) -> Router {
        files_router_generic(
            InMemoryFileCatalog::new(),
            InMemoryObjectStore::new(),
            config,
        )
        .unwrap()
    }

    fn multipart_body(title: &str, file_name: &str, content: &[u8]) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"title\"\r\n\r\n{title}\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    fn upload_request(title: &str, file_name: &str, content: &[u8]) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/upload-files")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(title, file_name, content)))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_upload_list_sign_and_fetch() {
        let app = app(FilesConfig::development());

        let (status, body) = send(&app, upload_request("My Report", "report.pdf", b"%PDF")).await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(
            body["mediaLink"],
            "http://localhost:3000/blob/assets/report.pdf"
        );

        let (status, body) = send(&app, get("/get-files")).await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["data"][0]["title"], "My Report");
        assert_eq!(body["data"][0]["pdf"], "report.pdf");
        assert!(body["data"][0]["_id"].is_string());

        let (status, url) = send(&app, get("/pdf/report.pdf")).await;
        assert_eq!(status, StatusCode::OK);
        let url = String::from_utf8(url).unwrap();
        let path_and_query = url.strip_prefix("http://localhost:3000").unwrap();

        let response = app.clone().oneshot(get(path_and_query)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"%PDF");
    }

    #[tokio::test]
    async fn test_blob_without_valid_signature_is_forbidden() {
        let app = app(FilesConfig::development());
        send(&app, upload_request("T", "a.pdf", b"%PDF")).await;

        let (status, _) = send(&app, get("/blob/assets/a.pdf")).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(
            &app,
            get("/blob/assets/a.pdf?expires=99999999999&signature=AAAA"),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_signed_url_for_missing_object_is_not_found() {
        let app = app(FilesConfig::development());

        let (_, url) = send(&app, get("/pdf/ghost.pdf")).await;
        let url = String::from_utf8(url).unwrap();
        let path_and_query = url.strip_prefix("http://localhost:3000").unwrap();

        let (status, body) = send(&app, get(path_and_query)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn test_upload_with_unsafe_name_is_bad_request() {
        let app = app(FilesConfig::development());

        let (status, body) = send(&app, upload_request("T", "..", b"%PDF")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["status"], "error");

        let (_, body) = send(&app, get("/get-files")).await;
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({"status": "ok", "data": []}));
    }

    #[tokio::test]
    async fn test_upload_over_limit_is_rejected() {
        let app = app(FilesConfig {
            max_upload_bytes: 64,
            ..FilesConfig::development()
        });

        let (status, _) = send(&app, upload_request("T", "big.pdf", &[b'x'; 1024])).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    }
}
