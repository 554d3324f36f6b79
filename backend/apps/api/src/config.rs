//! Server Configuration
//!
//! Everything is read from the environment (after `.env` is loaded).
//! Empty variables count as unset.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use files::FilesConfig;

/// Fully resolved server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Allowed CORS origins; `None` allows any origin
    pub frontend_origins: Option<Vec<String>>,
    pub db_max_connections: u32,
    pub request_timeout: Duration,
    /// Object store root directory
    pub storage_root: PathBuf,
    pub storage_bucket: String,
    /// Static files served for unmatched paths
    pub assets_dir: PathBuf,
    pub auth: AuthConfig,
    pub files: FilesConfig,
}

impl ApiConfig {
    /// Read from the process environment
    ///
    /// Debug builds generate missing secrets; release builds require
    /// `JWT_SECRET`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// Read through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F, allow_random_secrets: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let mut auth = match var("JWT_SECRET") {
            Some(secret) => AuthConfig {
                jwt_secret: secret.into_bytes(),
                ..AuthConfig::default()
            },
            None if allow_random_secrets => {
                tracing::warn!("JWT_SECRET not set, using a random secret for this process");
                AuthConfig::with_random_secret()
            }
            None => bail!("JWT_SECRET must be set in release builds"),
        };
        auth.token_ttl = parse_opt::<u64>(&var, "TOKEN_TTL_SECS")?.map(Duration::from_secs);
        auth.password_pepper = var("PASSWORD_PEPPER").map(String::into_bytes);
        auth.collapse_registration_errors =
            parse_opt::<bool>(&var, "COLLAPSE_REGISTRATION_ERRORS")?.unwrap_or(true);

        let mut files = match var("STORAGE_SIGNING_SECRET") {
            Some(secret) => FilesConfig {
                signing_secret: secret.into_bytes(),
                ..FilesConfig::default()
            },
            None => {
                tracing::warn!(
                    "STORAGE_SIGNING_SECRET not set, signed URLs will not survive a restart"
                );
                FilesConfig::with_random_secret()
            }
        };
        if let Some(base) = var("PUBLIC_BASE_URL") {
            files.public_base_url = base;
        }
        files.signed_url_ttl =
            Duration::from_secs(parse_opt(&var, "SIGNED_URL_TTL_SECS")?.unwrap_or(3600));
        files.max_upload_bytes =
            parse_opt(&var, "MAX_UPLOAD_BYTES")?.unwrap_or(files.max_upload_bytes);

        let frontend_origins = var("FRONTEND_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect()
        });

        Ok(Self {
            database_url,
            bind_addr: parse_opt(&var, "BIND_ADDR")?
                .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000))),
            frontend_origins,
            db_max_connections: parse_opt(&var, "DB_MAX_CONNECTIONS")?.unwrap_or(5),
            request_timeout: Duration::from_secs(
                parse_opt(&var, "REQUEST_TIMEOUT_SECS")?.unwrap_or(30),
            ),
            storage_root: var("STORAGE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./storage")),
            storage_bucket: var("STORAGE_BUCKET").unwrap_or_else(|| "pdf-bucket-001".to_string()),
            assets_dir: var("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./assets")),
            auth,
            files,
        })
    }
}

fn parse_opt<T>(var: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    var(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("{key} has an invalid value: {raw:?}"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config =
            ApiConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://x")]), true).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert!(config.frontend_origins.is_none());
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.storage_bucket, "pdf-bucket-001");
        assert_eq!(config.storage_root, PathBuf::from("./storage"));
        assert_eq!(config.assets_dir, PathBuf::from("./assets"));
        assert_eq!(config.auth.jwt_secret.len(), 32);
        assert!(config.auth.token_ttl.is_none());
        assert!(config.auth.collapse_registration_errors);
        assert_eq!(config.files.signed_url_ttl, Duration::from_secs(3600));
        assert_eq!(config.files.max_upload_bytes, 25 * 1024 * 1024);
        assert_eq!(config.files.public_base_url, "http://localhost:3000");
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(
            lookup(&[
                ("DATABASE_URL", "postgres://x"),
                ("JWT_SECRET", "jwt-secret"),
                ("BIND_ADDR", "127.0.0.1:8080"),
                ("FRONTEND_ORIGINS", "http://a.test, http://b.test,"),
                ("TOKEN_TTL_SECS", "600"),
                ("PASSWORD_PEPPER", "pepper"),
                ("COLLAPSE_REGISTRATION_ERRORS", "false"),
                ("STORAGE_SIGNING_SECRET", "sign"),
                ("PUBLIC_BASE_URL", "https://files.test"),
                ("SIGNED_URL_TTL_SECS", "120"),
                ("MAX_UPLOAD_BYTES", "1024"),
                ("REQUEST_TIMEOUT_SECS", "5"),
            ]),
            false,
        )
        .unwrap();

        assert_eq!(config.auth.jwt_secret, b"jwt-secret");
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(
            config.frontend_origins,
            Some(vec!["http://a.test".to_string(), "http://b.test".to_string()])
        );
        assert_eq!(config.auth.token_ttl, Some(Duration::from_secs(600)));
        assert_eq!(config.auth.pepper(), Some(&b"pepper"[..]));
        assert!(!config.auth.collapse_registration_errors);
        assert_eq!(config.files.signing_secret, b"sign");
        assert_eq!(config.files.public_base_url, "https://files.test");
        assert_eq!(config.files.signed_url_ttl, Duration::from_secs(120));
        assert_eq!(config.files.max_upload_bytes, 1024);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_database_url() {
        let err = ApiConfig::from_lookup(lookup(&[]), true).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_release_requires_jwt_secret() {
        let err =
            ApiConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://x")]), false).unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));

        let err = ApiConfig::from_lookup(
            lookup(&[("DATABASE_URL", "postgres://x"), ("JWT_SECRET", "  ")]),
            false,
        )
        .unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn test_invalid_number_is_reported() {
        let err = ApiConfig::from_lookup(
            lookup(&[("DATABASE_URL", "postgres://x"), ("DB_MAX_CONNECTIONS", "many")]),
            true,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("DB_MAX_CONNECTIONS"));
    }
}
