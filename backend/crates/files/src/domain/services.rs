//! Domain Services
//!
//! Signed read URLs: `HMAC-SHA256(secret, "GET\n{key}\n{expires}")`,
//! base64url without padding. `expires` is a Unix timestamp in seconds.

use std::fmt;
use std::sync::Arc;

use platform::crypto::{from_base64_url, hmac_sha256, to_base64_url, verify_hmac_sha256};

use crate::domain::value_objects::ObjectKey;
use crate::error::{FilesError, FilesResult};

/// Bytes covered by a read signature
pub fn read_payload(key: &ObjectKey, expires: i64) -> Vec<u8> {
    format!("GET\n{}\n{}", key.as_str(), expires).into_bytes()
}

/// Signs and checks read access to single objects
#[derive(Clone)]
pub struct UrlSigner {
    secret: Arc<[u8]>,
}

impl UrlSigner {
    pub fn new(secret: &[u8]) -> FilesResult<Self> {
        if secret.is_empty() {
            return Err(FilesError::Internal(
                "URL signing secret must not be empty".into(),
            ));
        }
        Ok(Self {
            secret: Arc::from(secret),
        })
    }

    pub fn sign(&self, key: &ObjectKey, expires: i64) -> String {
        to_base64_url(&hmac_sha256(&self.secret, &read_payload(key, expires)))
    }

    /// Accept iff the signature matches and `now <= expires`
    pub fn verify(
        &self,
        key: &ObjectKey,
        expires: i64,
        signature: &str,
        now: i64,
    ) -> FilesResult<()> {
        let tag = from_base64_url(signature).map_err(|_| FilesError::InvalidSignature)?;

        if !verify_hmac_sha256(&self.secret, &read_payload(key, expires), &tag) {
            return Err(FilesError::InvalidSignature);
        }
        if now > expires {
            return Err(FilesError::SignatureExpired);
        }
        Ok(())
    }
}

impl fmt::Debug for UrlSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlSigner")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ObjectKey {
        ObjectKey::parse("assets/report.pdf").unwrap()
    }

    #[test]
    fn test_valid_until_expiry() {
        let signer = UrlSigner::new(b"signing-secret").unwrap();
        let sig = signer.sign(&key(), 1_000);

        assert!(signer.verify(&key(), 1_000, &sig, 999).is_ok());
        assert!(signer.verify(&key(), 1_000, &sig, 1_000).is_ok());
        assert!(matches!(
            signer.verify(&key(), 1_000, &sig, 1_001),
            Err(FilesError::SignatureExpired)
        ));
    }

    #[test]
    fn test_tampering_rejected() {
        let signer = UrlSigner::new(b"signing-secret").unwrap();
        let sig = signer.sign(&key(), 1_000);
        let other = ObjectKey::parse("assets/other.pdf").unwrap();

        // Extending the expiry invalidates the signature
        assert!(matches!(
            signer.verify(&key(), 2_000, &sig, 0),
            Err(FilesError::InvalidSignature)
        ));
        assert!(matches!(
            signer.verify(&other, 1_000, &sig, 0),
            Err(FilesError::InvalidSignature)
        ));
        assert!(matches!(
            signer.verify(&key(), 1_000, "!!not-base64!!", 0),
            Err(FilesError::InvalidSignature)
        ));

        let foreign = UrlSigner::new(b"another-secret").unwrap();
        assert!(foreign.verify(&key(), 1_000, &sig, 0).is_err());
    }

    #[test]
    fn test_signature_is_url_safe() {
        let signer = UrlSigner::new(b"signing-secret").unwrap();
        let sig = signer.sign(&key(), 1_700_000_000);
        assert!(sig.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_eq!(sig.len(), 43);
    }

    #[test]
    fn test_empty_secret_rejected() {
        tokio_test::assert_err!(UrlSigner::new(b""));
    }

    #[test]
    fn test_payload_format() {
        assert_eq!(read_payload(&key(), 42), b"GET\nassets/report.pdf\n42".to_vec());
    }
}
