//! Signed identity tokens (HS256 JWT).
//!
//! Tokens are stateless: verification needs only the shared secret, never
//! a storage lookup. No expiry is set unless a TTL is configured.

use std::fmt;
use std::time::Duration;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token issuance/verification errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// The signing secret is empty
    #[error("Token signing secret must not be empty")]
    EmptySecret,

    #[error("Token encoding failed: {0}")]
    Encode(String),

    /// Bad signature, malformed token, or expired `exp`
    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

/// Identity asserted by a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaims {
    pub name: String,
    pub email: String,
}

/// Wire claims embedded in every token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub name: String,
    pub email: String,
    /// Issued-at (Unix seconds)
    pub iat: u64,
    /// Expiration (Unix seconds), only when a TTL is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

impl TokenClaims {
    pub fn identity(&self) -> IdentityClaims {
        IdentityClaims {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Mints and verifies HS256 tokens with a process-wide secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Option<Duration>,
}

impl TokenIssuer {
    pub fn new(secret: &[u8], ttl: Option<Duration>) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        })
    }

    /// Sign the claims. Adds `iat`, and `exp` when a TTL is configured.
    pub fn issue(&self, claims: &IdentityClaims) -> Result<String, TokenError> {
        let iat = jsonwebtoken::get_current_timestamp();
        let claims = TokenClaims {
            name: claims.name.clone(),
            email: claims.email.clone(),
            iat,
            exp: self.ttl.map(|ttl| iat + ttl.as_secs()),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Encode(e.to_string()))
    }

    /// Check the signature (and `exp` if present) and return the claims
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.leeway = 0;

        jsonwebtoken::decode::<TokenClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::InvalidToken(e.to_string()))
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}
