//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

use platform::crypto::random_bytes;
use platform::password::{HashCost, PasswordPolicy};

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret for login tokens
    pub jwt_secret: Vec<u8>,
    /// Token lifetime; `None` issues tokens without `exp`
    pub token_ttl: Option<Duration>,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Argon2id cost
    pub hash_cost: HashCost,
    /// Registration password rules
    pub password_policy: PasswordPolicy,
    /// Report registration infrastructure failures as "Duplicate email"
    pub collapse_registration_errors: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: Vec::new(),
            token_ttl: None,
            password_pepper: None,
            hash_cost: HashCost::default(),
            password_policy: PasswordPolicy::default(),
            collapse_registration_errors: true,
        }
    }
}

impl AuthConfig {
    /// Create config with a random signing secret (tokens die with the process)
    pub fn with_random_secret() -> Self {
        Self {
            jwt_secret: random_bytes(32),
            ..Default::default()
        }
    }

    /// Create config for development and tests (cheap hashing)
    pub fn development() -> Self {
        Self {
            hash_cost: HashCost::minimal(),
            ..Self::with_random_secret()
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .field("hash_cost", &self.hash_cost)
            .field("password_policy", &self.password_policy)
            .field(
                "collapse_registration_errors",
                &self.collapse_registration_errors,
            )
            .finish()
    }
}
