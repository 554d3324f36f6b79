//! Password Hashing and Verification
//!
//! - Argon2id hashing (memory-hard, recommended by OWASP) with a fixed,
//!   configurable cost
//! - Zeroization of clear text passwords
//! - Optional application-wide pepper
//! - Blocking-pool offload so hashing never stalls async workers
//!
//! Verification never fails on a mismatch; it returns `false`. Errors are
//! reserved for malformed stored hashes and hashing failures.

use std::fmt;
use std::sync::Arc;

use argon2::password_hash::{self, SaltString};
use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

// ============================================================================
// Constants
// ============================================================================

/// Default minimum password length (any non-empty password is accepted)
pub const MIN_PASSWORD_LENGTH: usize = 1;

/// Default maximum password length in code points
pub const MAX_PASSWORD_LENGTH: usize = 1024;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Password contains control characters other than tab/newline
    #[error("Password contains invalid control characters")]
    InvalidCharacter,
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,

    #[error("Invalid Argon2 parameters: {0}")]
    InvalidParams(String),
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Unicode is normalized with NFKC on construction so that visually
/// identical passwords typed on different platforms hash identically.
/// Does not implement `Clone`; Debug output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    pub fn new(raw: String) -> Self {
        let mut raw = raw;
        let normalized: String = raw.nfkc().collect();
        raw.zeroize();
        Self(normalized)
    }

    /// Length in Unicode code points
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }
}

impl From<&str> for ClearTextPassword {
    fn from(raw: &str) -> Self {
        Self::new(raw.to_string())
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Password Policy
// ============================================================================

/// Length and character rules applied at registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: MIN_PASSWORD_LENGTH,
            max_length: MAX_PASSWORD_LENGTH,
        }
    }
}

impl PasswordPolicy {
    pub fn check(&self, password: &ClearTextPassword) -> Result<(), PasswordPolicyError> {
        let actual = password.char_count();

        if actual < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min: self.min_length,
                actual,
            });
        }

        if actual > self.max_length {
            return Err(PasswordPolicyError::TooLong {
                max: self.max_length,
                actual,
            });
        }

        if password
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        Ok(())
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// The PHC string embeds algorithm, version, cost parameters and salt, so
/// a stored hash stays verifiable after the configured cost changes.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Hasher
// ============================================================================

/// Argon2id cost parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    /// Memory in KiB
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashCost {
    /// OWASP recommended: m=19456 (19 MiB), t=2, p=1
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl HashCost {
    /// Smallest cost Argon2 accepts. Tests only; never use in production.
    pub fn minimal() -> Self {
        Self {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        }
    }

    fn params(&self) -> Result<Params, PasswordHashError> {
        Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| PasswordHashError::InvalidParams(e.to_string()))
    }
}

/// Salted one-way password hasher
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    pepper: Option<Arc<[u8]>>,
}

impl Argon2Hasher {
    /// Build a hasher; cost parameters are validated here, once.
    pub fn new(cost: HashCost, pepper: Option<&[u8]>) -> Result<Self, PasswordHashError> {
        let params = cost.params()?;
        tracing::debug!(
            memory_kib = cost.memory_kib,
            iterations = cost.iterations,
            parallelism = cost.parallelism,
            peppered = pepper.is_some(),
            "Argon2id hasher configured"
        );

        Ok(Self {
            params,
            pepper: pepper.map(Arc::from),
        })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    fn peppered(&self, password: &ClearTextPassword) -> Zeroizing<Vec<u8>> {
        let mut bytes = password.as_bytes().to_vec();
        if let Some(pepper) = &self.pepper {
            bytes.extend_from_slice(pepper);
        }
        Zeroizing::new(bytes)
    }

    /// Hash with a fresh 128-bit random salt
    pub fn hash(&self, password: &ClearTextPassword) -> Result<HashedPassword, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        let bytes = self.peppered(password);

        let hash = self
            .argon2()
            .hash_password(&bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }

    /// Verify a password against a stored hash
    ///
    /// Uses the parameters recorded in the hash itself and a constant-time
    /// comparison.
    pub fn verify(
        &self,
        password: &ClearTextPassword,
        hashed: &HashedPassword,
    ) -> Result<bool, PasswordHashError> {
        let parsed =
            PasswordHash::new(&hashed.hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        let bytes = self.peppered(password);

        match self.argon2().verify_password(&bytes, &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(_) => Err(PasswordHashError::InvalidHashFormat),
        }
    }

    /// [`Self::hash`] on the blocking thread pool
    pub async fn hash_blocking(
        &self,
        password: ClearTextPassword,
    ) -> Result<HashedPassword, PasswordHashError> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?
    }

    /// [`Self::verify`] on the blocking thread pool
    pub async fn verify_blocking(
        &self,
        password: ClearTextPassword,
        hashed: HashedPassword,
    ) -> Result<bool, PasswordHashError> {
        let hasher = self.clone();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hashed))
            .await
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?
    }
}

impl fmt::Debug for Argon2Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Argon2Hasher")
            .field("m_cost", &self.params.m_cost())
            .field("t_cost", &self.params.t_cost())
            .field("p_cost", &self.params.p_cost())
            .field("pepper", &self.pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
