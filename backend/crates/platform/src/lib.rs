//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64url, random bytes)
//! - Password hashing (Argon2id with optional pepper)
//! - Signed identity tokens (HS256 JWT)

pub mod crypto;
pub mod password;
pub mod token;
