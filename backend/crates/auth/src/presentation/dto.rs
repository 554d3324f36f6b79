//! API DTOs (Data Transfer Objects)
//!
//! Every auth response carries a `status` of `"ok"` or `"error"`.

use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Status Envelope
// ============================================================================

/// Value of the `user` field: the token on success, `false` on a wrong password
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UserField {
    Token(String),
    Flag(bool),
}

/// Legacy status envelope shared by register and login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserField>,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            error: None,
            user: None,
        }
    }

    pub fn ok_with_token(token: String) -> Self {
        Self {
            user: Some(UserField::Token(token)),
            ..Self::ok()
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            error: Some(message.into()),
            user: None,
        }
    }

    pub fn user_false() -> Self {
        Self {
            status: "error",
            error: None,
            user: Some(UserField::Flag(false)),
        }
    }
}
