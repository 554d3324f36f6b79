//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary every backend crate agrees on:
//! - Error classification, the unified [`error::app_error::AppError`] and its HTTP rendering
//! - Typed entity IDs
//!
//! Only things with the same meaning in every domain belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
