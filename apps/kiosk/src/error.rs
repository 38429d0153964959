//! # Kiosk Error Types
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Kiosk                              │
//! │                                                                         │
//! │  dispatch(Command)                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CoreError::ItemNotFound ─────► ApiError { NOT_FOUND }  ──► log only   │
//! │  CoreError::EmptyCart ────────► ApiError { EMPTY_CART } ──► (already   │
//! │                                                              notified) │
//! │  CoreError::OrderRejected ────► ApiError { ORDER_REJECTED }            │
//! │                                                                         │
//! │  Startup: ConfigError ──► KioskError ──► exit code 1                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `ApiError` serializes to `{ "code": "...", "message": "..." }` so a web
//! frontend can receive the same shape the terminal session logs.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use bistro_core::CoreError;

/// Error returned from command dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for dispatch results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Menu item id unknown
    NotFound,

    /// Checkout requested with an empty cart
    EmptyCart,

    /// Checkout requested while one is processing
    CheckoutInProgress,

    /// Order service refused the order
    OrderRejected,

    /// Input validation failed
    ValidationError,

    /// Something outside the domain went wrong (e.g. a task panicked)
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::ItemNotFound(_) => ErrorCode::NotFound,
            CoreError::EmptyCart => ErrorCode::EmptyCart,
            CoreError::CheckoutInProgress | CoreError::CheckoutNotPending(_) => {
                ErrorCode::CheckoutInProgress
            }
            CoreError::OrderRejected { .. } => ErrorCode::OrderRejected,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Startup Errors
// =============================================================================

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Anything that stops the kiosk from starting or running.
#[derive(Debug, Error)]
pub enum KioskError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
