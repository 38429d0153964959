//! # Error Types
//!
//! Domain-specific error types for bistro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bistro-core errors (this file)                                        │
//! │  ├── CoreError        - Cart, catalog and checkout outcomes            │
//! │  └── ValidationError  - Catalog / configuration input failures         │
//! │                                                                         │
//! │  kiosk errors (app crate)                                              │
//! │  ├── ApiError         - What the presentation layer sees (serialized)  │
//! │  ├── ConfigError      - Config file / environment problems             │
//! │  └── InputError       - Raw input that is not a command                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Presentation Layer     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal. Every variant is an expected condition that the
//! host handles with a log line or a notification.

use thiserror::Error;
use uuid::Uuid;

use crate::types::ItemId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The catalog has no item with this id.
    ///
    /// ## When This Occurs
    /// - A stale menu button refers to an item that no longer exists
    /// - A typo in a typed command (`add 9999`)
    ///
    /// The cart is left untouched and the user sees nothing; the host logs it.
    #[error("Menu item not found: {0}")]
    ItemNotFound(ItemId),

    /// Checkout was requested with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout was requested while another checkout is still processing.
    ///
    /// The checkout trigger is disabled while processing, so this only
    /// guards against hosts that ignore `on_checkout_state`.
    #[error("A checkout is already being processed")]
    CheckoutInProgress,

    /// A completion arrived for a checkout that is not the one in progress.
    #[error("No checkout pending for order {0}")]
    CheckoutNotPending(Uuid),

    /// The order service refused the order.
    #[error("Order rejected: {reason}")]
    OrderRejected { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while building a catalog or a tax rate, before any cart exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    /// Duplicate value (e.g. two menu items sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
