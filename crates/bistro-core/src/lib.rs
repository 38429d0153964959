//! # bistro-core: Pure Business Logic for Bistro
//!
//! This crate is the **heart** of the Bistro ordering kiosk: the cart, its
//! totals and the checkout state machine, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bistro Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Presentation Layer (terminal / web)               │   │
//! │  │    Menu ──► Cart ──► Summary ──► Checkout button ──► Toasts     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ typed Commands                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 kiosk app (dispatch, timers)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bistro-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │  engine   │  │ checkout  │  │   │
//! │  │   │  Catalog  │  │   Money   │  │CartEngine │  │ Idle/Proc │  │   │
//! │  │   │   items   │  │  TaxRate  │  │   Cart    │  │ snapshot  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO RENDERING • NO GLOBAL STATE          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ItemId, CatalogItem, TaxRate, Severity)
//! - [`money`] - Exact decimal Money
//! - [`catalog`] - Read-only menu lookup
//! - [`cart`] - Cart, CartLine, Summary
//! - [`engine`] - The Cart Engine
//! - [`checkout`] - Checkout state machine
//! - [`command`] - Typed user commands
//! - [`presenter`] - Presentation layer trait
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog validation
//!
//! ## Example Usage
//!
//! ```rust
//! use bistro_core::{CartEngine, ItemId, NullPresenter, StaticCatalog, TaxRate};
//!
//! let mut engine = CartEngine::new(
//!     StaticCatalog::house_menu(),
//!     NullPresenter,
//!     TaxRate::default(),
//! );
//!
//! engine.add_item(ItemId::new(1)).unwrap(); // Classic Gourmet Burger
//! engine.add_item(ItemId::new(1)).unwrap();
//! engine.add_item(ItemId::new(6)).unwrap(); // Chocolate Lava Cake
//!
//! let summary = engine.summary();
//! assert_eq!(summary.subtotal.to_string(), "$38.97");
//! assert_eq!(summary.total.to_string(), "$42.87");
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod command;
pub mod engine;
pub mod error;
pub mod money;
pub mod presenter;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test_support;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartSnapshot, Summary, UnitRemoval};
pub use catalog::{Catalog, StaticCatalog};
pub use checkout::{CheckoutFlow, CheckoutPhase, OrderConfirmation, PendingCheckout};
pub use command::Command;
pub use engine::CartEngine;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use presenter::{NullPresenter, Presenter};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest menu item name accepted by the catalog.
pub const MAX_ITEM_NAME_LEN: usize = 200;
