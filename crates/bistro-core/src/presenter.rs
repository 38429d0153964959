//! # Presentation Layer Interface
//!
//! The Cart Engine never draws anything. It calls into a [`Presenter`]
//! after each state change and whenever the user should be told something.
//!
//! ```text
//! ┌──────────────────┐   on_cart_changed(lines, summary)   ┌──────────────┐
//! │                  │ ──────────────────────────────────► │              │
//! │   Cart Engine    │   notify(message, severity)         │  Presenter   │
//! │                  │ ──────────────────────────────────► │ (terminal,   │
//! │                  │   on_checkout_state(processing)     │  web, test)  │
//! │  CheckoutFlow    │ ──────────────────────────────────► │              │
//! └──────────────────┘                                     └──────────────┘
//! ```
//!
//! Calls are fire-and-forget. Toast lifetimes, auto-dismiss timers and
//! layout are entirely the presenter's business.

use crate::cart::{CartLine, Summary};
use crate::types::{CatalogItem, Severity};

/// Receives everything the engine wants to show to the user.
pub trait Presenter {
    /// Draws the menu. Called once by the host at startup.
    fn render_menu(&mut self, _items: &[CatalogItem]) {}

    /// Redraws the cart after add, remove or clear.
    fn on_cart_changed(&mut self, lines: &[CartLine], summary: &Summary);

    /// Shows a user-facing message.
    fn notify(&mut self, message: &str, severity: Severity);

    /// Enables (`false`) or disables (`true`) the checkout trigger.
    fn on_checkout_state(&mut self, _processing: bool) {}
}

impl<P: Presenter + ?Sized> Presenter for Box<P> {
    fn render_menu(&mut self, items: &[CatalogItem]) {
        (**self).render_menu(items)
    }

    fn on_cart_changed(&mut self, lines: &[CartLine], summary: &Summary) {
        (**self).on_cart_changed(lines, summary)
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        (**self).notify(message, severity)
    }

    fn on_checkout_state(&mut self, processing: bool) {
        (**self).on_checkout_state(processing)
    }
}

/// Presenter that discards everything. Handy for headless hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn on_cart_changed(&mut self, _lines: &[CartLine], _summary: &Summary) {}

    fn notify(&mut self, _message: &str, _severity: Severity) {}
}
