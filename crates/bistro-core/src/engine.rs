//! # Cart Engine
//!
//! Owns the cart and the tax rate, and tells the presentation layer about
//! every change.
//!
//! ## Engine Wiring
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         CartEngine<C, P>                                │
//! │                                                                         │
//! │   add_item(id) ──────► C::lookup(id) ──► Cart::add ──┐                 │
//! │                                                      │                 │
//! │   remove_one_unit(id) ─────────────► Cart::remove_one┤                 │
//! │                                                      │                 │
//! │   clear() ─────────────────────────► Cart::clear ────┤                 │
//! │                                                      ▼                 │
//! │                              P::on_cart_changed(lines, summary)        │
//! │                              P::notify(message, severity)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All operations are synchronous and run to completion, so the cart is never
//! observed half-updated. The engine is built explicitly and handed to the
//! host; there is no global cart.

use tracing::{debug, warn};

use crate::cart::{Cart, CartLine, CartSnapshot, Summary, UnitRemoval};
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::presenter::Presenter;
use crate::types::{ItemId, Severity, TaxRate};

/// The cart state/update engine.
pub struct CartEngine<C, P> {
    catalog: C,
    presenter: P,
    cart: Cart,
    tax_rate: TaxRate,
}

impl<C: Catalog, P: Presenter> CartEngine<C, P> {
    /// Creates an engine with an empty cart. The tax rate is fixed from here on.
    pub fn new(catalog: C, presenter: P, tax_rate: TaxRate) -> Self {
        CartEngine {
            catalog,
            presenter,
            cart: Cart::new(),
            tax_rate,
        }
    }

    /// Hands the catalog's items to the presenter.
    pub fn render_menu(&mut self) {
        self.presenter.render_menu(self.catalog.items());
    }

    /// Redraws the cart without changing it (initial draw at startup).
    pub fn refresh(&mut self) {
        self.publish();
    }

    /// Adds one unit of a menu item.
    ///
    /// ## Behavior
    /// - Unknown id: nothing changes, nothing is shown, `ItemNotFound` returned
    /// - Item already in cart: quantity + 1
    /// - Otherwise: new line with quantity 1, name and price copied now
    ///
    /// ## Returns
    /// The line's quantity after the add.
    pub fn add_item(&mut self, id: ItemId) -> CoreResult<u32> {
        let Some(item) = self.catalog.lookup(id) else {
            warn!(item_id = %id, "add_item: unknown menu item, ignoring");
            return Err(CoreError::ItemNotFound(id));
        };

        let quantity = self.cart.add(item);
        let message = format!("Added {} to cart.", item.name);
        debug!(item_id = %id, quantity, "item added to cart");

        self.publish();
        self.presenter.notify(&message, Severity::Success);
        Ok(quantity)
    }

    /// Takes one unit of an item off the cart.
    ///
    /// ## Behavior
    /// - Not in cart: no-op
    /// - Quantity > 1: decrement, "Decreased quantity of ..."
    /// - Quantity == 1: line deleted, "Removed ... from cart."
    pub fn remove_one_unit(&mut self, id: ItemId) -> UnitRemoval {
        let removal = self.cart.remove_one(id);

        let message = match &removal {
            UnitRemoval::Decremented { name, remaining } => {
                debug!(item_id = %id, remaining, "cart line decremented");
                Some(format!("Decreased quantity of {}.", name))
            }
            UnitRemoval::Removed { name } => {
                debug!(item_id = %id, "cart line removed");
                Some(format!("Removed {} from cart.", name))
            }
            UnitRemoval::Absent => None,
        };

        let Some(message) = message else {
            debug!(item_id = %id, "remove_one_unit: item not in cart");
            return removal;
        };

        self.publish();
        self.presenter.notify(&message, Severity::Info);
        removal
    }

    /// Current subtotal, tax and total. Pure.
    pub fn summary(&self) -> Summary {
        self.cart.summary(self.tax_rate)
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.cart.clear();
        debug!("cart cleared");
        self.publish();
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Sum of quantities, for the cart-size badge.
    pub fn total_unit_count(&self) -> u32 {
        self.cart.total_quantity()
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.cart.lines().to_vec(),
            summary: self.summary(),
            unit_count: self.total_unit_count(),
        }
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub(crate) fn notify(&mut self, message: &str, severity: Severity) {
        self.presenter.notify(message, severity);
    }

    fn publish(&mut self) {
        let summary = self.summary();
        self.presenter.on_cart_changed(self.cart.lines(), &summary);
    }
}
