//! # Cart
//!
//! The cart data structure and its derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Typed Command            Cart Method             Cart State Change     │
//! │  ─────────────            ───────────             ─────────────────     │
//! │                                                                         │
//! │  AddItem(id) ────────────► add(item) ───────────► qty += 1 or push     │
//! │                                                                         │
//! │  RemoveUnit(id) ─────────► remove_one(id) ──────► qty -= 1 or remove   │
//! │                                                                         │
//! │  (checkout done) ────────► clear() ─────────────► lines.clear()        │
//! │                                                                         │
//! │  (redraw) ───────────────► summary(rate) ───────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{CatalogItem, ItemId, TaxRate};

/// One entry in the cart.
///
/// ## Price Freezing
/// `name` and `unit_price` are copied from the catalog when the line is
/// first created. A later catalog price change does not touch this line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// Catalog item id
    pub id: ItemId,

    /// Name at time of adding (frozen)
    pub name: String,

    /// Price at time of adding (frozen)
    pub unit_price: Money,

    /// Always >= 1 while the line is in a cart
    pub quantity: u32,
}

impl CartLine {
    fn from_item(item: &CatalogItem) -> Self {
        CartLine {
            id: item.id,
            name: item.name.clone(),
            unit_price: item.price,
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// Outcome of taking one unit off the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitRemoval {
    /// The line had more than one unit; one was taken off.
    Decremented { name: String, remaining: u32 },
    /// The line had exactly one unit and is gone.
    Removed { name: String },
    /// Nothing in the cart has that id.
    Absent,
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `id` (adding the same item increases quantity)
/// - Lines keep the order in which items were first added
/// - Quantity never reaches 0; such a line is deleted instead
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one unit of a catalog item and returns the resulting quantity.
    pub fn add(&mut self, item: &CatalogItem) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == item.id) {
            line.quantity += 1;
            return line.quantity;
        }

        self.lines.push(CartLine::from_item(item));
        1
    }

    /// Takes one unit of `id` off the cart.
    ///
    /// The decrement-or-delete decision is made on the quantity as it is
    /// before the call.
    pub fn remove_one(&mut self, id: ItemId) -> UnitRemoval {
        let Some(index) = self.lines.iter().position(|l| l.id == id) else {
            return UnitRemoval::Absent;
        };

        if self.lines[index].quantity > 1 {
            let line = &mut self.lines[index];
            line.quantity -= 1;
            UnitRemoval::Decremented {
                name: line.name.clone(),
                remaining: line.quantity,
            }
        } else {
            let line = self.lines.remove(index);
            UnitRemoval::Removed { name: line.name }
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in first-added order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Looks up a line by item id.
    pub fn line(&self, id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    /// Returns the number of distinct items in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity of all lines.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of line totals, before tax.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Derived totals at the given rate.
    pub fn summary(&self, rate: TaxRate) -> Summary {
        Summary::from_subtotal(self.subtotal(), rate)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Subtotal, tax and total for a cart. Exact, never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Summary {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl Summary {
    pub fn from_subtotal(subtotal: Money, rate: TaxRate) -> Self {
        let tax = subtotal.calculate_tax(rate);
        Summary {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

/// Everything a presentation layer needs to draw the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub summary: Summary,
    pub unit_count: u32,
}
