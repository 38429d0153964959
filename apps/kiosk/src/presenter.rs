//! # Terminal Presenter
//!
//! Draws the storefront as plain text on any `io::Write` (stdout in the
//! binary, a buffer in tests).
//!
//! ## Screen Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  === Bistro Menu ===                                                    │
//! │  [1] Classic Gourmet Burger                              $14.99         │
//! │      Juicy beef patty, cheddar, lettuce, tomato, special sauce. ...     │
//! │  ...                                                                    │
//! │                                                                         │
//! │  --- Cart (3) ---                                                       │
//! │  Classic Gourmet Burger        2 x $14.99                $29.98         │
//! │  Chocolate Lava Cake           1 x $8.99                  $8.99         │
//! │  Subtotal                                                $38.97         │
//! │  Tax                                                      $3.90         │
//! │  Total                                                   $42.87         │
//! │  [ Proceed to Checkout ]                                                │
//! │                                                                         │
//! │  [success] Added Chocolate Lava Cake to cart.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are rounded to cents only here; the cart keeps exact values.

use std::io::{self, Write};

use tracing::{error, info, warn};

use bistro_core::{CartLine, CatalogItem, Presenter, Severity, Summary};

const CHECKOUT_READY: &str = "[ Proceed to Checkout ]";
const CHECKOUT_BUSY: &str = "[ Processing... ]";
const CHECKOUT_DISABLED: &str = "[ Checkout unavailable: cart is empty ]";

/// Presenter that writes text to a terminal.
pub struct TerminalPresenter<W> {
    out: W,
    store_name: String,
    processing: bool,
    /// Whether the last drawn cart had no lines
    cart_empty: bool,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout(store_name: impl Into<String>) -> Self {
        TerminalPresenter::new(io::stdout(), store_name)
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, store_name: impl Into<String>) -> Self {
        TerminalPresenter {
            out,
            store_name: store_name.into(),
            processing: false,
            cart_empty: true,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn checkout_button(&self) -> &'static str {
        if self.processing {
            CHECKOUT_BUSY
        } else if self.cart_empty {
            CHECKOUT_DISABLED
        } else {
            CHECKOUT_READY
        }
    }

    fn emit(&mut self, text: &str) {
        let result = writeln!(self.out, "{}", text).and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!(error = %e, "terminal write failed");
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render_menu(&mut self, items: &[CatalogItem]) {
        let mut text = format!("=== {} Menu ===", self.store_name);
        for item in items {
            let label = format!("[{}] {}", item.id, item.name);
            text.push_str(&format!("\n{:<50} {:>10}", label, item.price.to_string()));
            if !item.description.is_empty() {
                text.push_str(&format!("\n    {}", item.description));
            }
        }
        self.emit(&text);
    }

    fn on_cart_changed(&mut self, lines: &[CartLine], summary: &Summary) {
        let units: u32 = lines.iter().map(|l| l.quantity).sum();
        let mut text = format!("--- Cart ({}) ---", units);

        self.cart_empty = lines.is_empty();
        if self.cart_empty {
            text.push_str("\nYour cart is empty.");
        }
        for line in lines {
            let each = format!("{} x {}", line.quantity, line.unit_price);
            text.push_str(&format!(
                "\n{:<30} {:<18} {:>10}",
                line.name,
                each,
                line.line_total().to_string()
            ));
        }

        for (label, amount) in [
            ("Subtotal", summary.subtotal),
            ("Tax", summary.tax),
            ("Total", summary.total),
        ] {
            text.push_str(&format!("\n{:<49} {:>10}", label, amount.to_string()));
        }
        text.push('\n');
        text.push_str(self.checkout_button());

        self.emit(&text);
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => error!(%severity, "{}", message),
            _ => info!(%severity, "{}", message),
        }
        self.emit(&format!("[{}] {}", severity, message));
    }

    fn on_checkout_state(&mut self, processing: bool) {
        self.processing = processing;
        let button = self.checkout_button();
        self.emit(button);
    }
}
