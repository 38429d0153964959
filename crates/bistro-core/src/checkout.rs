//! # Checkout Flow
//!
//! The Idle → Processing → Idle state machine that guards checkout.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            begin() + empty cart                                         │
//! │           ┌──────────────────┐   "Your cart is empty!" (info)          │
//! │           │                  ▼                                          │
//! │       ┌───┴────┐        ┌────────┐                                      │
//! │  ────►│  Idle  │        │  Idle  │  (no change)                         │
//! │       └───┬────┘        └────────┘                                      │
//! │           │ begin() + items                                             │
//! │           │  • trigger disabled                                         │
//! │           │  • total snapshotted                                        │
//! │           ▼                                                             │
//! │     ┌────────────┐  begin() again ──► CheckoutInProgress               │
//! │     │ Processing │                                                      │
//! │     └─────┬──────┘                                                      │
//! │           │ complete(Ok)  → success toast with snapshot total,          │
//! │           │                 cart cleared                                │
//! │           │ complete(Err) → error toast, cart kept                      │
//! │           ▼                                                             │
//! │       ┌────────┐                                                        │
//! │       │  Idle  │  trigger re-enabled                                    │
//! │       └────────┘                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The wait between `begin` and `complete` belongs to the host (a timer, or a
//! call to an order service). This module only owns the transitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{CartLine, Summary};
use crate::catalog::Catalog;
use crate::engine::CartEngine;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::presenter::Presenter;
use crate::types::Severity;

/// Where the checkout state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CheckoutPhase {
    #[default]
    Idle,
    Processing,
}

/// The cart as it was when checkout started.
///
/// The success message uses this total, not whatever the cart shows by the
/// time the order completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PendingCheckout {
    #[ts(type = "string")]
    pub order_id: Uuid,
    pub lines: Vec<CartLine>,
    pub summary: Summary,
    #[ts(as = "String")]
    pub started_at: DateTime<Utc>,
}

impl PendingCheckout {
    pub fn total(&self) -> Money {
        self.summary.total
    }
}

/// An order service's acceptance of a pending checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderConfirmation {
    #[ts(type = "string")]
    pub order_id: Uuid,
    pub total: Money,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    /// Confirms a pending checkout as-is.
    pub fn for_pending(pending: &PendingCheckout) -> Self {
        OrderConfirmation {
            order_id: pending.order_id,
            total: pending.total(),
            placed_at: Utc::now(),
        }
    }
}

/// Owns the checkout phase.
#[derive(Debug, Default)]
pub struct CheckoutFlow {
    phase: CheckoutPhase,
    pending_order: Option<Uuid>,
}

impl CheckoutFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    pub fn is_processing(&self) -> bool {
        self.phase == CheckoutPhase::Processing
    }

    /// Handles a checkout request.
    ///
    /// ## Returns
    /// - `Ok(PendingCheckout)`: now Processing, the host should place the order
    /// - `Err(EmptyCart)`: user was told, nothing changed
    /// - `Err(CheckoutInProgress)`: a checkout is already running
    pub fn begin<C, P>(&mut self, engine: &mut CartEngine<C, P>) -> CoreResult<PendingCheckout>
    where
        C: Catalog,
        P: Presenter,
    {
        if self.is_processing() {
            warn!("checkout requested while processing");
            return Err(CoreError::CheckoutInProgress);
        }

        if engine.is_empty() {
            engine.notify("Your cart is empty!", Severity::Info);
            return Err(CoreError::EmptyCart);
        }

        let pending = PendingCheckout {
            order_id: Uuid::new_v4(),
            lines: engine.lines().to_vec(),
            summary: engine.summary(),
            started_at: Utc::now(),
        };

        self.phase = CheckoutPhase::Processing;
        self.pending_order = Some(pending.order_id);
        engine.presenter_mut().on_checkout_state(true);

        info!(
            order_id = %pending.order_id,
            total = %pending.total(),
            lines = pending.lines.len(),
            "checkout started"
        );
        Ok(pending)
    }

    /// Applies the order service's answer and returns to Idle.
    ///
    /// ## Behavior
    /// - `Ok`: success notification with the snapshotted total, cart cleared
    /// - `Err`: error notification, cart left as it is
    ///
    /// A completion for an order that is not pending is ignored.
    pub fn complete<C, P>(
        &mut self,
        engine: &mut CartEngine<C, P>,
        pending: &PendingCheckout,
        outcome: CoreResult<OrderConfirmation>,
    ) -> CoreResult<OrderConfirmation>
    where
        C: Catalog,
        P: Presenter,
    {
        if self.pending_order != Some(pending.order_id) {
            warn!(order_id = %pending.order_id, "completion for unknown checkout ignored");
            return Err(CoreError::CheckoutNotPending(pending.order_id));
        }

        self.phase = CheckoutPhase::Idle;
        self.pending_order = None;

        match outcome {
            Ok(confirmation) => {
                let message = format!(
                    "Order placed successfully! Total amount: {}",
                    pending.total()
                );
                engine.notify(&message, Severity::Success);
                // Re-enable before the clear so its redraw shows a usable trigger
                engine.presenter_mut().on_checkout_state(false);
                engine.clear();
                info!(order_id = %confirmation.order_id, "checkout completed");
                Ok(confirmation)
            }
            Err(err) => {
                let message = format!("Checkout failed: {}", err);
                engine.notify(&message, Severity::Error);
                engine.presenter_mut().on_checkout_state(false);
                warn!(order_id = %pending.order_id, error = %err, "checkout failed");
                Err(err)
            }
        }
    }
}
