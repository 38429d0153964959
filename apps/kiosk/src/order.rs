//! # Order Service
//!
//! Where a pending checkout goes to become an order.
//!
//! ```text
//! ┌──────────────┐  place_order(&pending)  ┌────────────────────────────┐
//! │ checkout task│ ──────────────────────► │ OrderService               │
//! │              │ ◄────────────────────── │  SimulatedOrderService:    │
//! └──────────────┘  Ok(confirmation)       │   sleep(delay), then Ok    │
//!                   Err(OrderRejected)     └────────────────────────────┘
//! ```
//!
//! The kiosk ships only the simulated service. A real backend plugs in by
//! implementing the trait.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use bistro_core::{CoreResult, OrderConfirmation, PendingCheckout};

/// Places orders for pending checkouts.
#[async_trait]
pub trait OrderService: Send + Sync {
    async fn place_order(&self, pending: &PendingCheckout) -> CoreResult<OrderConfirmation>;
}

/// Accepts every order after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedOrderService {
    delay: Duration,
}

impl SimulatedOrderService {
    pub fn new(delay: Duration) -> Self {
        SimulatedOrderService { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl OrderService for SimulatedOrderService {
    async fn place_order(&self, pending: &PendingCheckout) -> CoreResult<OrderConfirmation> {
        debug!(
            order_id = %pending.order_id,
            delay_ms = self.delay.as_millis() as u64,
            "simulating order placement"
        );
        tokio::time::sleep(self.delay).await;
        Ok(OrderConfirmation::for_pending(pending))
    }
}
