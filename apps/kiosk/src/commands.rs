//! # Command Dispatch
//!
//! Routes a typed [`Command`] to the engine or the checkout flow.
//!
//! ## Dispatch Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command              Under the lock                  Outcome           │
//! │  ───────              ──────────────                  ───────           │
//! │                                                                         │
//! │  AddItem { id } ────► engine.add_item(id) ──────────► CartUpdated       │
//! │                                                                         │
//! │  RemoveUnit { id } ─► engine.remove_one_unit(id) ───► CartUpdated       │
//! │                                                                         │
//! │  Checkout ──────────► checkout.begin(engine) ───────► CheckoutPending   │
//! │                          │                                              │
//! │                          └─► spawn: place_order(..).await               │
//! │                                     then lock again:                    │
//! │                                     checkout.complete(engine, ..)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `dispatch` is synchronous and must be called from inside a tokio runtime
//! because checkout spawns its completion task.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, error};

use bistro_core::{CartSnapshot, Command, CoreError, OrderConfirmation, PendingCheckout};

use crate::error::ApiError;
use crate::order::OrderService;
use crate::state::StorefrontState;

/// What a successfully dispatched command produced.
#[derive(Debug)]
pub enum CommandOutcome {
    /// The cart after the add or remove.
    CartUpdated(CartSnapshot),

    /// Checkout began; the order is being placed in the background.
    CheckoutPending(CheckoutTask),
}

/// A running checkout completion.
#[derive(Debug)]
pub struct CheckoutTask {
    pending: PendingCheckout,
    handle: JoinHandle<Result<OrderConfirmation, ApiError>>,
}

impl CheckoutTask {
    /// The cart as it was when checkout started.
    pub fn pending(&self) -> &PendingCheckout {
        &self.pending
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the order service and the completion to run.
    pub async fn wait(self) -> Result<OrderConfirmation, ApiError> {
        match self.handle.await {
            Ok(result) => result,
            Err(join_err) => {
                error!(
                    order_id = %self.pending.order_id,
                    error = %join_err,
                    "checkout task failed"
                );
                Err(ApiError::internal(format!("checkout task failed: {}", join_err)))
            }
        }
    }
}

/// Applies one command to the storefront.
///
/// ## Errors
/// - `NOT_FOUND`: unknown menu item, nothing changed
/// - `EMPTY_CART`: checkout with nothing in the cart (user already notified)
/// - `CHECKOUT_IN_PROGRESS`: checkout while one is processing
pub fn dispatch(
    state: &StorefrontState,
    orders: &Arc<dyn OrderService>,
    command: Command,
) -> Result<CommandOutcome, ApiError> {
    debug!(%command, "dispatch");

    match command {
        Command::AddItem { id } => {
            let snapshot = state.with_storefront_mut(|s| {
                s.engine.add_item(id)?;
                Ok::<_, CoreError>(s.engine.snapshot())
            })?;
            Ok(CommandOutcome::CartUpdated(snapshot))
        }

        Command::RemoveUnit { id } => {
            let snapshot = state.with_storefront_mut(|s| {
                s.engine.remove_one_unit(id);
                s.engine.snapshot()
            });
            Ok(CommandOutcome::CartUpdated(snapshot))
        }

        Command::Checkout => {
            let pending = state.with_storefront_mut(|s| s.checkout.begin(&mut s.engine))?;
            Ok(CommandOutcome::CheckoutPending(spawn_completion(
                state.clone(),
                Arc::clone(orders),
                pending,
            )))
        }
    }
}

fn spawn_completion(
    state: StorefrontState,
    orders: Arc<dyn OrderService>,
    pending: PendingCheckout,
) -> CheckoutTask {
    let task_pending = pending.clone();

    let handle = tokio::spawn(async move {
        let outcome = orders.place_order(&task_pending).await;
        state
            .with_storefront_mut(|s| s.checkout.complete(&mut s.engine, &task_pending, outcome))
            .map_err(ApiError::from)
    });

    CheckoutTask { pending, handle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use bistro_core::{ItemId, NullPresenter, StaticCatalog, TaxRate};

    use crate::error::ErrorCode;
    use crate::order::SimulatedOrderService;
    use crate::state::Storefront;

    fn setup() -> (StorefrontState, Arc<dyn OrderService>) {
        let state = StorefrontState::new(Storefront::new(
            StaticCatalog::house_menu(),
            Box::new(NullPresenter),
            TaxRate::default(),
        ));
        let orders: Arc<dyn OrderService> =
            Arc::new(SimulatedOrderService::new(Duration::from_millis(2000)));
        (state, orders)
    }

    fn snapshot(outcome: CommandOutcome) -> CartSnapshot {
        match outcome {
            CommandOutcome::CartUpdated(snapshot) => snapshot,
            other => panic!("expected CartUpdated, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_add_and_remove_return_snapshots() {
        let (state, orders) = setup();

        let after_add = snapshot(dispatch(&state, &orders, Command::add(2u32)).unwrap());
        assert_eq!(after_add.unit_count, 1);

        let after_remove = snapshot(dispatch(&state, &orders, Command::remove(2u32)).unwrap());
        assert!(after_remove.lines.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_item_is_not_found() {
        let (state, orders) = setup();

        let err = dispatch(&state, &orders, Command::add(9999u32)).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(state.with_storefront(|s| s.engine.is_empty()));
    }

    #[tokio::test]
    async fn test_checkout_on_empty_cart() {
        let (state, orders) = setup();

        let err = dispatch(&state, &orders, Command::Checkout).unwrap_err();

        assert_eq!(err.code, ErrorCode::EmptyCart);
        assert!(!state.with_storefront(|s| s.checkout.is_processing()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_checkout_completes_in_background() {
        let (state, orders) = setup();
        dispatch(&state, &orders, Command::add(ItemId::new(1))).unwrap();

        let task = match dispatch(&state, &orders, Command::Checkout).unwrap() {
            CommandOutcome::CheckoutPending(task) => task,
            other => panic!("expected CheckoutPending, got {:?}", other),
        };
        assert!(state.with_storefront(|s| s.checkout.is_processing()));

        let second = dispatch(&state, &orders, Command::Checkout).unwrap_err();
        assert_eq!(second.code, ErrorCode::CheckoutInProgress);

        let order_id = task.pending().order_id;
        let confirmation = task.wait().await.unwrap();

        assert_eq!(confirmation.order_id, order_id);
        state.with_storefront(|s| {
            assert!(s.engine.is_empty());
            assert!(!s.checkout.is_processing());
        });
    }
}
