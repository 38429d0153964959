//! End-to-end storefront behavior: typed commands in, presenter calls out,
//! with the checkout delay driven by a paused tokio clock.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use bistro_core::{
    CartLine, Command, CoreError, CoreResult, ItemId, OrderConfirmation, PendingCheckout,
    Presenter, Severity, StaticCatalog, Summary, TaxRate,
};
use bistro_kiosk::commands::{dispatch, CheckoutTask, CommandOutcome};
use bistro_kiosk::error::ErrorCode;
use bistro_kiosk::order::{OrderService, SimulatedOrderService};
use bistro_kiosk::state::{Storefront, StorefrontState};

const DELAY: Duration = Duration::from_millis(2000);

// =============================================================================
// Test Doubles
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Cart { units: u32, total: String },
    Notice(String, Severity),
    Processing(bool),
}

#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<Event>>>,
}

impl Recorder {
    fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn notices(&self, severity: Severity) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Notice(msg, s) if s == severity => Some(msg),
                _ => None,
            })
            .collect()
    }

    fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

impl Presenter for Recorder {
    fn on_cart_changed(&mut self, lines: &[CartLine], summary: &Summary) {
        self.events.lock().unwrap().push(Event::Cart {
            units: lines.iter().map(|l| l.quantity).sum(),
            total: summary.total.to_string(),
        });
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        self.events
            .lock()
            .unwrap()
            .push(Event::Notice(message.to_string(), severity));
    }

    fn on_checkout_state(&mut self, processing: bool) {
        self.events.lock().unwrap().push(Event::Processing(processing));
    }
}

struct RejectingOrderService;

#[async_trait]
impl OrderService for RejectingOrderService {
    async fn place_order(&self, _pending: &PendingCheckout) -> CoreResult<OrderConfirmation> {
        tokio::time::sleep(DELAY).await;
        Err(CoreError::OrderRejected {
            reason: "kitchen closed".to_string(),
        })
    }
}

type Fixture = (StorefrontState, Arc<dyn OrderService>, Recorder);

fn storefront_with(orders: Arc<dyn OrderService>) -> Fixture {
    let recorder = Recorder::default();
    let state = StorefrontState::new(Storefront::new(
        StaticCatalog::house_menu(),
        Box::new(recorder.clone()),
        TaxRate::default(),
    ));
    (state, orders, recorder)
}

fn storefront() -> Fixture {
    storefront_with(Arc::new(SimulatedOrderService::new(DELAY)))
}

fn send(state: &StorefrontState, orders: &Arc<dyn OrderService>, command: Command) {
    dispatch(state, orders, command).unwrap();
}

fn begin_checkout(state: &StorefrontState, orders: &Arc<dyn OrderService>) -> CheckoutTask {
    match dispatch(state, orders, Command::Checkout).unwrap() {
        CommandOutcome::CheckoutPending(task) => task,
        other => panic!("expected a pending checkout, got {:?}", other),
    }
}

/// Lets spawned tasks run up to their next await point.
async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

fn fill_reference_cart(state: &StorefrontState, orders: &Arc<dyn OrderService>) {
    send(state, orders, Command::add(1u32));
    send(state, orders, Command::add(1u32));
    send(state, orders, Command::add(6u32));
}

// =============================================================================
// Checkout
// =============================================================================

#[tokio::test(start_paused = true)]
async fn test_checkout_disables_trigger_then_clears_after_delay() {
    let (state, orders, recorder) = storefront();
    fill_reference_cart(&state, &orders);

    let task = begin_checkout(&state, &orders);

    // Trigger disabled at once, cart still full
    assert_eq!(recorder.events().last(), Some(&Event::Processing(true)));
    assert_eq!(state.with_storefront(|s| s.engine.total_unit_count()), 3);

    settle().await;
    tokio::time::advance(DELAY - Duration::from_millis(1)).await;
    settle().await;
    assert!(state.with_storefront(|s| s.checkout.is_processing()));
    assert!(recorder
        .notices(Severity::Success)
        .iter()
        .all(|m| !m.starts_with("Order placed")));

    tokio::time::advance(Duration::from_millis(1)).await;
    task.wait().await.unwrap();

    state.with_storefront(|s| {
        assert!(s.engine.is_empty());
        assert_eq!(s.engine.total_unit_count(), 0);
        assert!(!s.checkout.is_processing());
    });

    let placed: Vec<String> = recorder
        .notices(Severity::Success)
        .into_iter()
        .filter(|m| m.starts_with("Order placed"))
        .collect();
    assert_eq!(
        placed,
        vec!["Order placed successfully! Total amount: $42.87".to_string()]
    );

    // Trigger re-enabled before the final redraw of the emptied cart
    let events = recorder.events();
    assert_eq!(
        events[events.len() - 3..],
        [
            Event::Notice(
                "Order placed successfully! Total amount: $42.87".to_string(),
                Severity::Success
            ),
            Event::Processing(false),
            Event::Cart {
                units: 0,
                total: "$0.00".to_string()
            },
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_checkout_on_empty_cart_changes_nothing() {
    let (state, orders, recorder) = storefront();

    let err = dispatch(&state, &orders, Command::Checkout).unwrap_err();

    assert_eq!(err.code, ErrorCode::EmptyCart);
    assert_eq!(
        recorder.events(),
        vec![Event::Notice("Your cart is empty!".to_string(), Severity::Info)]
    );
    assert!(!state.with_storefront(|s| s.checkout.is_processing()));
}

#[tokio::test(start_paused = true)]
async fn test_second_checkout_while_processing_is_refused() {
    let (state, orders, recorder) = storefront();
    send(&state, &orders, Command::add(2u32));

    let task = begin_checkout(&state, &orders);
    let err = dispatch(&state, &orders, Command::Checkout).unwrap_err();
    assert_eq!(err.code, ErrorCode::CheckoutInProgress);

    task.wait().await.unwrap();
    let placed = recorder
        .notices(Severity::Success)
        .into_iter()
        .filter(|m| m.starts_with("Order placed"))
        .count();
    assert_eq!(placed, 1);
}

#[tokio::test(start_paused = true)]
async fn test_success_total_is_taken_when_checkout_starts() {
    let (state, orders, recorder) = storefront();
    send(&state, &orders, Command::add(3u32)); // 12.00 + 1.20 tax

    let task = begin_checkout(&state, &orders);
    send(&state, &orders, Command::add(2u32)); // added while processing
    task.wait().await.unwrap();

    assert!(recorder
        .notices(Severity::Success)
        .contains(&"Order placed successfully! Total amount: $13.20".to_string()));
    // Everything in the cart at completion is cleared
    assert!(state.with_storefront(|s| s.engine.is_empty()));
}

#[tokio::test(start_paused = true)]
async fn test_rejected_order_keeps_cart() {
    let (state, orders, recorder) = storefront_with(Arc::new(RejectingOrderService));
    fill_reference_cart(&state, &orders);

    let task = begin_checkout(&state, &orders);
    let err = task.wait().await.unwrap_err();

    assert_eq!(err.code, ErrorCode::OrderRejected);
    assert_eq!(
        recorder.notices(Severity::Error),
        vec!["Checkout failed: Order rejected: kitchen closed".to_string()]
    );
    state.with_storefront(|s| {
        assert_eq!(s.engine.total_unit_count(), 3);
        assert!(!s.checkout.is_processing());
    });
    assert_eq!(recorder.events().last(), Some(&Event::Processing(false)));

    // Trigger is usable again
    let retry = begin_checkout(&state, &orders);
    assert_eq!(retry.pending().total().to_string(), "$42.87");
}

// =============================================================================
// Cart Commands
// =============================================================================

#[tokio::test]
async fn test_unknown_item_leaves_cart_unchanged() {
    let (state, orders, recorder) = storefront();
    send(&state, &orders, Command::add(4u32));
    let before = state.with_storefront(|s| s.engine.snapshot());
    let events_before = recorder.len();

    let err = dispatch(&state, &orders, Command::add(ItemId::new(9999))).unwrap_err();

    assert_eq!(err.code, ErrorCode::NotFound);
    assert_eq!(state.with_storefront(|s| s.engine.snapshot()), before);
    assert_eq!(recorder.len(), events_before);
}

#[tokio::test]
async fn test_add_and_remove_round_trip_through_presenter() {
    let (state, orders, recorder) = storefront();

    send(&state, &orders, Command::add(5u32));
    send(&state, &orders, Command::add(5u32));
    send(&state, &orders, Command::remove(5u32));
    send(&state, &orders, Command::remove(5u32));
    send(&state, &orders, Command::remove(5u32)); // absent: silent

    assert_eq!(
        recorder.events(),
        vec![
            Event::Cart {
                units: 1,
                total: "$16.78".to_string()
            },
            Event::Notice(
                "Added Creamy Tomato Pasta to cart.".to_string(),
                Severity::Success
            ),
            Event::Cart {
                units: 2,
                total: "$33.55".to_string()
            },
            Event::Notice(
                "Added Creamy Tomato Pasta to cart.".to_string(),
                Severity::Success
            ),
            Event::Cart {
                units: 1,
                total: "$16.78".to_string()
            },
            Event::Notice(
                "Decreased quantity of Creamy Tomato Pasta.".to_string(),
                Severity::Info
            ),
            Event::Cart {
                units: 0,
                total: "$0.00".to_string()
            },
            Event::Notice(
                "Removed Creamy Tomato Pasta from cart.".to_string(),
                Severity::Info
            ),
        ]
    );
}
