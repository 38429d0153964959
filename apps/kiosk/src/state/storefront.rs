//! # Storefront State
//!
//! The engine and the checkout flow behind one lock.
//!
//! ## Thread Safety
//! The storefront is wrapped in `Arc<Mutex<T>>` because the input loop and
//! the checkout completion task both touch it. Each command or completion
//! holds the lock for its whole update, so presenter calls from one
//! operation are never interleaved with another's.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Access                                    │
//! │                                                                         │
//! │  Input loop ──────────► with_storefront_mut(|s| engine.add_item(..))   │
//! │                                                                         │
//! │  Checkout task ───┐                                                     │
//! │    (after delay)  └──► with_storefront_mut(|s| checkout.complete(..))  │
//! │                                                                         │
//! │  NOTE: The lock is never held across an `.await`.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use bistro_core::{CartEngine, CheckoutFlow, Presenter, StaticCatalog, TaxRate};

/// Engine as the kiosk runs it: house menu, boxed presenter.
pub type KioskEngine = CartEngine<StaticCatalog, Box<dyn Presenter + Send>>;

/// Everything a command needs to mutate.
pub struct Storefront {
    pub engine: KioskEngine,
    pub checkout: CheckoutFlow,
}

impl Storefront {
    pub fn new(
        catalog: StaticCatalog,
        presenter: Box<dyn Presenter + Send>,
        tax_rate: TaxRate,
    ) -> Self {
        Storefront {
            engine: CartEngine::new(catalog, presenter, tax_rate),
            checkout: CheckoutFlow::new(),
        }
    }
}

/// Shared handle to the storefront.
#[derive(Clone)]
pub struct StorefrontState {
    inner: Arc<Mutex<Storefront>>,
}

impl StorefrontState {
    pub fn new(storefront: Storefront) -> Self {
        StorefrontState {
            inner: Arc::new(Mutex::new(storefront)),
        }
    }

    /// Executes a function with read access to the storefront.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let units = state.with_storefront(|s| s.engine.total_unit_count());
    /// ```
    pub fn with_storefront<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Storefront) -> R,
    {
        // Engine operations finish mutating before they call the presenter,
        // so a poisoned lock still guards a consistent cart.
        let guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Executes a function with write access to the storefront.
    pub fn with_storefront_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Storefront) -> R,
    {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}
