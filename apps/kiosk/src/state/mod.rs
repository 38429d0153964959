//! # State Module
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────┐      │
//! │  │    StorefrontState       │        │      KioskConfig         │      │
//! │  │                          │        │                          │      │
//! │  │  Arc<Mutex<              │        │  store.name              │      │
//! │  │    CartEngine +          │        │  pricing.tax_rate        │      │
//! │  │    CheckoutFlow          │        │  checkout.delay_ms       │      │
//! │  │  >>                      │        │                          │      │
//! │  └──────────────────────────┘        └──────────────────────────┘      │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StorefrontState: exclusive access through the Mutex                 │
//! │  • KioskConfig: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod storefront;

pub use config::{
    parse_tax_percentage, CheckoutSettings, KioskConfig, PricingSettings, StoreSettings,
};
pub use storefront::{KioskEngine, Storefront, StorefrontState};
