//! # Bistro Kiosk Library
//!
//! The terminal host for the Bistro cart engine.
//!
//! ## Module Organization
//! ```text
//! bistro_kiosk/
//! ├── lib.rs          ◄─── You are here (startup & logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── KioskConfig (defaults, TOML, env)
//! │   └── storefront.rs ◄─ Engine + checkout flow behind Arc<Mutex>
//! ├── commands.rs     ◄─── Command dispatch, checkout completion task
//! ├── order.rs        ◄─── OrderService trait, simulated service
//! ├── input.rs        ◄─── Prompt line → Input
//! ├── presenter.rs    ◄─── TerminalPresenter
//! ├── session.rs      ◄─── Input loop
//! └── error.rs        ◄─── ApiError, ConfigError, KioskError
//! ```

pub mod commands;
pub mod error;
pub mod input;
pub mod order;
pub mod presenter;
pub mod session;
pub mod state;

use std::path::PathBuf;
use std::sync::Arc;

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bistro_core::StaticCatalog;

use error::KioskError;
use order::{OrderService, SimulatedOrderService};
use presenter::TerminalPresenter;
use session::KioskSession;
use state::{KioskConfig, Storefront, StorefrontState};

/// Runs the kiosk until the user quits or stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Kiosk Startup                                     │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → bistro.toml → BISTRO_* env → validate                  │
/// │                                                                         │
/// │  2. Build the Storefront ─────────────────────────────────────────────► │
/// │     • house menu, terminal presenter, configured tax rate               │
/// │     • simulated order service with the configured delay                 │
/// │                                                                         │
/// │  3. First Draw ───────────────────────────────────────────────────────► │
/// │     • menu, then the empty cart                                         │
/// │                                                                         │
/// │  4. Input Loop ───────────────────────────────────────────────────────► │
/// │     • one stdin line at a time until quit / EOF                         │
/// │     • any checkout still in flight is awaited before returning          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(config_path: Option<PathBuf>) -> Result<(), KioskError> {
    let config = KioskConfig::load(config_path)?;
    info!(
        store = %config.store.name,
        tax_rate = %config.pricing.tax_rate,
        checkout_delay_ms = config.checkout.delay_ms,
        "Starting Bistro kiosk"
    );

    let presenter = TerminalPresenter::stdout(config.store.name.clone());
    let state = StorefrontState::new(Storefront::new(
        StaticCatalog::house_menu(),
        Box::new(presenter),
        config.pricing.tax_rate,
    ));
    let orders: Arc<dyn OrderService> =
        Arc::new(SimulatedOrderService::new(config.checkout.delay()));

    let mut session = KioskSession::new(state, orders, Box::new(std::io::stdout()));
    session.start();
    session.run(BufReader::new(tokio::io::stdin())).await?;

    info!("Bistro kiosk stopped");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bistro_core=trace` - Show trace for the engine only
/// - Default: `info,bistro_core=debug,bistro_kiosk=debug` with `--verbose`,
///   `warn` otherwise so the log does not bury the screen
///
/// Logs go to stderr; stdout belongs to the presenter.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "info,bistro_core=debug,bistro_kiosk=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
