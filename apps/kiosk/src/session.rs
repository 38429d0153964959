//! # Kiosk Session
//!
//! The input loop: one typed line at a time, parsed, dispatched, logged.
//!
//! ## Line Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin line                                                             │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  parse_input ──► Err ──────────────► warn! + message on the terminal    │
//! │      │                                                                  │
//! │      ├─► ShowMenu / ShowCart ──────► engine.render_menu / refresh       │
//! │      ├─► Help ─────────────────────► help text                          │
//! │      ├─► Quit ─────────────────────► wait for in-flight checkout, stop  │
//! │      ▼                                                                  │
//! │  dispatch(Command)                                                      │
//! │      ├─► CartUpdated ──────────────► (engine already redrew)            │
//! │      ├─► CheckoutPending ──────────► remember the task                  │
//! │      └─► Err(NOT_FOUND) ───────────► warn!, nothing shown               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use bistro_core::Command;

use crate::commands::{dispatch, CheckoutTask, CommandOutcome};
use crate::error::{ErrorCode, KioskError};
use crate::input::{parse_input, Input, HELP};
use crate::order::OrderService;
use crate::state::StorefrontState;

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One kiosk user session.
pub struct KioskSession {
    state: StorefrontState,
    orders: Arc<dyn OrderService>,
    /// Host-only text (help, input errors); the engine draws through its presenter
    out: Box<dyn Write + Send>,
    in_flight: Option<CheckoutTask>,
}

impl KioskSession {
    pub fn new(
        state: StorefrontState,
        orders: Arc<dyn OrderService>,
        out: Box<dyn Write + Send>,
    ) -> Self {
        KioskSession {
            state,
            orders,
            out,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &StorefrontState {
        &self.state
    }

    /// Draws the menu and the (empty) cart.
    pub fn start(&mut self) {
        self.state.with_storefront_mut(|s| {
            s.engine.render_menu();
            s.engine.refresh();
        });
        self.say("Type 'help' for a list of commands.");
    }

    /// Handles one typed line.
    pub fn handle_line(&mut self, line: &str) -> Flow {
        let input = match parse_input(line) {
            Ok(Some(input)) => input,
            Ok(None) => return Flow::Continue,
            Err(e) => {
                warn!(line, error = %e, "unrecognised input");
                self.say(&e.to_string());
                return Flow::Continue;
            }
        };

        match input {
            Input::Command(command) => self.run_command(command),
            Input::ShowMenu => self.state.with_storefront_mut(|s| s.engine.render_menu()),
            Input::ShowCart => self.state.with_storefront_mut(|s| s.engine.refresh()),
            Input::Help => self.say(HELP),
            Input::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Reads lines until `quit` or end of input, then waits for any checkout
    /// still being placed.
    pub async fn run<R>(mut self, input: R) -> Result<(), KioskError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if self.handle_line(&line) == Flow::Quit {
                break;
            }
        }
        self.finish().await;
        Ok(())
    }

    /// Waits for an in-flight checkout so its outcome is not lost on exit.
    pub async fn finish(&mut self) {
        let Some(task) = self.in_flight.take() else {
            return;
        };
        if !task.is_finished() {
            info!(order_id = %task.pending().order_id, "waiting for checkout to finish");
        }
        match task.wait().await {
            Ok(confirmation) => debug!(order_id = %confirmation.order_id, "checkout settled"),
            Err(err) => warn!(error = %err, "checkout did not complete"),
        }
    }

    fn run_command(&mut self, command: Command) {
        match dispatch(&self.state, &self.orders, command) {
            Ok(CommandOutcome::CartUpdated(snapshot)) => {
                debug!(%command, units = snapshot.unit_count, "cart updated");
            }
            Ok(CommandOutcome::CheckoutPending(task)) => {
                self.in_flight = Some(task);
            }
            Err(err) => match err.code {
                ErrorCode::NotFound => warn!(%command, "ignoring unknown menu item"),
                ErrorCode::EmptyCart | ErrorCode::CheckoutInProgress => {
                    debug!(%command, error = %err, "checkout not started")
                }
                _ => warn!(%command, error = %err, "command failed"),
            },
        }
    }

    fn say(&mut self, text: &str) {
        let result = writeln!(self.out, "{}", text).and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!(error = %e, "terminal write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use bistro_core::{NullPresenter, StaticCatalog, TaxRate};

    use crate::order::SimulatedOrderService;
    use crate::state::Storefront;

    fn session() -> KioskSession {
        let state = StorefrontState::new(Storefront::new(
            StaticCatalog::house_menu(),
            Box::new(NullPresenter),
            TaxRate::default(),
        ));
        let orders = Arc::new(SimulatedOrderService::new(Duration::from_millis(2000)));
        KioskSession::new(state, orders, Box::new(std::io::sink()))
    }

    fn units(session: &KioskSession) -> u32 {
        session
            .state()
            .with_storefront(|s| s.engine.total_unit_count())
    }

    #[tokio::test]
    async fn test_lines_drive_the_cart() {
        let mut session = session();

        assert_eq!(session.handle_line("add 1"), Flow::Continue);
        assert_eq!(session.handle_line("a 1"), Flow::Continue);
        assert_eq!(session.handle_line("rm 1"), Flow::Continue);

        assert_eq!(units(&session), 1);
    }

    #[tokio::test]
    async fn test_bad_and_unknown_input_keep_going() {
        let mut session = session();

        assert_eq!(session.handle_line("frobnicate"), Flow::Continue);
        assert_eq!(session.handle_line("add 9999"), Flow::Continue);
        assert_eq!(session.handle_line(""), Flow::Continue);

        assert_eq!(units(&session), 0);
    }

    #[tokio::test]
    async fn test_quit() {
        let mut session = session();
        assert_eq!(session.handle_line("quit"), Flow::Quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_waits_for_checkout_before_returning() {
        let session = session();
        let state = session.state().clone();
        let script: &[u8] = b"add 1\nadd 6\ncheckout\nquit\n";

        session
            .run(tokio::io::BufReader::new(script))
            .await
            .unwrap();

        state.with_storefront(|s| {
            assert!(s.engine.is_empty());
            assert!(!s.checkout.is_processing());
        });
    }
}
