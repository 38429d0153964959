//! # Terminal Input
//!
//! Turns a line typed at the kiosk prompt into a typed [`Input`].
//!
//! ## Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add <id>      | a <id>            ──► Command::AddItem                 │
//! │  remove <id>   | rm <id> | r <id>  ──► Command::RemoveUnit              │
//! │  checkout      | pay               ──► Command::Checkout                │
//! │  menu          | m                 ──► redraw the menu                  │
//! │  cart          | c                 ──► redraw the cart                  │
//! │  help          | h | ?             ──► list commands                    │
//! │  quit          | exit | q          ──► leave                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Verbs are case-insensitive. Blank lines parse to `None`.

use thiserror::Error;

use bistro_core::{Command, ItemId};

/// One parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    ShowMenu,
    ShowCart,
    Help,
    Quit,
}

/// Why a prompt line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown command '{0}'. Type 'help' for a list.")]
    UnknownVerb(String),

    #[error("'{verb}' needs a menu item id, e.g. '{verb} 1'")]
    MissingId { verb: String },

    #[error("'{0}' is not a menu item id")]
    InvalidId(String),

    #[error("'{verb}' takes no arguments")]
    UnexpectedArgument { verb: String },
}

/// Help text shown for `help`.
pub const HELP: &str = "\
Commands:
  add <id>      add one of a dish to the cart   (a)
  remove <id>   take one of a dish off the cart (rm, r)
  checkout      place the order                 (pay)
  menu          show the menu                   (m)
  cart          show the cart                   (c)
  help          show this list                  (h, ?)
  quit          leave the kiosk                 (q, exit)";

/// Parses one prompt line.
///
/// ## Returns
/// - `Ok(None)`: blank line
/// - `Ok(Some(input))`: recognised input
/// - `Err(..)`: unknown verb or bad argument
pub fn parse_input(line: &str) -> Result<Option<Input>, InputError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let verb = verb.to_ascii_lowercase();
    let arg = words.next();
    let extra = words.next();

    let input = match verb.as_str() {
        "add" | "a" => Input::Command(Command::AddItem {
            id: parse_id(&verb, arg, extra)?,
        }),
        "remove" | "rm" | "r" => Input::Command(Command::RemoveUnit {
            id: parse_id(&verb, arg, extra)?,
        }),
        "checkout" | "pay" => no_args(&verb, arg, Input::Command(Command::Checkout))?,
        "menu" | "m" => no_args(&verb, arg, Input::ShowMenu)?,
        "cart" | "c" => no_args(&verb, arg, Input::ShowCart)?,
        "help" | "h" | "?" => no_args(&verb, arg, Input::Help)?,
        "quit" | "exit" | "q" => no_args(&verb, arg, Input::Quit)?,
        _ => return Err(InputError::UnknownVerb(verb)),
    };

    Ok(Some(input))
}

fn parse_id(verb: &str, arg: Option<&str>, extra: Option<&str>) -> Result<ItemId, InputError> {
    let Some(raw) = arg else {
        return Err(InputError::MissingId {
            verb: verb.to_string(),
        });
    };
    if extra.is_some() {
        return Err(InputError::UnexpectedArgument {
            verb: verb.to_string(),
        });
    }
    raw.parse::<u32>()
        .map(ItemId::new)
        .map_err(|_| InputError::InvalidId(raw.to_string()))
}

fn no_args(verb: &str, arg: Option<&str>, input: Input) -> Result<Input, InputError> {
    match arg {
        None => Ok(input),
        Some(_) => Err(InputError::UnexpectedArgument {
            verb: verb.to_string(),
        }),
    }
}
