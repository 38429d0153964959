//! # Commands
//!
//! Typed user intents. The presentation layer turns raw UI events (button
//! clicks, typed lines, IPC messages) into these before anything reaches the
//! engine, so the engine never parses strings.
//!
//! ## Wire Format
//! ```json
//! { "type": "addItem", "id": 3 }
//! { "type": "removeUnit", "id": 3 }
//! { "type": "checkout" }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::types::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum Command {
    /// Add one unit of a menu item.
    AddItem { id: ItemId },
    /// Take one unit of an item off the cart.
    RemoveUnit { id: ItemId },
    /// Start checkout.
    Checkout,
}

impl Command {
    pub fn add(id: impl Into<ItemId>) -> Self {
        Command::AddItem { id: id.into() }
    }

    pub fn remove(id: impl Into<ItemId>) -> Self {
        Command::RemoveUnit { id: id.into() }
    }

    /// Name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddItem { .. } => "add_item",
            Command::RemoveUnit { .. } => "remove_unit",
            Command::Checkout => "checkout",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::AddItem { id } | Command::RemoveUnit { id } => {
                write!(f, "{}({})", self.name(), id)
            }
            Command::Checkout => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        assert_eq!(
            serde_json::to_string(&Command::add(3u32)).unwrap(),
            r#"{"type":"addItem","id":3}"#
        );
        assert_eq!(
            serde_json::to_string(&Command::Checkout).unwrap(),
            r#"{"type":"checkout"}"#
        );
    }

    #[test]
    fn test_parse_from_frontend() {
        let cmd: Command = serde_json::from_str(r#"{"type":"removeUnit","id":6}"#).unwrap();
        assert_eq!(cmd, Command::remove(6u32));

        let bad: Result<Command, _> = serde_json::from_str(r#"{"type":"refund"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Command::add(2u32).to_string(), "add_item(2)");
        assert_eq!(Command::Checkout.to_string(), "checkout");
    }
}
