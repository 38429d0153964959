//! # Domain Types
//!
//! Core domain types used throughout Bistro.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CatalogItem    │   │    TaxRate      │   │    Severity     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (ItemId)    │   │  fraction       │   │  Info           │       │
//! │  │  name           │   │  0.10 = 10%     │   │  Success        │       │
//! │  │  description    │   │                 │   │  Error          │       │
//! │  │  price (Money)  │   └─────────────────┘   └─────────────────┘       │
//! │  │  image          │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart types live in [`crate::cart`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Item Id
// =============================================================================

/// Identifier of a menu item. Always a positive integer in a valid catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ItemId(u32);

impl ItemId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ItemId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        ItemId(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate as a decimal fraction of the subtotal.
///
/// ## Representation
/// `0.10` means 10%. The rate is fixed when the engine is built and never
/// changes afterwards. Valid range: `0 ..= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "Decimal", into = "Decimal")]
#[ts(export)]
pub struct TaxRate(#[ts(type = "string")] Decimal);

impl TaxRate {
    /// Creates a tax rate from basis points (1000 bps = 10%), rejecting
    /// anything above 10 000.
    pub fn from_bps(bps: u32) -> Result<Self, ValidationError> {
        Self::from_fraction(Decimal::new(i64::from(bps), 4))
    }

    /// Creates a tax rate from a fraction, rejecting values outside `0..=1`.
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::types::TaxRate;
    /// use rust_decimal_macros::dec;
    ///
    /// assert!(TaxRate::from_fraction(dec!(0.10)).is_ok());
    /// assert!(TaxRate::from_fraction(dec!(1.5)).is_err());
    /// ```
    pub fn from_fraction(fraction: Decimal) -> Result<Self, ValidationError> {
        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(ValidationError::OutOfRange {
                field: "tax_rate".to_string(),
                min: "0".to_string(),
                max: "1".to_string(),
            });
        }
        Ok(TaxRate(fraction))
    }

    /// Creates a tax rate from a percentage (`8.25` = 8.25%).
    pub fn from_percentage(pct: Decimal) -> Result<Self, ValidationError> {
        Self::from_fraction(pct / Decimal::ONE_HUNDRED)
    }

    /// Returns the rate as a fraction.
    #[inline]
    pub const fn fraction(&self) -> Decimal {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    pub fn percentage(&self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(Decimal::ZERO)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// The house rate: 10%.
impl Default for TaxRate {
    fn default() -> Self {
        TaxRate(Decimal::new(10, 2))
    }
}

impl TryFrom<Decimal> for TaxRate {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        TaxRate::from_fraction(value)
    }
}

impl From<TaxRate> for Decimal {
    fn from(rate: TaxRate) -> Self {
        rate.0
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percentage())
    }
}

// =============================================================================
// Catalog Item
// =============================================================================

/// A dish on the menu. Loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogItem {
    /// Unique positive identifier.
    pub id: ItemId,

    /// Display name shown on the menu and copied into the cart.
    pub name: String,

    /// Menu blurb.
    pub description: String,

    /// Unit price.
    pub price: Money,

    /// Opaque image reference, interpreted by the presentation layer.
    pub image: String,
}

impl CatalogItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        CatalogItem {
            id: ItemId::new(id),
            name: name.into(),
            description: description.into(),
            price,
            image: image.into(),
        }
    }
}

// =============================================================================
// Notifications
// =============================================================================

/// Category of a user-facing notification.
///
/// `Error` is only raised when an order service rejects a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tax_rate_constructors_agree() {
        let from_bps = TaxRate::from_bps(1000).unwrap();
        let from_fraction = TaxRate::from_fraction(dec!(0.10)).unwrap();
        let from_pct = TaxRate::from_percentage(dec!(10)).unwrap();

        assert_eq!(from_bps.fraction(), dec!(0.1));
        assert_eq!(from_fraction.fraction(), dec!(0.1));
        assert_eq!(from_pct.fraction(), dec!(0.1));
        assert_eq!(TaxRate::default().fraction(), dec!(0.1));
    }

    #[test]
    fn test_tax_rate_rejects_out_of_range() {
        assert!(TaxRate::from_fraction(dec!(-0.01)).is_err());
        assert!(TaxRate::from_fraction(dec!(1.01)).is_err());
        assert!(TaxRate::from_percentage(dec!(150)).is_err());
        assert!(TaxRate::from_fraction(Decimal::ONE).is_ok());
        assert!(TaxRate::zero().is_zero());
    }

    #[test]
    fn test_tax_rate_from_bps_checks_range() {
        assert_eq!(TaxRate::from_bps(10_000).unwrap().fraction(), Decimal::ONE);
        assert!(matches!(
            TaxRate::from_bps(10_001),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(TaxRate::from_bps(25_000).is_err());
        assert_eq!(TaxRate::from_bps(0).unwrap(), TaxRate::zero());
    }

    #[test]
    fn test_tax_rate_display() {
        assert_eq!(TaxRate::from_bps(825).unwrap().to_string(), "8.25%");
        assert_eq!(TaxRate::default().to_string(), "10%");
    }

    #[test]
    fn test_tax_rate_deserialize_validates() {
        let rate: TaxRate = serde_json::from_str("\"0.08\"").unwrap();
        assert_eq!(rate.fraction(), dec!(0.08));

        let bad: Result<TaxRate, _> = serde_json::from_str("\"2\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_item_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&ItemId::new(3)).unwrap(), "3");
        assert_eq!(ItemId::from(7).to_string(), "7");
    }

    #[test]
    fn test_severity_names() {
        assert_eq!(Severity::Info.to_string(), "info");
        assert_eq!(
            serde_json::to_string(&Severity::Success).unwrap(),
            "\"success\""
        );
    }
}
