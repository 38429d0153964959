//! # Validation Module
//!
//! Catalog validation for Bistro.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog construction (THIS MODULE)                           │
//! │  ├── Positive, unique ids                                              │
//! │  ├── Non-empty names                                                   │
//! │  └── Non-negative prices                                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart Engine                                                  │
//! │  └── Trusts the catalog; only checks that an id exists                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bistro_core::validation::{validate_item_name, validate_price};
//! use bistro_core::Money;
//!
//! validate_item_name("Chocolate Lava Cake").unwrap();
//! assert!(validate_price(Money::from_cents(-1)).is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{CatalogItem, ItemId};
use crate::MAX_ITEM_NAME_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a menu item id. Zero is reserved.
pub fn validate_item_id(id: ItemId) -> ValidationResult<()> {
    if id.get() == 0 {
        return Err(ValidationError::MustBePositive {
            field: "id".to_string(),
        });
    }
    Ok(())
}

/// Validates a menu item name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a unit price. Free items are allowed, negative ones are not.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Validates a single catalog entry.
pub fn validate_catalog_item(item: &CatalogItem) -> ValidationResult<()> {
    validate_item_id(item.id)?;
    validate_item_name(&item.name)?;
    validate_price(item.price)?;
    Ok(())
}

/// Validates a whole menu: every entry, plus id uniqueness.
pub fn validate_catalog(items: &[CatalogItem]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        validate_catalog_item(item)?;

        if !seen.insert(item.id) {
            return Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: item.id.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str, cents: i64) -> CatalogItem {
        CatalogItem::new(id, name, "", Money::from_cents(cents), "plate.png")
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Creamy Tomato Pasta").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(201)).is_err());
        assert!(validate_item_name(&"A".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(899)).is_ok());
        assert!(validate_price(Money::zero()).is_ok());
        assert!(matches!(
            validate_price(Money::from_cents(-1)),
            Err(ValidationError::Negative { .. })
        ));
    }

    #[test]
    fn test_validate_item_id_rejects_zero() {
        assert!(validate_item_id(ItemId::new(0)).is_err());
        assert!(validate_item_id(ItemId::new(1)).is_ok());
    }

    #[test]
    fn test_validate_catalog_rejects_duplicates() {
        let menu = vec![item(1, "Burger", 1499), item(1, "Pizza", 1850)];
        assert_eq!(
            validate_catalog(&menu),
            Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: "1".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_catalog_accepts_valid_menu() {
        let menu = vec![item(1, "Burger", 1499), item(2, "Pizza", 1850)];
        assert!(validate_catalog(&menu).is_ok());
        assert!(validate_catalog(&[]).is_ok());
    }
}
