//! # Catalog
//!
//! Read-only menu lookup used by the Cart Engine.
//!
//! The engine only ever asks one question of the catalog: "which item has
//! this id?". Anything that can answer that implements [`Catalog`].
//! [`StaticCatalog`] is the in-memory menu loaded once at startup.

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{CatalogItem, ItemId};
use crate::validation::validate_catalog;

/// Read-only source of menu items.
pub trait Catalog {
    /// Finds an item by id.
    fn lookup(&self, id: ItemId) -> Option<&CatalogItem>;

    /// All items in menu order.
    fn items(&self) -> &[CatalogItem];
}

/// A fixed, validated menu held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    items: Vec<CatalogItem>,
}

impl StaticCatalog {
    /// Builds a catalog, rejecting invalid or duplicate entries.
    pub fn new(items: Vec<CatalogItem>) -> CoreResult<Self> {
        validate_catalog(&items)?;
        Ok(StaticCatalog { items })
    }

    /// The six dishes the kiosk ships with.
    pub fn house_menu() -> Self {
        StaticCatalog {
            items: house_menu_items(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Catalog for StaticCatalog {
    fn lookup(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn items(&self) -> &[CatalogItem] {
        &self.items
    }
}

fn house_menu_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(
            1,
            "Classic Gourmet Burger",
            "Juicy beef patty, cheddar, lettuce, tomato, special sauce. Served with fries.",
            Money::from_cents(1499),
            "burger.png",
        ),
        CatalogItem::new(
            2,
            "Supreme Pepperoni Pizza",
            "Hand-tossed crust, rich tomato sauce, loads of mozzarella and crispy pepperoni.",
            Money::from_cents(1850),
            "pizza.png",
        ),
        CatalogItem::new(
            3,
            "Mediterranean Quinoa Salad",
            "Fresh greens, quinoa, feta cheese, olives, and citrus vinaigrette. Healthy choice!",
            Money::from_cents(1200),
            "salad.png",
        ),
        CatalogItem::new(
            4,
            "Spicy Chicken Tacos (3)",
            "Marinated grilled chicken, fresh salsa, lime, and cilantro, served in soft tortillas.",
            Money::from_cents(1150),
            "burger.png",
        ),
        CatalogItem::new(
            5,
            "Creamy Tomato Pasta",
            "Penne pasta tossed in a rich, velvety tomato cream sauce with parmesan.",
            Money::from_cents(1525),
            "pizza.png",
        ),
        CatalogItem::new(
            6,
            "Chocolate Lava Cake",
            "Warm chocolate cake with a molten center, served with vanilla ice cream.",
            Money::from_cents(899),
            "salad.png",
        ),
    ]
}
