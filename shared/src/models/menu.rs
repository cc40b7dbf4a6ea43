//! Menu Catalog Model
//!
//! The catalog is static configuration: categories in display order, each with
//! an ordered item list. JSON shape (as served by `GET /api/cardapio`):
//!
//! ```json
//! { "LANCHES": [ { "nome": "Pizza", "preco": 9.0 } ], "BEBIDAS": [ ... ] }
//! ```
//!
//! Category and item order are part of the data, so (de)serialization walks the
//! JSON object in document order instead of going through a sorted map.

use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Single menu entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "preco", with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Named group of menu items
#[derive(Debug, Clone, PartialEq)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}

impl MenuCategory {
    pub fn new(name: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

/// Immutable menu with a name → price index
///
/// Lookup is by exact item name. When the same name appears more than once, the
/// first occurrence (in category order) owns the price.
#[derive(Debug, Clone, Default)]
pub struct MenuCatalog {
    categories: Vec<MenuCategory>,
    prices: HashMap<String, Decimal>,
}

impl MenuCatalog {
    pub fn new(categories: Vec<MenuCategory>) -> Self {
        let mut prices = HashMap::new();
        for category in &categories {
            for item in &category.items {
                if prices.contains_key(&item.name) {
                    tracing::warn!(
                        item = %item.name,
                        category = %category.name,
                        "Duplicate menu item name, keeping the first price"
                    );
                    continue;
                }
                prices.insert(item.name.clone(), item.price);
            }
        }
        Self { categories, prices }
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    /// Authoritative unit price for an item name
    pub fn price_of(&self, name: &str) -> Option<Decimal> {
        self.prices.get(name).copied()
    }

    /// Iterate over every entry in display order (duplicates included)
    pub fn items(&self) -> impl Iterator<Item = (&MenuCategory, &MenuItem)> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter().map(move |i| (c, i)))
    }

    /// Number of distinct priced names
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl PartialEq for MenuCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.categories == other.categories
    }
}

impl Serialize for MenuCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for MenuCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = MenuCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping category names to item lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut categories: Vec<MenuCategory> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, items)) = access.next_entry::<String, Vec<MenuItem>>()? {
                    if categories.iter().any(|c| c.name == name) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate category `{name}`"
                        )));
                    }
                    categories.push(MenuCategory { name, items });
                }
                Ok(MenuCatalog::new(categories))
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
