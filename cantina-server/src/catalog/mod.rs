//! Menu catalog loading
//!
//! The catalog is fixed for the life of the process: either the built-in
//! canteen menu or a JSON file with the same shape `GET /api/cardapio` serves.

use std::path::Path;

use rust_decimal::Decimal;
use shared::models::{MenuCatalog, MenuCategory, MenuItem};
use thiserror::Error;

use crate::orders::money::round_money;
use crate::utils::validation::{MAX_ITEM_NAME_LEN, required_text};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read menu file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid menu file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid menu item `{item}` in {category}: {reason}")]
    InvalidItem {
        category: String,
        item: String,
        reason: String,
    },

    #[error("Menu is empty")]
    Empty,
}

/// Load a catalog from a JSON file and validate it
pub fn from_json_file(path: impl AsRef<Path>) -> Result<MenuCatalog, CatalogError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path_str.clone(),
        source,
    })?;
    let catalog = from_json_str(&content).map_err(|e| match e {
        CatalogError::Parse { source, .. } => CatalogError::Parse {
            path: path_str.clone(),
            source,
        },
        other => other,
    })?;

    tracing::info!(path = %path_str, items = catalog.len(), "Menu loaded from file");
    Ok(catalog)
}

/// Parse and validate catalog JSON; prices are rounded to cents
pub fn from_json_str(content: &str) -> Result<MenuCatalog, CatalogError> {
    let parsed: MenuCatalog = serde_json::from_str(content).map_err(|source| CatalogError::Parse {
        path: "<inline>".into(),
        source,
    })?;
    normalize(parsed)
}

fn normalize(catalog: MenuCatalog) -> Result<MenuCatalog, CatalogError> {
    let mut categories = Vec::with_capacity(catalog.categories().len());
    for category in catalog.categories() {
        let mut items = Vec::with_capacity(category.items.len());
        for item in &category.items {
            let invalid = |reason: String| CatalogError::InvalidItem {
                category: category.name.clone(),
                item: item.name.clone(),
                reason,
            };
            required_text(&item.name, MAX_ITEM_NAME_LEN).map_err(|e| invalid(format!("name {e}")))?;
            if item.price.is_sign_negative() && !item.price.is_zero() {
                return Err(invalid(format!("negative price {}", item.price)));
            }
            items.push(MenuItem::new(item.name.clone(), round_money(item.price)));
        }
        categories.push(MenuCategory::new(category.name.clone(), items));
    }

    let catalog = MenuCatalog::new(categories);
    if catalog.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(catalog)
}

fn item(name: &str, cents: i64) -> MenuItem {
    MenuItem::new(name, Decimal::new(cents, 2))
}

/// The canteen's standard menu
pub fn builtin() -> MenuCatalog {
    MenuCatalog::new(vec![
        MenuCategory::new(
            "ALMOÇO",
            vec![
                item("Self Service", 4299),
                item("Self Service Vegetariano", 3399),
                item("Proteína", 5999),
                item("Sobremesa", 5499),
            ],
        ),
        MenuCategory::new(
            "LANCHES",
            vec![
                item("Salgado Assado", 450),
                item("Salgado Vegetariano", 450),
                item("Pão de Queijo 50g", 250),
                item("Salada de Fruta", 600),
                item("Pizza", 900),
                item("Sanduíche Natural 150g", 700),
                item("Sanduíche Vegetariano 120g", 700),
                item("Bolo Simples 100g", 300),
                item("Pão C/ Sal/Margarina ou Manteiga 50g", 200),
                item("Misto Simples", 500),
                item("Misto Completo", 700),
                item("Queijo Simples", 500),
                item("Queijo Quente", 750),
                item("Queijo Quente Completo", 750),
                item("Fruta", 100),
            ],
        ),
        MenuCategory::new(
            "TAPIOCA",
            vec![
                item("Com Manteiga", 400),
                item("Com Ovo", 700),
                item("Presunto e Queijo", 900),
                item("Presunto, Queijo e Ovo", 1100),
            ],
        ),
        MenuCategory::new(
            "CUSCUZ",
            vec![
                item("Cuscuz Puro", 375),
                item("Com Ovo", 550),
                item("Presunto e Queijo", 750),
                item("Presunto, Queijo e Ovo", 950),
                item("Com Manteiga", 450),
            ],
        ),
        MenuCategory::new(
            "OMELETE",
            vec![item("Omelete Simples", 1200), item("Omelete Completo", 1500)],
        ),
        MenuCategory::new(
            "BEBIDAS",
            vec![
                item("Café Puro 50 ml", 250),
                item("Café Com Leite 50 ml", 300),
                item("Leite Puro 50 ml", 260),
                item("Leite Com Chocolate", 350),
                item("100 ml", 600),
                item("Vitamina de Frutas 300 ml", 800),
                item("Suco Natural 300 ml", 600),
            ],
        ),
    ])
}
