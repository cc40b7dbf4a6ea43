use std::sync::Arc;

use shared::models::MenuCatalog;

use crate::catalog;
use crate::core::{Config, Result};
use crate::db::DbService;
use crate::db::repository::OrderRepository;
use crate::orders::OrderService;

/// Server state, cloned into every handler
///
/// | Field | Meaning |
/// |-------|---------|
/// | config | immutable configuration |
/// | db | SQLite pool |
/// | catalog | menu, fixed for the life of the process |
/// | orders | order service bound to `db` and `catalog` |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub catalog: Arc<MenuCatalog>,
    pub orders: OrderService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService, catalog: MenuCatalog) -> Self {
        let catalog = Arc::new(catalog);
        let orders = OrderService::new(
            OrderRepository::new(db.pool.clone()),
            catalog.clone(),
            config.status_transitions,
        );
        Self {
            config,
            db,
            catalog,
            orders,
        }
    }

    /// Load the menu and open the database described by `config`
    pub async fn initialize(config: &Config) -> Result<Self> {
        let catalog = match &config.menu_path {
            Some(path) => catalog::from_json_file(path)?,
            None => {
                tracing::info!("Using built-in menu");
                catalog::builtin()
            }
        };
        let db = DbService::new(&config.database_path).await?;
        Ok(Self::new(config.clone(), db, catalog))
    }
}
