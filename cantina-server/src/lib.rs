//! Cantina server: canteen ordering backend
//!
//! Customers order from a fixed menu, the kitchen advances order status, and
//! the admin page lists every order with the revenue total.
//!
//! ```text
//! cantina-server/src/
//! ├── core/       # config, state, server
//! ├── catalog/    # menu loading
//! ├── orders/     # order service, money, status policy
//! ├── report/     # report and kitchen view rows
//! ├── db/         # SQLite pool and repositories
//! ├── api/        # JSON routes
//! ├── views/      # HTML pages
//! ├── services/   # router assembly and middleware
//! └── utils/      # logging, validation
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod db;
pub mod orders;
pub mod report;
pub mod services;
pub mod utils;
pub mod views;

// Re-export public types
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use db::DbService;
pub use orders::{OrderError, OrderService, TransitionPolicy};
pub use services::https::{build_app, build_router};
pub use utils::logger::init_logger;
pub use utils::{AppError, AppResult};

/// Load `.env` if present
pub fn setup_environment() {
    if let Ok(path) = dotenv::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env");
    }
}
