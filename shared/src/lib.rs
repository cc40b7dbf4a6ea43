//! Shared types for the cantina backend
//!
//! Domain models (menu, orders), request/response payloads, and the unified
//! error types used by the server and its web pages.

pub mod error;
pub mod models;
pub mod request;
pub mod response;
pub mod types;
pub mod util;

// Re-exports
pub use models::{LineItem, MenuCatalog, MenuCategory, MenuItem, Order, OrderStatus};
pub use serde::{Deserialize, Serialize};
