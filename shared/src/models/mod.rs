//! Data models
//!
//! Shared between the server and its web pages (via API).
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod menu;
pub mod order;

// Re-exports
pub use menu::*;
pub use order::*;
