//! Common types for the shared crate

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Order identifier (SQLite INTEGER PRIMARY KEY)
pub type OrderId = i64;
