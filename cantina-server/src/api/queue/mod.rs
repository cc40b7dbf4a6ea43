//! Queue API Module
//!
//! The customer page polls these to show its place in line.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Queue router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/fila", get(handler::list))
        .route("/api/fila/{id}", get(handler::position))
}
