//! Admin API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Admin router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/relatorio", get(handler::report))
}
