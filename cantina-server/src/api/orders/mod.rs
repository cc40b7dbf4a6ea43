//! Order API Module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/pedido", post(handler::submit))
        .route("/api/pedido/{id}", get(handler::get_by_id))
}
