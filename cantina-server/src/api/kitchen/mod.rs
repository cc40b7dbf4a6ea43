//! Kitchen API Module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Kitchen router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/cozinha", get(handler::tickets))
        .route("/cozinha/update_status", post(handler::update_status))
}
