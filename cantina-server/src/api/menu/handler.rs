use axum::{Json, extract::State};
use shared::models::MenuCatalog;

use crate::core::ServerState;

/// Full menu, categories and items in display order
pub async fn get_menu(State(state): State<ServerState>) -> Json<MenuCatalog> {
    Json(state.catalog.as_ref().clone())
}
