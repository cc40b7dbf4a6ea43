use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use shared::error::AppResult;
use shared::response::{QueueEntry, QueuePosition};

use crate::api::order_id;
use crate::core::ServerState;

/// Active orders (`id`, `status`), oldest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<QueueEntry>>> {
    let queue = state
        .orders
        .list_active_orders()
        .await?
        .into_iter()
        .map(|order| QueueEntry {
            id: order.id,
            status: order.status,
        })
        .collect();
    Ok(Json(queue))
}

pub async fn position(
    State(state): State<ServerState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<QueuePosition>> {
    let id = order_id(path)?;
    Ok(Json(state.orders.queue_position(id).await?))
}
