use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use shared::error::{ApiResponse, AppResult};
use shared::models::OrderStatus;
use shared::request::UpdateStatusRequest;
use shared::response::{KitchenTicket, StatusUpdated};

use crate::api::json_body;
use crate::core::ServerState;
use crate::orders::OrderError;
use crate::report::build_kitchen_tickets;

/// Active orders with their items, oldest first
pub async fn tickets(State(state): State<ServerState>) -> AppResult<Json<Vec<KitchenTicket>>> {
    let orders = state.orders.list_active_orders().await?;
    Ok(Json(build_kitchen_tickets(
        &orders,
        state.config.business_timezone,
    )))
}

/// Move an order to another status
pub async fn update_status(
    State(state): State<ServerState>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> AppResult<ApiResponse<StatusUpdated>> {
    let req = json_body(payload)?;
    let status = req.status.unwrap_or_default();

    let Some(id) = req.order_id else {
        // The label is still validated first
        status
            .parse::<OrderStatus>()
            .map_err(|_| OrderError::InvalidStatus(status.clone()))?;
        return Err(OrderError::MissingOrderId.into());
    };

    let order = state.orders.update_status(id, &status).await?;
    Ok(ApiResponse::success_with_message(
        "Status atualizado.",
        StatusUpdated {
            id: order.id,
            status: order.status,
        },
    ))
}
