//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
};
use shared::error::{ApiResponse, AppResult};
use shared::models::Order;
use shared::request::SubmitOrderRequest;
use shared::response::OrderCreated;

use crate::api::{json_body, order_id};
use crate::core::ServerState;

/// Place a new order
pub async fn submit(
    State(state): State<ServerState>,
    payload: Result<Json<SubmitOrderRequest>, JsonRejection>,
) -> AppResult<ApiResponse<OrderCreated>> {
    let req = json_body(payload)?;
    let id_pedido = state
        .orders
        .submit_order(&req.customer_name, &req.items)
        .await?;
    Ok(ApiResponse::success_with_message(
        "Pedido recebido!",
        OrderCreated { id_pedido },
    ))
}

/// Get order by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Order>> {
    let id = order_id(path)?;
    Ok(Json(state.orders.get_order(id).await?))
}
