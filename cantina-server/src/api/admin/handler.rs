use axum::{Json, extract::State};
use shared::error::AppResult;
use shared::response::SalesReport;

use crate::core::ServerState;
use crate::report::build_sales_report;

/// Every order, newest first, with the revenue total
pub async fn report(State(state): State<ServerState>) -> AppResult<Json<SalesReport>> {
    let report = state.orders.generate_report().await?;
    Ok(Json(build_sales_report(
        &report,
        state.config.business_timezone,
    )))
}
