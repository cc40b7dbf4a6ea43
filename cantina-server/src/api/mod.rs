//! HTTP API
//!
//! | Path | Method | Module |
//! |------|--------|--------|
//! | /api/cardapio | GET | [`menu`] |
//! | /api/pedido | POST | [`orders`] |
//! | /api/pedido/{id} | GET | [`orders`] |
//! | /api/fila | GET | [`queue`] |
//! | /api/fila/{id} | GET | [`queue`] |
//! | /api/cozinha | GET | [`kitchen`] |
//! | /cozinha/update_status | POST | [`kitchen`] |
//! | /api/relatorio | GET | [`admin`] |
//! | /health | GET | [`health`] |

pub mod admin;
pub mod health;
pub mod kitchen;
pub mod menu;
pub mod orders;
pub mod queue;

use axum::Json;
use axum::extract::Path;
use axum::extract::rejection::{JsonRejection, PathRejection};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::types::OrderId;

/// Unwrap a JSON body, turning axum's rejection into the API error shape
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            let reason = rejection.body_text();
            tracing::warn!(reason = %reason, "Rejected request body");
            Err(AppError::new(ErrorCode::InvalidFormat).with_detail("reason", reason))
        }
    }
}

/// Unwrap a numeric `{id}` path segment
pub(crate) fn order_id(path: Result<Path<OrderId>, PathRejection>) -> AppResult<OrderId> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => Err(AppError::new(ErrorCode::InvalidRequest)
            .with_detail("reason", rejection.body_text())),
    }
}
