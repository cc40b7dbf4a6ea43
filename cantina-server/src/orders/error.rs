use shared::error::{AppError, ErrorCode};
use shared::models::OrderStatus;
use shared::types::OrderId;
use thiserror::Error;

use crate::db::repository::RepoError;

/// Order service errors
///
/// Everything except `Persistence` is caused by the request and maps to a 4xx.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Customer name is required")]
    MissingCustomerName,

    #[error("Customer name is too long ({len} chars, max {max})")]
    CustomerNameTooLong { len: usize, max: usize },

    #[error("Order has no items")]
    NoItems,

    #[error("Unknown menu item: {name}")]
    UnknownItem { index: usize, name: String },

    #[error("Invalid quantity {quantity} for {name}")]
    InvalidQuantity {
        index: usize,
        name: String,
        quantity: i64,
    },

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Order id is required")]
    MissingOrderId,

    #[error("Status change not allowed: {from} -> {to}")]
    TransitionNotAllowed { from: OrderStatus, to: OrderStatus },

    #[error("Order not found: {0}")]
    NotFound(OrderId),

    #[error("Persistence error: {0}")]
    Persistence(#[from] RepoError),
}

impl OrderError {
    /// Request-caused error (nothing was written)
    pub fn is_validation(&self) -> bool {
        !matches!(self, OrderError::NotFound(_) | OrderError::Persistence(_))
    }
}

pub type OrderResult<T> = Result<T, OrderError>;

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::MissingCustomerName => {
                AppError::new(ErrorCode::ValidationFailed).with_detail("field", "nome_cliente")
            }
            OrderError::CustomerNameTooLong { len, max } => {
                AppError::new(ErrorCode::ValidationFailed)
                    .with_detail("field", "nome_cliente")
                    .with_detail("length", len)
                    .with_detail("max", max)
            }
            OrderError::NoItems => AppError::new(ErrorCode::OrderEmpty).with_detail("field", "itens"),
            OrderError::UnknownItem { index, name } => AppError::new(ErrorCode::MenuItemNotFound)
                .with_detail("index", index)
                .with_detail("item", name),
            OrderError::InvalidQuantity {
                index,
                name,
                quantity,
            } => AppError::new(ErrorCode::InvalidQuantity)
                .with_detail("index", index)
                .with_detail("item", name)
                .with_detail("quantidade", quantity),
            OrderError::InvalidStatus(status) => {
                AppError::new(ErrorCode::InvalidStatus).with_detail("status", status)
            }
            OrderError::MissingOrderId => {
                AppError::new(ErrorCode::RequiredField).with_detail("field", "pedido_id")
            }
            OrderError::TransitionNotAllowed { from, to } => {
                AppError::new(ErrorCode::StatusTransitionNotAllowed)
                    .with_detail("from", from.as_str())
                    .with_detail("to", to.as_str())
            }
            OrderError::NotFound(id) => AppError::new(ErrorCode::OrderNotFound).with_detail("id", id),
            OrderError::Persistence(e) => {
                // Detail goes to the log only
                tracing::error!(error = %e, "Order persistence failed");
                AppError::new(ErrorCode::InternalError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_validation_errors_map_to_bad_request() {
        let cases = [
            OrderError::MissingCustomerName,
            OrderError::NoItems,
            OrderError::UnknownItem {
                index: 0,
                name: "Unicorn Steak".into(),
            },
            OrderError::InvalidQuantity {
                index: 1,
                name: "Pizza".into(),
                quantity: 0,
            },
            OrderError::InvalidStatus("Voando".into()),
            OrderError::TransitionNotAllowed {
                from: OrderStatus::Ready,
                to: OrderStatus::Pending,
            },
        ];
        for err in cases {
            assert!(err.is_validation());
            let app: AppError = err.into();
            assert_eq!(app.http_status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let app: AppError = OrderError::NotFound(42).into();
        assert_eq!(app.code, ErrorCode::OrderNotFound);
        assert_eq!(app.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(app.message, "Pedido não encontrado.");
    }

    #[test]
    fn test_persistence_detail_is_not_leaked() {
        let err = OrderError::Persistence(RepoError::Database("disk I/O error".into()));
        assert!(!err.is_validation());
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::InternalError);
        assert_eq!(app.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!app.message.contains("disk"));
        assert!(app.details.is_none());
    }

    #[test]
    fn test_unknown_item_carries_item_name() {
        let app: AppError = OrderError::UnknownItem {
            index: 0,
            name: "Unicorn Steak".into(),
        }
        .into();
        assert_eq!(app.code, ErrorCode::MenuItemNotFound);
        assert_eq!(app.details.unwrap()["item"], "Unicorn Steak");
    }
}
