//! Unified error codes for the cantina backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 6xxx: Menu errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a plain `u16` so the kitchen and customer pages can switch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has no items
    OrderEmpty = 4007,
    /// Item quantity is not a positive number
    InvalidQuantity = 4008,
    /// Status value is not one of the known statuses
    InvalidStatus = 4009,
    /// Status change not allowed by the transition table
    StatusTransitionNotAllowed = 4010,

    // ==================== 6xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 6001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Request took longer than the configured timeout
    TimeoutError = 9004,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Default user-facing message (Portuguese, shown as-is by the web client)
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operação concluída",
            ErrorCode::Unknown => "Erro desconhecido",
            ErrorCode::ValidationFailed => "Dados inválidos.",
            ErrorCode::NotFound => "Recurso não encontrado.",
            ErrorCode::InvalidRequest => "Requisição inválida.",
            ErrorCode::InvalidFormat => "Formato inválido.",
            ErrorCode::RequiredField => "Campo obrigatório ausente.",

            ErrorCode::OrderNotFound => "Pedido não encontrado.",
            ErrorCode::OrderEmpty => "O pedido não possui itens.",
            ErrorCode::InvalidQuantity => "Item ou quantidade inválida no pedido.",
            ErrorCode::InvalidStatus => "Status inválido.",
            ErrorCode::StatusTransitionNotAllowed => "Mudança de status não permitida.",

            ErrorCode::MenuItemNotFound => "Item ou quantidade inválida no pedido.",

            ErrorCode::InternalError => "Erro interno do servidor.",
            ErrorCode::DatabaseError => "Erro ao acessar o banco de dados.",
            ErrorCode::TimeoutError => "Tempo de resposta esgotado.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4007 => Ok(ErrorCode::OrderEmpty),
            4008 => Ok(ErrorCode::InvalidQuantity),
            4009 => Ok(ErrorCode::InvalidStatus),
            4010 => Ok(ErrorCode::StatusTransitionNotAllowed),

            // Menu
            6001 => Ok(ErrorCode::MenuItemNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9004 => Ok(ErrorCode::TimeoutError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
