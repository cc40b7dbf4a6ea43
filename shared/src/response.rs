//! Response payloads for the cantina API
//!
//! Payloads that travel inside [`ApiResponse`](crate::error::ApiResponse) are
//! flattened next to `success`/`mensagem`; list endpoints return bare arrays.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::OrderStatus;
use crate::types::OrderId;

/// `POST /api/pedido` success payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreated {
    pub id_pedido: OrderId,
}

/// `POST /cozinha/update_status` success payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdated {
    pub id: OrderId,
    pub status: OrderStatus,
}

/// `GET /api/fila` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub id: OrderId,
    pub status: OrderStatus,
}

/// `GET /api/fila/{id}`: 1-based place in line, `None` once the order left the queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuePosition {
    pub id: OrderId,
    pub posicao: Option<usize>,
    pub total_fila: usize,
}

/// Item line on a kitchen ticket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenTicketItem {
    pub nome: String,
    pub qtd: i64,
}

/// Active order as shown on the kitchen screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenTicket {
    pub id: OrderId,
    pub nome_cliente: String,
    /// `HH:MM:SS` in the business time zone
    pub horario: String,
    pub status: OrderStatus,
    pub detalhes: Vec<KitchenTicketItem>,
}

/// One row of the admin report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub id: OrderId,
    pub nome_cliente: String,
    /// `DD/MM/YYYY HH:MM:SS` in the business time zone
    pub horario: String,
    /// Formatted currency, e.g. `R$ 18,00`
    pub valor_total: String,
    pub status: OrderStatus,
    /// `"2x Pizza"` style lines
    pub detalhes: Vec<String>,
}

/// Admin report: every order newest first plus the revenue total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    pub pedidos: Vec<ReportEntry>,
    /// Formatted grand total (Cancelled orders excluded)
    pub conta_final: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub database: String,
}
