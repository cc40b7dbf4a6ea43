//! Order Model
//!
//! JSON field names follow the canteen web client (`nome_cliente`,
//! `valor_total`, `detalhes`, ...). Money is `Decimal` in memory and a float on
//! the wire.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::Timestamp;

/// Order lifecycle status
///
/// Happy path: `Pending → InPreparation → Ready`; `Cancelled` from anywhere.
/// Wire labels are the Portuguese names the kitchen page posts; the English
/// variant names are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Pendente", alias = "Pending")]
    Pending,
    #[serde(rename = "Em Preparo", alias = "InPreparation")]
    InPreparation,
    #[serde(rename = "Pronto", alias = "Ready")]
    Ready,
    #[serde(rename = "Cancelado", alias = "Cancelled")]
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::InPreparation,
        OrderStatus::Ready,
        OrderStatus::Cancelled,
    ];

    /// Statuses that keep an order in the kitchen queue
    pub const ACTIVE: [OrderStatus; 2] = [OrderStatus::Pending, OrderStatus::InPreparation];

    /// Wire / storage label
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendente",
            OrderStatus::InPreparation => "Em Preparo",
            OrderStatus::Ready => "Pronto",
            OrderStatus::Cancelled => "Cancelado",
        }
    }

    const fn alias(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InPreparation => "InPreparation",
            OrderStatus::Ready => "Ready",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Active orders are still waiting in the kitchen queue
    pub const fn is_active(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::InPreparation)
    }

    /// Cancelled orders do not count towards revenue
    pub const fn counts_towards_revenue(&self) -> bool {
        !matches!(self, OrderStatus::Cancelled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized status label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s || status.alias() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// One ordered item with its price snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: i64,
    #[serde(rename = "pedido_id")]
    pub order_id: i64,
    #[serde(rename = "nome")]
    pub item_name: String,
    #[serde(rename = "quantidade")]
    pub quantity: i64,
    /// Catalog price captured when the order was placed
    #[serde(rename = "preco_unitario", with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
}

impl LineItem {
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Customer order with its line items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(rename = "nome_cliente")]
    pub customer_name: String,
    /// Unix millis
    #[serde(rename = "horario_pedido")]
    pub created_at: Timestamp,
    #[serde(rename = "valor_total", with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub status: OrderStatus,
    #[serde(rename = "detalhes", default)]
    pub items: Vec<LineItem>,
}

impl Order {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Sum of line subtotals (equals `total_amount` for every persisted order)
    pub fn items_total(&self) -> Decimal {
        self.items.iter().map(LineItem::subtotal).sum()
    }
}
