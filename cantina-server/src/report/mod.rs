//! Report and kitchen views
//!
//! Turns typed orders into the display rows the admin and kitchen pages use.
//! Timestamps are rendered in the business time zone.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use shared::models::Order;
use shared::response::{KitchenTicket, KitchenTicketItem, ReportEntry, SalesReport};
use shared::types::Timestamp;

use crate::orders::Report;
use crate::orders::money::format_brl;

const REPORT_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
const KITCHEN_TIME_FORMAT: &str = "%H:%M:%S";

/// Format Unix millis in `tz`; out-of-range values fall back to the epoch
pub fn format_timestamp(millis: Timestamp, tz: Tz, fmt: &str) -> String {
    let utc = DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_default();
    tz.from_utc_datetime(&utc.naive_utc()).format(fmt).to_string()
}

/// `"2x Pizza"` lines
pub fn describe_items(order: &Order) -> Vec<String> {
    order
        .items
        .iter()
        .map(|item| format!("{}x {}", item.quantity, item.item_name))
        .collect()
}

pub fn build_sales_report(report: &Report, tz: Tz) -> SalesReport {
    let pedidos = report
        .orders
        .iter()
        .map(|order| ReportEntry {
            id: order.id,
            nome_cliente: order.customer_name.clone(),
            horario: format_timestamp(order.created_at, tz, REPORT_TIME_FORMAT),
            valor_total: format_brl(order.total_amount),
            status: order.status,
            detalhes: describe_items(order),
        })
        .collect();

    SalesReport {
        pedidos,
        conta_final: format_brl(report.grand_total),
        total: report.grand_total,
    }
}

pub fn build_kitchen_tickets(orders: &[Order], tz: Tz) -> Vec<KitchenTicket> {
    orders
        .iter()
        .map(|order| KitchenTicket {
            id: order.id,
            nome_cliente: order.customer_name.clone(),
            horario: format_timestamp(order.created_at, tz, KITCHEN_TIME_FORMAT),
            status: order.status,
            detalhes: order
                .items
                .iter()
                .map(|item| KitchenTicketItem {
                    nome: item.item_name.clone(),
                    qtd: item.quantity,
                })
                .collect(),
        })
        .collect()
}
