//! Order service
//!
//! Prices come from the catalog only. An order is validated completely before
//! anything is written, then the order row and its lines are inserted in one
//! transaction.

use std::sync::Arc;

use rust_decimal::Decimal;
use shared::models::{MenuCatalog, Order, OrderStatus};
use shared::request::OrderItemRequest;
use shared::response::QueuePosition;
use shared::types::OrderId;
use shared::util::now_millis;

use super::error::{OrderError, OrderResult};
use super::money::{MAX_QUANTITY, line_total, round_money};
use super::status::TransitionPolicy;
use crate::db::repository::{NewLineItem, OrderRepository, StatusUpdate};
use crate::utils::validation::{MAX_CUSTOMER_NAME_LEN, TextError, required_text};

/// Every order with the revenue total
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Newest first
    pub orders: Vec<Order>,
    /// Sum of `total_amount` over orders that are not Cancelled
    pub grand_total: Decimal,
}

impl Report {
    pub fn from_orders(orders: Vec<Order>) -> Self {
        let grand_total = orders
            .iter()
            .filter(|o| o.status.counts_towards_revenue())
            .map(|o| o.total_amount)
            .sum();
        Self {
            orders,
            grand_total,
        }
    }
}

#[derive(Clone, Debug)]
pub struct OrderService {
    repo: OrderRepository,
    catalog: Arc<MenuCatalog>,
    policy: TransitionPolicy,
}

impl OrderService {
    pub fn new(repo: OrderRepository, catalog: Arc<MenuCatalog>, policy: TransitionPolicy) -> Self {
        Self {
            repo,
            catalog,
            policy,
        }
    }

    /// Validate, price and persist a new order; returns its id
    pub async fn submit_order(
        &self,
        customer_name: &str,
        items: &[OrderItemRequest],
    ) -> OrderResult<OrderId> {
        let customer_name = match required_text(customer_name, MAX_CUSTOMER_NAME_LEN) {
            Ok(name) => name,
            Err(TextError::Empty) => return Err(OrderError::MissingCustomerName),
            Err(TextError::TooLong { len, max }) => {
                return Err(OrderError::CustomerNameTooLong { len, max });
            }
        };
        if items.is_empty() {
            return Err(OrderError::NoItems);
        }

        let lines = self.price_items(items)?;
        let total = round_money(
            lines
                .iter()
                .map(|l| line_total(l.unit_price, l.quantity))
                .sum(),
        );

        let order_id = self
            .repo
            .insert_with_items(
                customer_name,
                now_millis(),
                total,
                OrderStatus::Pending,
                &lines,
            )
            .await?;

        tracing::info!(
            order_id,
            customer = %customer_name,
            items = lines.len(),
            total = %total,
            "Order created"
        );
        Ok(order_id)
    }

    /// Resolve every requested line against the catalog
    fn price_items(&self, items: &[OrderItemRequest]) -> OrderResult<Vec<NewLineItem>> {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let Some(unit_price) = self.catalog.price_of(&item.name) else {
                    tracing::warn!(item = %item.name, quantity = item.quantity, "Unknown menu item in order");
                    return Err(OrderError::UnknownItem {
                        index,
                        name: item.name.clone(),
                    });
                };
                if item.quantity <= 0 || item.quantity > MAX_QUANTITY {
                    tracing::warn!(item = %item.name, quantity = item.quantity, "Invalid quantity in order");
                    return Err(OrderError::InvalidQuantity {
                        index,
                        name: item.name.clone(),
                        quantity: item.quantity,
                    });
                }
                Ok(NewLineItem {
                    item_name: item.name.clone(),
                    quantity: item.quantity,
                    unit_price,
                })
            })
            .collect()
    }

    /// Pending and in-preparation orders, oldest first
    pub async fn list_active_orders(&self) -> OrderResult<Vec<Order>> {
        Ok(self.repo.find_by_statuses(&OrderStatus::ACTIVE).await?)
    }

    /// Set a new status; the label is validated before the order is looked up
    pub async fn update_status(&self, order_id: OrderId, new_status: &str) -> OrderResult<Order> {
        let status = new_status.parse::<OrderStatus>().map_err(|_| {
            tracing::warn!(order_id, status = %new_status, "Invalid status requested");
            OrderError::InvalidStatus(new_status.to_string())
        })?;
        self.set_status(order_id, status).await
    }

    /// Typed variant of [`Self::update_status`]
    pub async fn set_status(&self, order_id: OrderId, status: OrderStatus) -> OrderResult<Order> {
        let policy = self.policy;
        let outcome = self
            .repo
            .update_status(order_id, status, |current| policy.allows(current, status))
            .await?;

        match outcome {
            StatusUpdate::NotFound => return Err(OrderError::NotFound(order_id)),
            StatusUpdate::Rejected { current } => {
                tracing::warn!(order_id, from = %current, to = %status, "Status change rejected");
                return Err(OrderError::TransitionNotAllowed {
                    from: current,
                    to: status,
                });
            }
            StatusUpdate::Updated { previous } => {
                tracing::info!(order_id, from = %previous, to = %status, "Order status updated");
            }
        }

        self.get_order(order_id).await
    }

    /// Single order with its lines
    pub async fn get_order(&self, order_id: OrderId) -> OrderResult<Order> {
        self.repo
            .find_by_id(order_id)
            .await?
            .ok_or(OrderError::NotFound(order_id))
    }

    /// Every order, newest first, with the non-cancelled revenue total
    pub async fn generate_report(&self) -> OrderResult<Report> {
        let orders = self.repo.find_all().await?;
        Ok(Report::from_orders(orders))
    }

    /// 1-based place of an order in the kitchen queue
    pub async fn queue_position(&self, order_id: OrderId) -> OrderResult<QueuePosition> {
        let queue = self.list_active_orders().await?;
        let posicao = queue.iter().position(|o| o.id == order_id).map(|i| i + 1);
        if posicao.is_none() {
            // Distinguish "already served" from "never existed"
            self.get_order(order_id).await?;
        }
        Ok(QueuePosition {
            id: order_id,
            posicao,
            total_fila: queue.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::db::DbService;

    async fn service(policy: TransitionPolicy) -> OrderService {
        let db = DbService::open_in_memory().await.unwrap();
        OrderService::new(
            OrderRepository::new(db.pool),
            Arc::new(catalog::builtin()),
            policy,
        )
    }

    fn item(name: &str, quantity: i64) -> OrderItemRequest {
        OrderItemRequest::new(name, quantity)
    }

    #[tokio::test]
    async fn test_submit_prices_from_catalog() {
        let svc = service(TransitionPolicy::default()).await;
        let id = svc.submit_order("Ana", &[item("Pizza", 2)]).await.unwrap();

        let order = svc.get_order(id).await.unwrap();
        assert_eq!(order.total_amount, Decimal::new(1800, 2));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].item_name, "Pizza");
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.items[0].unit_price, Decimal::new(900, 2));
    }

    #[tokio::test]
    async fn test_total_is_sum_of_lines() {
        let svc = service(TransitionPolicy::default()).await;
        let id = svc
            .submit_order(
                "Carla",
                &[
                    item("Leite Puro 50 ml", 3),
                    item("Cuscuz Puro", 1),
                    item("Self Service", 1),
                ],
            )
            .await
            .unwrap();

        let order = svc.get_order(id).await.unwrap();
        // 3 * 2.60 + 3.75 + 42.99
        assert_eq!(order.total_amount, Decimal::new(5454, 2));
        assert_eq!(order.items_total(), order.total_amount);
    }

    #[tokio::test]
    async fn test_customer_name_is_trimmed() {
        let svc = service(TransitionPolicy::default()).await;
        let id = svc.submit_order("  Ana  ", &[item("Fruta", 1)]).await.unwrap();
        assert_eq!(svc.get_order(id).await.unwrap().customer_name, "Ana");
    }

    #[tokio::test]
    async fn test_rejections_persist_nothing() {
        let svc = service(TransitionPolicy::default()).await;

        let err = svc.submit_order("", &[item("Pizza", 1)]).await.unwrap_err();
        assert!(matches!(err, OrderError::MissingCustomerName));

        let err = svc.submit_order("   ", &[item("Pizza", 1)]).await.unwrap_err();
        assert!(matches!(err, OrderError::MissingCustomerName));

        let err = svc.submit_order("Ana", &[]).await.unwrap_err();
        assert!(matches!(err, OrderError::NoItems));

        let err = svc
            .submit_order("Bob", &[item("Unicorn Steak", 1)])
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::UnknownItem { index: 0, .. }));

        let err = svc
            .submit_order("Bob", &[item("Pizza", 1), item("Pizza", 0)])
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidQuantity { index: 1, quantity: 0, .. }));

        let err = svc.submit_order("Bob", &[item("Pizza", -3)]).await.unwrap_err();
        assert!(matches!(err, OrderError::InvalidQuantity { .. }));

        let err = svc
            .submit_order("Bob", &[item("Pizza", MAX_QUANTITY + 1)])
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidQuantity { .. }));

        let long_name = "x".repeat(MAX_CUSTOMER_NAME_LEN + 1);
        let err = svc.submit_order(&long_name, &[item("Pizza", 1)]).await.unwrap_err();
        assert!(matches!(err, OrderError::CustomerNameTooLong { .. }));

        assert_eq!(svc.repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_item_names_match_exactly() {
        let svc = service(TransitionPolicy::default()).await;
        let err = svc.submit_order("Ana", &[item("pizza", 1)]).await.unwrap_err();
        assert!(matches!(err, OrderError::UnknownItem { .. }));
    }

    #[tokio::test]
    async fn test_active_orders_exclude_ready_and_cancelled() {
        let svc = service(TransitionPolicy::default()).await;
        let a = svc.submit_order("A", &[item("Pizza", 1)]).await.unwrap();
        let b = svc.submit_order("B", &[item("Pizza", 1)]).await.unwrap();
        let c = svc.submit_order("C", &[item("Pizza", 1)]).await.unwrap();
        let d = svc.submit_order("D", &[item("Pizza", 1)]).await.unwrap();

        svc.update_status(a, "Pronto").await.unwrap();
        svc.update_status(b, "Cancelado").await.unwrap();
        svc.update_status(d, "Em Preparo").await.unwrap();

        let active = svc.list_active_orders().await.unwrap();
        let ids: Vec<_> = active.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![c, d]);
        assert!(active.iter().all(|o| o.is_active()));
        assert!(active.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }

    #[tokio::test]
    async fn test_invalid_status_keeps_previous() {
        let svc = service(TransitionPolicy::default()).await;
        let id = svc.submit_order("Ana", &[item("Pizza", 1)]).await.unwrap();
        svc.update_status(id, "Em Preparo").await.unwrap();

        let err = svc.update_status(id, "Voando").await.unwrap_err();
        assert!(matches!(err, OrderError::InvalidStatus(s) if s == "Voando"));
        assert_eq!(svc.get_order(id).await.unwrap().status, OrderStatus::InPreparation);
    }

    #[tokio::test]
    async fn test_status_checked_before_lookup() {
        let svc = service(TransitionPolicy::default()).await;
        let err = svc.update_status(404, "Voando").await.unwrap_err();
        assert!(matches!(err, OrderError::InvalidStatus(_)));

        let err = svc.update_status(404, "Pronto").await.unwrap_err();
        assert!(matches!(err, OrderError::NotFound(404)));
    }

    #[tokio::test]
    async fn test_update_status_returns_updated_order() {
        let svc = service(TransitionPolicy::default()).await;
        let id = svc.submit_order("Ana", &[item("Pizza", 1)]).await.unwrap();
        let order = svc.update_status(id, "Ready").await.unwrap();
        assert_eq!(order.status, OrderStatus::Ready);
        assert_eq!(order.id, id);

        // Unrestricted policy lets the kitchen reopen it
        let order = svc.update_status(id, "Pendente").await.unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_strict_policy_rejects_reopening() {
        let svc = service(TransitionPolicy::Strict).await;
        let id = svc.submit_order("Ana", &[item("Pizza", 1)]).await.unwrap();
        svc.update_status(id, "Em Preparo").await.unwrap();
        svc.update_status(id, "Pronto").await.unwrap();

        let err = svc.update_status(id, "Pendente").await.unwrap_err();
        assert!(matches!(
            err,
            OrderError::TransitionNotAllowed {
                from: OrderStatus::Ready,
                to: OrderStatus::Pending
            }
        ));
        assert_eq!(svc.get_order(id).await.unwrap().status, OrderStatus::Ready);

        // Re-applying the current status is a no-op
        svc.update_status(id, "Pronto").await.unwrap();
    }

    #[tokio::test]
    async fn test_strict_policy_cancels_ready_order() {
        let svc = service(TransitionPolicy::Strict).await;
        let id = svc.submit_order("Ana", &[item("Pizza", 1)]).await.unwrap();
        svc.update_status(id, "Em Preparo").await.unwrap();
        svc.update_status(id, "Pronto").await.unwrap();

        let order = svc.update_status(id, "Cancelado").await.unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);

        let err = svc.update_status(id, "Pendente").await.unwrap_err();
        assert!(matches!(
            err,
            OrderError::TransitionNotAllowed {
                from: OrderStatus::Cancelled,
                to: OrderStatus::Pending
            }
        ));
    }

    #[tokio::test]
    async fn test_strict_policy_rejects_skipping_preparation() {
        let svc = service(TransitionPolicy::Strict).await;
        let id = svc.submit_order("Ana", &[item("Pizza", 1)]).await.unwrap();

        let err = svc.update_status(id, "Pronto").await.unwrap_err();
        assert!(matches!(err, OrderError::TransitionNotAllowed { .. }));
        assert_eq!(svc.get_order(id).await.unwrap().status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_report_totals_skip_cancelled() {
        let svc = service(TransitionPolicy::default()).await;
        let a = svc.submit_order("Ana", &[item("Pizza", 2)]).await.unwrap();
        let b = svc.submit_order("Bob", &[item("Omelete Simples", 1)]).await.unwrap();
        let c = svc.submit_order("Cid", &[item("Fruta", 3)]).await.unwrap();
        svc.update_status(a, "Pronto").await.unwrap();
        svc.update_status(b, "Cancelado").await.unwrap();

        let report = svc.generate_report().await.unwrap();
        let ids: Vec<_> = report.orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![c, b, a]);
        // 18.00 + 3.00, the cancelled 12.00 is listed but not counted
        assert_eq!(report.grand_total, Decimal::new(2100, 2));
    }

    #[tokio::test]
    async fn test_queue_position() {
        let svc = service(TransitionPolicy::default()).await;
        let a = svc.submit_order("A", &[item("Pizza", 1)]).await.unwrap();
        let b = svc.submit_order("B", &[item("Pizza", 1)]).await.unwrap();

        let pos = svc.queue_position(b).await.unwrap();
        assert_eq!(pos.posicao, Some(2));
        assert_eq!(pos.total_fila, 2);

        svc.update_status(a, "Pronto").await.unwrap();
        assert_eq!(svc.queue_position(b).await.unwrap().posicao, Some(1));

        let served = svc.queue_position(a).await.unwrap();
        assert_eq!(served.posicao, None);
        assert_eq!(served.total_fila, 1);

        assert!(matches!(
            svc.queue_position(999).await,
            Err(OrderError::NotFound(999))
        ));
    }
}
