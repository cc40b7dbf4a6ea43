//! Order Repository
//!
//! `pedido` rows own their `detalhe_pedido` lines. Writes that touch more than
//! one row run inside a single transaction; dropping the transaction before
//! `commit` rolls everything back.

use std::collections::HashMap;

use shared::models::{LineItem, Order, OrderStatus};
use shared::types::{OrderId, Timestamp};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

use super::{RepoError, RepoResult};
use crate::orders::money::{from_cents, to_cents};

/// SQLite bound-parameter budget per `IN (...)` query
const IN_CHUNK: usize = 500;

#[derive(Debug, FromRow)]
struct OrderRow {
    id: i64,
    nome_cliente: String,
    horario_pedido: i64,
    valor_total: i64,
    status: String,
}

#[derive(Debug, FromRow)]
struct LineItemRow {
    id: i64,
    pedido_id: i64,
    nome_item: String,
    quantidade: i64,
    preco_unitario: i64,
}

impl OrderRow {
    fn into_order(self) -> RepoResult<Order> {
        let status = self
            .status
            .parse::<OrderStatus>()
            .map_err(|e| RepoError::Database(format!("order {}: {e}", self.id)))?;
        Ok(Order {
            id: self.id,
            customer_name: self.nome_cliente,
            created_at: self.horario_pedido,
            total_amount: from_cents(self.valor_total),
            status,
            items: Vec::new(),
        })
    }
}

impl From<LineItemRow> for LineItem {
    fn from(row: LineItemRow) -> Self {
        LineItem {
            id: row.id,
            order_id: row.pedido_id,
            item_name: row.nome_item,
            quantity: row.quantidade,
            unit_price: from_cents(row.preco_unitario),
        }
    }
}

/// Line to insert together with a new order
#[derive(Debug, Clone, PartialEq)]
pub struct NewLineItem {
    pub item_name: String,
    pub quantity: i64,
    pub unit_price: rust_decimal::Decimal,
}

/// Outcome of a guarded status update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusUpdate {
    Updated { previous: OrderStatus },
    Rejected { current: OrderStatus },
    NotFound,
}

const SELECT_ORDER: &str =
    "SELECT id, nome_cliente, horario_pedido, valor_total, status FROM pedido";

#[derive(Clone, Debug)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert an order and its lines atomically, returning the new id
    pub async fn insert_with_items(
        &self,
        customer_name: &str,
        created_at: Timestamp,
        total_amount: rust_decimal::Decimal,
        status: OrderStatus,
        items: &[NewLineItem],
    ) -> RepoResult<OrderId> {
        if items.is_empty() {
            return Err(RepoError::Validation("order without items".into()));
        }
        let total_cents = cents(total_amount)?;

        let mut tx = self.pool.begin().await?;

        let (order_id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO pedido (nome_cliente, horario_pedido, valor_total, status)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(customer_name)
        .bind(created_at)
        .bind(total_cents)
        .bind(status.as_str())
        .fetch_one(&mut *tx)
        .await?;

        for item in items {
            sqlx::query(
                r#"
                INSERT INTO detalhe_pedido (pedido_id, nome_item, quantidade, preco_unitario)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(order_id)
            .bind(&item.item_name)
            .bind(item.quantity)
            .bind(cents(item.unit_price)?)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(order_id)
    }

    /// Single order with its lines
    pub async fn find_by_id(&self, id: OrderId) -> RepoResult<Option<Order>> {
        let row: Option<OrderRow> = sqlx::query_as(&format!("{SELECT_ORDER} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };
        let mut orders = vec![row.into_order()?];
        self.attach_items(&mut orders).await?;
        Ok(orders.pop())
    }

    /// Orders in the given statuses, oldest first (ties by ascending id)
    pub async fn find_by_statuses(&self, statuses: &[OrderStatus]) -> RepoResult<Vec<Order>> {
        if statuses.is_empty() {
            return Ok(Vec::new());
        }

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(SELECT_ORDER);
        qb.push(" WHERE status IN (");
        let mut sep = qb.separated(", ");
        for status in statuses {
            sep.push_bind(status.as_str());
        }
        sep.push_unseparated(") ORDER BY horario_pedido ASC, id ASC");

        let rows = qb.build_query_as::<OrderRow>().fetch_all(&self.pool).await?;
        self.load(rows).await
    }

    /// Every order, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let rows: Vec<OrderRow> = sqlx::query_as(&format!(
            "{SELECT_ORDER} ORDER BY horario_pedido DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;
        self.load(rows).await
    }

    /// Change an order's status if `allowed(current)` holds
    ///
    /// Read and write happen in one transaction so the check sees the status
    /// that gets replaced.
    pub async fn update_status(
        &self,
        id: OrderId,
        new_status: OrderStatus,
        allowed: impl FnOnce(OrderStatus) -> bool,
    ) -> RepoResult<StatusUpdate> {
        let mut tx = self.pool.begin().await?;

        let current: Option<(String,)> = sqlx::query_as("SELECT status FROM pedido WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some((current,)) = current else {
            return Ok(StatusUpdate::NotFound);
        };
        let current = current
            .parse::<OrderStatus>()
            .map_err(|e| RepoError::Database(format!("order {id}: {e}")))?;

        if !allowed(current) {
            return Ok(StatusUpdate::Rejected { current });
        }

        sqlx::query("UPDATE pedido SET status = ? WHERE id = ?")
            .bind(new_status.as_str())
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(StatusUpdate::Updated { previous: current })
    }

    /// Number of stored orders
    pub async fn count(&self) -> RepoResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pedido")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn load(&self, rows: Vec<OrderRow>) -> RepoResult<Vec<Order>> {
        let mut orders = rows
            .into_iter()
            .map(OrderRow::into_order)
            .collect::<RepoResult<Vec<_>>>()?;
        self.attach_items(&mut orders).await?;
        Ok(orders)
    }

    /// Fill `items` for each order, keeping insertion order of the lines
    async fn attach_items(&self, orders: &mut [Order]) -> RepoResult<()> {
        let mut by_order: HashMap<i64, Vec<LineItem>> = HashMap::new();

        for chunk in orders.chunks(IN_CHUNK) {
            let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
                "SELECT id, pedido_id, nome_item, quantidade, preco_unitario \
                 FROM detalhe_pedido WHERE pedido_id IN (",
            );
            let mut sep = qb.separated(", ");
            for order in chunk {
                sep.push_bind(order.id);
            }
            sep.push_unseparated(") ORDER BY pedido_id, id");

            let rows = qb.build_query_as::<LineItemRow>().fetch_all(&self.pool).await?;
            for row in rows {
                by_order.entry(row.pedido_id).or_default().push(row.into());
            }
        }

        for order in orders.iter_mut() {
            order.items = by_order.remove(&order.id).unwrap_or_default();
        }
        Ok(())
    }
}

fn cents(amount: rust_decimal::Decimal) -> RepoResult<i64> {
    to_cents(amount).ok_or_else(|| RepoError::Validation(format!("amount out of range: {amount}")))
}
