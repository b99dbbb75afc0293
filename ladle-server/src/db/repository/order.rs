//! Order Repository
//!
//! Orders are append-and-transition only: they are created once and then
//! mutated exclusively through `update_status_if`, a conditional write
//! keyed on the expected current status. That single discipline serializes
//! concurrent transitions per order — the second writer matches zero
//! records and the caller reports the race.

use chrono::Utc;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use shared::order::OrderStatus;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Order;

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a freshly validated order
    pub async fn create(&self, order: Order) -> RepoResult<Order> {
        let created: Option<Order> = self.base.db().create("order").content(order).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Find all orders, newest first
    ///
    /// `order` is a SurrealQL keyword, so raw queries escape the table name.
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let orders: Vec<Order> = self
            .base
            .db()
            .query("SELECT * FROM `order` ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(orders)
    }

    /// Find orders currently in a given status
    pub async fn find_by_status(&self, status: OrderStatus) -> RepoResult<Vec<Order>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM `order` WHERE status = $status ORDER BY created_at")
            .bind(("status", status))
            .await?;
        let orders: Vec<Order> = result.take(0)?;
        Ok(orders)
    }

    /// Find order by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        let rid: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let order: Option<Order> = self.base.db().select(rid).await?;
        Ok(order)
    }

    /// Conditionally move an order from `from` to `to`
    ///
    /// Status and `updated_at` change in one statement, or not at all. The
    /// write only applies while the stored status still equals `from`;
    /// `Ok(None)` means another writer got there first.
    pub async fn update_status_if(
        &self,
        id: &RecordId,
        from: OrderStatus,
        to: OrderStatus,
    ) -> RepoResult<Option<Order>> {
        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $id SET
                    status = $to,
                    updated_at = $now
                WHERE status = $from
                RETURN AFTER"#,
            )
            .bind(("id", id.clone()))
            .bind(("from", from))
            .bind(("to", to))
            .bind(("now", Utc::now()))
            .await?;

        let updated: Vec<Order> = result.take(0)?;
        Ok(updated.into_iter().next())
    }
}
