//! Order lifecycle service
//!
//! Orchestrates the pure lifecycle rules against the repositories: menu
//! lookups for creation, the conditional status write for transitions.

use std::collections::HashMap;

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use shared::client::CreateOrderRequest;
use shared::order::OrderStatus;
use shared::role::Role;

use super::error::OrderError;
use super::lifecycle;
use crate::db::models::Order;
use crate::db::repository::{MenuItemRepository, OrderRepository};
use crate::utils::{AppError, AppResult};

/// Order lifecycle service
#[derive(Clone)]
pub struct OrderLifecycle {
    orders: OrderRepository,
    menu: MenuItemRepository,
}

impl OrderLifecycle {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            orders: OrderRepository::new(db.clone()),
            menu: MenuItemRepository::new(db),
        }
    }

    /// Create a new order from a client request
    ///
    /// Fetches the referenced menu items and validates the request against
    /// their current state; names and prices are snapshotted into the
    /// order's lines.
    pub async fn create(
        &self,
        req: CreateOrderRequest,
        created_by: Option<RecordId>,
    ) -> AppResult<Order> {
        let mut ids: Vec<RecordId> = Vec::with_capacity(req.lines.len());
        for line in &req.lines {
            let rid: RecordId = line
                .menu_item
                .parse()
                .map_err(|_| OrderError::UnknownMenuItem(line.menu_item.clone()))?;
            if !ids.contains(&rid) {
                ids.push(rid);
            }
        }

        let menu: HashMap<RecordId, _> = self
            .menu
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .filter_map(|item| item.id.clone().map(|id| (id, item)))
            .collect();

        let order = lifecycle::build_order(
            req.table_number,
            &req.lines,
            req.customer_name,
            created_by,
            &menu,
        )?;

        let created = self.orders.create(order).await?;
        tracing::info!(
            order = %created.id.as_ref().map(ToString::to_string).unwrap_or_default(),
            table = created.table_number,
            total = %created.total,
            "Order created"
        );
        Ok(created)
    }

    /// Move an order to `requested` on behalf of `role`
    ///
    /// Legality is checked against the order's current status, then the
    /// write is keyed on that same status. A concurrent transition that
    /// commits first leaves nothing to update and surfaces as `StaleState`;
    /// the caller may refetch and retry once.
    pub async fn transition(
        &self,
        order_id: &str,
        requested: OrderStatus,
        role: Role,
    ) -> AppResult<Order> {
        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_id)))?;

        let from = order.status;
        lifecycle::validate_transition(from, requested, role)?;

        let id = order
            .id
            .ok_or_else(|| AppError::internal("Stored order has no id"))?;

        let updated = self
            .orders
            .update_status_if(&id, from, requested)
            .await?
            .ok_or(OrderError::StaleState { expected: from })?;

        tracing::info!(
            order = %id,
            from = %from,
            to = %requested,
            role = %role,
            "Order status updated"
        );
        Ok(updated)
    }

    pub fn repository(&self) -> &OrderRepository {
        &self.orders
    }
}
