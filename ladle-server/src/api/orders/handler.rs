//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use surrealdb::RecordId;

use shared::client::{CreateOrderRequest, OrderView, UpdateOrderStatusRequest};
use shared::role::Role;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::OrderRepository;
use crate::orders::OrderLifecycle;
use crate::utils::{AppError, AppResponse, AppResult, ok};

/// Roles allowed to open an order. The kitchen reads and advances orders
/// but never creates them.
const CREATE_ROLES: &[Role] = &[Role::Owner, Role::Manager, Role::Waiter];

/// List all orders
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<OrderView>>>> {
    let repo = OrderRepository::new(state.get_db());
    let orders = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(ok(orders
        .into_iter()
        .map(|o| o.into_view())
        .collect::<Vec<_>>()))
}

/// Get order by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<OrderView>>> {
    let repo = OrderRepository::new(state.get_db());
    let order = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;
    Ok(ok(order.into_view()))
}

/// Create a new order
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<AppResponse<OrderView>>> {
    if !CREATE_ROLES.contains(&user.role) {
        return Err(AppError::Forbidden(format!(
            "Role {} may not create orders",
            user.role
        )));
    }

    let created_by: Option<RecordId> = user.id.parse().ok();
    let lifecycle = OrderLifecycle::new(state.get_db());
    let order = lifecycle.create(payload, created_by).await?;
    Ok(ok(order.into_view()))
}

/// Request a status transition
pub async fn update_status(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<AppResponse<OrderView>>> {
    let lifecycle = OrderLifecycle::new(state.get_db());
    let order = lifecycle.transition(&id, payload.status, user.role).await?;
    Ok(ok(order.into_view()))
}
