//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use crate::db::repository::MenuItemRepository;
use crate::utils::{AppError, AppResponse, AppResult, ok};

/// List all menu items
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<MenuItem>>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let items = repo
        .find_all()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(ok(items))
}

/// Get menu item by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<MenuItem>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let item = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found(format!("Menu item {} not found", id)))?;
    Ok(ok(item))
}

/// Create a new menu item
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<AppResponse<MenuItem>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let item = repo.create(payload).await?;
    Ok(ok(item))
}

/// Update a menu item
///
/// Historical orders are unaffected: they carry their own name/price
/// snapshots.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<AppResponse<MenuItem>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let item = repo.update(&id, payload).await?;
    Ok(ok(item))
}

/// Availability toggle payload
#[derive(Debug, Deserialize)]
pub struct AvailabilityRequest {
    pub is_available: bool,
}

/// Toggle a menu item's availability
pub async fn set_availability(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<AvailabilityRequest>,
) -> AppResult<Json<AppResponse<MenuItem>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let item = repo.set_availability(&id, payload.is_available).await?;
    Ok(ok(item))
}

/// Delete a menu item
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<bool>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let result = repo.delete(&id).await?;
    Ok(ok(result))
}
