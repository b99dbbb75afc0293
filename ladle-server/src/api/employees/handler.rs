//! Employee API Handlers
//!
//! All handlers run behind the `MANAGE_STAFF` capability gate; mutations
//! additionally enforce the fixed role hierarchy. A manager holds the
//! capability but still may not touch owner or manager accounts.

use axum::{
    Json,
    extract::{Path, State},
};

use shared::permissions::can_manage;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{EmployeeCreate, EmployeeResponse, EmployeeUpdate};
use crate::db::repository::EmployeeRepository;
use crate::security_log;
use crate::utils::{AppError, AppResponse, AppResult, ok};

/// List all employees (including deactivated)
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<Vec<EmployeeResponse>>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employees = repo
        .find_all_with_inactive()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    Ok(ok(employees
        .into_iter()
        .map(Into::into)
        .collect::<Vec<EmployeeResponse>>()))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<EmployeeResponse>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;
    Ok(ok(employee.into()))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<AppResponse<EmployeeResponse>>> {
    if !can_manage(user.role, payload.role) {
        security_log!(
            "WARN",
            "staff_hierarchy_denied",
            acting = user.role.to_string(),
            target = payload.role.to_string()
        );
        return Err(AppError::Forbidden(format!(
            "Role {} may not manage {} accounts",
            user.role, payload.role
        )));
    }

    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo.create(payload).await?;
    Ok(ok(employee.into()))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<AppResponse<EmployeeResponse>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let target = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;

    // Hierarchy applies to the account's current role and, when the role
    // itself changes, to the new role too
    if !can_manage(user.role, target.role)
        || payload.role.is_some_and(|new_role| !can_manage(user.role, new_role))
    {
        return Err(AppError::Forbidden(format!(
            "Role {} may not manage this account",
            user.role
        )));
    }

    let employee = repo.update(&id, payload).await?;
    Ok(ok(employee.into()))
}

/// Deactivate an employee (soft delete)
pub async fn deactivate(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<EmployeeResponse>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let target = repo
        .find_by_id(&id)
        .await
        .map_err(|e| AppError::database(e.to_string()))?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;

    if !can_manage(user.role, target.role) {
        return Err(AppError::Forbidden(format!(
            "Role {} may not manage this account",
            user.role
        )));
    }

    let employee = repo.deactivate(&id).await?;
    Ok(ok(employee.into()))
}
