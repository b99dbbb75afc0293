//! Authentication Handlers
//!
//! Handles login and current-user lookup

use std::time::Duration;

use axum::{Json, extract::State};

use shared::client::{LoginRequest, LoginResponse, UserInfo};
use shared::permissions::capabilities_of;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::EmployeeRepository;
use crate::security_log;
use crate::utils::{AppError, AppResponse, AppResult, ok};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login handler
///
/// Authenticates user credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AppResponse<LoginResponse>>> {
    let repo = EmployeeRepository::new(state.get_db());
    let employee = repo
        .find_by_username(&req.username)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Unified error message to prevent username enumeration
    let employee = match employee {
        Some(e) => {
            if !e.is_active {
                security_log!("WARN", "login_disabled_account", username = req.username.clone());
                return Err(AppError::Forbidden("Account has been disabled".to_string()));
            }

            let password_valid = e
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                security_log!("WARN", "login_failed", username = req.username.clone());
                return Err(AppError::invalid_credentials());
            }

            e
        }
        None => {
            security_log!("WARN", "login_unknown_user", username = req.username.clone());
            return Err(AppError::invalid_credentials());
        }
    };

    let id = employee
        .id
        .as_ref()
        .map(ToString::to_string)
        .ok_or_else(|| AppError::internal("Stored employee has no id"))?;

    let token = state
        .get_jwt_service()
        .generate_token(&id, &employee.username, &employee.display_name, employee.role)
        .map_err(|e| AppError::internal(format!("Token generation failed: {}", e)))?;

    if let Some(rid) = &employee.id {
        repo.record_login(rid)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
    }

    tracing::info!(username = %employee.username, role = %employee.role, "Login successful");

    Ok(ok(LoginResponse {
        token,
        user: UserInfo {
            id,
            username: employee.username,
            display_name: employee.display_name,
            role: employee.role,
            capabilities: capabilities_of(employee.role)
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
        },
    }))
}

/// Current user info from the validated token
pub async fn me(user: CurrentUser) -> Json<AppResponse<UserInfo>> {
    ok(UserInfo {
        id: user.id.clone(),
        username: user.username.clone(),
        display_name: user.display_name.clone(),
        role: user.role,
        capabilities: user
            .capabilities()
            .iter()
            .map(|c| c.as_str().to_string())
            .collect(),
    })
}
