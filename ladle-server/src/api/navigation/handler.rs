//! Navigation API Handlers

use axum::Json;
use serde::Serialize;

use shared::navigation::navigation_for;

use crate::auth::CurrentUser;
use crate::utils::{AppResponse, ok};

/// One navigation entry as sent to the client
#[derive(Debug, Serialize)]
pub struct NavigationEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub path: &'static str,
}

/// List navigation entries for the caller's role
pub async fn list(user: CurrentUser) -> Json<AppResponse<Vec<NavigationEntry>>> {
    let entries: Vec<NavigationEntry> = navigation_for(user.role)
        .into_iter()
        .map(|item| NavigationEntry {
            key: item.key,
            label: item.label,
            path: item.path,
        })
        .collect();
    ok(entries)
}
