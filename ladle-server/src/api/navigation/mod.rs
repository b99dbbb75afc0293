//! Navigation API Module
//!
//! Returns the sidebar entries visible to the caller's role. Filtering
//! happens server-side so every dashboard renders from the same table.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Navigation router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/navigation", get(handler::list))
}
