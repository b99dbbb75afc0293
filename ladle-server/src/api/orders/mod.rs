//! Orders API Module
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 | 能力 |
//! |------|------|------|------|
//! | /api/orders | GET | 订单列表 | VIEW_ORDERS |
//! | /api/orders/{id} | GET | 订单详情 | VIEW_ORDERS |
//! | /api/orders | POST | 创建订单 | VIEW_ORDERS (+ 角色限制) |
//! | /api/orders/{id}/status | PUT | 状态转换 | UPDATE_ORDER_STATUS |

mod handler;

use axum::{Router, middleware, routing::get, routing::put};

use shared::role::Capability;

use crate::auth::require_capability;
use crate::core::ServerState;

/// Orders router
pub fn router() -> Router<ServerState> {
    let view_routes = Router::new()
        .route("/api/orders", get(handler::list).post(handler::create))
        .route("/api/orders/{id}", get(handler::get_by_id))
        .layer(middleware::from_fn(require_capability(&[
            Capability::ViewOrders,
        ])));

    // Status transitions carry their own per-role rules on top of the
    // capability gate (see the transition table)
    let status_routes = Router::new()
        .route("/api/orders/{id}/status", put(handler::update_status))
        .layer(middleware::from_fn(require_capability(&[
            Capability::UpdateOrderStatus,
        ])));

    view_routes.merge(status_routes)
}
