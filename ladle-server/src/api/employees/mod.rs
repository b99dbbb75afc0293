//! Employee API Module
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 | 能力 |
//! |------|------|------|------|
//! | /api/employees | GET | 员工列表 | MANAGE_STAFF |
//! | /api/employees/{id} | GET | 员工详情 | MANAGE_STAFF |
//! | /api/employees | POST | 创建员工 | MANAGE_STAFF + 角色层级 |
//! | /api/employees/{id} | PUT | 更新员工 | MANAGE_STAFF + 角色层级 |
//! | /api/employees/{id} | DELETE | 停用员工 | MANAGE_STAFF + 角色层级 |

mod handler;

use axum::{Router, middleware, routing::get};

use shared::role::Capability;

use crate::auth::require_capability;
use crate::core::ServerState;

/// Employee router
///
/// Every route requires `MANAGE_STAFF`; the mutating handlers additionally
/// enforce the role hierarchy (`can_manage`).
pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/employees",
            get(handler::list).post(handler::create),
        )
        .route(
            "/api/employees/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::deactivate),
        )
        .layer(middleware::from_fn(require_capability(&[
            Capability::ManageStaff,
        ])))
}
