//! Menu API Module
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 | 能力 |
//! |------|------|------|------|
//! | /api/menu | GET | 菜单列表 | 登录即可 |
//! | /api/menu/{id} | GET | 菜品详情 | 登录即可 |
//! | /api/menu | POST | 创建菜品 | MANAGE_MENU |
//! | /api/menu/{id} | PUT/DELETE | 更新/删除菜品 | MANAGE_MENU |
//! | /api/menu/{id}/availability | PUT | 上/下架 | MANAGE_MENU |

mod handler;

use axum::{Router, middleware, routing::get, routing::post, routing::put};

use shared::role::Capability;

use crate::auth::require_capability;
use crate::core::ServerState;

/// Menu router
pub fn router() -> Router<ServerState> {
    // 读取路由：查看菜单是基础操作，登录即可
    let read_routes = Router::new()
        .route("/api/menu", get(handler::list))
        .route("/api/menu/{id}", get(handler::get_by_id));

    let manage_routes = Router::new()
        .route("/api/menu", post(handler::create))
        .route(
            "/api/menu/{id}",
            put(handler::update).delete(handler::delete),
        )
        .route("/api/menu/{id}/availability", put(handler::set_availability))
        .layer(middleware::from_fn(require_capability(&[
            Capability::ManageMenu,
        ])));

    read_routes.merge(manage_routes)
}
