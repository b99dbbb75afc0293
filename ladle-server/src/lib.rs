//! Ladle Server - 餐厅管理系统服务端
//!
//! # 架构概述
//!
//! - **认证授权** (`auth`): JWT + Argon2 认证，基于角色的权限检查
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **订单生命周期** (`orders`): 订单创建校验与状态机
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! ladle-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、权限中间件
//! ├── db/            # 数据库层（模型 + 仓储）
//! ├── orders/        # 订单生命周期
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误、日志等工具
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use orders::{OrderError, OrderLifecycle};
pub use utils::{AppError, AppResult};

/// 初始化运行环境 (dotenv, 日志目录, 日志)
///
/// 日志写入 `{WORK_DIR}/logs`，目录不存在时先创建，
/// 再由 logger 按天滚动输出文件。
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)?;
    utils::logger::init_logger_with_file(None, Some(&log_dir));

    Ok(())
}

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
