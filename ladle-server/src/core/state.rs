use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::role::Role;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::db::models::EmployeeCreate;
use crate::db::repository::EmployeeRepository;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求 clone 的成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 初始化服务器状态：打开数据库、应用 schema、引导默认账户
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        let db_service = DbService::open(&config.work_dir).await?;
        Self::with_db(config, db_service.db).await
    }

    /// 使用内存数据库初始化（测试场景）
    pub async fn initialize_in_memory(config: &Config) -> anyhow::Result<Self> {
        let db_service = DbService::memory().await?;
        Self::with_db(config, db_service.db).await
    }

    async fn with_db(config: &Config, db: Surreal<Db>) -> anyhow::Result<Self> {
        let jwt_service = Arc::new(JwtService::new(config.jwt.clone())?);

        let state = Self {
            config: config.clone(),
            db,
            jwt_service,
        };
        state.bootstrap_owner_account().await?;
        Ok(state)
    }

    /// 获取数据库连接
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// 首次启动时创建默认 owner 账户
    ///
    /// 初始密码来自 `BOOTSTRAP_PASSWORD`，未设置时随机生成并打印到日志，
    /// 仅在员工表为空时执行。
    async fn bootstrap_owner_account(&self) -> anyhow::Result<()> {
        let repo = EmployeeRepository::new(self.db.clone());
        if repo.count().await? > 0 {
            return Ok(());
        }

        let (password, generated) = match &self.config.bootstrap_password {
            Some(p) => (p.clone(), false),
            None => (crate::auth::jwt::generate_printable_secret(16), true),
        };

        repo.create(EmployeeCreate {
            username: "owner".to_string(),
            password: password.clone(),
            display_name: Some("Owner".to_string()),
            role: Role::Owner,
        })
        .await?;

        if generated {
            tracing::warn!(
                username = "owner",
                password = %password,
                "Bootstrap owner account created with a generated password, change it after first login"
            );
        } else {
            tracing::info!(username = "owner", "Bootstrap owner account created");
        }
        Ok(())
    }
}
