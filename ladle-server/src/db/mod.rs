//! Database Module
//!
//! Owns the embedded SurrealDB instance and the schema definitions.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "ladle";
const DATABASE: &str = "main";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the RocksDB-backed database under the work directory
    pub async fn open(work_dir: &str) -> Result<Self, AppError> {
        let path = format!("{}/data", work_dir);
        let db = Surreal::new::<RocksDb>(path.as_str())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::setup(db).await
    }

    /// Open an in-memory database (tests)
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
        Self::setup(db).await
    }

    async fn setup(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        // Schema: usernames must be unique across employees
        db.query("DEFINE INDEX IF NOT EXISTS idx_employee_username ON TABLE employee COLUMNS username UNIQUE")
            .await
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;

        tracing::info!("Database connection established");
        Ok(Self { db })
    }
}
