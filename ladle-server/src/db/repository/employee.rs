//! Employee Repository

use chrono::Utc;
use serde::Serialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use shared::role::Role;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

/// Merge payload for updates; password arrives pre-hashed
#[derive(Debug, Serialize)]
struct EmployeeMerge {
    #[serde(skip_serializing_if = "Option::is_none")]
    hash_pass: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_active: Option<bool>,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Total number of employee records (including inactive)
    pub async fn count(&self) -> RepoResult<usize> {
        let employees: Vec<Employee> = self.base.db().select("employee").await?;
        Ok(employees.len())
    }

    /// Find all active employees
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE is_active = true ORDER BY username")
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find all employees including inactive
    pub async fn find_all_with_inactive(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee ORDER BY username")
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let rid: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let emp: Option<Employee> = self.base.db().select(rid).await?;
        Ok(emp)
    }

    /// Find employee by username
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<Employee>> {
        let username_owned = username.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE username = $username LIMIT 1")
            .bind(("username", username_owned))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Create a new employee
    pub async fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        // Check duplicate username
        if self.find_by_username(&data.username).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Username '{}' already exists",
                data.username
            )));
        }

        // Hash password
        let hash_pass = Employee::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?;

        let display_name = data.display_name.unwrap_or_else(|| data.username.clone());

        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE employee SET
                    username = $username,
                    display_name = $display_name,
                    hash_pass = $hash_pass,
                    role = $role,
                    is_active = true
                RETURN AFTER"#,
            )
            .bind(("username", data.username))
            .bind(("display_name", display_name))
            .bind(("hash_pass", hash_pass))
            .bind(("role", data.role))
            .await?;

        let created: Option<Employee> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Update an employee
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        let rid: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;

        let hash_pass = match data.password {
            Some(password) => Some(
                Employee::hash_password(&password)
                    .map_err(|e| RepoError::Database(format!("Failed to hash password: {}", e)))?,
            ),
            None => None,
        };

        let merge = EmployeeMerge {
            hash_pass,
            display_name: data.display_name,
            role: data.role,
            is_active: data.is_active,
        };

        let updated: Option<Employee> = self.base.db().update(rid).merge(merge).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Deactivate an employee (staff accounts are never hard-deleted)
    pub async fn deactivate(&self, id: &str) -> RepoResult<Employee> {
        self.update(
            id,
            EmployeeUpdate {
                password: None,
                display_name: None,
                role: None,
                is_active: Some(false),
            },
        )
        .await
    }

    /// Stamp last login time
    pub async fn record_login(&self, id: &RecordId) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $id SET last_login_at = $now")
            .bind(("id", id.clone()))
            .bind(("now", Utc::now()))
            .await?;
        Ok(())
    }
}
