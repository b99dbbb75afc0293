//! Menu Item Repository

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all menu items
    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let items: Vec<MenuItem> = self
            .base
            .db()
            .query("SELECT * FROM menu_item ORDER BY category, name")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Find menu item by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItem>> {
        let rid: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let item: Option<MenuItem> = self.base.db().select(rid).await?;
        Ok(item)
    }

    /// Find several menu items by id (order creation lookup)
    pub async fn find_by_ids(&self, ids: &[RecordId]) -> RepoResult<Vec<MenuItem>> {
        let ids_owned: Vec<RecordId> = ids.to_vec();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE id IN $ids")
            .bind(("ids", ids_owned))
            .await?;
        let items: Vec<MenuItem> = result.take(0)?;
        Ok(items)
    }

    /// Create a new menu item
    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItem> {
        if data.price.is_sign_negative() {
            return Err(RepoError::Validation("Price must not be negative".into()));
        }

        let item = MenuItem {
            id: None,
            name: data.name,
            description: data.description,
            price: data.price,
            category: data.category,
            is_available: true,
            prep_minutes: data.prep_minutes,
            allergens: data.allergens,
            image: data.image,
        };

        let created: Option<MenuItem> = self.base.db().create("menu_item").content(item).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    /// Update a menu item
    pub async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItem> {
        if data.price.is_some_and(|p| p.is_sign_negative()) {
            return Err(RepoError::Validation("Price must not be negative".into()));
        }

        let rid: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let updated: Option<MenuItem> = self.base.db().update(rid).merge(data).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    /// Toggle availability
    pub async fn set_availability(&self, id: &str, is_available: bool) -> RepoResult<MenuItem> {
        self.update(
            id,
            MenuItemUpdate {
                name: None,
                description: None,
                price: None,
                category: None,
                is_available: Some(is_available),
                prep_minutes: None,
                allergens: None,
                image: None,
            },
        )
        .await
    }

    /// Delete a menu item
    ///
    /// Historical orders keep their snapshots, so hard delete is safe.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let rid: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let deleted: Option<MenuItem> = self.base.db().delete(rid).await?;
        Ok(deleted.is_some())
    }
}
