use anyhow::Result;
use log::info;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::entities::category;
use crate::repositories::CategoryRepository;
use crate::service::TaskService;

impl TaskService {
    /// All categories sorted by name.
    pub async fn categories(&self) -> Result<Vec<category::Model>> {
        CategoryRepository::get_all(&self.storage.conn).await
    }

    /// Insert a new category and return the stored model.
    pub async fn create_category(&self, name: &str, color: &str) -> Result<category::Model> {
        let model = category::ActiveModel {
            uuid: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(name.to_string()),
            color: ActiveValue::Set(color.to_string()),
        };

        let stored = model.insert(&self.storage.conn).await?;
        info!("Category created: {} '{}'", stored.uuid, stored.name);
        Ok(stored)
    }

    /// Delete a category by UUID. Tasks referencing it fall back to no
    /// category via the `SET NULL` relation.
    pub async fn delete_category(&self, uuid: &Uuid) -> Result<()> {
        category::Entity::delete_by_id(*uuid).exec(&self.storage.conn).await?;
        info!("Category deleted: {uuid}");
        Ok(())
    }
}
