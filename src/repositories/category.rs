//! Category repository for database operations.

use anyhow::Result;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::category;

/// Repository for category-related database operations.
pub struct CategoryRepository;

impl CategoryRepository {
    /// Get all categories sorted by name.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<category::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(category::Entity::find()
            .order_by_asc(category::Column::Name)
            .all(conn)
            .await?)
    }

    /// Get a single category by UUID.
    pub async fn get_by_id<C>(conn: &C, uuid: &Uuid) -> Result<Option<category::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(category::Entity::find()
            .filter(category::Column::Uuid.eq(*uuid))
            .one(conn)
            .await?)
    }
}
