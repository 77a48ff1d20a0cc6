//! Task repository for database operations.

use anyhow::Result;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::entities::{category, task};
use crate::model::TaskWithCategory;

/// Repository for task-related database operations.
pub struct TaskRepository;

impl TaskRepository {
    /// Get all tasks joined with their category, pending tasks first.
    pub async fn get_all_with_category<C>(conn: &C) -> Result<Vec<TaskWithCategory>>
    where
        C: ConnectionTrait,
    {
        let rows = task::Entity::find()
            .find_also_related(category::Entity)
            .order_by_asc(task::Column::Completed)
            .order_by_asc(task::Column::CreatedAt)
            .all(conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(task, category)| TaskWithCategory::new(task, category))
            .collect())
    }

    /// Get a single task by UUID.
    pub async fn get_by_id<C>(conn: &C, uuid: &Uuid) -> Result<Option<task::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(task::Entity::find()
            .filter(task::Column::Uuid.eq(*uuid))
            .one(conn)
            .await?)
    }

    /// Get all tasks belonging to a category.
    pub async fn get_for_category<C>(conn: &C, category_uuid: &Uuid) -> Result<Vec<task::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(task::Entity::find()
            .filter(task::Column::CategoryUuid.eq(*category_uuid))
            .order_by_asc(task::Column::Completed)
            .order_by_asc(task::Column::CreatedAt)
            .all(conn)
            .await?)
    }
}
