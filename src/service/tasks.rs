use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use log::info;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};
use uuid::Uuid;

use crate::entities::task;
use crate::model::TaskWithCategory;
use crate::repositories::TaskRepository;
use crate::service::TaskService;
use crate::utils::datetime;

impl TaskService {
    /// All tasks joined with their category, pending tasks first.
    pub async fn tasks_with_categories(&self) -> Result<Vec<TaskWithCategory>> {
        TaskRepository::get_all_with_category(&self.storage.conn).await
    }

    /// A single task by UUID, `None` when it does not exist.
    pub async fn get_task(&self, uuid: &Uuid) -> Result<Option<task::Model>> {
        TaskRepository::get_by_id(&self.storage.conn, uuid).await
    }

    /// Insert a new pending task and return the stored model.
    pub async fn create_task(
        &self,
        title: &str,
        description: Option<&str>,
        category_uuid: Option<Uuid>,
    ) -> Result<task::Model> {
        let model = task::ActiveModel {
            uuid: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(description.map(str::to_string)),
            completed: ActiveValue::Set(false),
            due_datetime: ActiveValue::Set(None),
            is_repeating: ActiveValue::Set(false),
            alarm_interval: ActiveValue::Set(None),
            category_uuid: ActiveValue::Set(category_uuid),
            created_at: ActiveValue::Set(datetime::format_datetime(Local::now().naive_local())),
        };

        let stored = model.insert(&self.storage.conn).await?;
        info!("Task created: {} '{}'", stored.uuid, stored.title);
        Ok(stored)
    }

    /// Persist an updated task snapshot.
    pub async fn update_task(&self, updated: task::Model) -> Result<task::Model> {
        let uuid = updated.uuid;
        let model = task::ActiveModel {
            uuid: ActiveValue::Unchanged(uuid),
            title: ActiveValue::Set(updated.title),
            description: ActiveValue::Set(updated.description),
            completed: ActiveValue::Set(updated.completed),
            due_datetime: ActiveValue::Set(updated.due_datetime),
            is_repeating: ActiveValue::Set(updated.is_repeating),
            alarm_interval: ActiveValue::Set(updated.alarm_interval),
            category_uuid: ActiveValue::Set(updated.category_uuid),
            created_at: ActiveValue::Set(updated.created_at),
        };

        let stored = model.update(&self.storage.conn).await?;
        info!("Task updated: {} '{}'", uuid, stored.title);
        Ok(stored)
    }

    /// Delete a task by UUID.
    pub async fn delete_task(&self, uuid: &Uuid) -> Result<()> {
        task::Entity::delete_by_id(*uuid).exec(&self.storage.conn).await?;
        info!("Task deleted: {uuid}");
        Ok(())
    }

    /// Set or clear the due/alarm datetime of a task.
    ///
    /// Missing tasks are a silent no-op; the alarm flow treats absence as
    /// "nothing to do", not an error.
    pub async fn set_task_due_datetime(&self, uuid: &Uuid, at: Option<NaiveDateTime>) -> Result<()> {
        let Some(current) = self.get_task(uuid).await? else {
            return Ok(());
        };

        let mut updated = current;
        updated.due_datetime = at.map(datetime::format_datetime);
        self.update_task(updated).await?;
        Ok(())
    }
}
