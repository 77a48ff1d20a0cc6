use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use uuid::Uuid;

use crate::entities::task;
use crate::service::TaskService;

/// Source of the "current task" observable used by the detail screens.
///
/// Holds at most one task at a time; `None` means nothing is loaded yet and
/// every dependent operation treats that as a silent no-op.
#[derive(Clone)]
pub struct TaskDetailProvider {
    service: TaskService,
    task_tx: Arc<watch::Sender<Option<task::Model>>>,
}

impl TaskDetailProvider {
    pub fn new(service: TaskService) -> Self {
        let (task_tx, _) = watch::channel(None);
        Self {
            service,
            task_tx: Arc::new(task_tx),
        }
    }

    /// Subscribe to the current-task stream.
    pub fn task_data(&self) -> watch::Receiver<Option<task::Model>> {
        self.task_tx.subscribe()
    }

    /// Latest task snapshot, if one is loaded.
    pub fn current(&self) -> Option<task::Model> {
        self.task_tx.borrow().clone()
    }

    /// Load a task from storage and emit it.
    pub async fn load_task(&self, uuid: &Uuid) -> Result<()> {
        let task = self.service.get_task(uuid).await?;
        self.task_tx.send_replace(task);
        Ok(())
    }

    /// Re-fetch the loaded task so dependents see changes made elsewhere.
    pub async fn reload(&self) -> Result<()> {
        if let Some(current) = self.current() {
            self.load_task(&current.uuid).await?;
        }
        Ok(())
    }

    /// Drop the loaded task.
    pub fn clear(&self) {
        self.task_tx.send_replace(None);
    }

    /// Persist an updated snapshot and re-emit the stored result.
    pub async fn update_task(&self, updated: task::Model) -> Result<()> {
        let stored = self.service.update_task(updated).await?;
        self.task_tx.send_replace(Some(stored));
        Ok(())
    }
}
