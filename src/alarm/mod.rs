//! Alarm scheduling use-cases.
//!
//! [`AlarmScheduler`] is the seam between the alarm view-model and whatever
//! actually delivers alarms. The shipped [`StorageAlarmScheduler`] persists
//! the alarm time on the task itself; a platform integration (desktop
//! notifications, calendar export) would implement the same trait.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use log::info;
use uuid::Uuid;

use crate::service::TaskService;

/// Single-purpose operations for scheduling and cancelling a task alarm.
///
/// Both calls are fire-and-forget from the caller's perspective: the
/// view-model spawns them on its scope and does not await a result.
#[async_trait]
pub trait AlarmScheduler: Send + Sync {
    /// Schedule an alarm for the task at the given local time.
    async fn schedule_alarm(&self, task_uuid: Uuid, at: NaiveDateTime) -> Result<()>;

    /// Cancel any alarm configured for the task.
    async fn cancel_alarm(&self, task_uuid: Uuid) -> Result<()>;
}

/// Scheduler that records the alarm on the task's `due_datetime` column.
pub struct StorageAlarmScheduler {
    service: TaskService,
}

impl StorageAlarmScheduler {
    pub fn new(service: TaskService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AlarmScheduler for StorageAlarmScheduler {
    async fn schedule_alarm(&self, task_uuid: Uuid, at: NaiveDateTime) -> Result<()> {
        info!("Alarm scheduled for task {task_uuid} at {at}");
        self.service.set_task_due_datetime(&task_uuid, Some(at)).await
    }

    async fn cancel_alarm(&self, task_uuid: Uuid) -> Result<()> {
        info!("Alarm cancelled for task {task_uuid}");
        self.service.set_task_due_datetime(&task_uuid, None).await
    }
}
