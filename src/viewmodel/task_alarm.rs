use std::sync::Arc;

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::alarm::AlarmScheduler;
use crate::constants::{LOG_ALARM_REMOVED, LOG_ALARM_SCHEDULED};
use crate::entities::task;
use crate::logger::Logger;
use crate::model::AlarmInterval;
use crate::viewmodel::{TaskDetailProvider, TaskListRefresher, ViewModelScope};

/// View-model bridging a single task's alarm configuration to the scheduling
/// use-cases.
///
/// Behavior is a direct function of the latest task snapshot from the
/// provider. With no task loaded every operation is a silent no-op.
pub struct TaskAlarmViewModel {
    provider: TaskDetailProvider,
    scheduler: Arc<dyn AlarmScheduler>,
    list: TaskListRefresher,
    scope: ViewModelScope,
    logger: Logger,
}

impl TaskAlarmViewModel {
    pub fn new(
        provider: TaskDetailProvider,
        scheduler: Arc<dyn AlarmScheduler>,
        list: TaskListRefresher,
    ) -> Self {
        Self {
            provider,
            scheduler,
            list,
            scope: ViewModelScope::new(),
            logger: Logger::global(),
        }
    }

    /// Whether the loaded task has a due date. Recomputed from the latest
    /// snapshot on every call; `false` when no task is loaded.
    pub fn has_due_date(&self) -> bool {
        self.provider
            .current()
            .is_some_and(|task| task.due_datetime.is_some())
    }

    /// Schedule an alarm for the loaded task at the given time.
    ///
    /// The spawned future reloads the detail snapshot and republishes the
    /// task list only after the persist has completed, so no stale state
    /// can surface.
    pub fn set_alarm(&mut self, at: NaiveDateTime) {
        let Some(task) = self.provider.current() else {
            return;
        };

        self.logger.log(format!("{LOG_ALARM_SCHEDULED}: {} at {at}", task.uuid));
        let scheduler = self.scheduler.clone();
        let provider = self.provider.clone();
        let list = self.list.clone();
        self.scope.spawn(async move {
            scheduler.schedule_alarm(task.uuid, at).await?;
            provider.reload().await?;
            list.refresh().await
        });
    }

    /// Pure derivation of the repeat state: the `Never` sentinel clears both
    /// fields, anything else sets the flag and stores the interval.
    pub fn next_repeat_state(task: &task::Model, interval: AlarmInterval) -> task::Model {
        let mut updated = task.clone();
        if interval == AlarmInterval::Never {
            updated.is_repeating = false;
            updated.alarm_interval = None;
        } else {
            updated.is_repeating = true;
            updated.alarm_interval = Some(interval.to_string());
        }
        updated
    }

    /// Update the repeat cadence of the loaded task.
    pub fn set_repeating(&mut self, interval: AlarmInterval) {
        let Some(task) = self.provider.current() else {
            return;
        };

        let updated = Self::next_repeat_state(&task, interval);
        let provider = self.provider.clone();
        let list = self.list.clone();
        self.scope.spawn(async move {
            provider.update_task(updated).await?;
            list.refresh().await
        });
    }

    /// Cancel the alarm of the loaded task.
    pub fn remove_alarm(&mut self) {
        let Some(task) = self.provider.current() else {
            return;
        };

        self.logger.log(format!("{LOG_ALARM_REMOVED}: {}", task.uuid));
        let scheduler = self.scheduler.clone();
        let provider = self.provider.clone();
        let list = self.list.clone();
        self.scope.spawn(async move {
            scheduler.cancel_alarm(task.uuid).await?;
            provider.reload().await?;
            list.refresh().await
        });
    }

    /// UUID of the loaded task, if any.
    pub fn current_task_uuid(&self) -> Option<Uuid> {
        self.provider.current().map(|task| task.uuid)
    }

    /// Number of background operations still in flight.
    pub fn pending_operations(&mut self) -> usize {
        self.scope.cleanup_finished();
        self.scope.task_count()
    }
}
