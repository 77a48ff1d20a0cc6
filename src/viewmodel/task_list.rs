use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use uuid::Uuid;

use crate::constants::{LOG_TASKS_LOADED, LOG_TASK_TOGGLED};
use crate::entities::task;
use crate::logger::Logger;
use crate::model::TaskWithCategory;
use crate::service::TaskService;
use crate::viewmodel::ViewModelScope;

/// Immutable snapshot of everything the task list needs to render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskListViewState {
    pub items: Vec<TaskWithCategory>,
    pub loading: bool,
}

/// View-model backing the task list screen.
///
/// State flows one way: mutations are dispatched to the service in the
/// background, and every mutation ends with a fresh fetch that is published
/// through the watch channel. The UI never edits its copy of the list.
pub struct TaskListViewModel {
    service: TaskService,
    state_tx: Arc<watch::Sender<TaskListViewState>>,
    scope: ViewModelScope,
    logger: Logger,
}

impl TaskListViewModel {
    pub fn new(service: TaskService) -> Self {
        let (state_tx, _) = watch::channel(TaskListViewState {
            items: Vec::new(),
            loading: true,
        });

        Self {
            service,
            state_tx: Arc::new(state_tx),
            scope: ViewModelScope::new(),
            logger: Logger::global(),
        }
    }

    /// Subscribe to the view-state stream.
    pub fn subscribe(&self) -> watch::Receiver<TaskListViewState> {
        self.state_tx.subscribe()
    }

    /// Handle that lets other view-models republish the list after their
    /// own mutations have been persisted.
    pub fn refresher(&self) -> TaskListRefresher {
        TaskListRefresher {
            service: self.service.clone(),
            state_tx: self.state_tx.clone(),
        }
    }

    /// Latest published view-state.
    pub fn current_state(&self) -> TaskListViewState {
        self.state_tx.borrow().clone()
    }

    /// Reload tasks from storage in the background.
    pub fn load_tasks(&mut self) {
        let service = self.service.clone();
        let state_tx = self.state_tx.clone();
        let logger = self.logger.clone();
        self.scope.spawn(async move {
            Self::publish_fresh_state(&service, &state_tx).await?;
            logger.log(LOG_TASKS_LOADED.to_string());
            Ok(())
        });
    }

    /// Awaitable reload, used by tests and by mutation futures.
    pub async fn refresh_now(&self) -> Result<()> {
        Self::publish_fresh_state(&self.service, &self.state_tx).await
    }

    async fn publish_fresh_state(
        service: &TaskService,
        state_tx: &watch::Sender<TaskListViewState>,
    ) -> Result<()> {
        let items = service.tasks_with_categories().await?;
        state_tx.send_replace(TaskListViewState { items, loading: false });
        Ok(())
    }

    /// Pure derivation of the toggled task record: only the completed flag
    /// changes, everything else is the rendered record, untouched.
    pub fn toggled(item: &TaskWithCategory) -> task::Model {
        let mut task = item.task.clone();
        task.completed = !task.completed;
        task
    }

    /// Flip the completion state of the given joined record and republish.
    ///
    /// The component hands over the record exactly as it was rendered; the
    /// derivation happens here so the list stays a pure view.
    pub fn update_task_status(&mut self, item: TaskWithCategory) {
        let updated = Self::toggled(&item);
        let service = self.service.clone();
        let state_tx = self.state_tx.clone();
        let logger = self.logger.clone();
        self.scope.spawn(async move {
            service.update_task(updated).await?;
            Self::publish_fresh_state(&service, &state_tx).await?;
            logger.log(LOG_TASK_TOGGLED.to_string());
            Ok(())
        });
    }

    /// Create a task and republish.
    pub fn create_task(&mut self, title: String, category_uuid: Option<Uuid>) {
        if title.trim().is_empty() {
            return;
        }

        let service = self.service.clone();
        let state_tx = self.state_tx.clone();
        self.scope.spawn(async move {
            service.create_task(title.trim(), None, category_uuid).await?;
            Self::publish_fresh_state(&service, &state_tx).await
        });
    }

    /// Delete a task and republish.
    pub fn delete_task(&mut self, uuid: Uuid) {
        let service = self.service.clone();
        let state_tx = self.state_tx.clone();
        self.scope.spawn(async move {
            service.delete_task(&uuid).await?;
            Self::publish_fresh_state(&service, &state_tx).await
        });
    }

    /// Number of background operations still in flight.
    pub fn pending_operations(&mut self) -> usize {
        self.scope.cleanup_finished();
        self.scope.task_count()
    }
}

/// Detached publisher for the task list view-state.
///
/// Lets a mutation that lives outside [`TaskListViewModel`] end its future
/// with a fresh fetch, so the republish is sequenced after the persist
/// instead of racing it.
#[derive(Clone)]
pub struct TaskListRefresher {
    service: TaskService,
    state_tx: Arc<watch::Sender<TaskListViewState>>,
}

impl TaskListRefresher {
    /// Fetch the current records and publish a new snapshot.
    pub async fn refresh(&self) -> Result<()> {
        TaskListViewModel::publish_fresh_state(&self.service, &self.state_tx).await
    }
}
