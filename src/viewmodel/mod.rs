//! View-model layer between the UI components and the data service.
//!
//! View-models publish immutable view-state snapshots through
//! `tokio::sync::watch` channels; the UI subscribes and re-renders whenever a
//! new snapshot arrives. All mutations run as fire-and-forget futures owned
//! by a [`ViewModelScope`], which aborts anything still in flight when the
//! owning screen goes away.

pub mod detail;
pub mod scope;
pub mod task_alarm;
pub mod task_list;

pub use detail::TaskDetailProvider;
pub use scope::ViewModelScope;
pub use task_alarm::TaskAlarmViewModel;
pub use task_list::{TaskListRefresher, TaskListViewModel, TaskListViewState};
