//! Data-access service for tasks and categories.
//!
//! [`TaskService`] is the main data layer of the application. It wraps the
//! local storage behind a cheaply cloneable facade and offers the CRUD
//! operations the view-models dispatch, plus the joined task/category fetch
//! the task list renders from. All methods return `anyhow::Result` and log
//! through the `log` facade.

pub mod categories;
pub mod tasks;

use std::sync::Arc;

use crate::storage::LocalStorage;

/// Cloneable facade over the local database.
#[derive(Clone)]
pub struct TaskService {
    pub(crate) storage: Arc<LocalStorage>,
}

impl TaskService {
    pub fn new(storage: Arc<LocalStorage>) -> Self {
        Self { storage }
    }
}
