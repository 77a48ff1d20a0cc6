use std::future::Future;

use log::error;
use tokio::task::JoinHandle;

/// Owner of the background futures a view-model spawns.
///
/// Dropping the scope aborts every future still in flight: background work is
/// bound to the lifetime of the screen that started it, never longer.
pub struct ViewModelScope {
    tasks: Vec<JoinHandle<()>>,
}

impl ViewModelScope {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Spawn a fire-and-forget operation.
    ///
    /// Errors are not surfaced to the caller; they end up on the log as the
    /// failure channel of last resort.
    pub fn spawn<F>(&mut self, future: F)
    where
        F: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            if let Err(e) = future.await {
                error!("Background operation failed: {e:#}");
            }
        });
        self.tasks.push(handle);
        self.cleanup_finished();
    }

    /// Drop handles of futures that already ran to completion.
    pub fn cleanup_finished(&mut self) {
        self.tasks.retain(|handle| !handle.is_finished());
    }

    /// Number of operations still running.
    pub fn task_count(&self) -> usize {
        self.tasks.iter().filter(|handle| !handle.is_finished()).count()
    }

    /// Abort every operation still in flight.
    pub fn cancel_all(&mut self) {
        for handle in self.tasks.drain(..) {
            handle.abort();
        }
    }
}

impl Default for ViewModelScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewModelScope {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
