use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use alkaa::viewmodel::ViewModelScope;

#[tokio::test]
async fn test_spawned_future_runs_to_completion() {
    let flag = Arc::new(AtomicBool::new(false));
    let flag_clone = flag.clone();

    let mut scope = ViewModelScope::new();
    scope.spawn(async move {
        flag_clone.store(true, Ordering::SeqCst);
        Ok(())
    });

    while scope.task_count() > 0 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        scope.cleanup_finished();
    }
    assert!(flag.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_drop_aborts_pending_futures() {
    let flag = Arc::new(AtomicBool::new(false));
    let flag_clone = flag.clone();

    let mut scope = ViewModelScope::new();
    scope.spawn(async move {
        tokio::time::sleep(Duration::from_secs(60)).await;
        flag_clone.store(true, Ordering::SeqCst);
        Ok(())
    });
    assert_eq!(scope.task_count(), 1);

    drop(scope);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!flag.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_cleanup_removes_finished_handles() {
    let mut scope = ViewModelScope::new();
    scope.spawn(async { Ok(()) });

    tokio::time::sleep(Duration::from_millis(20)).await;
    scope.cleanup_finished();
    assert_eq!(scope.task_count(), 0);
}
