use std::sync::Arc;
use std::time::Duration;

use alkaa::alarm::StorageAlarmScheduler;
use alkaa::entities::task;
use alkaa::model::AlarmInterval;
use alkaa::service::TaskService;
use alkaa::storage::LocalStorage;
use alkaa::viewmodel::{TaskAlarmViewModel, TaskDetailProvider, TaskListViewModel};
use chrono::NaiveDate;

async fn service() -> TaskService {
    let storage = Arc::new(LocalStorage::new(true).await.unwrap());
    TaskService::new(storage)
}

fn alarm_vm(service: &TaskService) -> (TaskDetailProvider, TaskListViewModel, TaskAlarmViewModel) {
    let provider = TaskDetailProvider::new(service.clone());
    let scheduler = Arc::new(StorageAlarmScheduler::new(service.clone()));
    let list_vm = TaskListViewModel::new(service.clone());
    let vm = TaskAlarmViewModel::new(provider.clone(), scheduler, list_vm.refresher());
    (provider, list_vm, vm)
}

async fn wait_idle(vm: &mut TaskAlarmViewModel) {
    while vm.pending_operations() > 0 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

fn sample_time() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 5, 20)
        .unwrap()
        .and_hms_opt(7, 30, 0)
        .unwrap()
}

#[tokio::test]
async fn test_has_due_date_without_task() {
    let service = service().await;
    let (_, _, vm) = alarm_vm(&service);
    assert!(!vm.has_due_date());
}

#[tokio::test]
async fn test_has_due_date_tracks_snapshot() {
    let service = service().await;
    let task = service.create_task("Dated", None, None).await.unwrap();
    let (provider, _, vm) = alarm_vm(&service);

    provider.load_task(&task.uuid).await.unwrap();
    assert!(!vm.has_due_date());

    service
        .set_task_due_datetime(&task.uuid, Some(sample_time()))
        .await
        .unwrap();
    provider.reload().await.unwrap();
    assert!(vm.has_due_date());
}

#[tokio::test]
async fn test_operations_without_task_are_noops() {
    let service = service().await;
    let (_, _, mut vm) = alarm_vm(&service);

    vm.set_alarm(sample_time());
    vm.set_repeating(AlarmInterval::Daily);
    vm.remove_alarm();

    assert_eq!(vm.pending_operations(), 0);
    assert!(vm.current_task_uuid().is_none());
}

#[tokio::test]
async fn test_set_alarm_persists_and_refreshes_snapshot() {
    let service = service().await;
    let task = service.create_task("Wake me", None, None).await.unwrap();
    let (provider, _, mut vm) = alarm_vm(&service);
    provider.load_task(&task.uuid).await.unwrap();

    vm.set_alarm(sample_time());
    wait_idle(&mut vm).await;

    let stored = service.get_task(&task.uuid).await.unwrap().unwrap();
    assert_eq!(stored.due_datetime.as_deref(), Some("2026-05-20T07:30:00"));
    assert!(vm.has_due_date());
}

#[tokio::test]
async fn test_remove_alarm_clears_due_datetime() {
    let service = service().await;
    let task = service.create_task("Silence me", None, None).await.unwrap();
    service
        .set_task_due_datetime(&task.uuid, Some(sample_time()))
        .await
        .unwrap();

    let (provider, _, mut vm) = alarm_vm(&service);
    provider.load_task(&task.uuid).await.unwrap();
    assert!(vm.has_due_date());

    vm.remove_alarm();
    wait_idle(&mut vm).await;

    let stored = service.get_task(&task.uuid).await.unwrap().unwrap();
    assert!(stored.due_datetime.is_none());
    assert!(!vm.has_due_date());
}

#[test]
fn test_next_repeat_state_sets_interval() {
    let task = task::Model {
        uuid: uuid::Uuid::new_v4(),
        title: "Recurring".to_string(),
        description: None,
        completed: false,
        due_datetime: None,
        is_repeating: false,
        alarm_interval: None,
        category_uuid: None,
        created_at: "2026-01-01T00:00:00".to_string(),
    };

    let weekly = TaskAlarmViewModel::next_repeat_state(&task, AlarmInterval::Weekly);
    assert!(weekly.is_repeating);
    assert_eq!(weekly.alarm_interval.as_deref(), Some("weekly"));

    // The repeating flag and the stored interval move together
    let cleared = TaskAlarmViewModel::next_repeat_state(&weekly, AlarmInterval::Never);
    assert!(!cleared.is_repeating);
    assert!(cleared.alarm_interval.is_none());
}

#[tokio::test]
async fn test_set_alarm_republishes_list_after_persist() {
    let service = service().await;
    let task = service.create_task("Show my date", None, None).await.unwrap();
    let (provider, list_vm, mut vm) = alarm_vm(&service);
    list_vm.refresh_now().await.unwrap();
    provider.load_task(&task.uuid).await.unwrap();

    vm.set_alarm(sample_time());
    wait_idle(&mut vm).await;

    // The list snapshot published by the alarm future carries the new date
    let state = list_vm.current_state();
    assert_eq!(
        state.items[0].task.due_datetime.as_deref(),
        Some("2026-05-20T07:30:00")
    );
}

#[tokio::test]
async fn test_remove_alarm_republishes_list_after_persist() {
    let service = service().await;
    let task = service.create_task("Hide my date", None, None).await.unwrap();
    service
        .set_task_due_datetime(&task.uuid, Some(sample_time()))
        .await
        .unwrap();

    let (provider, list_vm, mut vm) = alarm_vm(&service);
    list_vm.refresh_now().await.unwrap();
    provider.load_task(&task.uuid).await.unwrap();

    vm.remove_alarm();
    wait_idle(&mut vm).await;

    assert!(list_vm.current_state().items[0].task.due_datetime.is_none());
}

#[tokio::test]
async fn test_set_repeating_republishes_list_after_persist() {
    let service = service().await;
    let task = service.create_task("Glyph me", None, None).await.unwrap();
    let (provider, list_vm, mut vm) = alarm_vm(&service);
    list_vm.refresh_now().await.unwrap();
    provider.load_task(&task.uuid).await.unwrap();

    vm.set_repeating(AlarmInterval::Daily);
    wait_idle(&mut vm).await;

    assert!(list_vm.current_state().items[0].task.is_repeating);
}

#[tokio::test]
async fn test_set_repeating_persists_through_provider() {
    let service = service().await;
    let task = service.create_task("Every monday", None, None).await.unwrap();
    let (provider, _, mut vm) = alarm_vm(&service);
    provider.load_task(&task.uuid).await.unwrap();

    vm.set_repeating(AlarmInterval::Monthly);
    wait_idle(&mut vm).await;

    let stored = service.get_task(&task.uuid).await.unwrap().unwrap();
    assert!(stored.is_repeating);
    assert_eq!(stored.alarm_interval.as_deref(), Some("monthly"));

    // The provider snapshot saw the stored result too
    assert!(provider.current().unwrap().is_repeating);

    vm.set_repeating(AlarmInterval::Never);
    wait_idle(&mut vm).await;

    let stored = service.get_task(&task.uuid).await.unwrap().unwrap();
    assert!(!stored.is_repeating);
    assert!(stored.alarm_interval.is_none());
}
