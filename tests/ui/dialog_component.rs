use alkaa::entities::{category, task};
use alkaa::model::{AlarmInterval, TaskWithCategory};
use alkaa::ui::components::DialogComponent;
use alkaa::ui::core::{Action, Component, DialogType};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use uuid::Uuid;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn sample_task() -> task::Model {
    task::Model {
        uuid: Uuid::new_v4(),
        title: "Sample".to_string(),
        description: None,
        completed: false,
        due_datetime: None,
        is_repeating: false,
        alarm_interval: None,
        category_uuid: None,
        created_at: "2026-01-01T00:00:00".to_string(),
    }
}

fn sample_category(name: &str) -> category::Model {
    category::Model {
        uuid: Uuid::new_v4(),
        name: name.to_string(),
        color: "#336699".to_string(),
    }
}

fn type_text(dialog: &mut DialogComponent, text: &str) {
    for c in text.chars() {
        dialog.handle_key_events(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_hidden_by_default() {
    let dialog = DialogComponent::new();
    assert!(!dialog.is_visible());
}

#[test]
fn test_show_and_hide() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::TaskCreation);
    assert!(dialog.is_visible());

    dialog.hide();
    assert!(!dialog.is_visible());
    assert!(dialog.input_buffer.is_empty());
}

#[test]
fn test_task_creation_submits_trimmed_title() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::TaskCreation);
    type_text(&mut dialog, "  Buy stamps  ");

    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::CreateTask { title, category_uuid } => {
            assert_eq!(title, "Buy stamps");
            assert!(category_uuid.is_none());
        }
        other => panic!("expected creation, got {other:?}"),
    }
}

#[test]
fn test_task_creation_ignores_blank_submit() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::TaskCreation);
    type_text(&mut dialog, "   ");

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None));
}

#[test]
fn test_task_creation_backspace_edits_buffer() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::TaskCreation);
    type_text(&mut dialog, "abc");
    dialog.handle_key_events(key(KeyCode::Backspace));
    assert_eq!(dialog.input_buffer, "ab");
}

#[test]
fn test_category_cycle_returns_to_none() {
    let mut dialog = DialogComponent::new();
    dialog.update_data(vec![sample_category("Home"), sample_category("Work")]);
    dialog.show(DialogType::TaskCreation);

    assert!(dialog.selected_category().is_none());

    dialog.handle_key_events(key(KeyCode::Tab));
    assert_eq!(dialog.selected_category().map(|c| c.name.as_str()), Some("Home"));

    dialog.handle_key_events(key(KeyCode::Tab));
    assert_eq!(dialog.selected_category().map(|c| c.name.as_str()), Some("Work"));

    dialog.handle_key_events(key(KeyCode::Tab));
    assert!(dialog.selected_category().is_none());
}

#[test]
fn test_creation_with_category_carries_uuid() {
    let category = sample_category("Home");
    let uuid = category.uuid;

    let mut dialog = DialogComponent::new();
    dialog.update_data(vec![category]);
    dialog.show(DialogType::TaskCreation);
    type_text(&mut dialog, "Fix sink");
    dialog.handle_key_events(key(KeyCode::Tab));

    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::CreateTask { category_uuid, .. } => assert_eq!(category_uuid, Some(uuid)),
        other => panic!("expected creation, got {other:?}"),
    }
}

#[test]
fn test_delete_confirmation_keys() {
    let item = TaskWithCategory::new(sample_task(), None);
    let uuid = item.task.uuid;

    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::DeleteConfirmation { task: item.clone() });

    match dialog.handle_key_events(key(KeyCode::Char('y'))) {
        Action::DeleteTask(deleted) => assert_eq!(deleted, uuid),
        other => panic!("expected delete, got {other:?}"),
    }

    dialog.show(DialogType::DeleteConfirmation { task: item });
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('n'))), Action::HideDialog));
}

#[test]
fn test_alarm_dialog_cadence_selection() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::Alarm { task_uuid: Uuid::new_v4() });
    assert_eq!(dialog.selected_interval_index, 0);

    dialog.handle_key_events(key(KeyCode::Char('j')));
    dialog.handle_key_events(key(KeyCode::Char('j')));

    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::SetRepeating(interval) => assert_eq!(interval, AlarmInterval::Daily),
        other => panic!("expected repeat selection, got {other:?}"),
    }
}

#[test]
fn test_alarm_dialog_cadence_wraps_upward() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::Alarm { task_uuid: Uuid::new_v4() });

    dialog.handle_key_events(key(KeyCode::Char('k')));

    match dialog.handle_key_events(key(KeyCode::Enter)) {
        Action::SetRepeating(interval) => assert_eq!(interval, AlarmInterval::Yearly),
        other => panic!("expected repeat selection, got {other:?}"),
    }
}

#[test]
fn test_alarm_dialog_quick_set_and_remove() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::Alarm { task_uuid: Uuid::new_v4() });

    match dialog.handle_key_events(key(KeyCode::Char('t'))) {
        Action::SetAlarm(at) => {
            assert_eq!(at.format("%H:%M:%S").to_string(), "20:00:00");
        }
        other => panic!("expected alarm set, got {other:?}"),
    }

    assert!(matches!(dialog.handle_key_events(key(KeyCode::Char('r'))), Action::RemoveAlarm));
}

#[test]
fn test_set_detail_syncs_cadence_selection() {
    let mut task = sample_task();
    task.is_repeating = true;
    task.alarm_interval = Some("weekly".to_string());

    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::Alarm { task_uuid: task.uuid });
    dialog.set_detail(Some(task));

    let selected = AlarmInterval::ALL[dialog.selected_interval_index];
    assert_eq!(selected, AlarmInterval::Weekly);
}

#[test]
fn test_help_dialog_closes_on_escape() {
    let mut dialog = DialogComponent::new();
    dialog.show(DialogType::Help);
    assert!(matches!(dialog.handle_key_events(key(KeyCode::Esc)), Action::HideDialog));
}
