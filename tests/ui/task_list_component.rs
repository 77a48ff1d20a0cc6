use alkaa::entities::{category, task};
use alkaa::model::TaskWithCategory;
use alkaa::ui::components::TaskListComponent;
use alkaa::ui::core::{Action, Component, DialogType};
use alkaa::viewmodel::TaskListViewState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;
use uuid::Uuid;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn sample_task(title: &str) -> task::Model {
    task::Model {
        uuid: Uuid::new_v4(),
        title: title.to_string(),
        description: None,
        completed: false,
        due_datetime: None,
        is_repeating: false,
        alarm_interval: None,
        category_uuid: None,
        created_at: "2026-01-01T00:00:00".to_string(),
    }
}

fn sample_category(name: &str, color: &str) -> category::Model {
    category::Model {
        uuid: Uuid::new_v4(),
        name: name.to_string(),
        color: color.to_string(),
    }
}

fn component_with(items: Vec<TaskWithCategory>) -> TaskListComponent {
    let mut component = TaskListComponent::new();
    component.update_data(TaskListViewState { items, loading: false });
    component
}

#[test]
fn test_ribbon_uses_category_color() {
    let item = TaskWithCategory::new(
        sample_task("Colored"),
        Some(sample_category("Home", "#FF8800")),
    );
    assert_eq!(TaskListComponent::ribbon_color(&item), Color::Rgb(255, 136, 0));
}

#[test]
fn test_ribbon_default_without_category() {
    let item = TaskWithCategory::new(sample_task("Plain"), None);
    assert_eq!(TaskListComponent::ribbon_color(&item), Color::Reset);
}

#[test]
fn test_ribbon_default_for_malformed_color() {
    let item = TaskWithCategory::new(
        sample_task("Broken"),
        Some(sample_category("Odd", "not-a-color")),
    );
    assert_eq!(TaskListComponent::ribbon_color(&item), Color::Reset);
}

#[test]
fn test_due_text_absent_without_due_date() {
    let item = TaskWithCategory::new(sample_task("Whenever"), None);
    assert!(TaskListComponent::due_text(&item, "%H:%M").is_none());
}

#[test]
fn test_due_text_present_with_due_date() {
    let mut task = sample_task("Dated");
    task.due_datetime = Some("2026-05-20T07:30:00".to_string());
    let item = TaskWithCategory::new(task, None);

    let text = TaskListComponent::due_text(&item, "%H:%M").unwrap();
    assert!(text.ends_with("at 07:30"), "unexpected due text: {text}");
}

#[test]
fn test_space_toggles_the_rendered_record() {
    let item = TaskWithCategory::new(sample_task("Toggle me"), None);
    let mut component = component_with(vec![item.clone()]);

    match component.handle_key_events(key(KeyCode::Char(' '))) {
        Action::ToggleTask(selected) => assert_eq!(selected, item),
        other => panic!("expected toggle, got {other:?}"),
    }
}

#[test]
fn test_space_on_empty_list_is_noop() {
    let mut component = component_with(Vec::new());
    assert!(matches!(component.handle_key_events(key(KeyCode::Char(' '))), Action::None));
}

#[test]
fn test_enter_activates_selected_row() {
    let item = TaskWithCategory::new(sample_task("Open me"), None);
    let mut component = component_with(vec![item.clone()]);

    match component.handle_key_events(key(KeyCode::Enter)) {
        Action::ActivateTask(selected) => assert_eq!(selected.task.title, "Open me"),
        other => panic!("expected activation, got {other:?}"),
    }
}

#[test]
fn test_navigation_wraps_both_ways() {
    let items = vec![
        TaskWithCategory::new(sample_task("one"), None),
        TaskWithCategory::new(sample_task("two"), None),
        TaskWithCategory::new(sample_task("three"), None),
    ];
    let mut component = component_with(items);
    assert_eq!(component.selected_index, 0);

    component.update(Action::PreviousTask);
    assert_eq!(component.selected_index, 2);

    component.update(Action::NextTask);
    assert_eq!(component.selected_index, 0);
}

#[test]
fn test_selection_clamps_when_list_shrinks() {
    let items = vec![
        TaskWithCategory::new(sample_task("one"), None),
        TaskWithCategory::new(sample_task("two"), None),
    ];
    let mut component = component_with(items);
    component.update(Action::NextTask);
    assert_eq!(component.selected_index, 1);

    component.update_data(TaskListViewState {
        items: vec![TaskWithCategory::new(sample_task("only"), None)],
        loading: false,
    });
    assert_eq!(component.selected_index, 0);
}

#[test]
fn test_alarm_key_opens_dialog_for_selected_task() {
    let item = TaskWithCategory::new(sample_task("Ring"), None);
    let uuid = item.task.uuid;
    let mut component = component_with(vec![item]);

    match component.handle_key_events(key(KeyCode::Char('m'))) {
        Action::ShowDialog(DialogType::Alarm { task_uuid }) => assert_eq!(task_uuid, uuid),
        other => panic!("expected alarm dialog, got {other:?}"),
    }
}
