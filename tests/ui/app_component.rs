use std::sync::Arc;

use alkaa::config::Config;
use alkaa::service::TaskService;
use alkaa::storage::LocalStorage;
use alkaa::ui::core::HomeSection;
use alkaa::ui::AppComponent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

async fn app() -> AppComponent {
    let storage = Arc::new(LocalStorage::new(true).await.unwrap());
    let service = TaskService::new(storage);
    AppComponent::new(service, &Config::default())
}

#[tokio::test]
async fn test_starts_on_configured_default_section() {
    let app = app().await;
    assert_eq!(app.current_section, HomeSection::Tasks);

    let storage = Arc::new(LocalStorage::new(true).await.unwrap());
    let service = TaskService::new(storage);
    let mut config = Config::default();
    config.ui.default_section = "settings".to_string();
    let app = AppComponent::new(service, &config);
    assert_eq!(app.current_section, HomeSection::Settings);
}

#[tokio::test]
async fn test_first_frame_shows_loading_until_fetch_lands() {
    let mut app = app().await;
    // Seeded from the view-model before any fetch completes
    assert!(app.task_list.state.loading);
    assert!(app.task_list.state.items.is_empty());

    while app.pending_operations() > 0 {
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    app.poll_view_state();
    assert!(!app.task_list.state.loading);
}

#[tokio::test]
async fn test_digit_keys_switch_every_section() {
    let mut app = app().await;

    for (digit, section) in ['1', '2', '3', '4'].iter().zip(HomeSection::ALL) {
        app.handle_key(key(KeyCode::Char(*digit)));
        assert_eq!(app.current_section, section);
    }
}

#[tokio::test]
async fn test_section_sticks_until_next_selection() {
    let mut app = app().await;

    app.handle_key(key(KeyCode::Char('3')));
    assert_eq!(app.current_section, HomeSection::Categories);

    // A key nobody claims leaves the section alone
    app.handle_key(key(KeyCode::Char('z')));
    assert_eq!(app.current_section, HomeSection::Categories);
}

#[tokio::test]
async fn test_quit_key_sets_flag() {
    let mut app = app().await;
    assert!(!app.should_quit());

    app.handle_key(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_help_dialog_blocks_quit_key() {
    let mut app = app().await;

    app.handle_key(key(KeyCode::Char('?')));
    assert!(app.dialog_visible());

    // 'q' goes to the dialog while it is open
    app.handle_key(key(KeyCode::Char('q')));
    assert!(!app.dialog_visible());
    assert!(!app.should_quit());
}

#[tokio::test]
async fn test_creation_dialog_opens_from_task_list() {
    let mut app = app().await;

    app.handle_key(key(KeyCode::Char('a')));
    assert!(app.dialog_visible());

    app.handle_key(key(KeyCode::Esc));
    assert!(!app.dialog_visible());
}

#[tokio::test]
async fn test_list_keys_ignored_outside_tasks_section() {
    let mut app = app().await;

    app.handle_key(key(KeyCode::Char('2')));
    assert_eq!(app.current_section, HomeSection::Search);

    // 'a' opens the creation dialog only on the tasks screen
    app.handle_key(key(KeyCode::Char('a')));
    assert!(!app.dialog_visible());
}
