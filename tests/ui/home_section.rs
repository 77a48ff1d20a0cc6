use alkaa::icons::IconService;
use alkaa::ui::components::BottomNavComponent;
use alkaa::ui::core::{Action, Component, HomeSection};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_default_section_is_tasks() {
    assert_eq!(HomeSection::default(), HomeSection::Tasks);
}

#[test]
fn test_all_sections_have_distinct_titles() {
    let titles: Vec<_> = HomeSection::ALL.iter().map(|s| s.title()).collect();
    assert_eq!(titles, ["Tasks", "Search", "Categories", "Settings"]);
}

#[test]
fn test_config_key_roundtrip() {
    for (key, section) in [
        ("tasks", HomeSection::Tasks),
        ("search", HomeSection::Search),
        ("categories", HomeSection::Categories),
        ("settings", HomeSection::Settings),
    ] {
        assert_eq!(HomeSection::from_config_key(key), Some(section));
    }
    assert_eq!(HomeSection::from_config_key("inbox"), None);
}

#[test]
fn test_digit_keys_select_every_section() {
    let mut nav = BottomNavComponent::new(HomeSection::Tasks, IconService::default());

    for (digit, section) in ['1', '2', '3', '4'].iter().zip(HomeSection::ALL) {
        let action = nav.handle_key_events(key(KeyCode::Char(*digit)));
        match action {
            Action::NavigateToSection(selected) => assert_eq!(selected, section),
            other => panic!("expected navigation, got {other:?}"),
        }
    }
}

#[test]
fn test_tab_cycles_through_sections_and_wraps() {
    let mut nav = BottomNavComponent::new(HomeSection::Tasks, IconService::default());

    let mut visited = vec![nav.current];
    for _ in 0..4 {
        match nav.handle_key_events(key(KeyCode::Tab)) {
            Action::NavigateToSection(next) => {
                nav.current = next;
                visited.push(next);
            }
            other => panic!("expected navigation, got {other:?}"),
        }
    }

    assert_eq!(
        visited,
        [
            HomeSection::Tasks,
            HomeSection::Search,
            HomeSection::Categories,
            HomeSection::Settings,
            HomeSection::Tasks,
        ]
    );
}

#[test]
fn test_unrelated_keys_do_not_navigate() {
    let mut nav = BottomNavComponent::new(HomeSection::Tasks, IconService::default());
    assert!(matches!(nav.handle_key_events(key(KeyCode::Char('x'))), Action::None));
}
