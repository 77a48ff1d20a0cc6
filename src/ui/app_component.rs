//! Application root: the home screen.
//!
//! Owns the section state machine, the child components, and the view-models.
//! The active section starts at the configured default and changes only
//! through explicit bottom-navigation selection.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use tokio::sync::watch;

use crate::alarm::StorageAlarmScheduler;
use crate::config::Config;
use crate::constants::{BODY_MIN_HEIGHT, BOTTOM_NAV_HEIGHT, TOP_BAR_HEIGHT};
use crate::entities::category;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::service::TaskService;
use crate::ui::components::{placeholder, BottomNavComponent, DialogComponent, TaskListComponent};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component, HomeSection,
};
use crate::viewmodel::{TaskAlarmViewModel, TaskDetailProvider, TaskListViewModel, TaskListViewState, ViewModelScope};

pub struct AppComponent {
    // Section state machine
    pub current_section: HomeSection,

    // Component composition
    pub task_list: TaskListComponent,
    bottom_nav: BottomNavComponent,
    dialog: DialogComponent,

    // View-models and their streams
    task_list_vm: TaskListViewModel,
    alarm_vm: TaskAlarmViewModel,
    detail_provider: TaskDetailProvider,
    state_rx: watch::Receiver<TaskListViewState>,
    detail_rx: watch::Receiver<Option<crate::entities::task::Model>>,
    categories_tx: Arc<watch::Sender<Vec<category::Model>>>,
    categories_rx: watch::Receiver<Vec<category::Model>>,

    // Services
    service: TaskService,
    scope: ViewModelScope,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(service: TaskService, config: &Config) -> Self {
        let icons = IconService::new(config.icon_theme().unwrap_or_default());
        let current_section =
            HomeSection::from_config_key(&config.ui.default_section).unwrap_or_default();

        let detail_provider = TaskDetailProvider::new(service.clone());
        let scheduler = Arc::new(StorageAlarmScheduler::new(service.clone()));

        let mut task_list_vm = TaskListViewModel::new(service.clone());
        let alarm_vm = TaskAlarmViewModel::new(
            detail_provider.clone(),
            scheduler,
            task_list_vm.refresher(),
        );
        let state_rx = task_list_vm.subscribe();
        let detail_rx = detail_provider.task_data();

        let (categories_tx, categories_rx) = watch::channel(Vec::new());

        let mut task_list = TaskListComponent::new();
        task_list.icons = icons.clone();
        task_list.show_descriptions = config.display.show_descriptions;
        task_list.time_format = config.display.time_format.clone();
        // Seed from the channel's initial value so the first frame shows
        // the loading state, not an empty list
        task_list.update_data(task_list_vm.current_state());
        task_list_vm.load_tasks();

        let mut dialog = DialogComponent::new();
        dialog.time_format = config.display.time_format.clone();

        let mut app = Self {
            current_section,
            task_list,
            bottom_nav: BottomNavComponent::new(current_section, icons),
            dialog,
            task_list_vm,
            alarm_vm,
            detail_provider,
            state_rx,
            detail_rx,
            categories_tx: Arc::new(categories_tx),
            categories_rx,
            service,
            scope: ViewModelScope::new(),
            logger: Logger::global(),
            should_quit: false,
        };
        app.load_categories();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    /// Number of background operations still running across all scopes.
    pub fn pending_operations(&mut self) -> usize {
        self.scope.cleanup_finished();
        self.scope.task_count()
            + self.task_list_vm.pending_operations()
            + self.alarm_vm.pending_operations()
    }

    fn load_categories(&mut self) {
        let service = self.service.clone();
        let categories_tx = self.categories_tx.clone();
        self.scope.spawn(async move {
            let categories = service.categories().await?;
            categories_tx.send_replace(categories);
            Ok(())
        });
    }

    /// Drain the view-state channels; returns whether anything changed.
    ///
    /// Runs on every tick: one emission in, one re-render out.
    pub fn poll_view_state(&mut self) -> bool {
        let mut changed = false;

        if self.state_rx.has_changed().unwrap_or(false) {
            let state = self.state_rx.borrow_and_update().clone();
            self.task_list.update_data(state);
            changed = true;
        }

        if self.detail_rx.has_changed().unwrap_or(false) {
            let detail = self.detail_rx.borrow_and_update().clone();
            self.dialog.set_detail(detail);
            changed = true;
        }

        if self.categories_rx.has_changed().unwrap_or(false) {
            let categories = self.categories_rx.borrow_and_update().clone();
            self.dialog.update_data(categories);
            changed = true;
        }

        changed
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('r') => Action::Refresh,
            _ => Action::None,
        }
    }

    /// Process a key press through the component hierarchy.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = if self.dialog.is_visible() {
            // Dialog has priority when visible
            self.dialog.handle_key_events(key)
        } else {
            let nav_action = self.bottom_nav.handle_key_events(key);
            if !matches!(nav_action, Action::None) {
                nav_action
            } else {
                let list_action = if self.current_section == HomeSection::Tasks {
                    self.task_list.handle_key_events(key)
                } else {
                    Action::None
                };
                if !matches!(list_action, Action::None) {
                    list_action
                } else {
                    self.handle_global_key(key)
                }
            }
        };

        let action = self.task_list.update(action);
        self.handle_action(action);
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::NavigateToSection(section) => {
                self.logger
                    .log(format!("Navigation: section changed to {}", section.title()));
                self.current_section = section;
                self.bottom_nav.current = section;
            }
            Action::ToggleTask(item) => {
                self.task_list_vm.update_task_status(item);
            }
            Action::ActivateTask(item) => {
                // Row activation has no behavior yet; selection only
                self.logger
                    .log(format!("Task activated (no-op): '{}'", item.task.title));
            }
            Action::CreateTask { title, category_uuid } => {
                self.task_list_vm.create_task(title, category_uuid);
                self.dialog.hide();
            }
            Action::DeleteTask(uuid) => {
                self.task_list_vm.delete_task(uuid);
                self.dialog.hide();
            }
            // Alarm futures republish the list themselves, after the persist
            Action::SetAlarm(at) => {
                self.alarm_vm.set_alarm(at);
            }
            Action::SetRepeating(interval) => {
                self.alarm_vm.set_repeating(interval);
            }
            Action::RemoveAlarm => {
                self.alarm_vm.remove_alarm();
            }
            Action::Refresh => {
                self.task_list_vm.load_tasks();
                self.load_categories();
            }
            Action::ShowDialog(dialog_type) => {
                if let DialogType::Alarm { task_uuid } = &dialog_type {
                    let provider = self.detail_provider.clone();
                    let task_uuid = *task_uuid;
                    self.scope.spawn(async move { provider.load_task(&task_uuid).await });
                }
                self.dialog.show(dialog_type);
            }
            Action::HideDialog => {
                self.dialog.hide();
                self.detail_provider.clear();
            }
            Action::NextTask | Action::PreviousTask | Action::None => {}
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_key(key);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let rows = Layout::vertical([
            Constraint::Length(TOP_BAR_HEIGHT),
            Constraint::Min(BODY_MIN_HEIGHT),
            Constraint::Length(BOTTOM_NAV_HEIGHT),
        ])
        .split(rect);

        // Title bar text derives from the active section
        let title = Paragraph::new(self.current_section.title())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(title, rows[0]);

        // Body is a pure mapping from section to sub-screen
        match self.current_section {
            HomeSection::Tasks => self.task_list.render(f, rows[1]),
            section => placeholder::render(f, rows[1], section),
        }

        self.bottom_nav.render(f, rows[2]);

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
