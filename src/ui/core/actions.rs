use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::icons::IconService;
use crate::model::{AlarmInterval, TaskWithCategory};

/// Top-level destinations reachable from the bottom navigation bar.
///
/// The active member is transient UI state: it starts at the configured
/// default and changes only through explicit selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeSection {
    #[default]
    Tasks,
    Search,
    Categories,
    Settings,
}

impl HomeSection {
    /// All sections, in bottom-bar order.
    pub const ALL: [HomeSection; 4] = [
        HomeSection::Tasks,
        HomeSection::Search,
        HomeSection::Categories,
        HomeSection::Settings,
    ];

    /// Title shown in the top bar and under the nav icon.
    pub fn title(&self) -> &'static str {
        match self {
            HomeSection::Tasks => "Tasks",
            HomeSection::Search => "Search",
            HomeSection::Categories => "Categories",
            HomeSection::Settings => "Settings",
        }
    }

    /// Glyph shown in the bottom navigation bar.
    pub fn icon(&self, icons: &IconService) -> &'static str {
        match self {
            HomeSection::Tasks => icons.section_tasks(),
            HomeSection::Search => icons.section_search(),
            HomeSection::Categories => icons.section_categories(),
            HomeSection::Settings => icons.section_settings(),
        }
    }

    /// Resolve a config key like "tasks" into a section.
    pub fn from_config_key(value: &str) -> Option<Self> {
        match value {
            "tasks" => Some(HomeSection::Tasks),
            "search" => Some(HomeSection::Search),
            "categories" => Some(HomeSection::Categories),
            "settings" => Some(HomeSection::Settings),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    NavigateToSection(HomeSection),
    NextTask,
    PreviousTask,

    // Task operations
    ToggleTask(TaskWithCategory),
    ActivateTask(TaskWithCategory),
    CreateTask {
        title: String,
        category_uuid: Option<Uuid>,
    },
    DeleteTask(Uuid),

    // Alarm operations, against the task loaded in the detail provider
    SetAlarm(NaiveDateTime),
    SetRepeating(AlarmInterval),
    RemoveAlarm,

    // Data refresh
    Refresh,

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone)]
pub enum DialogType {
    TaskCreation,
    DeleteConfirmation {
        task: TaskWithCategory,
    },
    Alarm {
        task_uuid: Uuid,
    },
    Help,
    Logs,
    Error(String),
    Info(String),
}
