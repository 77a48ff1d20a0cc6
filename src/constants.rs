//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const EMPTY_TASK_LIST: &str = "No tasks yet. Press 'a' to create one.";
pub const PLACEHOLDER_SECTION: &str = "This section is not available yet.";

// Log Messages
pub const LOG_TASKS_LOADED: &str = "Tasks loaded from storage";
pub const LOG_TASK_TOGGLED: &str = "Task completion toggled";
pub const LOG_ALARM_SCHEDULED: &str = "Alarm schedule requested";
pub const LOG_ALARM_REMOVED: &str = "Alarm removal requested";

// UI Layout Constants
/// Height of the top title bar in rows
pub const TOP_BAR_HEIGHT: u16 = 1;
/// Height of the bottom navigation bar in rows
pub const BOTTOM_NAV_HEIGHT: u16 = 3;
/// Minimum body height to keep the task list usable
pub const BODY_MIN_HEIGHT: u16 = 5;
