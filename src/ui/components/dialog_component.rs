//! Modal dialog component.
//!
//! One component owns whichever dialog is currently open. Specific rendering
//! lives in the [`dialogs`](crate::ui::components::dialogs) modules; this
//! struct keeps the shared state (input buffer, selections, the latest task
//! detail snapshot) and turns key events into actions.

use chrono::{Local, NaiveDateTime, NaiveTime, Weekday};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, style::Color, Frame};

use crate::entities::{category, task};
use crate::logger::Logger;
use crate::model::AlarmInterval;
use crate::ui::components::dialogs::{
    alarm_dialog, delete_confirmation_dialog, system_dialogs, task_creation_dialog,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::utils::datetime;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub input_buffer: String,
    pub categories: Vec<category::Model>,
    /// Creation dialog: index into `categories`, `None` for "no category".
    pub selected_category_index: Option<usize>,
    /// Alarm dialog: index into [`AlarmInterval::ALL`].
    pub selected_interval_index: usize,
    /// Latest snapshot of the task the alarm dialog operates on.
    pub detail: Option<task::Model>,
    pub time_format: String,
    logger: Logger,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            input_buffer: String::new(),
            categories: Vec::new(),
            selected_category_index: None,
            selected_interval_index: 0,
            detail: None,
            time_format: datetime::DEFAULT_TIME_FORMAT.to_string(),
            logger: Logger::global(),
        }
    }

    pub fn update_data(&mut self, categories: Vec<category::Model>) {
        self.categories = categories;
        if let Some(index) = self.selected_category_index {
            if index >= self.categories.len() {
                self.selected_category_index = None;
            }
        }
    }

    /// Push the latest detail snapshot; keeps the cadence selection in sync.
    pub fn set_detail(&mut self, detail: Option<task::Model>) {
        if let Some(task) = &detail {
            let current = task
                .alarm_interval
                .as_deref()
                .and_then(|raw| raw.parse::<AlarmInterval>().ok())
                .unwrap_or(AlarmInterval::Never);
            self.selected_interval_index = AlarmInterval::ALL
                .iter()
                .position(|interval| *interval == current)
                .unwrap_or(0);
        }
        self.detail = detail;
    }

    pub fn show(&mut self, dialog_type: DialogType) {
        self.input_buffer.clear();
        self.selected_category_index = None;
        if !matches!(dialog_type, DialogType::Alarm { .. }) {
            self.detail = None;
            self.selected_interval_index = 0;
        }
        self.dialog_type = Some(dialog_type);
    }

    pub fn hide(&mut self) {
        self.dialog_type = None;
        self.input_buffer.clear();
        self.detail = None;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn selected_category(&self) -> Option<&category::Model> {
        self.selected_category_index.and_then(|index| self.categories.get(index))
    }

    fn cycle_category(&mut self) {
        self.selected_category_index = match self.selected_category_index {
            None if self.categories.is_empty() => None,
            None => Some(0),
            Some(index) if index + 1 < self.categories.len() => Some(index + 1),
            Some(_) => None,
        };
    }

    fn at(date: chrono::NaiveDate, hour: u32) -> NaiveDateTime {
        date.and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default())
    }

    /// Today at 20:00.
    fn tonight() -> NaiveDateTime {
        Self::at(Local::now().date_naive(), 20)
    }

    /// Tomorrow at 09:00.
    fn tomorrow_morning() -> NaiveDateTime {
        Self::at(Local::now().date_naive() + chrono::Duration::days(1), 9)
    }

    /// Next Monday at 09:00.
    fn next_week() -> NaiveDateTime {
        Self::at(datetime::next_weekday(Local::now().date_naive(), Weekday::Mon), 9)
    }

    fn handle_task_creation_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => {
                if self.input_buffer.trim().is_empty() {
                    return Action::None;
                }
                let title = self.input_buffer.trim().to_string();
                let category_uuid = self.selected_category().map(|category| category.uuid);
                self.logger.log(format!("Dialog: creating task '{title}'"));
                Action::CreateTask { title, category_uuid }
            }
            KeyCode::Tab => {
                self.cycle_category();
                Action::None
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
                Action::None
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
                Action::None
            }
            KeyCode::Esc => Action::HideDialog,
            _ => Action::None,
        }
    }

    fn handle_alarm_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('t') => Action::SetAlarm(Self::tonight()),
            KeyCode::Char('T') => Action::SetAlarm(Self::tomorrow_morning()),
            KeyCode::Char('w') => Action::SetAlarm(Self::next_week()),
            KeyCode::Char('r') => Action::RemoveAlarm,
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_interval_index = (self.selected_interval_index + 1) % AlarmInterval::ALL.len();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_interval_index = if self.selected_interval_index == 0 {
                    AlarmInterval::ALL.len() - 1
                } else {
                    self.selected_interval_index - 1
                };
                Action::None
            }
            KeyCode::Enter => Action::SetRepeating(AlarmInterval::ALL[self.selected_interval_index]),
            KeyCode::Esc => Action::HideDialog,
            _ => Action::None,
        }
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return Action::None;
        };

        match dialog_type {
            DialogType::TaskCreation => self.handle_task_creation_key(key),
            DialogType::DeleteConfirmation { task } => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => Action::DeleteTask(task.task.uuid),
                KeyCode::Char('n') | KeyCode::Esc => Action::HideDialog,
                _ => Action::None,
            },
            DialogType::Alarm { .. } => self.handle_alarm_key(key),
            DialogType::Help | DialogType::Logs | DialogType::Error(_) | DialogType::Info(_) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Action::HideDialog,
                _ => Action::None,
            },
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match &self.dialog_type {
            Some(DialogType::TaskCreation) => task_creation_dialog::render(f, rect, self),
            Some(DialogType::DeleteConfirmation { task }) => delete_confirmation_dialog::render(f, rect, task),
            Some(DialogType::Alarm { .. }) => alarm_dialog::render(f, rect, self),
            Some(DialogType::Help) => system_dialogs::render_help(f, rect),
            Some(DialogType::Logs) => system_dialogs::render_logs(f, rect, &self.logger),
            Some(DialogType::Error(message)) => system_dialogs::render_message(f, rect, "Error", message, Color::Red),
            Some(DialogType::Info(message)) => system_dialogs::render_message(f, rect, "Info", message, Color::Green),
            None => {}
        }
    }
}
