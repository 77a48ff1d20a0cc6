//! Task list screen.
//!
//! Renders the joined task/category records from the latest view-state
//! snapshot. The component never mutates its copy of the list: toggles are
//! forwarded to the view-model and a fresh snapshot comes back through the
//! watch channel.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::constants::EMPTY_TASK_LIST;
use crate::icons::IconService;
use crate::model::TaskWithCategory;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crate::utils::color::{parse_hex_color, RIBBON_DEFAULT};
use crate::utils::datetime;
use crate::viewmodel::TaskListViewState;

pub struct TaskListComponent {
    pub state: TaskListViewState,
    pub selected_index: usize,
    pub list_state: ListState,
    pub icons: IconService,
    pub show_descriptions: bool,
    pub time_format: String,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            state: TaskListViewState::default(),
            selected_index: 0,
            list_state: ListState::default(),
            icons: IconService::default(),
            show_descriptions: false,
            time_format: datetime::DEFAULT_TIME_FORMAT.to_string(),
        }
    }

    /// Replace the rendered snapshot with a freshly emitted view-state.
    pub fn update_data(&mut self, state: TaskListViewState) {
        self.state = state;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.state.items.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.state.items.len() {
                self.selected_index = self.state.items.len().saturating_sub(1);
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn get_selected(&self) -> Option<&TaskWithCategory> {
        self.state.items.get(self.selected_index)
    }

    /// Ribbon color for a row: the category's color, or the background
    /// default when the task has no category.
    pub fn ribbon_color(item: &TaskWithCategory) -> Color {
        item.category
            .as_ref()
            .map(|category| parse_hex_color(&category.color))
            .unwrap_or(RIBBON_DEFAULT)
    }

    /// Relative due text for a row; `None` when the task has no due date.
    pub fn due_text(item: &TaskWithCategory, time_format: &str) -> Option<String> {
        item.task
            .due_datetime
            .as_deref()
            .map(|value| datetime::format_relative(value, time_format))
    }

    /// Single-line title, truncated with an ellipsis when too wide.
    fn truncate_title(title: &str, max_width: usize) -> String {
        if max_width == 0 || title.chars().count() <= max_width {
            return title.to_string();
        }
        let mut truncated: String = title.chars().take(max_width.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    }

    fn create_task_item(&self, item: &TaskWithCategory, max_width: usize) -> ListItem<'_> {
        let task = &item.task;
        let mut line_spans = Vec::new();

        // Category ribbon
        line_spans.push(Span::styled(
            "▌ ",
            Style::default().fg(Self::ribbon_color(item)),
        ));

        // Checkbox bound to completion state
        let checkbox = if task.completed {
            self.icons.task_completed()
        } else {
            self.icons.task_pending()
        };
        let checkbox_style = if task.completed {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        line_spans.push(Span::styled(format!("{checkbox} "), checkbox_style));

        // Title, one line with ellipsis
        let title_style = if task.completed {
            Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::White)
        };
        line_spans.push(Span::styled(
            Self::truncate_title(&task.title, max_width),
            title_style,
        ));

        // Relative due date, omitted when absent
        if let Some(due) = Self::due_text(item, &self.time_format) {
            line_spans.push(Span::raw(" "));
            line_spans.push(Span::styled(due, Style::default().fg(Color::Rgb(255, 165, 0))));
        }

        if task.is_repeating {
            line_spans.push(Span::raw(" "));
            line_spans.push(Span::styled(
                self.icons.repeating(),
                Style::default().fg(Color::Cyan),
            ));
        }

        let mut lines = vec![Line::from(line_spans)];
        if self.show_descriptions {
            if let Some(description) = &task.description {
                lines.push(Line::from(Span::styled(
                    format!("      {description}"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }

        ListItem::new(lines)
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Char(' ') => {
                // The record goes to the view-model exactly as rendered
                if let Some(item) = self.get_selected() {
                    Action::ToggleTask(item.clone())
                } else {
                    Action::None
                }
            }
            KeyCode::Enter => {
                if let Some(item) = self.get_selected() {
                    Action::ActivateTask(item.clone())
                } else {
                    Action::None
                }
            }
            KeyCode::Char('a') => Action::ShowDialog(DialogType::TaskCreation),
            KeyCode::Char('d') => {
                if let Some(item) = self.get_selected() {
                    Action::ShowDialog(DialogType::DeleteConfirmation { task: item.clone() })
                } else {
                    Action::None
                }
            }
            KeyCode::Char('m') => {
                if let Some(item) = self.get_selected() {
                    Action::ShowDialog(DialogType::Alarm {
                        task_uuid: item.task.uuid,
                    })
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.state.items.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.state.items.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTask => {
                if !self.state.items.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.state.items.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Tasks");

        if self.state.items.is_empty() {
            let message = if self.state.loading {
                "Loading tasks..."
            } else {
                EMPTY_TASK_LIST
            };
            let empty_list = List::new(vec![ListItem::new(message)]).block(block);
            f.render_stateful_widget(empty_list, rect, &mut self.list_state);
            return;
        }

        let max_width = rect.width.saturating_sub(10) as usize;
        let items: Vec<ListItem<'_>> = self
            .state
            .items
            .iter()
            .map(|item| self.create_task_item(item, max_width))
            .collect();
        let mut list_state = self.list_state.clone();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(list, rect, &mut list_state);
        self.list_state = list_state;
    }
}
