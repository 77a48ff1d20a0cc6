//! Dialog rendering helpers, one module per dialog family.

pub mod alarm_dialog;
pub mod delete_confirmation_dialog;
pub mod system_dialogs;
pub mod task_creation_dialog;

use ratatui::layout::{Constraint, Layout, Rect};

/// Centered rect sized as a percentage of the containing area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1])[1]
}
