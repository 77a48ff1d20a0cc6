//! Delete confirmation dialog rendering.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::model::TaskWithCategory;

pub fn render(f: &mut Frame, area: Rect, task: &TaskWithCategory) {
    let dialog_area = centered_rect(50, 20, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Delete Task")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red));
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let rows = Layout::vertical([Constraint::Length(2), Constraint::Min(0), Constraint::Length(1)]).split(inner);

    let message = Paragraph::new(format!("Delete '{}'?", task.task.title))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White));
    f.render_widget(message, rows[0]);

    let instructions = Paragraph::new("y to delete, n or Esc to cancel")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(instructions, rows[2]);
}
