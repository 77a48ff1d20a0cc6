//! Task creation dialog rendering.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::ui::components::dialog_component::DialogComponent;

pub fn render(f: &mut Frame, area: Rect, dialog: &DialogComponent) {
    let dialog_area = centered_rect(60, 30, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("New Task")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(inner);

    let input = Paragraph::new(Line::from(vec![
        Span::raw("Title: "),
        Span::styled(dialog.input_buffer.as_str(), Style::default().fg(Color::White)),
        Span::styled("█", Style::default().fg(Color::White)),
    ]));
    f.render_widget(input, rows[0]);

    let category_label = dialog
        .selected_category()
        .map(|category| category.name.clone())
        .unwrap_or_else(|| "none".to_string());
    let category = Paragraph::new(Line::from(vec![
        Span::raw("Category: "),
        Span::styled(category_label, Style::default().fg(Color::Cyan)),
    ]));
    f.render_widget(category, rows[1]);

    let instructions = Paragraph::new("Enter to create, Tab to cycle category, Esc to cancel")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(instructions, rows[3]);
}
