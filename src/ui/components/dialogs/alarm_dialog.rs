//! Alarm dialog: quick-set due times and repeat cadence for the loaded task.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::model::AlarmInterval;
use crate::ui::components::dialog_component::DialogComponent;
use crate::utils::datetime;

pub fn render(f: &mut Frame, area: Rect, dialog: &DialogComponent) {
    let dialog_area = centered_rect(60, 60, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Alarm")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let rows = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(6),
        Constraint::Length(2),
    ])
    .split(inner);

    // Current task and its alarm, straight from the latest detail snapshot
    let (title, due) = match &dialog.detail {
        Some(task) => (
            task.title.clone(),
            task.due_datetime
                .as_deref()
                .map(|value| datetime::format_relative(value, &dialog.time_format))
                .unwrap_or_else(|| "no alarm set".to_string()),
        ),
        None => ("(loading...)".to_string(), String::new()),
    };

    let header = Paragraph::new(vec![
        Line::from(Span::styled(title, Style::default().fg(Color::White))),
        Line::from(Span::styled(due, Style::default().fg(Color::Rgb(255, 165, 0)))),
    ]);
    f.render_widget(header, rows[0]);

    let repeat_title = Paragraph::new(Span::styled("Repeat:", Style::default().fg(Color::White)));
    f.render_widget(repeat_title, rows[1]);

    let items: Vec<ListItem<'_>> = AlarmInterval::ALL
        .iter()
        .enumerate()
        .map(|(index, interval)| {
            let marker = if index == dialog.selected_interval_index {
                "(o) "
            } else {
                "( ) "
            };
            let style = if index == dialog.selected_interval_index {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(
                format!("{marker}{}", interval.label()),
                style,
            )))
        })
        .collect();
    f.render_widget(List::new(items), rows[2]);

    let instructions =
        Paragraph::new("t: tonight  T: tomorrow  w: next week  j/k: cadence  Enter: apply  r: remove  Esc: close")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
    f.render_widget(instructions, rows[3]);
}
