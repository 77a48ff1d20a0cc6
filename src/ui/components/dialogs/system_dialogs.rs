//! Help, logs, error and info dialogs.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;
use crate::logger::Logger;

const HELP_TEXT: &[&str] = &[
    "Navigation",
    "  Tab / 1-4     switch section",
    "  j/k or arrows move in the task list",
    "",
    "Tasks",
    "  space         toggle completion",
    "  a             create task",
    "  d             delete task",
    "  m             alarm settings",
    "",
    "Alarm dialog",
    "  t / T / w     quick-set alarm time",
    "  j/k + Enter   repeat cadence",
    "  r             remove alarm",
    "",
    "General",
    "  r             reload tasks",
    "  ?             this help",
    "  G             logs",
    "  q / Esc       quit",
];

pub fn render_help(f: &mut Frame, area: Rect) {
    let dialog_area = centered_rect(60, 70, area);
    f.render_widget(Clear, dialog_area);

    let lines: Vec<Line<'_>> = HELP_TEXT.iter().map(|line| Line::from(*line)).collect();
    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Help - press Esc to close")
            .title_alignment(Alignment::Center),
    );
    f.render_widget(help, dialog_area);
}

pub fn render_logs(f: &mut Frame, area: Rect, logger: &Logger) {
    let dialog_area = centered_rect(80, 70, area);
    f.render_widget(Clear, dialog_area);

    let logs = logger.get_logs();
    let lines: Vec<Line<'_>> = logs.iter().map(|entry| Line::from(entry.as_str())).collect();
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Logs - press Esc to close")
            .title_alignment(Alignment::Center),
    );
    f.render_widget(paragraph, dialog_area);
}

pub fn render_message(f: &mut Frame, area: Rect, title: &str, message: &str, color: Color) {
    let dialog_area = centered_rect(50, 25, area);
    f.render_widget(Clear, dialog_area);

    let paragraph = Paragraph::new(message)
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center)
                .style(Style::default().fg(color)),
        );
    f.render_widget(paragraph, dialog_area);
}
