//! Placeholder body for the sections that have no screen yet.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants::PLACEHOLDER_SECTION;
use crate::ui::core::HomeSection;

/// Search, Categories and Settings bodies are deliberately not built yet;
/// this keeps the navigation honest without pretending content exists.
pub fn render(f: &mut Frame, rect: Rect, section: HomeSection) {
    let block = Block::default().borders(Borders::ALL).title(section.title());
    let inner = block.inner(rect);
    f.render_widget(block, rect);

    let rows = Layout::vertical([
        Constraint::Percentage(45),
        Constraint::Length(1),
        Constraint::Percentage(45),
    ])
    .split(inner);

    let message = Paragraph::new(Line::from(Span::styled(
        PLACEHOLDER_SECTION,
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    f.render_widget(message, rows[1]);
}
