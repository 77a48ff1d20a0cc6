//! Bottom navigation bar over the four home sections.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::icons::IconService;
use crate::ui::core::{actions::Action, Component, HomeSection};

/// Selected-entry tint; unselected entries use [`UNSELECTED_TINT`].
const SELECTED_TINT: Color = Color::Cyan;
const UNSELECTED_TINT: Color = Color::DarkGray;

pub struct BottomNavComponent {
    pub current: HomeSection,
    pub icons: IconService,
}

impl BottomNavComponent {
    pub fn new(initial: HomeSection, icons: IconService) -> Self {
        Self {
            current: initial,
            icons,
        }
    }

    fn next_section(&self) -> HomeSection {
        let position = HomeSection::ALL
            .iter()
            .position(|section| *section == self.current)
            .unwrap_or(0);
        HomeSection::ALL[(position + 1) % HomeSection::ALL.len()]
    }
}

impl Component for BottomNavComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => Action::NavigateToSection(self.next_section()),
            KeyCode::Char('1') => Action::NavigateToSection(HomeSection::Tasks),
            KeyCode::Char('2') => Action::NavigateToSection(HomeSection::Search),
            KeyCode::Char('3') => Action::NavigateToSection(HomeSection::Categories),
            KeyCode::Char('4') => Action::NavigateToSection(HomeSection::Settings),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let bar = Block::default().borders(Borders::TOP);
        let inner = bar.inner(rect);
        f.render_widget(bar, rect);

        let columns = Layout::horizontal(
            HomeSection::ALL.map(|_| Constraint::Ratio(1, HomeSection::ALL.len() as u32)),
        )
        .split(inner);

        for (section, column) in HomeSection::ALL.into_iter().zip(columns.iter()) {
            let tint = if section == self.current {
                Style::default().fg(SELECTED_TINT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(UNSELECTED_TINT)
            };

            let entry = Paragraph::new(Line::from(Span::styled(
                format!("{} {}", section.icon(&self.icons), section.title()),
                tint,
            )))
            .alignment(Alignment::Center);
            f.render_widget(entry, *column);
        }
    }
}
