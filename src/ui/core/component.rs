use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Base trait every UI component implements.
///
/// Components turn key events into [`Action`]s, optionally consume actions
/// flowing through the hierarchy, and render from their last data snapshot.
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// Consume an action or pass it through for someone else to handle.
    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
