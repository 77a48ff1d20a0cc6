use crossterm::event::{poll, Event, KeyEvent};
use tokio::time::Duration;

/// Polls the terminal for input, falling back to ticks when idle.
///
/// Ticks are what drive the view-state channel polling, so they have to keep
/// arriving even when the user does nothing.
pub struct EventHandler {
    tick_rate: Duration,
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
        }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            match crossterm::event::read()? {
                Event::Key(key) => return Ok(EventType::Key(key)),
                Event::Resize(w, h) => return Ok(EventType::Resize(w, h)),
                _ => return Ok(EventType::Other),
            }
        }

        // No immediate event: wait one tick and let the caller poll channels
        tokio::time::sleep(self.tick_rate).await;
        Ok(EventType::Tick)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
