//! Icon service for the glyphs used across the UI.
//!
//! Icons come in three themes so the app stays usable on terminals without
//! emoji or wide-glyph support.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Unicode
    }
}

/// Glyphs for the bottom navigation sections.
#[derive(Debug, Clone)]
struct SectionIcons {
    tasks: &'static str,
    search: &'static str,
    categories: &'static str,
    settings: &'static str,
}

/// Glyphs for task rows.
#[derive(Debug, Clone)]
struct TaskIcons {
    pending: &'static str,
    completed: &'static str,
    alarm: &'static str,
    repeating: &'static str,
}

/// Resolves glyphs for the current theme.
#[derive(Debug, Clone)]
pub struct IconService {
    sections: SectionIcons,
    tasks: TaskIcons,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    pub fn new(theme: IconTheme) -> Self {
        match theme {
            IconTheme::Emoji => Self {
                sections: SectionIcons {
                    tasks: "📝",
                    search: "🔍",
                    categories: "🏷️",
                    settings: "⚙️",
                },
                tasks: TaskIcons {
                    pending: "⬜",
                    completed: "✅",
                    alarm: "⏰",
                    repeating: "🔁",
                },
            },
            IconTheme::Unicode => Self {
                sections: SectionIcons {
                    tasks: "☰",
                    search: "⌕",
                    categories: "◧",
                    settings: "⚙",
                },
                tasks: TaskIcons {
                    pending: "[ ]",
                    completed: "[x]",
                    alarm: "♪",
                    repeating: "↻",
                },
            },
            IconTheme::Ascii => Self {
                sections: SectionIcons {
                    tasks: "=",
                    search: "?",
                    categories: "#",
                    settings: "*",
                },
                tasks: TaskIcons {
                    pending: "[ ]",
                    completed: "[x]",
                    alarm: "!",
                    repeating: "~",
                },
            },
        }
    }

    pub fn section_tasks(&self) -> &'static str {
        self.sections.tasks
    }

    pub fn section_search(&self) -> &'static str {
        self.sections.search
    }

    pub fn section_categories(&self) -> &'static str {
        self.sections.categories
    }

    pub fn section_settings(&self) -> &'static str {
        self.sections.settings
    }

    pub fn task_pending(&self) -> &'static str {
        self.tasks.pending
    }

    pub fn task_completed(&self) -> &'static str {
        self.tasks.completed
    }

    pub fn alarm(&self) -> &'static str {
        self.tasks.alarm
    }

    pub fn repeating(&self) -> &'static str {
        self.tasks.repeating
    }
}
