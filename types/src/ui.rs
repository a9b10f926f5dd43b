//! Presentation-level types shared by the engine and the TUI.

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for icons.
    pub ascii_only: bool,
    /// Use the high-contrast palette regardless of display mode.
    pub high_contrast: bool,
    /// Skip toast slide-in animations.
    pub reduced_motion: bool,
}

/// The interactive control that currently has keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Display mode toggle in the header bar.
    ThemeToggle,
    /// "Create New Task" button in the action panel.
    #[default]
    CreateTask,
}

impl Focus {
    /// Focus order, top of the screen first.
    pub const ORDER: [Self; 2] = [Self::ThemeToggle, Self::CreateTask];

    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}
