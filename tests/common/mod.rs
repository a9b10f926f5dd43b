//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use taskhub_engine::{App, DisplayMode, Settings, UiOptions};

/// An isolated app: no config file, no saved preference, no slide-in effects.
pub fn app_in(display_mode: DisplayMode) -> App {
    App::with_settings(Settings {
        display_mode,
        ui_options: UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        },
        ..Settings::default()
    })
}

/// Render one frame and return the screen as text, one line per row.
pub fn render(app: &App, width: u16, height: u16) -> String {
    let mut terminal =
        Terminal::new(TestBackend::new(width, height)).expect("failed to create terminal");
    terminal
        .draw(|frame| taskhub_tui::draw(frame, app))
        .expect("failed to draw");
    screen_text(terminal.backend().buffer())
}

pub fn screen_text(buffer: &Buffer) -> String {
    buffer
        .content
        .chunks(usize::from(buffer.area.width))
        .map(|row| {
            row.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn toast_messages(app: &App) -> Vec<String> {
    app.toasts()
        .visible()
        .iter()
        .map(|toast| toast.notification().message.clone())
        .collect()
}
