//! Full-frame rendering driven by key events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskhub_engine::{App, DisplayMode, Focus, Settings, UiOptions};
use taskhub_tui::handle_key;

use crate::common::{app_in, render};

fn press(app: &mut App, code: KeyCode) -> bool {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
}

/// The value printed under the "Pending Tasks" label. The label is indented
/// past its icon and a space; the value is not.
fn pending_value(screen: &str) -> Option<String> {
    let lines: Vec<&str> = screen.lines().collect();
    let row = lines.iter().position(|line| line.contains("Pending Tasks"))?;
    let byte = lines[row].find("Pending Tasks")?;
    let column = lines[row][..byte].chars().count().saturating_sub(2);
    let below: String = lines.get(row + 1)?.chars().skip(column).collect();
    below.split_whitespace().next().map(str::to_string)
}

#[test]
fn pending_card_tracks_key_presses() {
    let mut app = app_in(DisplayMode::Light);
    assert_eq!(pending_value(&render(&app, 100, 40)).as_deref(), Some("0"));

    for _ in 0..3 {
        press(&mut app, KeyCode::Char('n'));
    }
    let screen = render(&app, 100, 40);
    assert_eq!(pending_value(&screen).as_deref(), Some("3"));
    assert!(screen.contains("Task #3 has been created successfully!"));
}

#[test]
fn theme_key_swaps_header_icon() {
    let mut app = app_in(DisplayMode::Light);
    let light = render(&app, 100, 40);
    assert!(light.contains('☾'), "light header:\n{light}");

    press(&mut app, KeyCode::Char('t'));
    let dark = render(&app, 100, 40);
    assert!(dark.contains('☀'), "dark header:\n{dark}");
    assert!(!dark.contains('☾'));
}

#[test]
fn ascii_only_avoids_unicode_icons() {
    let mut app = App::with_settings(Settings {
        ui_options: UiOptions {
            ascii_only: true,
            reduced_motion: true,
            ..UiOptions::default()
        },
        ..Settings::default()
    });
    press(&mut app, KeyCode::Char('n'));

    let screen = render(&app, 100, 40);
    for glyph in ['↯', '◷', '✓', '☀', '☾', '▸'] {
        assert!(!screen.contains(glyph), "found {glyph:?} in:\n{screen}");
    }
    assert!(screen.contains("Task Created"));
}

#[test]
fn dismissed_toasts_leave_the_screen() {
    let mut app = app_in(DisplayMode::Dark);
    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Char('n'));
    press(&mut app, KeyCode::Char('x'));

    let screen = render(&app, 100, 40);
    assert!(!screen.contains("Task Created"));
    assert_eq!(pending_value(&screen).as_deref(), Some("2"));
}

#[test]
fn focus_cycle_reaches_the_toggle_and_back() {
    let mut app = app_in(DisplayMode::Light);
    assert_eq!(app.focus(), Focus::CreateTask);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.display_mode(), DisplayMode::Dark);
    assert_eq!(app.counter().get(), 0);

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.counter().get(), 1);
}

#[test]
fn narrow_terminal_still_shows_every_card() {
    let app = app_in(DisplayMode::Light);
    let screen = render(&app, 60, 50);
    for label in ["Pending Tasks", "Completed", "Real-time Events"] {
        assert!(screen.contains(label), "missing {label:?} in:\n{screen}");
    }
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = app_in(DisplayMode::Dark);
    press(&mut app, KeyCode::Char('n'));
    for (width, height) in [(1, 1), (10, 3), (20, 8)] {
        let _ = render(&app, width, height);
    }
}

#[test]
fn narrow_toast_grows_to_fit_the_message() {
    let mut app = app_in(DisplayMode::Light);
    press(&mut app, KeyCode::Char('n'));

    for width in [40, 30] {
        let screen = render(&app, width, 40);
        assert!(screen.contains("successfully!"), "clipped at {width}:\n{screen}");
    }
}
