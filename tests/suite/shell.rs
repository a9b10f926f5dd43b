//! Counter, notification and display-mode behavior through the public API.

use insta::assert_snapshot;
use taskhub_engine::{DemoShell, DisplayMode, NotificationSink};
use taskhub_types::{AccentColor, Icon, Notification};

use crate::common::{app_in, toast_messages};

/// Sink that only remembers titles and messages, in arrival order.
#[derive(Default)]
struct Transcript(Vec<String>);

impl NotificationSink for Transcript {
    fn show(&mut self, notification: Notification) {
        self.0
            .push(format!("{}: {}", notification.title, notification.message));
    }
}

#[test]
fn initial_state_is_empty() {
    let app = app_in(DisplayMode::Light);
    assert_eq!(app.counter().get(), 0);
    assert_eq!(app.toasts().shown_total(), 0);
    assert!(app.toasts().visible().is_empty());
}

#[test]
fn counter_equals_number_of_creations() {
    for n in [0u64, 1, 7, 64] {
        let mut app = app_in(DisplayMode::Light);
        for _ in 0..n {
            app.create_task();
        }
        assert_eq!(app.counter().get(), n);
        assert_eq!(app.toasts().shown_total(), n);
    }
}

#[test]
fn one_creation_emits_task_one() {
    let mut app = app_in(DisplayMode::Light);
    app.create_task();

    assert_eq!(app.counter().get(), 1);
    let toast = &app.toasts().visible()[0];
    assert_eq!(toast.notification().title, "Task Created");
    assert!(toast.notification().message.contains("Task #1"));
    assert_eq!(toast.notification().color, AccentColor::Teal);
    assert_eq!(toast.notification().icon, Icon::Check);
}

#[test]
fn three_creations_emit_in_order() {
    let mut app = app_in(DisplayMode::Light);
    for _ in 0..3 {
        app.create_task();
    }

    assert_eq!(app.counter().get(), 3);
    assert_snapshot!(toast_messages(&app).join("\n"), @r"
    Task #1 has been created successfully!
    Task #2 has been created successfully!
    Task #3 has been created successfully!
    ");
}

#[test]
fn shell_reports_to_any_sink() {
    let mut shell = DemoShell::new(DisplayMode::Dark);
    let mut transcript = Transcript::default();
    shell.create_task(&mut transcript);
    shell.create_task(&mut transcript);

    assert_eq!(
        transcript.0,
        vec![
            "Task Created: Task #1 has been created successfully!".to_string(),
            "Task Created: Task #2 has been created successfully!".to_string(),
        ]
    );
}

#[test]
fn toggle_is_an_involution_from_either_default() {
    for initial in [DisplayMode::Light, DisplayMode::Dark] {
        let mut app = app_in(initial);
        app.toggle_display_mode();
        assert_ne!(app.display_mode(), initial);
        app.toggle_display_mode();
        assert_eq!(app.display_mode(), initial);
    }
}

#[test]
fn toggle_does_not_notify() {
    let mut app = app_in(DisplayMode::Light);
    app.toggle_display_mode();
    assert_eq!(app.toasts().shown_total(), 0);
    assert_eq!(app.counter().get(), 0);
}
