//! The demo shell's state and actions.
//!
//! Two pieces of transient state: a task counter and the display mode. Both
//! actions are total; neither can fail.

use taskhub_types::{DisplayMode, Notification, TaskCounter};

use crate::notifications::NotificationSink;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoShell {
    counter: TaskCounter,
    display_mode: DisplayMode,
}

impl DemoShell {
    #[must_use]
    pub fn new(display_mode: DisplayMode) -> Self {
        Self {
            counter: TaskCounter::new(),
            display_mode,
        }
    }

    /// Record one more task and tell `sink` about it.
    ///
    /// Exactly one notification is emitted per call, carrying the new count.
    pub fn create_task(&mut self, sink: &mut dyn NotificationSink) {
        let number = self.counter.increment();
        tracing::info!(task = number, "Task created");
        sink.show(Notification::task_created(number));
    }

    pub fn toggle_display_mode(&mut self) {
        self.display_mode.toggle();
        tracing::debug!(mode = %self.display_mode, "Display mode toggled");
    }

    #[must_use]
    pub fn counter(&self) -> TaskCounter {
        self.counter
    }

    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }
}
