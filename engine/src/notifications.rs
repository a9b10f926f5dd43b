//! Notification delivery and on-screen toasts.
//!
//! Actions hand a [`Notification`] to a [`NotificationSink`] and move on; the sink
//! owns whatever happens next. The interactive app uses [`ToastStack`], which turns
//! each notification into a timed toast with a bounded number visible at once.

use std::collections::VecDeque;
use std::time::Duration;

use taskhub_types::Notification;

use crate::animation::EffectTimer;

/// Fire-and-forget receiver of user-facing notifications.
///
/// There is no acknowledgement and no retry: once `show` returns the caller
/// has no further say in how (or whether) the notification is displayed.
pub trait NotificationSink {
    fn show(&mut self, notification: Notification);
}

/// Recording sink, used wherever notifications only need to be collected.
impl NotificationSink for Vec<Notification> {
    fn show(&mut self, notification: Notification) {
        self.push(notification);
    }
}

pub const DEFAULT_AUTO_CLOSE: Duration = Duration::from_millis(4000);
pub const DEFAULT_ENTER_DURATION: Duration = Duration::from_millis(200);
pub const DEFAULT_TOAST_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastSettings {
    /// How long a toast stays on screen once visible.
    pub auto_close: Duration,
    /// Slide-in duration. Zero disables the enter effect.
    pub enter_duration: Duration,
    /// Maximum visible toasts; the rest wait in FIFO order. Always at least 1.
    pub limit: usize,
}

impl Default for ToastSettings {
    fn default() -> Self {
        Self {
            auto_close: DEFAULT_AUTO_CLOSE,
            enter_duration: DEFAULT_ENTER_DURATION,
            limit: DEFAULT_TOAST_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

impl ToastId {
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A notification currently on screen.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    notification: Notification,
    lifetime: EffectTimer,
    enter: Option<EffectTimer>,
}

impl Toast {
    fn new(id: ToastId, notification: Notification, settings: ToastSettings) -> Self {
        let enter =
            (!settings.enter_duration.is_zero()).then(|| EffectTimer::new(settings.enter_duration));
        Self {
            id,
            notification,
            lifetime: EffectTimer::new(settings.auto_close),
            enter,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Progress of the slide-in effect, or `None` once it has settled.
    #[must_use]
    pub fn enter_progress(&self) -> Option<f32> {
        self.enter.as_ref().map(EffectTimer::progress)
    }

    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.lifetime.remaining()
    }

    fn advance(&mut self, delta: Duration) {
        self.lifetime.advance(delta);
        if let Some(enter) = self.enter.as_mut() {
            enter.advance(delta);
            if enter.is_finished() {
                self.enter = None;
            }
        }
    }
}

/// Bounded stack of visible toasts plus a FIFO overflow queue.
#[derive(Debug, Default)]
pub struct ToastStack {
    settings: ToastSettings,
    visible: Vec<Toast>,
    queued: VecDeque<(ToastId, Notification)>,
    next_id: u64,
    shown_total: u64,
}

impl ToastStack {
    #[must_use]
    pub fn new(settings: ToastSettings) -> Self {
        Self {
            settings: ToastSettings {
                limit: settings.limit.max(1),
                ..settings
            },
            ..Self::default()
        }
    }

    /// Visible toasts, oldest first.
    #[must_use]
    pub fn visible(&self) -> &[Toast] {
        &self.visible
    }

    #[must_use]
    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }

    /// Every notification ever accepted, including ones already closed.
    #[must_use]
    pub fn shown_total(&self) -> u64 {
        self.shown_total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.queued.is_empty()
    }

    /// Age every visible toast, drop the expired ones, and fill freed slots
    /// from the queue. Promoted toasts start their timers fresh.
    pub fn advance(&mut self, delta: Duration) {
        for toast in &mut self.visible {
            toast.advance(delta);
        }
        let before = self.visible.len();
        self.visible.retain(|toast| !toast.lifetime.is_finished());
        let expired = before - self.visible.len();
        if expired > 0 {
            tracing::debug!(expired, "Toasts auto-closed");
        }
        self.promote();
    }

    /// Close the newest visible toast. Returns its id if one was open.
    pub fn dismiss_latest(&mut self) -> Option<ToastId> {
        let toast = self.visible.pop()?;
        self.promote();
        Some(toast.id)
    }

    pub fn dismiss_all(&mut self) {
        self.visible.clear();
        self.queued.clear();
    }

    fn promote(&mut self) {
        while self.visible.len() < self.settings.limit {
            let Some((id, notification)) = self.queued.pop_front() else {
                break;
            };
            self.visible.push(Toast::new(id, notification, self.settings));
        }
    }
}

impl NotificationSink for ToastStack {
    fn show(&mut self, notification: Notification) {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.shown_total += 1;

        tracing::debug!(id = id.get(), title = %notification.title, "Toast queued");
        if self.visible.len() < self.settings.limit {
            self.visible.push(Toast::new(id, notification, self.settings));
        } else {
            self.queued.push_back((id, notification));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use taskhub_types::Notification;

    use super::{NotificationSink, ToastSettings, ToastStack};

    fn settings(limit: usize) -> ToastSettings {
        ToastSettings {
            auto_close: Duration::from_millis(1000),
            enter_duration: Duration::from_millis(100),
            limit,
        }
    }

    fn messages(stack: &ToastStack) -> Vec<String> {
        stack
            .visible()
            .iter()
            .map(|t| t.notification().message.clone())
            .collect()
    }

    #[test]
    fn vec_sink_records_in_order() {
        let mut sink: Vec<Notification> = Vec::new();
        sink.show(Notification::task_created(1));
        sink.show(Notification::task_created(2));
        assert_eq!(sink.len(), 2);
        assert!(sink[1].message.contains("#2"));
    }

    #[test]
    fn overflow_waits_in_fifo_order() {
        let mut stack = ToastStack::new(settings(2));
        for n in 1..=4 {
            stack.show(Notification::task_created(n));
        }
        assert_eq!(stack.visible().len(), 2);
        assert_eq!(stack.queued_len(), 2);
        assert_eq!(stack.shown_total(), 4);

        stack.dismiss_latest();
        assert_eq!(
            messages(&stack),
            vec![
                "Task #1 has been created successfully!".to_string(),
                "Task #3 has been created successfully!".to_string(),
            ]
        );
        assert_eq!(stack.queued_len(), 1);
    }

    #[test]
    fn toasts_expire_after_auto_close() {
        let mut stack = ToastStack::new(settings(5));
        stack.show(Notification::task_created(1));
        stack.advance(Duration::from_millis(600));
        stack.show(Notification::task_created(2));
        stack.advance(Duration::from_millis(600));

        assert_eq!(stack.visible().len(), 1);
        assert!(stack.visible()[0].notification().message.contains("#2"));

        stack.advance(Duration::from_millis(600));
        assert!(stack.is_empty());
    }

    #[test]
    fn promoted_toast_gets_a_full_lifetime() {
        let mut stack = ToastStack::new(settings(1));
        stack.show(Notification::task_created(1));
        stack.show(Notification::task_created(2));

        stack.advance(Duration::from_millis(1000));
        assert_eq!(stack.visible().len(), 1);
        assert_eq!(stack.visible()[0].remaining(), Duration::from_millis(1000));
    }

    #[test]
    fn enter_effect_settles() {
        let mut stack = ToastStack::new(settings(5));
        stack.show(Notification::task_created(1));
        assert!(stack.visible()[0].enter_progress().is_some());
        stack.advance(Duration::from_millis(150));
        assert!(stack.visible()[0].enter_progress().is_none());
    }

    #[test]
    fn zero_enter_duration_skips_effect() {
        let mut stack = ToastStack::new(ToastSettings {
            enter_duration: Duration::ZERO,
            ..settings(5)
        });
        stack.show(Notification::task_created(1));
        assert!(stack.visible()[0].enter_progress().is_none());
    }

    #[test]
    fn zero_limit_is_clamped_to_one() {
        let mut stack = ToastStack::new(settings(0));
        stack.show(Notification::task_created(1));
        assert_eq!(stack.visible().len(), 1);
    }

    #[test]
    fn dismiss_all_clears_queue() {
        let mut stack = ToastStack::new(settings(1));
        stack.show(Notification::task_created(1));
        stack.show(Notification::task_created(2));
        stack.dismiss_all();
        assert!(stack.is_empty());
        assert_eq!(stack.dismiss_latest(), None);
        assert_eq!(stack.shown_total(), 2);
    }
}
