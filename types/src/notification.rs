//! User-facing notifications.
//!
//! A [`Notification`] is what an action hands to the display layer: a title,
//! a message, an accent color and an icon. Delivery is fire-and-forget.

/// Named accent colors used for badges, cards and notification severity.
///
/// These are semantic names; the UI maps each to a concrete color per palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccentColor {
    Blue,
    Cyan,
    Teal,
    Lime,
    Grape,
    Green,
    Orange,
    Red,
}

/// Icons the shell can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Bolt,
    Clock,
    Check,
    Sun,
    Moon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub color: AccentColor,
    pub icon: Icon,
}

impl Notification {
    pub const TASK_CREATED_TITLE: &'static str = "Task Created";

    #[must_use]
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        color: AccentColor,
        icon: Icon,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            color,
            icon,
        }
    }

    /// Confirmation shown after the `number`th task has been created.
    #[must_use]
    pub fn task_created(number: u64) -> Self {
        Self::new(
            Self::TASK_CREATED_TITLE,
            format!("Task #{number} has been created successfully!"),
            AccentColor::Teal,
            Icon::Check,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{AccentColor, Icon, Notification};

    #[test]
    fn task_created_carries_number() {
        let n = Notification::task_created(7);
        assert_eq!(n.title, "Task Created");
        assert_eq!(n.message, "Task #7 has been created successfully!");
        assert_eq!(n.color, AccentColor::Teal);
        assert_eq!(n.icon, Icon::Check);
    }
}
