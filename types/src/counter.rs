use std::fmt;

/// Number of simulated task-creation actions in this session.
///
/// Starts at zero and only ever grows. There is no reset and no persistence:
/// the value lives for as long as the owning shell does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskCounter(u64);

impl TaskCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add one and return the new value.
    ///
    /// Saturates at `u64::MAX` rather than wrapping.
    pub fn increment(&mut self) -> u64 {
        self.0 = self.0.saturating_add(1);
        self.0
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
