//! One-shot deadline used to auto-dismiss the save acknowledgment.

use std::time::{Duration, Instant};

/// A deadline that fires at most once per scheduling.
///
/// Scheduling again replaces any pending deadline. The timer holds no
/// thread or callback, so dropping it (or calling [`DismissTimer::cancel`])
/// is all that is needed to make sure it never fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DismissTimer {
    deadline: Option<Instant>,
}

impl DismissTimer {
    /// Arms the timer to fire `after` the given instant.
    pub fn schedule(&mut self, now: Instant, after: Duration) {
        self.deadline = now.checked_add(after);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a deadline is pending.
    pub fn is_active(&self) -> bool {
        self.deadline.is_some()
    }

    /// Disarms the timer and returns true if its deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "./timer_tests.rs"]
mod tests;
