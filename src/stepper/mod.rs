//! Step pacing
//!
//! [`Stepper`] is a "call this later, cancelable" primitive with no traversal
//! logic. It does not own a thread or a timer: it remembers when the next step
//! is due, and the owner's loop asks it whether that moment has come.

use std::time::{Duration, Instant};

/// Schedules one pending step at a time after a fixed delay
#[derive(Debug, Clone)]
pub struct Stepper {
    delay: Duration,
    /// Deadline of the pending step, if any
    due: Option<Instant>,
    cancelled: bool,
}

impl Stepper {
    pub fn new(delay: Duration) -> Self {
        Stepper {
            delay,
            due: None,
            cancelled: false,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule the next step `delay` from now. Ignored after [`Stepper::cancel`].
    pub fn schedule(&mut self) {
        self.schedule_from(Instant::now());
    }

    /// Schedule the next step `delay` after `now`
    pub fn schedule_from(&mut self, now: Instant) {
        if self.cancelled {
            return;
        }
        self.due = Some(now + self.delay);
    }

    /// Drop the pending step and refuse further scheduling until [`Stepper::rearm`]
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.due = None;
    }

    /// Allow scheduling again after a cancel
    pub fn rearm(&mut self) {
        self.cancelled = false;
        self.due = None;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    /// When the pending step is due
    pub fn next_due(&self) -> Option<Instant> {
        self.due
    }

    /// Consume the pending step if its deadline has passed
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    /// Consume the pending step regardless of its deadline
    pub fn fire_now(&mut self) -> bool {
        self.due.take().is_some()
    }
}
