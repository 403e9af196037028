//! Cancellable one-shot deadlines.
//!
//! The slider defers two pieces of work: the initial position render shortly
//! after mount, and the value-label fade after a keyboard-driven change.
//! A [`Timer`] is the explicit, component-owned form of that deferral: the
//! component schedules it, the host's clock polls it via [`Timer::fire`], and
//! teardown cancels it so a stale deadline can never mutate a torn-down view.
//!
//! Rescheduling an armed timer replaces the deadline: last write wins, there
//! is no queue of pending firings.

use std::time::{Duration, Instant};

/// A one-shot deadline owned by a component instance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    deadline: Option<Instant>,
}

impl Timer {
    /// Creates an unarmed timer.
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arms the timer to fire `delay` after `now`, replacing any existing
    /// deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Disarms the timer without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` while a deadline is armed.
    pub fn is_scheduled(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fires the timer if its deadline has passed.
    ///
    /// Returns `true` exactly once per schedule: the timer disarms itself on
    /// firing.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
