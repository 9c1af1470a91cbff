//! Session deadline and interval-prompt timer

use std::time::{Duration, Instant};

/// Tracks the session deadline and the next scheduled interval prompt.
///
/// Callers pass the current instant in, so the arithmetic is testable with
/// synthetic clocks. `rearm` resets the next prompt to fire immediately; it
/// is the one primitive behind loop start, `/resume`, and `/skip`.
#[derive(Debug, Clone, Copy)]
pub struct IntervalTimer {
    end_at: Instant,
    next_mark: Instant,
    interval: Duration,
}

impl IntervalTimer {
    /// Start a timer at `now` for a session of `total` length, with prompts
    /// every `interval`. The first prompt is due immediately.
    pub fn start(now: Instant, total: Duration, interval: Duration) -> Self {
        Self {
            end_at: now + total,
            next_mark: now,
            interval,
        }
    }

    /// Whether the session deadline has passed.
    pub fn expired(&self, now: Instant) -> bool {
        now >= self.end_at
    }

    /// Whether an interval prompt is due. Only meaningful while the session
    /// is not paused; the loop doesn't consult this while paused.
    pub fn prompt_due(&self, now: Instant) -> bool {
        now >= self.next_mark
    }

    /// Schedule the next prompt one full interval from `now`.
    pub fn advance(&mut self, now: Instant) {
        self.next_mark = now + self.interval;
    }

    /// Make the next prompt due immediately.
    pub fn rearm(&mut self, now: Instant) {
        self.next_mark = now;
    }
}
