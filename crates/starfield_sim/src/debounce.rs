use std::time::Duration;

/// Trailing-edge coalescing timer: each trigger cancels any pending deadline
/// and reschedules it one full delay out, so a burst of triggers produces a
/// single fire once the quiet period has elapsed. Time is injected as an
/// elapsed duration, never read from a clock.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Duration>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// Cancel-and-reschedule: the deadline moves to `now + delay`
    pub fn trigger(&mut self, now: Duration) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once, the first poll at or after the deadline
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
