//! Cancel-and-reschedule idle timer
//!
//! High-frequency input (typing) should not refresh the pipeline on every
//! keystroke. The debouncer is a plain deadline owned by the session: each
//! keystroke re-arms it, which implicitly cancels the previously scheduled
//! fire, and the event loop's poll tick checks it once input goes idle.
//! No timer thread exists, so nothing ever fires concurrently.

use std::time::{Duration, Instant};

/// Default idle interval before a rescheduled action fires
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Deadline-based debouncer
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    /// Create a debouncer with the given idle interval
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Re-arm the timer, superseding any pending fire
    pub fn poke(&mut self) {
        self.deadline = Some(Instant::now() + self.delay);
    }

    /// Drop any pending fire without firing
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a fire is currently scheduled
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire once if the idle interval has elapsed since the last poke
    ///
    /// Disarms on fire, so one burst of pokes yields exactly one true.
    pub fn fire_if_ready(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_unarmed_never_fires() {
        let mut debouncer = Debouncer::new(Duration::from_millis(1));
        assert!(!debouncer.is_armed());
        assert!(!debouncer.fire_if_ready());
    }

    #[test]
    fn test_fires_once_after_idle() {
        let mut debouncer = Debouncer::new(Duration::from_millis(10));
        debouncer.poke();
        assert!(debouncer.is_armed());
        assert!(!debouncer.fire_if_ready());

        sleep(Duration::from_millis(20));
        assert!(debouncer.fire_if_ready());
        // Disarmed after firing
        assert!(!debouncer.fire_if_ready());
    }

    #[test]
    fn test_poke_supersedes_pending_fire() {
        let mut debouncer = Debouncer::new(Duration::from_millis(30));
        debouncer.poke();
        sleep(Duration::from_millis(15));

        // A new poke pushes the deadline out again
        debouncer.poke();
        sleep(Duration::from_millis(15));
        assert!(!debouncer.fire_if_ready());

        sleep(Duration::from_millis(20));
        assert!(debouncer.fire_if_ready());
    }

    #[test]
    fn test_cancel_drops_pending_fire() {
        let mut debouncer = Debouncer::new(Duration::from_millis(5));
        debouncer.poke();
        debouncer.cancel();

        sleep(Duration::from_millis(10));
        assert!(!debouncer.fire_if_ready());
    }
}
