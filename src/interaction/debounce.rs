use std::time::Duration;

/// A single pending callback that fires after a quiet period.
///
/// Timestamps are monotonic offsets from an epoch chosen by the host, so the
/// debouncer never reads a clock itself. Scheduling while a value is pending
/// discards the pending value and restarts the quiet period: only the last
/// value of a burst is ever delivered.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Duration,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancels any pending value and arms a new one due at `now + delay`.
    pub fn schedule(&mut self, value: T, now: Duration) {
        if self.pending.is_some() {
            tracing::trace!("Rescheduling pending debounce");
        }
        self.pending = Some(Pending {
            value,
            deadline: now + self.delay,
        });
    }

    /// Drops the pending value without firing it. Returns whether one was
    /// pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value is due, if any.
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Returns the pending value once its deadline has passed. Each value
    /// fires at most once.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now >= pending.deadline);
        if due {
            self.pending.take().map(|pending| pending.value)
        } else {
            None
        }
    }
}
