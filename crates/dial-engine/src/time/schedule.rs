use std::time::{Duration, Instant};

/// Cancellable periodic deadline, polled cooperatively.
///
/// At most one tick is pending at a time: [`schedule`](Self::schedule)
/// replaces whatever was scheduled before, and [`cancel`](Self::cancel)
/// clears it. Nothing fires on its own; the owner calls [`poll`](Self::poll)
/// from its frame or timer loop, so a cancelled schedule can never deliver a
/// stale tick.
#[derive(Debug, Clone, Default)]
pub struct TickSchedule {
    active: Option<Pending>,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    period: Duration,
    next_due: Instant,
}

impl TickSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending tick, then schedules a new one every `period`
    /// starting from `now`.
    pub fn schedule(&mut self, now: Instant, period: Duration) {
        debug_assert!(!period.is_zero(), "tick period must be non-zero");
        if self.active.take().is_some() {
            log::trace!("tick schedule: replaced pending tick");
        }
        self.active = Some(Pending { period, next_due: now + period });
    }

    /// Drops the pending tick, if any.
    pub fn cancel(&mut self) {
        if self.active.take().is_some() {
            log::trace!("tick schedule: cancelled");
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    #[inline]
    pub fn period(&self) -> Option<Duration> {
        self.active.map(|p| p.period)
    }

    #[inline]
    pub fn next_due(&self) -> Option<Instant> {
        self.active.map(|p| p.next_due)
    }

    /// Returns `true` if a tick is due at `now` and advances the deadline.
    ///
    /// Missed periods are coalesced into a single tick; the next deadline is
    /// the first period boundary strictly after `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(pending) = self.active.as_mut() else {
            return false;
        };
        if now < pending.next_due {
            return false;
        }

        let behind = now.duration_since(pending.next_due);
        let skipped = (behind.as_nanos() / pending.period.as_nanos()) as u32;
        pending.next_due += pending.period * (skipped + 1);
        if skipped > 0 {
            log::trace!("tick schedule: coalesced {skipped} missed ticks");
        }
        true
    }
}
