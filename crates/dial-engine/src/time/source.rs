use std::cell::Cell;
use std::time::{Duration, Instant};

use chrono::{Local, Timelike};

/// Wall-clock time of day, local time.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TimeOfDay {
    /// 0–23
    pub hours: u32,
    /// 0–59
    pub minutes: u32,
    /// 0–59
    pub seconds: u32,
    /// 0–999
    pub millis: u32,
}

impl TimeOfDay {
    pub const fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self { hours, minutes, seconds, millis: 0 }
    }

    pub fn from_chrono<T: Timelike>(t: &T) -> Self {
        Self {
            hours: t.hour(),
            minutes: t.minute(),
            seconds: t.second(),
            // Leap seconds report nanos >= 1e9; clamp into the current second.
            millis: (t.nanosecond() / 1_000_000).min(999),
        }
    }

    /// Seconds since the last 12 o'clock, including the fractional part.
    pub fn seconds_of_half_day(self) -> f64 {
        (self.hours % 12) as f64 * 3600.0
            + self.minutes as f64 * 60.0
            + self.seconds as f64
            + self.millis as f64 / 1000.0
    }

    /// Time of day `d` later, wrapping at midnight.
    pub fn advanced(self, d: Duration) -> Self {
        const DAY_MS: u128 = 24 * 3600 * 1000;
        let ms = (self.hours as u128 * 3600 + self.minutes as u128 * 60 + self.seconds as u128)
            * 1000
            + self.millis as u128
            + d.as_millis();
        let ms = (ms % DAY_MS) as u64;
        Self {
            hours: (ms / 3_600_000) as u32,
            minutes: (ms / 60_000 % 60) as u32,
            seconds: (ms / 1000 % 60) as u32,
            millis: (ms % 1000) as u32,
        }
    }
}

/// Source of monotonic instants and wall-clock time.
///
/// Widgets never read the clock themselves; hosts pass instants in, which
/// keeps every time-dependent computation deterministic under test.
pub trait TimeSource {
    /// Monotonic instant used for elapsed-time accounting and scheduling.
    fn now(&self) -> Instant;

    /// Local wall-clock time of day.
    fn time_of_day(&self) -> TimeOfDay;
}

/// System clock: `Instant::now()` plus `chrono::Local`.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_chrono(&Local::now())
    }
}

/// Hand-driven clock for tests and headless rendering.
///
/// Both the monotonic instant and the wall time move only through
/// [`advance`](Self::advance).
#[derive(Debug, Clone)]
pub struct ManualClock {
    instant: Cell<Instant>,
    wall: Cell<TimeOfDay>,
}

impl ManualClock {
    pub fn new(wall: TimeOfDay) -> Self {
        Self { instant: Cell::new(Instant::now()), wall: Cell::new(wall) }
    }

    pub fn advance(&self, d: Duration) {
        self.instant.set(self.instant.get() + d);
        self.wall.set(self.wall.get().advanced(d));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(TimeOfDay::default())
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Instant {
        self.instant.get()
    }

    fn time_of_day(&self) -> TimeOfDay {
        self.wall.get()
    }
}
