use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use dial_engine::time::TimeOfDay;

use super::angles::HandAngles;
use super::elapsed::ElapsedLog;

// ── Mode ──────────────────────────────────────────────────────────────────

/// Which time source drives the hands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ClockMode {
    /// Local wall-clock time.
    #[default]
    Clock,
    /// Accumulated stopwatch time.
    Stopwatch,
}

impl ClockMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ClockMode::Clock => "clock",
            ClockMode::Stopwatch => "stopwatch",
        }
    }
}

impl fmt::Display for ClockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for mode strings other than `"clock"` and `"stopwatch"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown clock mode {0:?}, expected \"clock\" or \"stopwatch\"")]
pub struct UnknownMode(pub String);

impl FromStr for ClockMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clock" => Ok(ClockMode::Clock),
            "stopwatch" => Ok(ClockMode::Stopwatch),
            other => Err(UnknownMode(other.to_string())),
        }
    }
}

// ── Run state ─────────────────────────────────────────────────────────────

/// Stopwatch sub-state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RunState {
    /// Freshly reset: no elapsed time recorded.
    Idle,
    Running,
    Paused,
}

impl RunState {
    pub const fn as_str(self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Paused => "paused",
        }
    }
}

/// What the dial currently shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DialState {
    Clock,
    Stopwatch(RunState),
}

impl DialState {
    /// `true` when the hands advance on their own (clock, or running stopwatch).
    pub fn is_live(self) -> bool {
        matches!(self, DialState::Clock | DialState::Stopwatch(RunState::Running))
    }
}

/// Outcome of a controller operation.
#[must_use]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transition {
    Changed,
    Unchanged,
}

impl Transition {
    #[inline]
    pub fn is_changed(self) -> bool {
        self == Transition::Changed
    }

    fn from_bool(changed: bool) -> Self {
        if changed { Transition::Changed } else { Transition::Unchanged }
    }
}

// ── Controller ────────────────────────────────────────────────────────────

/// Mode/run-state machine for one dial.
///
/// The stopwatch run state is derived from the elapsed log rather than
/// stored next to it: `Idle` when the log is empty, `Running` when its last
/// mark is a resume, `Paused` otherwise. Switching to clock mode keeps the
/// log untouched, so a stopwatch left running keeps accumulating and a paused
/// one reads the same when the mode is switched back.
#[derive(Debug, Clone, Default)]
pub struct ClockController {
    mode: ClockMode,
    log: ElapsedLog,
}

impl ClockController {
    /// Clock mode with an empty stopwatch log.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: ClockMode) -> Self {
        Self { mode, log: ElapsedLog::new() }
    }

    #[inline]
    pub fn mode(&self) -> ClockMode {
        self.mode
    }

    pub fn run_state(&self) -> RunState {
        if self.log.is_empty() {
            RunState::Idle
        } else if self.log.is_running() {
            RunState::Running
        } else {
            RunState::Paused
        }
    }

    pub fn state(&self) -> DialState {
        match self.mode {
            ClockMode::Clock => DialState::Clock,
            ClockMode::Stopwatch => DialState::Stopwatch(self.run_state()),
        }
    }

    #[inline]
    pub fn log(&self) -> &ElapsedLog {
        &self.log
    }

    /// Accumulated stopwatch time at `now`, regardless of mode.
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.log.elapsed(now)
    }

    /// Angles the hands should show at `now` for the current mode.
    pub fn angles_at(&self, now: Instant, wall: TimeOfDay) -> HandAngles {
        match self.mode {
            ClockMode::Clock => HandAngles::from_time_of_day(wall),
            ClockMode::Stopwatch => HandAngles::from_elapsed(self.log.elapsed(now)),
        }
    }

    pub fn set_mode(&mut self, mode: ClockMode) -> Transition {
        if self.mode == mode {
            return Transition::Unchanged;
        }
        self.mode = mode;
        log::debug!("dial: mode -> {mode} ({:?})", self.state());
        Transition::Changed
    }

    /// Parses `value` and switches mode. Unknown values leave the state unchanged.
    pub fn set_mode_str(&mut self, value: &str) -> Transition {
        match value.parse::<ClockMode>() {
            Ok(mode) => self.set_mode(mode),
            Err(e) => {
                log::debug!("dial: ignoring mode change: {e}");
                Transition::Unchanged
            }
        }
    }

    /// Starts or pauses the stopwatch.
    ///
    /// `explicit = None` toggles; `Some(true)` forces running and
    /// `Some(false)` forces paused. Only valid in stopwatch mode; elsewhere,
    /// and for requests matching the current state, this is a no-op.
    pub fn toggle_run(&mut self, now: Instant, explicit: Option<bool>) -> Transition {
        if self.mode != ClockMode::Stopwatch {
            log::debug!("dial: toggle_run ignored in {} mode", self.mode);
            return Transition::Unchanged;
        }

        let run = explicit.unwrap_or(!self.log.is_running());
        let changed = if run { self.log.start(now) } else { self.log.pause(now) };
        if changed {
            log::debug!("dial: stopwatch {}", self.run_state().as_str());
        }
        Transition::from_bool(changed)
    }

    /// Clears the stopwatch back to `Idle`. Only valid in stopwatch mode.
    pub fn reset(&mut self) -> Transition {
        if self.mode != ClockMode::Stopwatch {
            log::debug!("dial: reset ignored in {} mode", self.mode);
            return Transition::Unchanged;
        }
        if self.log.is_empty() {
            return Transition::Unchanged;
        }
        self.log.reset();
        log::debug!("dial: stopwatch reset");
        Transition::Changed
    }
}
