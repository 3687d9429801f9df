use std::time::{Duration, Instant};

/// Whether a log entry resumed or paused the stopwatch.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MarkKind {
    Resume,
    Pause,
}

/// One entry of the elapsed-time log.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Mark {
    pub at: Instant,
    pub kind: MarkKind,
}

/// Stopwatch time accounting as an ordered log of resume/pause marks.
///
/// Invariant: entries alternate `Resume, Pause, Resume, …` starting with a
/// `Resume`. The stopwatch is running exactly when the last entry is a
/// `Resume`.
#[derive(Debug, Clone, Default)]
pub struct ElapsedLog {
    marks: Vec<Mark>,
}

impl ElapsedLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.marks.last(), Some(Mark { kind: MarkKind::Resume, .. }))
    }

    #[inline]
    pub fn entries(&self) -> &[Mark] {
        &self.marks
    }

    /// Begins or resumes timing at `now`. Returns `false` if already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        self.marks.push(Mark { at: now, kind: MarkKind::Resume });
        self.debug_check();
        true
    }

    /// Closes the running interval at `now`. Returns `false` if not running.
    pub fn pause(&mut self, now: Instant) -> bool {
        if !self.is_running() {
            return false;
        }
        self.marks.push(Mark { at: now, kind: MarkKind::Pause });
        self.debug_check();
        true
    }

    /// Drops every mark; elapsed time returns to zero.
    pub fn reset(&mut self) {
        self.marks.clear();
    }

    /// Total time spent running up to `now`.
    ///
    /// Complete resume/pause pairs contribute their span; an open interval
    /// contributes `now - resume`. Spans that would be negative count as zero.
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.marks
            .chunks(2)
            .map(|pair| match pair {
                [resume, pause] => pause.at.saturating_duration_since(resume.at),
                [resume] => now.saturating_duration_since(resume.at),
                _ => Duration::ZERO,
            })
            .sum()
    }

    fn debug_check(&self) {
        debug_assert!(
            self.marks.iter().enumerate().all(|(i, m)| {
                m.kind == if i % 2 == 0 { MarkKind::Resume } else { MarkKind::Pause }
            }),
            "elapsed log lost its resume/pause alternation: {:?}",
            self.marks
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn empty_log_is_zero() {
        let t0 = Instant::now();
        assert_eq!(ElapsedLog::new().elapsed(t0 + ms(10_000)), Duration::ZERO);
    }

    #[test]
    fn single_interval() {
        let t0 = Instant::now();
        let mut log = ElapsedLog::new();
        log.start(t0);
        log.pause(t0 + ms(5000));
        assert_eq!(log.elapsed(t0 + ms(60_000)), ms(5000));
    }

    #[test]
    fn two_intervals_skip_the_pause() {
        let t0 = Instant::now();
        let mut log = ElapsedLog::new();
        log.start(t0);
        log.pause(t0 + ms(5000));
        log.start(t0 + ms(7000));
        log.pause(t0 + ms(9000));
        assert_eq!(log.elapsed(t0 + ms(20_000)), ms(7000));
    }

    #[test]
    fn running_interval_counts_up_to_now() {
        let t0 = Instant::now();
        let mut log = ElapsedLog::new();
        log.start(t0);
        log.pause(t0 + ms(1000));
        log.start(t0 + ms(4000));
        assert!(log.is_running());
        assert_eq!(log.elapsed(t0 + ms(4500)), ms(1500));
    }

    #[test]
    fn pause_twice_equals_pause_once() {
        let t0 = Instant::now();
        let mut once = ElapsedLog::new();
        once.start(t0);
        once.pause(t0 + ms(3000));

        let mut twice = once.clone();
        assert!(!twice.pause(t0 + ms(8000)));

        assert_eq!(twice.entries(), once.entries());
        assert_eq!(twice.elapsed(t0 + ms(9000)), once.elapsed(t0 + ms(9000)));
    }

    #[test]
    fn start_while_running_is_noop() {
        let t0 = Instant::now();
        let mut log = ElapsedLog::new();
        assert!(log.start(t0));
        assert!(!log.start(t0 + ms(500)));
        assert_eq!(log.entries().len(), 1);
        assert_eq!(log.elapsed(t0 + ms(1000)), ms(1000));
    }

    #[test]
    fn pause_when_idle_is_noop() {
        let mut log = ElapsedLog::new();
        assert!(!log.pause(Instant::now()));
        assert!(log.is_empty());
    }

    #[test]
    fn reset_then_elapsed_is_zero() {
        let t0 = Instant::now();
        let mut log = ElapsedLog::new();
        log.start(t0);
        log.pause(t0 + ms(2000));
        log.start(t0 + ms(3000));
        log.reset();
        assert!(log.is_empty());
        assert!(!log.is_running());
        assert_eq!(log.elapsed(t0 + ms(10_000)), Duration::ZERO);
    }

    #[test]
    fn elapsed_is_monotonic_while_running() {
        let t0 = Instant::now();
        let mut log = ElapsedLog::new();
        log.start(t0);
        let mut last = Duration::ZERO;
        for step in 0..50 {
            let e = log.elapsed(t0 + ms(step * 137));
            assert!(e >= last);
            last = e;
        }
    }

    #[test]
    fn now_before_resume_saturates() {
        let t0 = Instant::now();
        let mut log = ElapsedLog::new();
        log.start(t0 + ms(1000));
        assert_eq!(log.elapsed(t0), Duration::ZERO);
    }
}
