use std::time::{Duration, Instant};

use super::angles::{Hand, HandAngles};

/// Length of the ease-out sweep from the displayed angle to a new target.
pub const RESET_DURATION: Duration = Duration::from_millis(300);

/// Animation of a single hand: an eased reset sweep, then optionally a
/// linear count-up that never ends.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandTrack {
    /// Angle shown when the plan starts.
    pub from: f32,
    /// Target angle, `[0, 360)`.
    pub to: f32,
    /// Signed sweep taken during the reset, in `(-180, 180]`.
    pub sweep: f32,
    /// Revolution time for the count-up phase; `None` when the hand holds still.
    pub countup: Option<Duration>,
}

impl HandTrack {
    fn new(from: f32, to: f32, countup: Option<Duration>) -> Self {
        let mut sweep = (to - from).rem_euclid(360.0);
        if sweep > 180.0 {
            sweep -= 360.0;
        }
        Self { from, to, sweep, countup }
    }

    /// Angle displayed `since` the start of the plan, `[0, 360)`.
    pub fn angle_at(&self, since: Duration) -> f32 {
        let raw = if since < RESET_DURATION {
            let p = since.as_secs_f32() / RESET_DURATION.as_secs_f32();
            self.from + self.sweep * ease_out(p)
        } else {
            match self.countup {
                None => self.to,
                Some(rev) => {
                    let t = (since - RESET_DURATION).as_secs_f64() / rev.as_secs_f64();
                    self.to + (t.fract() * 360.0) as f32
                }
            }
        };
        raw.rem_euclid(360.0)
    }

    /// End of the reset sweep, unwrapped so that `from → reset_end` is the
    /// direction actually travelled.
    pub fn reset_end(&self) -> f32 {
        self.from + self.sweep
    }
}

/// Motion plan for all three hands, rebuilt on every state transition.
#[derive(Debug, Clone, PartialEq)]
pub struct HandMotion {
    started: Instant,
    generation: u64,
    live: bool,
    tracks: [HandTrack; 3],
}

impl HandMotion {
    /// Plans a sweep from `displayed` to `target`.
    ///
    /// `live` hands keep turning after the sweep at their natural rate;
    /// callers should compute `target` for `started + RESET_DURATION` so the
    /// hands land where the time will be when the sweep finishes.
    pub fn plan(
        started: Instant,
        displayed: [f32; 3],
        target: HandAngles,
        live: bool,
        generation: u64,
    ) -> Self {
        let mut i = 0;
        let tracks = Hand::ALL.map(|hand| {
            let track = HandTrack::new(
                displayed[i],
                target.get(hand) as f32,
                live.then(|| hand.revolution()),
            );
            i += 1;
            track
        });
        Self { started, generation, live, tracks }
    }

    #[inline]
    pub fn started(&self) -> Instant {
        self.started
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn track(&self, hand: Hand) -> &HandTrack {
        &self.tracks[index(hand)]
    }

    /// Displayed angle of `hand` at `now`.
    pub fn angle(&self, hand: Hand, now: Instant) -> f32 {
        self.track(hand).angle_at(now.saturating_duration_since(self.started))
    }

    /// Displayed angles in [`Hand::ALL`] order.
    pub fn displayed(&self, now: Instant) -> [f32; 3] {
        Hand::ALL.map(|hand| self.angle(hand, now))
    }
}

fn index(hand: Hand) -> usize {
    match hand {
        Hand::Hour => 0,
        Hand::Minute => 1,
        Hand::Second => 2,
    }
}

/// CSS `ease-out` timing function: cubic Bézier with control points
/// (0, 0) and (0.58, 1).
pub fn ease_out(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    let x = |t: f32| 3.0 * (1.0 - t) * t * t * 0.58 + t * t * t;
    let y = |t: f32| 3.0 * (1.0 - t) * t * t + t * t * t;

    // x(t) is monotonic on [0, 1]; bisect for the parameter.
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    for _ in 0..24 {
        let mid = (lo + hi) * 0.5;
        if x(mid) < p { lo = mid } else { hi = mid }
    }
    y((lo + hi) * 0.5)
}
