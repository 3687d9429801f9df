use std::time::Duration;

use dial_engine::time::TimeOfDay;

/// Seconds in one revolution of the hour hand.
pub const SECONDS_PER_HALF_DAY: f64 = 43_200.0;

/// One of the three dial hands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    /// Paint order: hour hand at the bottom, second hand on top.
    pub const ALL: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];

    /// Part name used in markup and stylesheets.
    pub const fn part(self) -> &'static str {
        match self {
            Hand::Hour => "hand-hour",
            Hand::Minute => "hand-min",
            Hand::Second => "hand-sec",
        }
    }

    /// Short name used in keyframe identifiers.
    pub const fn short(self) -> &'static str {
        match self {
            Hand::Hour => "hour",
            Hand::Minute => "min",
            Hand::Second => "sec",
        }
    }

    /// Time for one full turn of this hand.
    pub const fn revolution(self) -> Duration {
        match self {
            Hand::Hour => Duration::from_secs(43_200),
            Hand::Minute => Duration::from_secs(3_600),
            Hand::Second => Duration::from_secs(60),
        }
    }
}

/// Hand rotations in whole degrees, each in `[0, 360)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct HandAngles {
    pub hour: u16,
    pub minute: u16,
    pub second: u16,
}

impl HandAngles {
    /// Angles for a local wall-clock time, read to the whole second.
    pub fn from_time_of_day(t: TimeOfDay) -> Self {
        compute_angles(t.seconds_of_half_day().floor())
    }

    /// Angles for an elapsed stopwatch duration. Wraps every 12 hours.
    pub fn from_elapsed(d: Duration) -> Self {
        let whole = (d.as_secs() % SECONDS_PER_HALF_DAY as u64) as f64;
        compute_angles(whole + d.subsec_nanos() as f64 / 1e9)
    }

    pub fn get(self, hand: Hand) -> u16 {
        match hand {
            Hand::Hour => self.hour,
            Hand::Minute => self.minute,
            Hand::Second => self.second,
        }
    }
}

/// Converts a position on the 12-hour dial, in seconds, to hand angles.
///
/// Negative and non-finite inputs are treated as zero.
pub fn compute_angles(seconds_of_half_day: f64) -> HandAngles {
    let s = if seconds_of_half_day.is_finite() { seconds_of_half_day.max(0.0) } else { 0.0 };
    HandAngles {
        second: whole_degrees(s / 60.0 * 360.0),
        minute: whole_degrees(s / 3_600.0 * 360.0),
        hour: whole_degrees(s / SECONDS_PER_HALF_DAY * 360.0),
    }
}

/// `raw mod 360`, rounded to the nearest degree; a result of 360 folds to 0.
fn whole_degrees(raw: f64) -> u16 {
    (raw.rem_euclid(360.0).round() as u16) % 360
}
