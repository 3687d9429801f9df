//! Accessible text labels for the dial.

use std::time::Duration;

use dial_engine::time::TimeOfDay;

/// `"H:MM"` with a 24-hour, unpadded hour.
pub fn clock_label(t: TimeOfDay) -> String {
    format!("{}:{:02}", t.hours, t.minutes)
}

/// `"X hours Y minutes Z seconds"`.
///
/// Zero hours and zero minutes are omitted; seconds are always present.
/// Hours are not wrapped, so a stopwatch left running past a day reads
/// `"25 hours …"`.
pub fn stopwatch_label(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let (h, m, s) = (total / 3600, total / 60 % 60, total % 60);

    let mut parts = Vec::with_capacity(3);
    if h > 0 {
        parts.push(unit(h, "hour"));
    }
    if m > 0 {
        parts.push(unit(m, "minute"));
    }
    parts.push(unit(s, "second"));
    parts.join(" ")
}

fn unit(n: u64, name: &str) -> String {
    if n == 1 { format!("1 {name}") } else { format!("{n} {name}s") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clock_pads_minutes() {
        assert_eq!(clock_label(TimeOfDay::new(9, 5, 59)), "9:05");
        assert_eq!(clock_label(TimeOfDay::new(23, 40, 0)), "23:40");
        assert_eq!(clock_label(TimeOfDay::new(0, 0, 0)), "0:00");
    }

    #[test]
    fn stopwatch_seconds_only() {
        assert_eq!(stopwatch_label(Duration::ZERO), "0 seconds");
        assert_eq!(stopwatch_label(Duration::from_millis(1999)), "1 second");
    }

    #[test]
    fn stopwatch_all_units() {
        let d = Duration::from_secs(2 * 3600 + 60 + 7);
        assert_eq!(stopwatch_label(d), "2 hours 1 minute 7 seconds");
    }

    #[test]
    fn stopwatch_omits_zero_minutes() {
        let d = Duration::from_secs(3600 + 5);
        assert_eq!(stopwatch_label(d), "1 hour 5 seconds");
    }

    #[test]
    fn stopwatch_hours_do_not_wrap() {
        let d = Duration::from_secs(25 * 3600);
        assert_eq!(stopwatch_label(d), "25 hours 0 seconds");
    }
}
