//! Per-instance dial geometry and stylesheet.
//!
//! Everything here is a pure function of a [`ClockConfig`] (and, for the
//! stylesheet, the current [`HandMotion`]); nothing is shared between
//! instances.

use std::f32::consts::PI;
use std::fmt::Write;
use std::time::Instant;

use dial_engine::coords::{Rect, Vec2};
use dial_engine::paint::{Color, Stroke};
use dial_engine::render::fmt_num;

use super::angles::Hand;
use super::config::ClockConfig;
use super::motion::{HandMotion, RESET_DURATION};

/// Dial geometry is authored against a 200-unit square and scaled.
const DESIGN_SIZE: f32 = 200.0;
/// Dials at or below this size draw every hand at full radius.
const SMALL_DIAL: f32 = 50.0;

/// Geometry and paint for one hand.
#[derive(Debug, Clone, PartialEq)]
pub struct HandStyle {
    pub hand: Hand,
    /// Distance from the pivot to the tip, in pixels.
    pub length: f32,
    pub stroke: Stroke,
}

/// One numeral around the dial.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub text: String,
    /// Clock angle of the numeral, degrees.
    pub angle: f32,
    pub center: Vec2,
}

/// Resolved, pixel-space style of a dial.
#[derive(Debug, Clone, PartialEq)]
pub struct DialStyle {
    pub size: f32,
    pub center: Vec2,
    /// Radius of the marks ring (the widget's edge).
    pub rim_radius: f32,
    /// `None` when `marks == 0`.
    pub rim_stroke: Option<Stroke>,
    /// Radius of the inner clock face the hands and numerals live on.
    pub face_radius: f32,
    pub hands: [HandStyle; 3],
    pub ticks: Vec<TickLabel>,
    pub tick_font_size: f32,
    pub pivot_radius: f32,
    pub pivot_color: Color,
    pub text_color: Color,
}

impl DialStyle {
    pub fn from_config(config: &ClockConfig) -> Self {
        let size = config.size;
        let scale = size / DESIGN_SIZE;
        let center = Rect::square(size).center();
        let rim_radius = size * 0.5;
        // The clock face sits inside a 10 % margin.
        let face_radius = Rect::square(size).inset_fraction(0.1).min_side() * 0.5;

        let rim_stroke = (config.marks > 0).then(|| {
            let marks = config.marks as f32;
            let gap = (PI * DESIGN_SIZE - marks) / marks;
            Stroke::new(4.0 * scale, config.palette.marks).dashed(scale, gap.max(0.0) * scale)
        });

        let small = size <= SMALL_DIAL;
        let hand = |hand: Hand, fraction: f32, color: Color| HandStyle {
            hand,
            length: face_radius * if small { 1.0 } else { fraction },
            stroke: Stroke::new(1.0, color),
        };
        let hands = [
            hand(Hand::Hour, 0.5, config.palette.hour),
            hand(Hand::Minute, 0.7, config.palette.minute),
            hand(Hand::Second, 0.9, config.palette.second),
        ];

        let ticks = if config.ticks {
            (1..=12)
                .rev()
                .map(|i| {
                    let angle = 30.0 * (i as f32 - 12.0);
                    TickLabel {
                        text: i.to_string(),
                        angle,
                        center: Vec2::on_dial(center, face_radius, angle),
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        // 3 % of the face, never smaller than 4 px across.
        let pivot_radius = (face_radius * 2.0 * 0.03).max(4.0) * 0.5;

        Self {
            size,
            center,
            rim_radius,
            rim_stroke,
            face_radius,
            hands,
            ticks,
            tick_font_size: (16.0 * scale).max(6.0),
            pivot_radius,
            pivot_color: config.palette.pivot,
            text_color: config.palette.text,
        }
    }

    pub fn hand(&self, hand: Hand) -> &HandStyle {
        self.hands
            .iter()
            .find(|h| h.hand == hand)
            .unwrap_or(&self.hands[0])
    }
}

/// Builds the stylesheet animating the hands of instance `scope`, as seen
/// at `now`.
///
/// Rules are scoped under `.{scope}`; keyframe names embed the scope and the
/// motion generation so a new plan never reuses an old animation name. The
/// resting transform is the angle displayed at `now`, and both animations are
/// shifted by a negative delay so a document loaded at `now` picks up the
/// plan mid-flight instead of replaying it from the start.
pub fn stylesheet(scope: &str, style: &DialStyle, motion: &HandMotion, now: Instant) -> String {
    let mut css = String::new();
    let gen_id = motion.generation();
    let (cx, cy) = (fmt_num(style.center.x), fmt_num(style.center.y));
    let reset_ms = RESET_DURATION.as_millis() as i64;
    let since_ms = now.saturating_duration_since(motion.started()).as_millis() as i64;
    let reset_delay = -since_ms;
    let countup_delay = reset_ms - since_ms;

    let _ = writeln!(
        css,
        ".{scope} [part^=\"hand-\"] {{ transform-box: view-box; transform-origin: {cx}px {cy}px; }}"
    );

    for hand in Hand::ALL {
        let track = motion.track(hand);
        let name = hand.short();
        let reset = format!("{scope}-reset-{name}-g{gen_id}");
        let countup = format!("{scope}-countup-{name}-g{gen_id}");
        let shown = fmt_num(motion.angle(hand, now));

        match track.countup {
            Some(rev) => {
                let _ = writeln!(
                    css,
                    ".{scope} .{part} {{ transform: rotate({shown}deg); animation: {reset} {reset_ms}ms ease-out {reset_delay}ms 1, {countup} {rev}s linear {countup_delay}ms infinite; }}",
                    part = hand.part(),
                    rev = rev.as_secs(),
                );
            }
            None => {
                let _ = writeln!(
                    css,
                    ".{scope} .{part} {{ transform: rotate({shown}deg); animation: {reset} {reset_ms}ms ease-out {reset_delay}ms 1; }}",
                    part = hand.part(),
                );
            }
        }

        let _ = writeln!(
            css,
            "@keyframes {reset} {{ 0% {{ transform: rotate({from}deg); }} 100% {{ transform: rotate({end}deg); }} }}",
            from = fmt_num(track.from),
            end = fmt_num(track.reset_end()),
        );
        if track.countup.is_some() {
            let _ = writeln!(
                css,
                "@keyframes {countup} {{ 0% {{ transform: rotate({to}deg); }} 100% {{ transform: rotate({full}deg); }} }}",
                to = fmt_num(track.to),
                full = fmt_num(track.to + 360.0),
            );
        }
    }

    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::angles::HandAngles;
    use std::time::Duration;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn default_geometry() {
        let s = DialStyle::from_config(&ClockConfig::default());
        assert_eq!(s.center, Vec2::new(100.0, 100.0));
        assert_eq!(s.rim_radius, 100.0);
        assert_eq!(s.face_radius, 80.0);
        assert!(approx(s.hand(Hand::Second).length, 72.0));
        assert!(approx(s.hand(Hand::Minute).length, 56.0));
        assert!(approx(s.hand(Hand::Hour).length, 40.0));
        assert_eq!(s.hand(Hand::Second).stroke.color, Color::rgb(0xff, 0xa5, 0x00));
        assert!(approx(s.pivot_radius, 2.4));
    }

    #[test]
    fn marks_dash_spans_the_circumference() {
        let s = DialStyle::from_config(&ClockConfig::default().marks(60));
        let dash = s.rim_stroke.and_then(|st| st.dash).unwrap();
        let per_mark = dash.dash + dash.gap;
        assert!((per_mark * 60.0 - 2.0 * PI * 100.0).abs() < 1e-3);
    }

    #[test]
    fn zero_marks_hide_the_rim() {
        let s = DialStyle::from_config(&ClockConfig::default().marks(0));
        assert!(s.rim_stroke.is_none());
    }

    #[test]
    fn small_dial_uses_full_length_hands() {
        let s = DialStyle::from_config(&ClockConfig::default().size(40.0));
        for h in &s.hands {
            assert_eq!(h.length, s.face_radius);
        }
        assert_eq!(s.pivot_radius, 2.0);
    }

    #[test]
    fn twelve_numerals_with_twelve_on_top() {
        let s = DialStyle::from_config(&ClockConfig::default());
        assert_eq!(s.ticks.len(), 12);
        assert_eq!(s.ticks[0].text, "12");
        assert_eq!(s.ticks[0].angle, 0.0);
        assert!((s.ticks[0].center - Vec2::new(100.0, 20.0)).length() < 1e-3);
        let three = s.ticks.iter().find(|t| t.text == "3").unwrap();
        assert!((three.center - Vec2::new(180.0, 100.0)).length() < 1e-3);
    }

    #[test]
    fn no_numerals_when_ticks_disabled() {
        let s = DialStyle::from_config(&ClockConfig::default().ticks(false));
        assert!(s.ticks.is_empty());
    }

    #[test]
    fn stylesheet_scopes_and_versions_keyframes() {
        let style = DialStyle::from_config(&ClockConfig::default());
        let t0 = Instant::now();
        let target = HandAngles { hour: 98, minute: 90, second: 0 };
        let motion = HandMotion::plan(t0, [0.0; 3], target, true, 7);
        let css = stylesheet("dial-a", &style, &motion, t0 + RESET_DURATION);

        assert!(css.contains(".dial-a [part^=\"hand-\"] { transform-box: view-box; transform-origin: 100px 100px; }"));
        assert!(css.contains(
            ".dial-a .hand-min { transform: rotate(90deg); animation: dial-a-reset-min-g7 300ms ease-out -300ms 1, dial-a-countup-min-g7 3600s linear 0ms infinite; }"
        ));
        assert!(css.contains("@keyframes dial-a-countup-hour-g7 { 0% { transform: rotate(98deg); } 100% { transform: rotate(458deg); } }"));
    }

    #[test]
    fn stylesheet_at_plan_start_delays_countup() {
        let style = DialStyle::from_config(&ClockConfig::default());
        let t0 = Instant::now();
        let motion = HandMotion::plan(t0, [0.0; 3], HandAngles::default(), true, 1);
        let css = stylesheet("lap", &style, &motion, t0);
        assert!(css.contains(
            ".lap .hand-sec { transform: rotate(0deg); animation: lap-reset-sec-g1 300ms ease-out 0ms 1, lap-countup-sec-g1 60s linear 300ms infinite; }"
        ));
    }

    #[test]
    fn stylesheet_rests_hands_where_they_are_shown() {
        let style = DialStyle::from_config(&ClockConfig::default());
        let t0 = Instant::now();
        let target = HandAngles { hour: 0, minute: 0, second: 2 };
        let motion = HandMotion::plan(t0, [0.0; 3], target, true, 2);
        let now = t0 + Duration::from_secs(15);
        let css = stylesheet("lap", &style, &motion, now);

        // 14.7 s of count-up past 2 degrees.
        let sec = motion.angle(Hand::Second, now);
        assert!(approx(sec, 90.2));
        assert!(css.contains(&format!(".lap .hand-sec {{ transform: rotate({}deg);", fmt_num(sec))));
        assert!(css.contains("lap-reset-sec-g2 300ms ease-out -15000ms 1"));
        assert!(css.contains("lap-countup-sec-g2 60s linear -14700ms infinite"));
    }

    #[test]
    fn frozen_stylesheet_has_no_countup() {
        let style = DialStyle::from_config(&ClockConfig::default());
        let t0 = Instant::now();
        let motion = HandMotion::plan(t0, [350.0; 3], HandAngles::default(), false, 2);
        let css = stylesheet("lap", &style, &motion, t0 + Duration::from_secs(5));
        assert!(!css.contains("countup"));
        assert!(css.contains(".lap .hand-sec { transform: rotate(0deg); animation: lap-reset-sec-g2 300ms ease-out -5000ms 1; }"));
        assert!(css.contains("@keyframes lap-reset-sec-g2 { 0% { transform: rotate(350deg); } 100% { transform: rotate(360deg); } }"));
    }
}
