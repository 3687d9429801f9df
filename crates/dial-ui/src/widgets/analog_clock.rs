use std::time::{Duration, Instant};

use dial_engine::coords::{Rect, Vec2};
use dial_engine::render::SvgDocument;
use dial_engine::scene::Layer;
use dial_engine::time::{TickSchedule, TimeSource};

use crate::clock::{
    AttributeChange, ClockConfig, ClockController, ClockMode, DialState, DialStyle, Hand,
    HandMotion, RESET_DURATION, RunState, Transition, clock_label, stopwatch_label, stylesheet,
};
use crate::constraints::Constraints;
use crate::event::{EventCtx, EventResult, Key, UiEvent};
use crate::painter::Painter;
use crate::scene::UiScene;
use crate::widget::Widget;

/// Label refresh period while showing the wall clock.
const CLOCK_TICK: Duration = Duration::from_secs(60);
/// Label refresh period while the stopwatch runs.
const STOPWATCH_TICK: Duration = Duration::from_secs(1);

/// Analog clock / stopwatch dial.
///
/// Each instance owns its controller, label ticker and animation state, and
/// scopes its stylesheet under its own `scope` class. Hosts drive it with a
/// [`TimeSource`]:
///
/// ```rust,ignore
/// let time = SystemClock;
/// let mut lap = AnalogClock::new("lap", ClockConfig::default().mode(ClockMode::Stopwatch));
/// lap.attach(&time);
/// let _ = lap.toggle_run(&time, None);
/// // once per frame / timer tick:
/// if lap.refresh(&time) {
///     announce(lap.label());
/// }
/// ```
#[derive(Debug)]
pub struct AnalogClock {
    scope: String,
    config: ClockConfig,
    style: DialStyle,
    controller: ClockController,
    /// `None` until the first attach or transition; hands rest at twelve.
    motion: Option<HandMotion>,
    generation: u64,
    ticker: TickSchedule,
    label: String,
    attached: bool,
}

impl AnalogClock {
    pub fn new(scope: impl Into<String>, config: ClockConfig) -> Self {
        Self {
            scope: scope.into(),
            style: DialStyle::from_config(&config),
            controller: ClockController::with_mode(config.mode),
            config,
            motion: None,
            generation: 0,
            ticker: TickSchedule::new(),
            label: String::new(),
            attached: false,
        }
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Connects the dial to a host: sweeps the hands in from their current
    /// position, computes the label and starts the label ticker.
    pub fn attach(&mut self, time: &dyn TimeSource) {
        if self.attached {
            log::debug!("dial {}: already attached", self.scope);
            return;
        }
        self.attached = true;
        log::debug!("dial {}: attached in {} mode", self.scope, self.controller.mode());
        self.replan(time);
    }

    /// Disconnects the dial and cancels any pending label tick.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.ticker.cancel();
        log::debug!("dial {}: detached", self.scope);
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    // ── operations ────────────────────────────────────────────────────────

    /// Starts or pauses the stopwatch; see [`ClockController::toggle_run`].
    pub fn toggle_run(&mut self, time: &dyn TimeSource, explicit: Option<bool>) -> Transition {
        let t = self.controller.toggle_run(time.now(), explicit);
        self.after(t, time)
    }

    /// Clears the stopwatch back to idle. No-op in clock mode.
    pub fn reset(&mut self, time: &dyn TimeSource) -> Transition {
        let t = self.controller.reset();
        self.after(t, time)
    }

    pub fn set_mode(&mut self, time: &dyn TimeSource, mode: ClockMode) -> Transition {
        let t = self.controller.set_mode(mode);
        self.config.mode = self.controller.mode();
        self.after(t, time)
    }

    /// Applies a string attribute (`size`, `mode`, `marks`, `ticks`).
    ///
    /// Unknown names and unparsable values are ignored.
    pub fn set_attribute(
        &mut self,
        time: &dyn TimeSource,
        name: &str,
        value: &str,
    ) -> AttributeChange {
        let change = self.config.apply_attribute(name, value);
        match change {
            AttributeChange::Layout => {
                self.style = DialStyle::from_config(&self.config);
                log::debug!("dial {}: {name} -> {value}", self.scope);
            }
            AttributeChange::Mode(mode) => {
                let _ = self.set_mode(time, mode);
            }
            AttributeChange::Ignored => {}
        }
        change
    }

    /// Polls the label ticker; when a tick is due, recomputes the label.
    ///
    /// Returns `true` if the label was recomputed.
    pub fn refresh(&mut self, time: &dyn TimeSource) -> bool {
        if !self.attached || !self.ticker.poll(time.now()) {
            return false;
        }
        self.label = self.compute_label(time);
        log::trace!("dial {}: label {:?}", self.scope, self.label);
        true
    }

    // ── queries ───────────────────────────────────────────────────────────

    /// Accumulated stopwatch time at `now`, in either mode.
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.controller.elapsed(now)
    }

    /// Accessible label as of the last transition or tick.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    #[inline]
    pub fn mode(&self) -> ClockMode {
        self.controller.mode()
    }

    pub fn state(&self) -> DialState {
        self.controller.state()
    }

    #[inline]
    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    #[inline]
    pub fn style(&self) -> &DialStyle {
        &self.style
    }

    #[inline]
    pub fn motion(&self) -> Option<&HandMotion> {
        self.motion.as_ref()
    }

    #[inline]
    pub fn ticker(&self) -> &TickSchedule {
        &self.ticker
    }

    /// Angles currently shown, in [`Hand::ALL`] order.
    pub fn displayed_angles(&self, now: Instant) -> [f32; 3] {
        self.motion.as_ref().map_or([0.0; 3], |m| m.displayed(now))
    }

    /// Instance stylesheet for the current motion plan, as seen at `now`.
    pub fn stylesheet(&self, now: Instant) -> Option<String> {
        self.motion.as_ref().map(|m| stylesheet(&self.scope, &self.style, m, now))
    }

    /// Box the dial occupies when laid out at its configured size.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(Vec2::zero(), self.measure(Constraints::unbounded()))
    }

    /// Host classes, mirroring what a markup host would set on the element.
    pub fn classes(&self) -> Vec<&'static str> {
        match self.state() {
            DialState::Clock => Vec::new(),
            DialState::Stopwatch(run) => vec!["stopwatch-mode", run_class(run)],
        }
    }

    /// Renders the dial as a standalone SVG document as of `now`.
    pub fn to_svg(&self, now: Instant) -> String {
        let bounds = self.bounds();
        let mut scene = UiScene::new();
        let list = scene.frame(self, bounds, now);

        let mut doc = SvgDocument::new(bounds.size)
            .role("timer")
            .aria_label(self.label.as_str())
            .class(self.scope.as_str());
        for class in self.classes() {
            doc = doc.class(class);
        }
        if let Some(css) = self.stylesheet(now) {
            doc = doc.stylesheet(css);
        }
        doc.render(list)
    }

    // ── internal ──────────────────────────────────────────────────────────

    fn after(&mut self, t: Transition, time: &dyn TimeSource) -> Transition {
        if t.is_changed() {
            self.replan(time);
        }
        t
    }

    /// Re-targets the hands, recomputes the label and restarts the ticker.
    fn replan(&mut self, time: &dyn TimeSource) {
        let now = time.now();
        let displayed = self.displayed_angles(now);
        let live = self.state().is_live();

        // Live hands keep moving during the sweep, so aim where they will be.
        let target = if live {
            let wall = time.time_of_day().advanced(RESET_DURATION);
            self.controller.angles_at(now + RESET_DURATION, wall)
        } else {
            self.controller.angles_at(now, time.time_of_day())
        };

        self.generation += 1;
        self.motion = Some(HandMotion::plan(now, displayed, target, live, self.generation));
        self.label = self.compute_label(time);

        if self.attached {
            match self.tick_period() {
                Some(period) => self.ticker.schedule(now, period),
                None => self.ticker.cancel(),
            }
        }

        log::debug!(
            "dial {}: {:?} g{} -> {:?}, label {:?}",
            self.scope,
            self.state(),
            self.generation,
            target,
            self.label
        );
    }

    fn tick_period(&self) -> Option<Duration> {
        match self.state() {
            DialState::Clock => Some(CLOCK_TICK),
            DialState::Stopwatch(RunState::Running) => Some(STOPWATCH_TICK),
            DialState::Stopwatch(_) => None,
        }
    }

    fn compute_label(&self, time: &dyn TimeSource) -> String {
        match self.controller.mode() {
            ClockMode::Clock => clock_label(time.time_of_day()),
            ClockMode::Stopwatch => stopwatch_label(self.controller.elapsed(time.now())),
        }
    }
}

fn run_class(run: RunState) -> &'static str {
    match run {
        RunState::Idle => "is-idle",
        RunState::Running => "is-running",
        RunState::Paused => "is-paused",
    }
}

impl Drop for AnalogClock {
    fn drop(&mut self) {
        if self.ticker.is_active() {
            log::trace!("dial {}: dropping with a pending tick", self.scope);
            self.ticker.cancel();
        }
    }
}

impl Widget for AnalogClock {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain_square(self.config.size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let s = &self.style;
        let origin = rect.origin;
        let center = origin + s.center;

        if let Some(stroke) = &s.rim_stroke {
            painter
                .on_layer(Layer::Marks)
                .stroke_circle(center, s.rim_radius, stroke.clone(), Some("marks"));
        }
        for tick in &s.ticks {
            painter.on_layer(Layer::Marks).text(
                tick.text.as_str(),
                s.tick_font_size,
                s.text_color,
                origin + tick.center,
            );
        }

        let angles = self.displayed_angles(painter.now);
        painter.on_layer(Layer::Hands);
        for (hand, deg) in Hand::ALL.into_iter().zip(angles) {
            let hs = s.hand(hand);
            painter.hand(center, hs.length, deg, hs.stroke.clone(), hand.part());
        }

        painter
            .on_layer(Layer::Pivot)
            .fill_circle(center, s.pivot_radius, s.pivot_color, Some("pivot"));
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &EventCtx) -> EventResult {
        if self.controller.mode() != ClockMode::Stopwatch {
            return EventResult::Ignored;
        }
        let t = match event {
            UiEvent::Click { pos } if rect.contains(*pos) => self.toggle_run(ctx.time, None),
            UiEvent::KeyPress { key: Key::Space | Key::Enter } => self.toggle_run(ctx.time, None),
            UiEvent::KeyPress { key: Key::Escape | Key::R } => self.reset(ctx.time),
            _ => return EventResult::Ignored,
        };
        if t.is_changed() { EventResult::Consumed } else { EventResult::Ignored }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dial_engine::scene::DrawCmd;
    use dial_engine::time::{ManualClock, TimeOfDay};
    use pretty_assertions::assert_eq;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn stopwatch(time: &ManualClock) -> AnalogClock {
        let mut c = AnalogClock::new("lap", ClockConfig::default().mode(ClockMode::Stopwatch));
        c.attach(time);
        c
    }

    #[test]
    fn clock_mode_label_and_minute_ticker() {
        let time = ManualClock::new(TimeOfDay::new(9, 5, 30));
        let mut c = AnalogClock::new("wall", ClockConfig::default());
        c.attach(&time);

        assert_eq!(c.label(), "9:05");
        assert_eq!(c.ticker().period(), Some(CLOCK_TICK));
        assert!(c.motion().is_some_and(HandMotion::is_live));

        time.advance(Duration::from_secs(30));
        assert!(!c.refresh(&time));
        time.advance(Duration::from_secs(30));
        assert!(c.refresh(&time));
        assert_eq!(c.label(), "9:06");
    }

    #[test]
    fn stopwatch_run_pause_reset() {
        let time = ManualClock::default();
        let mut c = stopwatch(&time);
        assert_eq!(c.state(), DialState::Stopwatch(RunState::Idle));
        assert_eq!(c.label(), "0 seconds");
        assert!(!c.ticker().is_active());

        assert!(c.toggle_run(&time, None).is_changed());
        assert_eq!(c.ticker().period(), Some(STOPWATCH_TICK));

        time.advance(ms(61_000));
        assert!(c.refresh(&time));
        assert_eq!(c.label(), "1 minute 1 second");

        assert!(c.toggle_run(&time, None).is_changed());
        assert_eq!(c.state(), DialState::Stopwatch(RunState::Paused));
        assert!(!c.ticker().is_active());
        assert_eq!(c.elapsed(time.now() + ms(10_000)), ms(61_000));

        assert!(c.reset(&time).is_changed());
        assert_eq!(c.elapsed(time.now()), Duration::ZERO);
        assert_eq!(c.label(), "0 seconds");
    }

    #[test]
    fn paused_stopwatch_survives_mode_round_trip() {
        let time = ManualClock::new(TimeOfDay::new(12, 0, 0));
        let mut c = stopwatch(&time);
        let _ = c.toggle_run(&time, None);
        time.advance(ms(3000));
        let _ = c.toggle_run(&time, None);

        assert!(c.set_mode(&time, ClockMode::Clock).is_changed());
        assert_eq!(c.label(), "12:00");
        time.advance(ms(20_000));
        assert!(c.set_mode(&time, ClockMode::Stopwatch).is_changed());

        assert_eq!(c.state(), DialState::Stopwatch(RunState::Paused));
        assert_eq!(c.elapsed(time.now()), ms(3000));
        assert_eq!(c.label(), "3 seconds");
    }

    #[test]
    fn mode_changes_reschedule_the_label_ticker() {
        let time = ManualClock::new(TimeOfDay::new(8, 0, 0));
        let mut c = stopwatch(&time);

        let _ = c.toggle_run(&time, None);
        assert_eq!(c.ticker().period(), Some(STOPWATCH_TICK));
        let _ = c.set_mode(&time, ClockMode::Clock);
        assert_eq!(c.ticker().period(), Some(CLOCK_TICK));
        let _ = c.set_mode(&time, ClockMode::Stopwatch);
        assert_eq!(c.ticker().period(), Some(STOPWATCH_TICK));

        let _ = c.toggle_run(&time, None);
        assert_eq!(c.state(), DialState::Stopwatch(RunState::Paused));
        assert!(!c.ticker().is_active());
        let _ = c.set_mode(&time, ClockMode::Clock);
        assert!(c.ticker().is_active());
        assert_eq!(c.ticker().period(), Some(CLOCK_TICK));
        let _ = c.set_mode(&time, ClockMode::Stopwatch);
        assert!(!c.ticker().is_active());
    }

    #[test]
    fn transitions_bump_generation_and_aim_ahead_when_live() {
        let time = ManualClock::default();
        let mut c = stopwatch(&time);
        let g0 = c.motion().map(HandMotion::generation);

        let _ = c.toggle_run(&time, None);
        let m = c.motion().unwrap();
        assert!(Some(m.generation()) > g0);
        assert!(m.is_live());
        // 300 ms of lead: 0.3 s is 1.8 degrees on the second hand, rounded.
        assert_eq!(m.track(Hand::Second).to, 2.0);
    }

    #[test]
    fn unchanged_transition_keeps_plan() {
        let time = ManualClock::default();
        let mut c = stopwatch(&time);
        let before = c.motion().cloned();
        assert_eq!(c.toggle_run(&time, Some(false)), Transition::Unchanged);
        assert_eq!(c.reset(&time), Transition::Unchanged);
        assert_eq!(c.motion().cloned(), before);
    }

    #[test]
    fn detach_cancels_ticker() {
        let time = ManualClock::default();
        let mut c = AnalogClock::new("wall", ClockConfig::default());
        c.attach(&time);
        assert!(c.ticker().is_active());

        c.detach();
        assert!(!c.ticker().is_active());
        time.advance(Duration::from_secs(120));
        assert!(!c.refresh(&time));
    }

    #[test]
    fn detached_transitions_do_not_schedule() {
        let time = ManualClock::default();
        let mut c = AnalogClock::new("lap", ClockConfig::default().mode(ClockMode::Stopwatch));
        let _ = c.toggle_run(&time, None);
        assert!(!c.ticker().is_active());
        c.attach(&time);
        assert_eq!(c.ticker().period(), Some(STOPWATCH_TICK));
    }

    #[test]
    fn attributes_rebuild_style_and_switch_mode() {
        let time = ManualClock::default();
        let mut c = AnalogClock::new("wall", ClockConfig::default());
        c.attach(&time);

        assert_eq!(c.set_attribute(&time, "size", "48"), AttributeChange::Layout);
        assert_eq!(c.style().size, 48.0);
        assert_eq!(
            c.set_attribute(&time, "mode", "stopwatch"),
            AttributeChange::Mode(ClockMode::Stopwatch)
        );
        assert_eq!(c.mode(), ClockMode::Stopwatch);
        assert_eq!(c.config().mode, ClockMode::Stopwatch);
        assert_eq!(c.set_attribute(&time, "mode", "lap"), AttributeChange::Ignored);
        assert_eq!(c.mode(), ClockMode::Stopwatch);
    }

    #[test]
    fn keyboard_and_click_drive_the_stopwatch() {
        let time = ManualClock::default();
        let ctx = EventCtx::new(&time);
        let rect = Rect::square(200.0);
        let mut c = stopwatch(&time);

        let space = UiEvent::KeyPress { key: Key::Space };
        assert!(c.on_event(&space, rect, &ctx).is_consumed());
        assert_eq!(c.state(), DialState::Stopwatch(RunState::Running));

        let outside = UiEvent::Click { pos: Vec2::new(500.0, 10.0) };
        assert_eq!(c.on_event(&outside, rect, &ctx), EventResult::Ignored);

        let inside = UiEvent::Click { pos: Vec2::new(100.0, 100.0) };
        assert!(c.on_event(&inside, rect, &ctx).is_consumed());
        assert_eq!(c.state(), DialState::Stopwatch(RunState::Paused));

        let escape = UiEvent::KeyPress { key: Key::Escape };
        assert!(c.on_event(&escape, rect, &ctx).is_consumed());
        assert_eq!(c.state(), DialState::Stopwatch(RunState::Idle));
    }

    #[test]
    fn clock_mode_ignores_input() {
        let time = ManualClock::default();
        let ctx = EventCtx::new(&time);
        let mut c = AnalogClock::new("wall", ClockConfig::default());
        c.attach(&time);
        let enter = UiEvent::KeyPress { key: Key::Enter };
        assert_eq!(c.on_event(&enter, Rect::square(200.0), &ctx), EventResult::Ignored);
    }

    #[test]
    fn paints_hands_at_displayed_angles() {
        let time = ManualClock::new(TimeOfDay::new(3, 15, 0));
        let mut c = AnalogClock::new("wall", ClockConfig::default());
        c.attach(&time);
        time.advance(RESET_DURATION);

        let mut scene = UiScene::new();
        let list = scene.frame(&c, Rect::square(200.0), time.now());
        let item = list.find_part("hand-min").unwrap();
        let DrawCmd::Line(line) = &item.cmd else { panic!("expected a line") };
        let deg = line.rotation.map(|r| r.deg).unwrap();
        assert!((deg - 90.0).abs() < 0.1, "minute hand at {deg}");
        assert!(list.find_part("pivot").is_some());
        assert!(list.find_part("marks").is_some());
    }

    #[test]
    fn svg_carries_role_label_and_scoped_styles() {
        let time = ManualClock::default();
        let mut c = stopwatch(&time);
        let _ = c.toggle_run(&time, None);
        let svg = c.to_svg(time.now());

        assert!(svg.contains(r#"role="timer""#));
        assert!(svg.contains(r#"aria-label="0 seconds""#));
        assert!(svg.contains(r#"class="lap stopwatch-mode is-running""#));
        assert!(svg.contains("@keyframes lap-countup-sec-g2"));
        assert!(svg.contains(r#"part="hand-hour""#));
    }

    #[test]
    fn svg_snapshot_styles_hands_at_the_snapshot_instant() {
        let time = ManualClock::default();
        let mut c = stopwatch(&time);
        let _ = c.toggle_run(&time, None);
        time.advance(Duration::from_secs(15));
        let now = time.now();
        let svg = c.to_svg(now);

        let rule = ".lap .hand-sec { transform: rotate(";
        let start = svg.find(rule).map(|i| i + rule.len()).unwrap();
        let end = start + svg[start..].find("deg").unwrap();
        let deg: f32 = svg[start..end].parse().unwrap();
        assert!((deg - 90.0).abs() < 1.0, "second hand styled at {deg}");
        assert!((deg - c.displayed_angles(now)[2]).abs() < 1e-2);
        assert!(svg.contains("lap-countup-sec-g2 60s linear -14700ms infinite"));
    }

    #[test]
    fn bounds_follow_configured_size() {
        let c = AnalogClock::new("wall", ClockConfig::default().size(64.0));
        assert_eq!(c.bounds(), Rect::square(64.0));
    }

    #[test]
    fn instances_are_independent() {
        let time = ManualClock::default();
        let mut a = stopwatch(&time);
        let b = stopwatch(&time);
        let _ = a.toggle_run(&time, None);
        time.advance(ms(2000));
        assert_eq!(a.elapsed(time.now()), ms(2000));
        assert_eq!(b.elapsed(time.now()), Duration::ZERO);
        assert_eq!(b.state(), DialState::Stopwatch(RunState::Idle));
    }
}
