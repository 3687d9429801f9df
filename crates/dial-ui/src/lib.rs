//! Dial UI: an analog clock / stopwatch widget on top of `dial-engine`.
//!
//! # Quick start
//!
//! ```rust
//! use dial_ui::prelude::*;
//!
//! let time = ManualClock::new(TimeOfDay::new(3, 15, 0));
//! let mut clock = AnalogClock::new("kitchen", ClockConfig::default());
//! clock.attach(&time);
//! assert_eq!(clock.label(), "3:15");
//!
//! let svg = clock.to_svg(time.now());
//! assert!(svg.contains(r#"role="timer""#));
//! ```
//!
//! Clocks can also be declared in `.mkml` markup, see [`dsl`].

pub mod clock;
pub mod constraints;
pub mod dsl;
pub mod error;
pub mod event;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything a host needs to create, drive and render dials.
pub mod prelude {
    pub use crate::clock::{
        AttributeChange, ClockConfig, ClockMode, DialPalette, DialState, RunState, Transition,
    };
    pub use crate::constraints::Constraints;
    pub use crate::dsl::{build_clocks, parse_and_build};
    pub use crate::error::BuildError;
    pub use crate::event::{EventCtx, EventResult, Key, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::Widget;
    pub use crate::widgets::AnalogClock;

    pub use dial_engine::coords::{Rect, Vec2};
    pub use dial_engine::paint::Color;
    pub use dial_engine::time::{ManualClock, SystemClock, TimeOfDay, TimeSource};
}
