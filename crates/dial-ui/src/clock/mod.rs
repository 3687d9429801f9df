//! Clock domain logic: angles, elapsed-time log, mode controller, labels,
//! hand motion and per-instance styling.
//!
//! Nothing in here reads the system clock; every time-dependent function
//! takes the instant or time of day it should evaluate at.

pub mod angles;
pub mod config;
pub mod controller;
pub mod elapsed;
pub mod label;
pub mod motion;
pub mod style;

pub use angles::{Hand, HandAngles, compute_angles};
pub use config::{AttributeChange, ClockConfig, DialPalette};
pub use controller::{ClockController, ClockMode, DialState, RunState, Transition, UnknownMode};
pub use elapsed::{ElapsedLog, Mark, MarkKind};
pub use label::{clock_label, stopwatch_label};
pub use motion::{HandMotion, HandTrack, RESET_DURATION, ease_out};
pub use style::{DialStyle, HandStyle, TickLabel, stylesheet};
