//! Time subsystem.
//!
//! Provides testable time sources and a cancellable tick schedule without
//! coupling to any event loop. Intended usage:
//! - the host owns one [`TimeSource`] and reads it once per frame
//! - each widget owns its own [`TickSchedule`] and polls it with that frame's instant

mod schedule;
mod source;

pub use schedule::TickSchedule;
pub use source::{ManualClock, SystemClock, TimeOfDay, TimeSource};
