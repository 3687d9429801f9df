//! Dial engine crate.
//!
//! Renderer-agnostic building blocks used by `dial-ui`: geometry, colors,
//! the recorded draw stream, the SVG backend, time sources and logging.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;
