//! Paint model shared between UI and the SVG backend.
//!
//! Scope:
//! - color representation (straight-alpha sRGB)
//! - strokes, including dash patterns used for dial marks

mod color;
mod stroke;

pub use color::Color;
pub use stroke::{Dash, Stroke};
