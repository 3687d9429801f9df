//! Coordinate and geometry types shared across the SVG backend and UI.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are clock angles: degrees, 0 at twelve o'clock, increasing clockwise.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
