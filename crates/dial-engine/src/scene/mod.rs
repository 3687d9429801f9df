//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (layer + insertion order)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod layer;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use layer::{Layer, SortKey};
pub use list::{DrawItem, DrawList};
pub use shapes::{circle::CircleCmd, line::{LineCmd, Rotation}, text::TextCmd};
