use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Layer};

/// Text draw payload, centred on `center`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    pub center: Vec2,
}

impl DrawList {
    /// Records a centred text label.
    pub fn push_text(
        &mut self,
        layer: Layer,
        text: impl Into<String>,
        size: f32,
        color: Color,
        center: Vec2,
        part: Option<String>,
    ) {
        self.push_part(
            layer,
            DrawCmd::Text(TextCmd { text: text.into(), size, color, center }),
            part,
        );
    }
}
