use super::Color;

/// Dash pattern: `dash` units drawn, `gap` units skipped, repeating.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dash {
    pub dash: f32,
    pub gap: f32,
}

/// Stroke drawn along a path or the outline of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    pub dash: Option<Dash>,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color, dash: None }
    }

    #[inline]
    pub fn dashed(mut self, dash: f32, gap: f32) -> Self {
        self.dash = Some(Dash { dash, gap });
        self
    }
}
