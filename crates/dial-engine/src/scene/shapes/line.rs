use crate::coords::Vec2;
use crate::paint::Stroke;
use crate::scene::{DrawCmd, DrawList, Layer};

/// Rotation applied to a shape around `pivot`, in clock degrees (clockwise).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    pub deg: f32,
    pub pivot: Vec2,
}

/// Straight line segment payload.
///
/// Hands are recorded pointing at twelve o'clock with a `rotation`, so a
/// backend can animate the rotation without recomputing the geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub stroke: Stroke,
    pub rotation: Option<Rotation>,
}

impl DrawList {
    /// Records a line segment.
    #[inline]
    pub fn push_line(
        &mut self,
        layer: Layer,
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
        rotation: Option<Rotation>,
        part: Option<String>,
    ) {
        self.push_part(layer, DrawCmd::Line(LineCmd { from, to, stroke, rotation }), part);
    }
}
