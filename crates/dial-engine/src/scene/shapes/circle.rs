use crate::coords::Vec2;
use crate::paint::{Color, Stroke};
use crate::scene::{DrawCmd, DrawList, Layer};

/// Circle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    /// `None` leaves the interior unpainted.
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, fill: Option<Color>, stroke: Option<Stroke>) -> Self {
        Self { center, radius, fill, stroke }
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(
        &mut self,
        layer: Layer,
        center: Vec2,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
        part: Option<String>,
    ) {
        self.push_part(layer, DrawCmd::Circle(CircleCmd::new(center, radius, fill, stroke)), part);
    }
}
