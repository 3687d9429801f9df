use std::time::Instant;

use dial_engine::coords::Vec2;
use dial_engine::paint::{Color, Stroke};
use dial_engine::scene::{DrawList, Layer, Rotation};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a dial-oriented API. Commands go to the
/// current layer, selected with [`on_layer`](Self::on_layer).
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    layer: Layer,
    /// Instant the frame is painted for.
    pub now: Instant,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, now: Instant) -> Self {
        Self { draw_list, layer: Layer::default(), now }
    }

    /// Routes subsequent commands to `layer`.
    #[inline]
    pub fn on_layer(&mut self, layer: Layer) -> &mut Self {
        self.layer = layer;
        self
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Unfilled circle outline.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, stroke: Stroke, part: Option<&str>) {
        self.draw_list
            .push_circle(self.layer, center, radius, None, Some(stroke), part.map(str::to_owned));
    }

    /// Solid disc.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, part: Option<&str>) {
        self.draw_list
            .push_circle(self.layer, center, radius, Some(color), None, part.map(str::to_owned));
    }

    /// A hand: a line from `pivot` pointing at twelve o'clock, rotated
    /// clockwise by `deg` about the pivot.
    pub fn hand(&mut self, pivot: Vec2, length: f32, deg: f32, stroke: Stroke, part: &str) {
        let tip = Vec2::new(pivot.x, pivot.y - length);
        self.draw_list.push_line(
            self.layer,
            pivot,
            tip,
            stroke,
            Some(Rotation { deg, pivot }),
            Some(part.to_owned()),
        );
    }

    /// Text centred on `center`.
    pub fn text(&mut self, text: impl Into<String>, size: f32, color: Color, center: Vec2) {
        self.draw_list.push_text(self.layer, text, size, color, center, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dial_engine::scene::DrawCmd;

    #[test]
    fn hand_is_rotated_line_from_pivot() {
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, Instant::now());
        let pivot = Vec2::new(50.0, 50.0);
        p.on_layer(Layer::Hands).hand(pivot, 30.0, 90.0, Stroke::new(1.0, Color::BLACK), "hand-sec");

        let item = list.find_part("hand-sec").unwrap();
        assert_eq!(item.key.layer, Layer::Hands);
        let DrawCmd::Line(line) = &item.cmd else { panic!("expected a line") };
        assert_eq!(line.from, pivot);
        assert_eq!(line.to, Vec2::new(50.0, 20.0));
        assert_eq!(line.rotation.map(|r| r.deg), Some(90.0));
    }

    #[test]
    fn commands_follow_current_layer() {
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, Instant::now());
        p.on_layer(Layer::Pivot).fill_circle(Vec2::zero(), 2.0, Color::BLACK, None);
        p.on_layer(Layer::Marks).text("12", 16.0, Color::BLACK, Vec2::zero());
        let layers: Vec<_> = list.items().iter().map(|i| i.key.layer).collect();
        assert_eq!(layers, vec![Layer::Pivot, Layer::Marks]);
    }
}
