use std::time::Instant;

use dial_engine::coords::Rect;
use dial_engine::scene::DrawList;

use crate::painter::Painter;
use crate::widget::Widget;

/// Owns the draw list reused across frames.
///
/// ```rust,ignore
/// let mut scene = UiScene::new();
/// let list = scene.frame(&clock, Rect::square(200.0), time.now());
/// let svg = SvgDocument::new(Vec2::new(200.0, 200.0)).render(list);
/// ```
#[derive(Debug, Default)]
pub struct UiScene {
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the draw list and paints `root` into `rect` as of `now`.
    #[must_use]
    pub fn frame(&mut self, root: &dyn Widget, rect: Rect, now: Instant) -> &mut DrawList {
        self.draw_list.clear();
        {
            let mut painter = Painter::new(&mut self.draw_list, now);
            root.paint(&mut painter, rect);
        }
        log::trace!("ui: frame painted {} items", self.draw_list.len());
        &mut self.draw_list
    }
}
