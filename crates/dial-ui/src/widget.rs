use dial_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::event::{EventCtx, EventResult, UiEvent};
use crate::painter::Painter;

/// The trait every dial component implements.
pub trait Widget: 'static {
    /// Size this widget wants given the available space.
    ///
    /// Must be deterministic: the same constraints give the same size.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Draw into `painter` within `rect`, as of `painter.now`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Route an input event. Return [`EventResult::Consumed`] to stop propagation.
    ///
    /// The default implementation ignores everything.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect, _ctx: &EventCtx) -> EventResult {
        EventResult::Ignored
    }
}
