use dial_engine::coords::Vec2;

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed from host to widget during measure.
///
/// A widget may return any size in `[min, max]`; hosts enforce their own
/// policy with [`Constraints::constrain`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// No limits: the widget picks its own size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Largest square that fits, honouring `min` where possible.
    #[inline]
    #[must_use]
    pub fn constrain_square(self, side: f32) -> Vec2 {
        let side = side.min(self.max.x).min(self.max.y).max(self.min.x.max(self.min.y));
        self.constrain(Vec2::new(side, side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_clamps_below_min() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(100.0, 100.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 3.0)), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn constrain_clamps_above_max() {
        let c = Constraints { min: Vec2::zero(), max: Vec2::new(50.0, 50.0) };
        assert_eq!(c.constrain(Vec2::new(200.0, 200.0)), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn unbounded_keeps_size() {
        let v = Vec2::new(320.0, 240.0);
        assert_eq!(Constraints::unbounded().constrain(v), v);
    }

    #[test]
    fn square_shrinks_to_narrow_side() {
        let c = Constraints { min: Vec2::zero(), max: Vec2::new(120.0, 80.0) };
        assert_eq!(c.constrain_square(200.0), Vec2::new(80.0, 80.0));
    }

    #[test]
    fn min_wins_over_requested_side() {
        let c = Constraints { min: Vec2::new(64.0, 32.0), max: Vec2::new(64.0, 32.0) };
        assert_eq!(c.constrain_square(200.0), Vec2::new(64.0, 32.0));
    }
}
