use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Square rect of side `side` at the origin.
    #[inline]
    pub const fn square(side: f32) -> Self {
        Self::new(0.0, 0.0, side, side)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    /// Length of the shorter side; the diameter of the largest inscribed circle.
    #[inline]
    pub fn min_side(self) -> f32 {
        self.size.x.abs().min(self.size.y.abs())
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.x;
        let mut h = self.size.y;

        if w < 0.0 {
            x += w;
            w = -w;
        }
        if h < 0.0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        p.x >= r.origin.x
            && p.y >= r.origin.y
            && p.x < (r.origin.x + r.size.x)
            && p.y < (r.origin.y + r.size.y)
    }

    /// Shrinks the rect by `fraction` of its size on every side.
    ///
    /// `inset_fraction(0.1)` on a 200×200 rect yields a 160×160 rect at (20, 20).
    #[inline]
    pub fn inset_fraction(self, fraction: f32) -> Self {
        let dx = self.size.x * fraction;
        let dy = self.size.y * fraction;
        Rect::new(
            self.origin.x + dx,
            self.origin.y + dy,
            (self.size.x - 2.0 * dx).max(0.0),
            (self.size.y - 2.0 * dy).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn center_of_offset_rect() {
        assert_eq!(r(10.0, 20.0, 100.0, 50.0).center(), Vec2::new(60.0, 45.0));
    }

    #[test]
    fn min_side_picks_shorter_edge() {
        assert_eq!(r(0.0, 0.0, 120.0, 80.0).min_side(), 80.0);
    }

    #[test]
    fn inset_fraction_shrinks_evenly() {
        assert_eq!(Rect::square(200.0).inset_fraction(0.1), r(20.0, 20.0, 160.0, 160.0));
    }

    #[test]
    fn inset_fraction_clamps_to_zero() {
        let inner = Rect::square(10.0).inset_fraction(0.75);
        assert_eq!(inner.size, Vec2::zero());
    }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
