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
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
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

    /// Largest square centered inside this rectangle.
    ///
    /// Used for aspect-locked drawing surfaces.
    #[inline]
    pub fn centered_square(self) -> Self {
        let r = self.normalized();
        let side = r.size.x.min(r.size.y);
        let c = r.center();
        Rect::new(c.x - side * 0.5, c.y - side * 0.5, side, side)
    }

    /// Shrinks the rectangle by `amount` on every side, never below zero size.
    #[inline]
    pub fn inset(self, amount: f32) -> Self {
        let r = self.normalized();
        let w = (r.size.x - 2.0 * amount).max(0.0);
        let h = (r.size.y - 2.0 * amount).max(0.0);
        let c = r.center();
        Rect::new(c.x - w * 0.5, c.y - h * 0.5, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_width() {
        let rect = r(10.0, 0.0, -4.0, 5.0);
        let n = rect.normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── centered_square ───────────────────────────────────────────────────

    #[test]
    fn centered_square_of_wide_rect() {
        let sq = r(0.0, 0.0, 200.0, 100.0).centered_square();
        assert_eq!(sq, r(50.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn centered_square_of_tall_rect() {
        let sq = r(10.0, 10.0, 40.0, 80.0).centered_square();
        assert_eq!(sq, r(10.0, 30.0, 40.0, 40.0));
    }

    #[test]
    fn centered_square_keeps_center() {
        let rect = r(3.0, 7.0, 31.0, 13.0);
        assert_eq!(rect.centered_square().center(), rect.center());
    }

    // ── inset ─────────────────────────────────────────────────────────────

    #[test]
    fn inset_shrinks_each_side() {
        assert_eq!(r(0.0, 0.0, 10.0, 20.0).inset(2.0), r(2.0, 2.0, 6.0, 16.0));
    }

    #[test]
    fn inset_clamps_to_empty() {
        let rect = r(0.0, 0.0, 4.0, 4.0).inset(5.0);
        assert!(rect.is_empty());
        assert_eq!(rect.center(), Vec2::new(2.0, 2.0));
    }
}
