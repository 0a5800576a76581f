use super::{Rect, Vec2};

/// 2D affine transform.
///
/// Maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`.
///
/// Composition follows the "then" convention: `t.then(u)` applies `t` first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine2 {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Affine2 {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    #[inline]
    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    #[inline]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Maps the unit data square `[0,1]²` (y up) onto `rect` in display space
    /// (y down): data `(0, 0)` lands on the bottom-left corner of `rect`.
    #[inline]
    pub fn unit_to_rect(rect: Rect) -> Self {
        Self::new(
            rect.size.x,
            0.0,
            0.0,
            -rect.size.y,
            rect.origin.x,
            rect.origin.y + rect.size.y,
        )
    }

    /// Rotation about `pivot` in display space (y down).
    ///
    /// Positive `angle` turns counter-clockwise as seen on screen, so
    /// `-angle` is a clockwise turn.
    pub fn rotate_around(pivot: Vec2, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        // With +Y down, an on-screen CCW turn is a CW turn in the math frame.
        let rot = Self::new(c, -s, s, c, 0.0, 0.0);
        Self::translate(-pivot.x, -pivot.y)
            .then(rot)
            .then(Self::translate(pivot.x, pivot.y))
    }

    /// Returns the transform applying `self` first and `next` second.
    #[inline]
    pub fn then(self, next: Self) -> Self {
        Self::new(
            next.a * self.a + next.c * self.b,
            next.b * self.a + next.d * self.b,
            next.a * self.c + next.c * self.d,
            next.b * self.c + next.d * self.d,
            next.a * self.e + next.c * self.f + next.e,
            next.b * self.e + next.d * self.f + next.f,
        )
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn unit_to_rect_flips_y() {
        let t = Affine2::unit_to_rect(Rect::new(10.0, 20.0, 100.0, 50.0));
        assert!(close(t.apply(Vec2::new(0.0, 0.0)), Vec2::new(10.0, 70.0)));
        assert!(close(t.apply(Vec2::new(1.0, 1.0)), Vec2::new(110.0, 20.0)));
        assert!(close(t.apply(Vec2::new(0.5, 0.5)), Vec2::new(60.0, 45.0)));
    }

    #[test]
    fn rotate_quarter_turn_ccw_on_screen() {
        let pivot = Vec2::new(50.0, 50.0);
        let t = Affine2::rotate_around(pivot, core::f32::consts::FRAC_PI_2);
        // A point right of the pivot ends up above it (smaller y on screen).
        assert!(close(t.apply(Vec2::new(60.0, 50.0)), Vec2::new(50.0, 40.0)));
    }

    #[test]
    fn negative_angle_turns_clockwise() {
        let pivot = Vec2::new(0.0, 0.0);
        let t = Affine2::rotate_around(pivot, -core::f32::consts::FRAC_PI_2);
        // Up (negative y) goes to the right.
        assert!(close(t.apply(Vec2::new(0.0, -1.0)), Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn pivot_is_fixed() {
        let pivot = Vec2::new(3.0, -7.0);
        let t = Affine2::rotate_around(pivot, 1.234);
        assert!(close(t.apply(pivot), pivot));
    }

    #[test]
    fn then_applies_left_first() {
        let t = Affine2::scale(2.0, 2.0).then(Affine2::translate(1.0, 0.0));
        assert!(close(t.apply(Vec2::new(1.0, 1.0)), Vec2::new(3.0, 2.0)));
        let u = Affine2::translate(1.0, 0.0).then(Affine2::scale(2.0, 2.0));
        assert!(close(u.apply(Vec2::new(1.0, 1.0)), Vec2::new(4.0, 2.0)));
    }
}
