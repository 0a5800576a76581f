use super::Rect;

/// Viewport size in logical pixels.
///
/// Renderers upload this to their viewport UBO to map logical px to NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// False for minimized windows and degenerate sizes.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Full-window rect anchored at the origin.
    #[inline]
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_is_invalid() {
        assert!(!Viewport::new(0.0, 300.0).is_valid());
        assert!(!Viewport::new(f32::NAN, 300.0).is_valid());
        assert!(Viewport::new(1440.0, 360.0).is_valid());
    }

    #[test]
    fn bounds_cover_viewport() {
        let r = Viewport::new(800.0, 200.0).bounds();
        assert_eq!(r, Rect::new(0.0, 0.0, 800.0, 200.0));
    }
}
