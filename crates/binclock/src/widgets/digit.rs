use binclock_engine::coords::Vec2;
use binclock_engine::scene::ZIndex;

use crate::canvas::{Canvas, PrimitiveId, Shape, SurfaceId};
use crate::config::Theme;
use crate::radix;

use super::{Phase, Widget};

/// Numeric readout of one digit position.
pub struct DigitWidget {
    phase: Phase,
    base: u32,
    label: PrimitiveId,
}

impl DigitWidget {
    pub fn new(
        frequency: f64,
        canvas: &mut Canvas,
        surface: SurfaceId,
        base: u32,
        text_scale: f32,
        theme: &Theme,
    ) -> Self {
        let label = canvas.add(
            surface,
            Shape::Label {
                text: String::new(),
                anchor: Vec2::new(0.5, 0.5),
                size: text_scale,
            },
            theme.text,
            ZIndex::OVERLAY,
        );

        let mut widget = Self {
            phase: Phase::new(frequency),
            base,
            label,
        };
        widget.redraw(canvas);
        widget
    }

    #[inline]
    pub fn base(&self) -> u32 {
        self.base
    }

    #[inline]
    pub fn label(&self) -> PrimitiveId {
        self.label
    }

    pub fn value(&self) -> u64 {
        self.phase.digit(self.base)
    }
}

impl Widget for DigitWidget {
    fn phase(&self) -> &Phase {
        &self.phase
    }

    fn phase_mut(&mut self) -> &mut Phase {
        &mut self.phase
    }

    fn redraw(&mut self, canvas: &mut Canvas) {
        canvas.set_text(self.label, radix::format_digit(self.value(), self.base));
    }

    fn redraw_targets(&self) -> Vec<PrimitiveId> {
        vec![self.label]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binclock_engine::coords::Rect;

    fn digit(base: u32, frequency: f64) -> (Canvas, DigitWidget) {
        let mut canvas = Canvas::new(None);
        let s = canvas.add_surface(Rect::new(0.0, 0.0, 100.0, 100.0));
        let d = DigitWidget::new(frequency, &mut canvas, s, base, 75.0, &Theme::default());
        (canvas, d)
    }

    #[test]
    fn shows_zero_on_construction() {
        let (canvas, d) = digit(2, 0.5);
        assert_eq!(canvas.text(d.label()), Some("0"));

        let (canvas, d) = digit(60, 0.5);
        assert_eq!(canvas.text(d.label()), Some("00"));
    }

    #[test]
    fn binary_digit_flips_every_half_cycle() {
        // f = 1: flips every 0.5 s, dt = 1/64 s.
        let (mut canvas, mut d) = digit(2, 1.0);
        let mut seen = Vec::new();
        for frame in 1..=128 {
            d.advance(1.0 / 64.0, &mut canvas, true);
            if frame % 16 == 0 {
                seen.push(canvas.text(d.label()).unwrap().to_string());
            }
        }
        assert_eq!(seen, ["0", "1", "1", "0", "0", "1", "1", "0"]);
    }

    #[test]
    fn sexagesimal_digit_is_padded() {
        let (mut canvas, mut d) = digit(60, 1.0 / 60.0);
        d.advance(7.5, &mut canvas, true);
        assert_eq!(canvas.text(d.label()), Some("07"));
        d.advance(60.0, &mut canvas, true);
        assert_eq!(canvas.text(d.label()), Some("07"));
    }
}
