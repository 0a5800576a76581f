use binclock_engine::coords::Vec2;
use binclock_engine::scene::ZIndex;

use crate::canvas::{Canvas, PrimitiveId, Rotation, Shape, SurfaceId};
use crate::config::Theme;
use crate::radix;

use super::{Phase, Widget};

const CENTER: Vec2 = Vec2::new(0.5, 0.5);
const FACE_RADIUS: f32 = 0.49;
const FACE_STROKE_PT: f32 = 2.0;
const LABEL_RADIUS: f32 = 0.4;

const HAND_LENGTH: f32 = 0.4;
const HAND_WIDTH: f32 = 0.05;
const HAND_HEAD_WIDTH: f32 = 0.1;
const HAND_HEAD_LENGTH: f32 = 0.15;

/// Bases above this shrink their labels proportionally.
const LABEL_SHRINK_ABOVE: u32 = 12;

/// Circular dial with `base` evenly spaced labels and a rotating hand.
///
/// The hand turns clockwise, once every `1 / frequency` seconds, starting at
/// label 0 (twelve o'clock).
pub struct DialWidget {
    phase: Phase,
    base: u32,
    face: PrimitiveId,
    labels: Vec<PrimitiveId>,
    hand: PrimitiveId,
}

impl DialWidget {
    pub fn new(
        frequency: f64,
        canvas: &mut Canvas,
        surface: SurfaceId,
        base: u32,
        label_scale: f32,
        theme: &Theme,
    ) -> Self {
        let face = canvas.add(
            surface,
            Shape::Ring { center: CENTER, radius: FACE_RADIUS, stroke: FACE_STROKE_PT },
            theme.dial,
            ZIndex::BASE,
        );

        let size = label_size(label_scale, base);
        let labels = (0..base)
            .map(|i| {
                let dir = Vec2::from_angle(radix::label_angle(i, base) as f32);
                canvas.add(
                    surface,
                    Shape::Label {
                        text: i.to_string(),
                        anchor: CENTER + dir * LABEL_RADIUS,
                        size,
                    },
                    theme.text,
                    ZIndex::BASE,
                )
            })
            .collect();

        let hand = canvas.add(
            surface,
            Shape::Arrow {
                tail: CENTER,
                delta: Vec2::new(0.0, HAND_LENGTH),
                width: HAND_WIDTH,
                head_width: HAND_HEAD_WIDTH,
                head_length: HAND_HEAD_LENGTH,
            },
            theme.hand,
            ZIndex::OVERLAY,
        );

        let mut widget = Self {
            phase: Phase::new(frequency),
            base,
            face,
            labels,
            hand,
        };
        widget.redraw(canvas);
        widget
    }

    #[inline]
    pub fn base(&self) -> u32 {
        self.base
    }

    #[inline]
    pub fn face(&self) -> PrimitiveId {
        self.face
    }

    #[inline]
    pub fn labels(&self) -> &[PrimitiveId] {
        &self.labels
    }

    #[inline]
    pub fn hand(&self) -> PrimitiveId {
        self.hand
    }
}

impl Widget for DialWidget {
    fn phase(&self) -> &Phase {
        &self.phase
    }

    fn phase_mut(&mut self) -> &mut Phase {
        &mut self.phase
    }

    fn redraw(&mut self, canvas: &mut Canvas) {
        let angle = self.phase.hand_angle() as f32;
        canvas.set_rotation(self.hand, Some(Rotation { pivot: CENTER, angle }));
    }

    fn redraw_targets(&self) -> Vec<PrimitiveId> {
        vec![self.hand]
    }
}

fn label_size(scale: f32, base: u32) -> f32 {
    if base <= LABEL_SHRINK_ABOVE {
        scale
    } else {
        scale * LABEL_SHRINK_ABOVE as f32 / base as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binclock_engine::coords::Rect;

    fn dial(base: u32, frequency: f64) -> (Canvas, DialWidget) {
        let mut canvas = Canvas::new(None);
        let s = canvas.add_surface(Rect::new(0.0, 0.0, 100.0, 100.0));
        let d = DialWidget::new(frequency, &mut canvas, s, base, 22.0, &Theme::default());
        (canvas, d)
    }

    fn anchor(canvas: &Canvas, id: PrimitiveId) -> Vec2 {
        match canvas.shape(id) {
            Shape::Label { anchor, .. } => *anchor,
            other => panic!("not a label: {other:?}"),
        }
    }

    #[test]
    fn labels_run_clockwise_from_the_top() {
        let (canvas, d) = dial(4, 1.0);
        let got: Vec<_> = d.labels().iter().map(|&id| canvas.text(id).unwrap().to_string()).collect();
        assert_eq!(got, ["0", "1", "2", "3"]);

        let top = anchor(&canvas, d.labels()[0]);
        let right = anchor(&canvas, d.labels()[1]);
        assert!((top - Vec2::new(0.5, 0.9)).length() < 1e-5);
        assert!((right - Vec2::new(0.9, 0.5)).length() < 1e-5);
    }

    #[test]
    fn large_bases_shrink_labels() {
        assert_eq!(label_size(22.0, 12), 22.0);
        assert_eq!(label_size(22.0, 24), 11.0);
    }

    #[test]
    fn hand_starts_at_label_zero() {
        let (canvas, d) = dial(2, 0.5);
        assert_eq!(canvas.rotation(d.hand()).map(|r| r.angle), Some(0.0));
        assert_eq!(d.redraw_targets(), vec![d.hand()]);
    }

    #[test]
    fn hand_turns_clockwise_and_wraps() {
        let (mut canvas, mut d) = dial(2, 0.25);

        d.advance(1.0, &mut canvas, true);
        let quarter = canvas.rotation(d.hand()).unwrap().angle;
        assert!((quarter + std::f32::consts::FRAC_PI_2).abs() < 1e-5);

        d.advance(3.0, &mut canvas, true);
        let full = canvas.rotation(d.hand()).unwrap().angle;
        assert!(full.sin().abs() < 1e-5 && (full.cos() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn advance_without_redraw_keeps_the_initial_angle() {
        let (mut canvas, mut d) = dial(2, 0.25);
        d.advance(1.0, &mut canvas, false);
        assert_eq!(d.elapsed(), 1.0);
        assert_eq!(canvas.rotation(d.hand()).map(|r| r.angle), Some(0.0));
    }
}
