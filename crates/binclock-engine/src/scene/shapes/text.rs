use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::{FontId, FontSystem};

/// Single-line text payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Top-left of the text block in logical pixels.
    pub origin: Vec2,
}

impl DrawList {
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        self.push(z, DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            size,
            color,
            origin,
        }));
    }

    /// Records text whose measured box is centered on `center`.
    ///
    /// Empty strings record nothing.
    #[allow(clippy::too_many_arguments)]
    pub fn push_text_centered(
        &mut self,
        z: ZIndex,
        text: &str,
        fonts: &FontSystem,
        font: FontId,
        size: f32,
        color: Color,
        center: Vec2,
    ) {
        if text.is_empty() {
            return;
        }
        let extent = fonts.measure_text(text, font, size);
        self.push_text(z, text, font, size, color, center - extent * 0.5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_centered_text_records_nothing() {
        let mut dl = DrawList::new();
        let fonts = FontSystem::new();
        dl.push_text_centered(ZIndex::BASE, "", &fonts, FontId(0), 12.0, Color::white(), Vec2::zero());
        assert!(dl.is_empty());
    }

    #[test]
    fn unknown_font_centers_on_fallback_height() {
        // Without a loaded font the measured box is zero-wide and 1.2 * size tall.
        let mut dl = DrawList::new();
        let fonts = FontSystem::new();
        dl.push_text_centered(ZIndex::BASE, "7", &fonts, FontId(0), 10.0, Color::white(), Vec2::new(50.0, 50.0));

        let DrawCmd::Text(cmd) = &dl.items()[0].cmd else { panic!("expected text") };
        assert!((cmd.origin - Vec2::new(50.0, 44.0)).length() < 1e-4);
    }
}
