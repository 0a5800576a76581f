//! Clock assembly and the per-frame animation step.

use binclock_engine::coords::Rect;
use binclock_engine::scene::DrawList;
use binclock_engine::text::{FontId, FontSystem};

use crate::animation::FrameDriver;
use crate::canvas::{Canvas, PrimitiveId, SurfaceId};
use crate::config::{ClockConfig, DIAL_LABEL_PT};
use crate::layout;
use crate::widgets::{DialWidget, DigitWidget, Widget};

/// Widgets of one digit position.
pub struct DigitColumn {
    pub digit: DigitWidget,
    pub dial: DialWidget,
    digit_surface: SurfaceId,
    dial_surface: SurfaceId,
}

pub struct Clock {
    canvas: Canvas,
    columns: Vec<DigitColumn>,
    targets: Vec<PrimitiveId>,
    driver: FrameDriver,
    dt: f64,
    fps: u32,
}

impl Clock {
    /// Builds every widget inside `bounds`. `config` must be valid.
    pub fn new(config: &ClockConfig, bounds: Rect, font: Option<FontId>) -> Self {
        let mut canvas = Canvas::new(font);
        let frequencies = config.frequencies();
        let cells = layout::clock_cells(bounds, config.digits());
        let text_pt = config.digit_text_pt();

        let columns: Vec<DigitColumn> = cells
            .iter()
            .enumerate()
            .map(|(i, cells)| {
                let digit_surface = canvas.add_surface(cells.digit);
                let dial_surface = canvas.add_surface(cells.dial);
                let digit = DigitWidget::new(
                    frequencies[i],
                    &mut canvas,
                    digit_surface,
                    config.display_bases[i],
                    text_pt,
                    &config.theme,
                );
                let dial = DialWidget::new(
                    frequencies[i],
                    &mut canvas,
                    dial_surface,
                    config.clock_bases[i],
                    DIAL_LABEL_PT,
                    &config.theme,
                );
                DigitColumn { digit, dial, digit_surface, dial_surface }
            })
            .collect();

        let targets = columns
            .iter()
            .flat_map(|c| {
                let mut t = c.digit.redraw_targets();
                t.extend(c.dial.redraw_targets());
                t
            })
            .collect();

        let driver = FrameDriver::new(config.frame_count());
        log_summary(config, &frequencies, driver.total());

        Self {
            canvas,
            columns,
            targets,
            driver,
            dt: config.frame_dt(),
            fps: config.fps,
        }
    }

    /// Runs the next animation frame and returns the primitives it changed.
    ///
    /// Frame 0 only shows the initial state. Returns `None` once the last
    /// frame has run.
    pub fn step(&mut self) -> Option<&[PrimitiveId]> {
        let frame = self.driver.next_frame()?;
        if frame > 0 {
            self.advance(self.dt);
        }

        if frame % self.fps as u64 == 0 {
            log::debug!(
                "frame {}/{}: {}",
                frame,
                self.driver.total(),
                self.readout()
            );
        }
        if self.driver.is_finished() {
            log::info!(
                "animation finished after {} frames ({:.3} s simulated), showing {}",
                self.driver.total(),
                self.elapsed(),
                self.readout()
            );
        }

        Some(&self.targets)
    }

    fn advance(&mut self, dt: f64) {
        for col in &mut self.columns {
            col.digit.advance(dt, &mut self.canvas, true);
            col.dial.advance(dt, &mut self.canvas, true);
        }
    }

    /// Moves every surface into the grid over `bounds`.
    pub fn relayout(&mut self, bounds: Rect) {
        let cells = layout::clock_cells(bounds, self.columns.len());
        for (col, cells) in self.columns.iter().zip(&cells) {
            self.canvas.set_surface_bounds(col.digit_surface, cells.digit);
            self.canvas.set_surface_bounds(col.dial_surface, cells.dial);
        }
    }

    pub fn compose(&mut self, out: &mut DrawList, fonts: &FontSystem, pt_to_px: f32) {
        self.canvas.compose(out, &self.targets, fonts, pt_to_px);
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.driver.is_finished()
    }

    pub fn columns(&self) -> &[DigitColumn] {
        &self.columns
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Flat redraw-target list, per position the digit then the dial.
    pub fn redraw_targets(&self) -> &[PrimitiveId] {
        &self.targets
    }

    pub fn elapsed(&self) -> f64 {
        self.columns.first().map_or(0.0, |c| c.digit.elapsed())
    }

    /// Digit texts, most significant first, separated by spaces.
    pub fn readout(&self) -> String {
        self.columns
            .iter()
            .rev()
            .map(|c| self.canvas.text(c.digit.label()).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn log_summary(config: &ClockConfig, frequencies: &[f64], frames: u64) {
    log::info!(
        "{} digits, period {:.3} s, {} frames at {} fps",
        config.digits(),
        config.period(),
        frames,
        config.fps
    );
    for (i, f) in frequencies.iter().enumerate() {
        log::info!(
            "  digit {i}: clock base {:>2}, display base {:>2}, {:.6} rev/s",
            config.clock_bases[i],
            config.display_bases[i],
            f
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_bit_clock() -> Clock {
        // Digit 0 flips every 0.5 s; dt = 1/64 s is exact in binary.
        let cfg = ClockConfig::binary(3).f0(1.0).fps(64);
        cfg.validate().unwrap();
        Clock::new(&cfg, Rect::new(0.0, 0.0, 300.0, 200.0), None)
    }

    #[test]
    fn frame_count_covers_one_period() {
        let cfg = ClockConfig::binary(3).f0(1.0).fps(64);
        let frames = cfg.frame_count();
        assert_eq!(frames, 256);
        assert!((frames as f64 * cfg.frame_dt() - cfg.period()).abs() < cfg.frame_dt());
    }

    #[test]
    fn digits_encode_the_tick_count() {
        let mut clock = three_bit_clock();
        assert_eq!(clock.readout(), "0 0 0");

        let mut frame = 0u64;
        while clock.step().is_some() {
            let ticks = frame / 32;
            let expected: Vec<String> = (0..3).rev().map(|b| ((ticks >> b) & 1).to_string()).collect();
            assert_eq!(clock.readout(), expected.join(" "), "frame {frame}");
            frame += 1;
        }

        assert_eq!(frame, 256);
        assert!(clock.is_finished());
        assert_eq!(clock.elapsed(), 255.0 / 64.0);
        assert_eq!(clock.readout(), "1 1 1");
    }

    #[test]
    fn wraps_to_zero_after_a_full_period() {
        let mut clock = three_bit_clock();
        for _ in 0..256 {
            clock.advance(1.0 / 64.0);
        }
        assert_eq!(clock.elapsed(), 4.0);
        assert_eq!(clock.readout(), "0 0 0");
    }

    #[test]
    fn time_of_day_preset_carries_seconds_into_minutes_and_hours() {
        let cfg = ClockConfig::time_of_day().f0(1.0 / 60.0);
        cfg.validate().unwrap();
        let mut clock = Clock::new(&cfg, Rect::new(0.0, 0.0, 300.0, 200.0), None);
        let values = |c: &Clock| -> Vec<u64> { c.columns().iter().map(|col| col.digit.value()).collect() };

        clock.advance(59.5);
        assert_eq!(values(&clock), [59, 0, 0]);
        assert_eq!(clock.readout(), "00 00 59");

        clock.advance(1.0);
        assert_eq!(values(&clock), [0, 1, 0]);
        assert_eq!(clock.readout(), "00 01 00");

        clock.advance(3540.0);
        assert_eq!(values(&clock), [0, 0, 1]);
        assert_eq!(clock.readout(), "01 00 00");
    }

    #[test]
    fn frame_zero_does_not_advance() {
        let mut clock = three_bit_clock();
        assert!(clock.step().is_some());
        assert_eq!(clock.elapsed(), 0.0);
        clock.step();
        assert_eq!(clock.elapsed(), 1.0 / 64.0);
    }

    #[test]
    fn targets_pair_digit_and_dial_per_position() {
        let clock = three_bit_clock();
        let expected: Vec<PrimitiveId> = clock
            .columns()
            .iter()
            .flat_map(|c| [c.digit.label(), c.dial.hand()])
            .collect();
        assert_eq!(clock.redraw_targets(), expected.as_slice());
    }

    #[test]
    fn most_significant_digit_is_leftmost() {
        let clock = three_bit_clock();
        let cols = clock.columns();
        let x = |c: &DigitColumn| clock.canvas().surface_rect(c.digit_surface).origin.x;
        assert!(x(&cols[2]) < x(&cols[1]) && x(&cols[1]) < x(&cols[0]));
    }

    #[test]
    fn relayout_moves_surfaces() {
        let mut clock = three_bit_clock();
        clock.relayout(Rect::new(0.0, 0.0, 600.0, 400.0));
        let r = clock.canvas().surface_rect(clock.columns()[0].dial_surface);
        assert_eq!(r, Rect::new(400.0, 200.0, 200.0, 200.0));
    }
}
