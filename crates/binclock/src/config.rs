//! Clock configuration.
//!
//! Everything is fixed at compile time; `ClockConfig::new()` reads the
//! constants below and the builder setters exist for presets and tests.

use std::time::Duration;

use anyhow::{ensure, Result};
use binclock_engine::paint::Color;
use winit::dpi::LogicalSize;

use crate::radix;

// ── Constants ─────────────────────────────────────────────────────────────

/// Dial label count per position, fastest first.
pub const CLOCK_BASES: [u32; 8] = [2; 8];
/// Digit modulus per position, fastest first.
pub const DISPLAY_BASES: [u32; 8] = CLOCK_BASES;

/// Revolutions per second of the fastest hand.
pub const F0: f64 = 0.5;
pub const FPS: u32 = 60;

/// Figure width in inches; the window is `FIGURE_WIDTH_IN * DPI` wide.
pub const FIGURE_WIDTH_IN: f32 = 15.0;
pub const DPI: f32 = 96.0;

/// Dial label size in points (before shrinking for bases above 12).
pub const DIAL_LABEL_PT: f32 = 22.0;
/// Digit text size in points per inch of figure width, divided by digit count.
pub const DIGIT_TEXT_PT_PER_IN: f32 = 40.0;

// ── Theme ─────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub dial: Color,
    pub hand: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::black(),
            text: Color::white(),
            dial: Color::white(),
            // tab:blue
            hand: Color::from_hex(0x1f77b4),
        }
    }
}

// ── ClockConfig ───────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ClockConfig {
    pub clock_bases: Vec<u32>,
    pub display_bases: Vec<u32>,
    pub f0: f64,
    pub fps: u32,
    pub figure_width_in: f32,
    pub dpi: f32,
    pub theme: Theme,
    /// Exit once the last frame has been presented.
    pub close_when_finished: bool,
}

impl ClockConfig {
    pub fn new() -> Self {
        Self {
            clock_bases: CLOCK_BASES.to_vec(),
            display_bases: DISPLAY_BASES.to_vec(),
            f0: F0,
            fps: FPS,
            figure_width_in: FIGURE_WIDTH_IN,
            dpi: DPI,
            theme: Theme::default(),
            close_when_finished: false,
        }
    }

    /// Pure binary clock with `bits` positions.
    pub fn binary(bits: usize) -> Self {
        Self::new().bases(vec![2; bits], vec![2; bits])
    }

    /// Seconds, minutes, hours on twelve-label dials.
    pub fn time_of_day() -> Self {
        Self::new().bases(vec![12, 12, 12], vec![60, 60, 24])
    }

    pub fn bases(mut self, clock_bases: Vec<u32>, display_bases: Vec<u32>) -> Self {
        self.clock_bases = clock_bases;
        self.display_bases = display_bases;
        self
    }

    pub fn f0(mut self, f0: f64) -> Self {
        self.f0 = f0;
        self
    }

    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn close_when_finished(mut self, close: bool) -> Self {
        self.close_when_finished = close;
        self
    }

    /// Rejects configurations the animation cannot run.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.display_bases.is_empty(), "at least one digit is required");
        ensure!(
            self.clock_bases.len() == self.display_bases.len(),
            "clock bases ({}) and display bases ({}) differ in length",
            self.clock_bases.len(),
            self.display_bases.len()
        );
        if let Some(b) = self.clock_bases.iter().chain(&self.display_bases).find(|&&b| b < 2) {
            anyhow::bail!("base {b} is below 2");
        }
        ensure!(self.f0.is_finite() && self.f0 > 0.0, "f0 must be positive, got {}", self.f0);
        ensure!(self.fps > 0, "fps must be positive");
        ensure!(
            self.figure_width_in > 0.0 && self.dpi > 0.0,
            "figure size must be positive"
        );
        Ok(())
    }

    #[inline]
    pub fn digits(&self) -> usize {
        self.display_bases.len()
    }

    pub fn frequencies(&self) -> Vec<f64> {
        radix::frequencies(&self.display_bases, self.f0)
    }

    /// Seconds until every hand is back at zero.
    pub fn period(&self) -> f64 {
        radix::period(&self.display_bases, self.f0)
    }

    pub fn frame_count(&self) -> u64 {
        radix::frame_count(self.period(), self.fps)
    }

    /// Elapsed time added per animation frame.
    #[inline]
    pub fn frame_dt(&self) -> f64 {
        1.0 / self.fps as f64
    }

    /// Wall-clock spacing of animation frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(self.frame_dt())
    }

    /// One figure-width wide, two square cells per digit column tall.
    pub fn initial_size(&self) -> LogicalSize<f64> {
        let w = self.figure_width_in as f64 * self.dpi as f64;
        let h = w * 2.0 / self.digits().max(1) as f64;
        LogicalSize::new(w, h)
    }

    pub fn digit_text_pt(&self) -> f32 {
        DIGIT_TEXT_PT_PER_IN * self.figure_width_in / self.digits().max(1) as f32
    }

    /// Point-to-logical-pixel factor at the initial window width.
    #[inline]
    pub fn px_per_pt(&self) -> f32 {
        self.dpi / 72.0
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_an_eight_bit_clock() {
        let cfg = ClockConfig::new();
        cfg.validate().unwrap();
        assert_eq!(cfg.digits(), 8);
        assert_eq!(cfg.frame_count(), 15_360);

        let size = cfg.initial_size();
        assert_eq!((size.width, size.height), (1440.0, 360.0));
        assert_eq!(cfg.digit_text_pt(), 75.0);
    }

    #[test]
    fn time_of_day_preset() {
        let cfg = ClockConfig::time_of_day();
        cfg.validate().unwrap();
        assert_eq!(cfg.clock_bases, vec![12, 12, 12]);
        assert_eq!(cfg.display_bases, vec![60, 60, 24]);
    }

    #[test]
    fn rejects_bad_configs() {
        assert!(ClockConfig::new().bases(vec![], vec![]).validate().is_err());
        assert!(ClockConfig::new().bases(vec![2, 2], vec![2]).validate().is_err());
        assert!(ClockConfig::new().bases(vec![2], vec![1]).validate().is_err());
        assert!(ClockConfig::new().f0(0.0).validate().is_err());
        assert!(ClockConfig::new().f0(f64::NAN).validate().is_err());
        assert!(ClockConfig::new().fps(0).validate().is_err());
    }

    #[test]
    fn frame_interval_matches_fps() {
        let cfg = ClockConfig::new().fps(50);
        let diff = cfg.frame_interval().as_secs_f64() - 0.020;
        assert!(diff.abs() < 1e-9);
    }
}
