//! Clock widgets.
//!
//! A widget owns an elapsed-time accumulator and a handful of canvas
//! primitives. The driver advances every widget by the same fixed `dt`; the
//! widget then updates the primitives that depend on time.

pub mod dial;
pub mod digit;

pub use dial::DialWidget;
pub use digit::DigitWidget;

use crate::canvas::{Canvas, PrimitiveId};
use crate::radix;

/// Elapsed time of one digit position and the rate it turns at.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Phase {
    frequency: f64,
    elapsed: f64,
}

impl Phase {
    pub fn new(frequency: f64) -> Self {
        Self { frequency, elapsed: 0.0 }
    }

    #[inline]
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    #[inline]
    pub fn advance(&mut self, dt: f64) {
        self.elapsed += dt;
    }

    pub fn digit(&self, base: u32) -> u64 {
        radix::digit_value(self.elapsed, self.frequency, base)
    }

    pub fn hand_angle(&self) -> f64 {
        radix::hand_angle(self.elapsed, self.frequency)
    }
}

/// A time-driven element of the clock.
pub trait Widget {
    fn phase(&self) -> &Phase;

    fn phase_mut(&mut self) -> &mut Phase;

    /// Pushes the current time into the widget's primitives.
    fn redraw(&mut self, canvas: &mut Canvas);

    /// Primitives that change between frames.
    fn redraw_targets(&self) -> Vec<PrimitiveId>;

    /// Adds `dt` seconds of elapsed time, redrawing when `redraw` is set.
    fn advance(&mut self, dt: f64, canvas: &mut Canvas, redraw: bool) {
        self.phase_mut().advance(dt);
        if redraw {
            self.redraw(canvas);
        }
    }

    #[inline]
    fn elapsed(&self) -> f64 {
        self.phase().elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_accumulates_exactly_for_binary_dt() {
        let mut p = Phase::new(0.5);
        for _ in 0..64 {
            p.advance(1.0 / 64.0);
        }
        assert_eq!(p.elapsed(), 1.0);
        assert_eq!(p.digit(2), 1);
    }
}
