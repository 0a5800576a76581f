//! Mixed-radix timing math.
//!
//! Digit `0` is the fastest (rightmost) position. Its dial hand turns at `f0`
//! revolutions per second; every higher position turns once per full cycle of
//! the position below it.

use std::f64::consts::TAU;

/// Revolution frequency of every digit position, fastest first.
///
/// `frequency(i) = f0 / (display_bases[1] * ... * display_bases[i])`.
pub fn frequencies(display_bases: &[u32], f0: f64) -> Vec<f64> {
    let mut weight = 1.0;
    display_bases
        .iter()
        .enumerate()
        .map(|(i, &base)| {
            if i > 0 {
                weight *= base as f64;
            }
            f0 / weight
        })
        .collect()
}

/// Time for the slowest hand to complete one revolution.
pub fn period(display_bases: &[u32], f0: f64) -> f64 {
    let weight: f64 = display_bases.iter().skip(1).map(|&b| b as f64).product();
    weight / f0
}

/// Number of animation frames covering one full `period` at `fps`.
pub fn frame_count(period: f64, fps: u32) -> u64 {
    (period * fps as f64).floor() as u64
}

/// Value shown by a digit of `base` after `elapsed` seconds.
///
/// A base-2 digit flips every `1 / (2 * frequency)`; a base-`b` digit steps
/// every `1 / (b * frequency)`.
pub fn digit_value(elapsed: f64, frequency: f64, base: u32) -> u64 {
    let steps = (elapsed * frequency * base as f64).floor().max(0.0) as u64;
    steps % base as u64
}

/// Text for a digit value: bare `0`/`1` in base 2, two zero-padded places otherwise.
pub fn format_digit(value: u64, base: u32) -> String {
    if base == 2 {
        value.to_string()
    } else {
        format!("{value:02}")
    }
}

/// Hand rotation in radians; negative is clockwise.
pub fn hand_angle(elapsed: f64, frequency: f64) -> f64 {
    -TAU * frequency * elapsed
}

/// Angle of dial label `index` in a y-up frame: label 0 at twelve o'clock,
/// increasing clockwise.
pub fn label_angle(index: u32, base: u32) -> f64 {
    std::f64::consts::FRAC_PI_2 - index as f64 / base as f64 * TAU
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn uniform_bases_halve_per_position() {
        let f = frequencies(&[2; 8], 0.5);
        assert_eq!(f.len(), 8);
        for i in 1..f.len() {
            let weight: f64 = (0..i).map(|_| 2.0).product();
            assert!(close(f[i], f[0] / weight));
            assert!(f[i] < f[i - 1]);
        }
    }

    #[test]
    fn mixed_radix_carries_like_a_clock() {
        // seconds, minutes, hours: the hour hand turns once a day
        let f = frequencies(&[60, 60, 24], 1.0 / 60.0);
        assert!(close(f[1], f[0] / 60.0));
        assert!(close(f[2], f[0] / (60.0 * 24.0)));
    }

    #[test]
    fn period_of_binary_clock() {
        assert!(close(period(&[2; 8], 0.5), 256.0));
        assert!(close(period(&[2, 2, 2], 1.0), 4.0));
        assert!(close(period(&[60, 60, 24], 0.5), 2880.0));
    }

    #[test]
    fn frames_span_the_period() {
        let t = period(&[2; 8], 0.5);
        let n = frame_count(t, 60);
        assert_eq!(n, 15_360);

        let odd = period(&[3, 7], 0.9);
        let n = frame_count(odd, 60);
        let covered = n as f64 / 60.0;
        assert!(covered <= odd && odd - covered < 1.0 / 60.0);
    }

    #[test]
    fn binary_digit_flips_every_half_cycle() {
        let f = 0.25;
        let half = 1.0 / (2.0 * f);
        for k in 0..8u64 {
            let t = k as f64 * half;
            assert_eq!(digit_value(t, f, 2), k & 1, "start of step {k}");
            assert_eq!(digit_value(t + half * 0.5, f, 2), k & 1, "middle of step {k}");
        }
    }

    #[test]
    fn mixed_radix_digits_carry_at_each_boundary() {
        let bases = [60, 60, 24];
        let f = frequencies(&bases, 1.0 / 60.0);
        let read = |t: f64| -> Vec<u64> {
            f.iter().zip(bases).map(|(&fi, b)| digit_value(t, fi, b)).collect()
        };

        assert_eq!(read(59.5), [59, 0, 0]);
        assert_eq!(read(60.5), [0, 1, 0]);
        assert_eq!(read(3599.5), [59, 59, 0]);
        assert_eq!(read(3600.5), [0, 0, 1]);
    }

    #[test]
    fn decimal_style_digits_are_padded() {
        assert_eq!(format_digit(7, 60), "07");
        assert_eq!(format_digit(42, 60), "42");
        assert_eq!(format_digit(1, 2), "1");
        assert_eq!(digit_value(61.0 / 60.0, 1.0 / 60.0, 60), 1);
    }

    #[test]
    fn digit_wraps_at_base() {
        // 13 steps of a base-12 digit.
        let f = 1.0;
        assert_eq!(digit_value(13.5 / 12.0, f, 12), 1);
    }

    #[test]
    fn hand_angle_is_periodic() {
        let f = 0.125;
        for t in [0.0, 0.3, 1.7, 5.25] {
            let a = hand_angle(t, f);
            let b = hand_angle(t + 1.0 / f, f);
            assert!(close(a.sin(), b.sin()) && close(a.cos(), b.cos()));
        }
        assert_eq!(hand_angle(0.0, f), 0.0);
        assert!(hand_angle(1.0, f) < 0.0);
    }

    #[test]
    fn label_zero_is_at_twelve_o_clock() {
        let a = label_angle(0, 12);
        assert!(close(a.cos(), 0.0) && close(a.sin(), 1.0));
        // quarter turn clockwise
        let q = label_angle(3, 12);
        assert!(close(q.cos(), 1.0) && close(q.sin(), 0.0));
    }
}
