//! Two-row grid: digit readouts on top, dials below.
//!
//! Digit `i` lives in column `N - 1 - i`, so the most significant position
//! is leftmost.

use binclock_engine::coords::Rect;

/// Grid cells of one digit position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColumnCells {
    pub digit: Rect,
    pub dial: Rect,
}

pub const ROWS: usize = 2;
const DIGIT_ROW: usize = 0;
const DIAL_ROW: usize = 1;

/// Cell at (`row`, `col`) of a `rows` x `cols` grid spanning `bounds`.
pub fn grid_cell(bounds: Rect, rows: usize, cols: usize, row: usize, col: usize) -> Rect {
    let w = bounds.size.x / cols.max(1) as f32;
    let h = bounds.size.y / rows.max(1) as f32;
    Rect::new(bounds.origin.x + col as f32 * w, bounds.origin.y + row as f32 * h, w, h)
}

/// Cells for every digit position, indexed by position (fastest first).
pub fn clock_cells(bounds: Rect, digits: usize) -> Vec<ColumnCells> {
    (0..digits)
        .map(|i| {
            let col = digits - 1 - i;
            ColumnCells {
                digit: grid_cell(bounds, ROWS, digits, DIGIT_ROW, col),
                dial: grid_cell(bounds, ROWS, digits, DIAL_ROW, col),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_significant_digit_is_rightmost() {
        let cells = clock_cells(Rect::new(0.0, 0.0, 1440.0, 360.0), 8);
        assert_eq!(cells.len(), 8);
        assert_eq!(cells[0].digit, Rect::new(1260.0, 0.0, 180.0, 180.0));
        assert_eq!(cells[0].dial, Rect::new(1260.0, 180.0, 180.0, 180.0));
        assert_eq!(cells[7].digit, Rect::new(0.0, 0.0, 180.0, 180.0));
    }

    #[test]
    fn grid_respects_bounds_origin() {
        let r = grid_cell(Rect::new(10.0, 20.0, 100.0, 50.0), 2, 4, 1, 3);
        assert_eq!(r, Rect::new(85.0, 45.0, 25.0, 25.0));
    }
}
