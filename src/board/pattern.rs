//! Rectangular liveness patterns for board matching.

/// A rectangular boolean matrix addressed `(x, y)` like the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Pattern {
    /// Build a pattern from row slices, top row first.
    /// All rows must have the same length.
    pub fn from_rows(rows: &[&[bool]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            assert_eq!(row.len(), width, "pattern rows must have equal length");
            cells.extend_from_slice(row);
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        assert!(x < self.width && y < self.height, "pattern index out of range");
        self.cells[y * self.width + x]
    }

    /// Coordinates of the live pattern cells, row-major.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        let mut live = Vec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[y * self.width + x] {
                    live.push((x, y));
                }
            }
        }
        live
    }

    /// The period-2 blinker, vertical phase, in a 3x3 box.
    pub fn blinker() -> Self {
        const O: bool = false;
        const X: bool = true;
        Self::from_rows(&[
            &[O, X, O],
            &[O, X, O],
            &[O, X, O],
        ])
    }

    /// The canonical five-cell glider in a 3x3 box.
    pub fn glider() -> Self {
        const O: bool = false;
        const X: bool = true;
        Self::from_rows(&[
            &[O, X, O],
            &[O, O, X],
            &[X, X, X],
        ])
    }
}
