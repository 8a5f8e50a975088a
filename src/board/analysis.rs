//! Structural queries over the liveness matrix.

use std::collections::HashSet;

use super::engine::Board;
use super::pattern::Pattern;

impl Board {
    /// Count live cells and the distinct neighborhood fingerprints
    /// among them.
    ///
    /// A fingerprint is an 8-bit mask: for each live neighbor in slot
    /// `s`, the bit at the neighbor's own back-reference slot is set,
    /// so the mask encodes which of the neighbor's slots point at this
    /// cell. Returns `(live_cells, distinct_fingerprints)`.
    pub fn live_cells_and_combinations(&self) -> (usize, usize) {
        let mut live_cells = 0usize;
        let mut combinations: HashSet<u8> = HashSet::new();

        for index in 0..self.cells.len() {
            if !self.cells[index].alive {
                continue;
            }
            live_cells += 1;

            let mut mask = 0u8;
            for (slot, &neighbor) in self.neighbors[index].iter().enumerate() {
                if self.cells[neighbor as usize].alive {
                    mask |= 1 << self.reverse_slots[index][slot];
                }
            }
            combinations.insert(mask);
        }

        (live_cells, combinations.len())
    }

    /// Exact match of `pattern` against the board with its top-left
    /// corner at `(start_x, start_y)`. Every pattern cell, dead or
    /// alive, must agree with the board. Matching never wraps: any
    /// offset outside the board fails the match.
    pub fn matches_pattern(&self, start_x: i64, start_y: i64, pattern: &Pattern) -> bool {
        for dy in 0..pattern.height() {
            for dx in 0..pattern.width() {
                let x = start_x + dx as i64;
                let y = start_y + dy as i64;
                if x < 0 || y < 0 || x >= self.columns as i64 || y >= self.rows as i64 {
                    return false;
                }
                let alive = self.cells[self.index(x as usize, y as usize)].alive;
                if alive != pattern.get(dx, dy) {
                    return false;
                }
            }
        }
        true
    }

    /// Census of cells symmetric under point reflection through the
    /// board center. Returns `(count, combinations)`: `count` tallies
    /// reference cells that are alive and equal in liveness to their
    /// mirror, `combinations` tallies pairs where both ends are alive.
    ///
    /// One quadrant is scanned against its reflection, then the middle
    /// column and middle row (for odd dimensions) against their own
    /// mirrors, then the absolute center cell against itself, so cells
    /// on the symmetry axes are tallied exactly once.
    pub fn symmetrical_cells(&self) -> (usize, usize) {
        let mut count = 0usize;
        let mut combinations = 0usize;
        let half_columns = self.columns / 2;
        let half_rows = self.rows / 2;

        let mut tally = |cell: bool, mirror: bool| {
            if cell && cell == mirror {
                count += 1;
            }
            if cell && mirror {
                combinations += 1;
            }
        };

        for x in 0..half_columns {
            for y in 0..half_rows {
                tally(
                    self.cells[self.index(x, y)].alive,
                    self.cells[self.index(self.columns - 1 - x, self.rows - 1 - y)].alive,
                );
            }
        }

        if self.columns % 2 == 1 {
            let middle_x = half_columns;
            for y in 0..half_rows {
                tally(
                    self.cells[self.index(middle_x, y)].alive,
                    self.cells[self.index(middle_x, self.rows - 1 - y)].alive,
                );
            }
        }

        if self.rows % 2 == 1 {
            let middle_y = half_rows;
            for x in 0..half_columns {
                tally(
                    self.cells[self.index(x, middle_y)].alive,
                    self.cells[self.index(self.columns - 1 - x, middle_y)].alive,
                );
            }
        }

        if self.columns % 2 == 1 && self.rows % 2 == 1 {
            let center = self.cells[self.index(half_columns, half_rows)].alive;
            tally(center, center);
        }

        (count, combinations)
    }
}
