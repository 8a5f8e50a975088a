//! Board construction, toroidal wiring, and the generation step.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::cell::{Cell, Neighbors, ReverseSlots};

/// Consecutive stable generations between `Continuing` notifications.
pub const STABLE_NOTIFY_INTERVAL: u32 = 10;

/// Construction parameters for a [`Board`].
#[derive(Clone, Copy, Debug)]
pub struct BoardConfig {
    /// Board width in pixels; divided by `cell_size` to get columns.
    pub width: u32,
    /// Board height in pixels; divided by `cell_size` to get rows.
    pub height: u32,
    /// Rendering scale factor. The simulation only uses it to derive
    /// the column/row counts (integer division, remainder dropped).
    pub cell_size: u32,
    /// Probability in [0, 1] that a cell starts alive.
    /// Values outside the range are clamped.
    pub live_density: f64,
    /// Seed for the initial randomization.
    /// `None` means seed from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 25,
            cell_size: 1,
            live_density: 0.1,
            seed: None,
        }
    }
}

impl BoardConfig {
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size.max(1);
        self
    }

    pub fn live_density(mut self, live_density: f64) -> Self {
        self.live_density = live_density;
        self
    }

    /// Set an explicit randomization seed for reproducible boards.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Observable stability notifications produced by [`Board::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StabilityEvent {
    /// The board just entered the stable phase.
    Reached { generation: u64 },
    /// The board has stayed stable for another
    /// [`STABLE_NOTIFY_INTERVAL`] generations.
    Continuing { generation: u64 },
}

/// Outcome of a single generation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepResult {
    pub generation: u64,
    pub is_stable: bool,
    pub stability: Option<StabilityEvent>,
}

/// A fixed-size toroidal Life board.
///
/// All cells live in one contiguous row-major buffer; neighbor
/// relations are `u32` indices into it, wired once at construction
/// and immutable afterward.
pub struct Board {
    pub(super) cells: Vec<Cell>,
    /// Wrapped neighbor indices per cell, `Slot`-ordered.
    pub(super) neighbors: Vec<Neighbors>,
    /// For slot `s` of cell `i`: the first slot of `neighbors[i][s]`
    /// that points back at `i`. Precomputed so the combination census
    /// needs no runtime search.
    pub(super) reverse_slots: Vec<ReverseSlots>,
    pub(super) columns: usize,
    pub(super) rows: usize,
    cell_size: u32,
    generation: u64,
    is_stable: bool,
    generations_since_stable: u32,
}

impl Board {
    pub fn new(width: u32, height: u32, cell_size: u32, live_density: f64) -> Self {
        Self::with_config(BoardConfig {
            width,
            height,
            cell_size,
            live_density,
            seed: None,
        })
    }

    /// Create a board with explicit configuration.
    pub fn with_config(config: BoardConfig) -> Self {
        let cell_size = config.cell_size.max(1);
        let columns = (config.width / cell_size) as usize;
        let rows = (config.height / cell_size) as usize;
        let neighbors = wire_neighbors(columns, rows);
        let reverse_slots = wire_reverse_slots(&neighbors);

        let mut board = Self {
            cells: vec![Cell::default(); columns * rows],
            neighbors,
            reverse_slots,
            columns,
            rows,
            cell_size,
            generation: 0,
            is_stable: false,
            generations_since_stable: 0,
        };

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        board.randomize(config.live_density, &mut rng);
        board
    }

    /// Set every cell alive with probability `live_density`, one
    /// independent draw per cell. The density is clamped to [0, 1].
    pub fn randomize<R: Rng>(&mut self, live_density: f64, rng: &mut R) {
        let live_density = live_density.clamp(0.0, 1.0);
        for cell in &mut self.cells {
            cell.alive = rng.random::<f64>() < live_density;
        }
    }

    /// Advance the whole board by one generation.
    ///
    /// Two-phase: every cell stages its next state from the current
    /// generation, then every cell applies it, so the update order
    /// cannot skew neighbor counts. The board is stable when no cell
    /// changed this step.
    pub fn advance(&mut self) -> StepResult {
        self.generation += 1;
        let was_stable = self.is_stable;

        for index in 0..self.cells.len() {
            let live_neighbors = self.live_neighbor_count(index);
            self.cells[index].determine_next_state(live_neighbors);
        }
        let mut changed = false;
        for cell in &mut self.cells {
            changed |= cell.advance();
        }
        self.is_stable = !changed;

        let stability = if self.is_stable && !was_stable {
            self.generations_since_stable = 0;
            Some(StabilityEvent::Reached {
                generation: self.generation,
            })
        } else if self.is_stable {
            self.generations_since_stable += 1;
            if self.generations_since_stable == STABLE_NOTIFY_INTERVAL {
                self.generations_since_stable = 0;
                Some(StabilityEvent::Continuing {
                    generation: self.generation,
                })
            } else {
                None
            }
        } else {
            self.generations_since_stable = 0;
            None
        };

        StepResult {
            generation: self.generation,
            is_stable: self.is_stable,
            stability,
        }
    }

    #[inline]
    fn live_neighbor_count(&self, index: usize) -> u8 {
        self.neighbors[index]
            .iter()
            .filter(|&&neighbor| self.cells[neighbor as usize].alive)
            .count() as u8
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Width in pixels derived from the column count.
    pub fn width(&self) -> u32 {
        self.columns as u32 * self.cell_size
    }

    /// Height in pixels derived from the row count.
    pub fn height(&self) -> u32 {
        self.rows as u32 * self.cell_size
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_stable(&self) -> bool {
        self.is_stable
    }

    pub fn get_cell(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)].alive
    }

    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) {
        let index = self.index(x, y);
        self.cells[index].alive = alive;
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.alive).count()
    }

    pub fn for_each_live<F: FnMut(usize, usize)>(&self, mut f: F) {
        for y in 0..self.rows {
            for x in 0..self.columns {
                if self.cells[y * self.columns + x].alive {
                    f(x, y);
                }
            }
        }
    }

    /// The wrapped coordinates of the 8 neighbors of `(x, y)`,
    /// slot-ordered.
    pub fn neighbors_of(&self, x: usize, y: usize) -> [(usize, usize); 8] {
        self.neighbors[self.index(x, y)].map(|neighbor| {
            let neighbor = neighbor as usize;
            (neighbor % self.columns, neighbor / self.columns)
        })
    }

    #[inline]
    pub(super) fn index(&self, x: usize, y: usize) -> usize {
        assert!(x < self.columns, "column {x} out of range 0..{}", self.columns);
        assert!(y < self.rows, "row {y} out of range 0..{}", self.rows);
        y * self.columns + x
    }
}

/// Build the toroidal neighbor table: wrapped row-major offsets,
/// `Slot`-ordered. Every cell gets exactly 8 entries; on a dimension
/// of 1 or 2 the wrap makes some of them duplicates or the cell
/// itself, which is accepted degenerate input.
fn wire_neighbors(columns: usize, rows: usize) -> Vec<Neighbors> {
    let mut neighbors = Vec::with_capacity(columns * rows);
    for y in 0..rows {
        let y_up = if y > 0 { y - 1 } else { rows - 1 };
        let y_down = if y < rows - 1 { y + 1 } else { 0 };
        for x in 0..columns {
            let x_left = if x > 0 { x - 1 } else { columns - 1 };
            let x_right = if x < columns - 1 { x + 1 } else { 0 };
            let at = |x: usize, y: usize| (y * columns + x) as u32;
            neighbors.push([
                at(x_left, y_up),
                at(x, y_up),
                at(x_right, y_up),
                at(x_left, y),
                at(x_right, y),
                at(x_left, y_down),
                at(x, y_down),
                at(x_right, y_down),
            ]);
        }
    }
    neighbors
}

/// For every (cell, slot) pair, find the first slot of the neighbor
/// that points back at the cell. On grids with both dimensions >= 3
/// this is always the mirrored slot; on degenerate grids the first
/// match wins, mirroring a linear search.
fn wire_reverse_slots(neighbors: &[Neighbors]) -> Vec<ReverseSlots> {
    neighbors
        .iter()
        .enumerate()
        .map(|(index, slots)| {
            let mut reverse = [0u8; 8];
            for (slot, &neighbor) in slots.iter().enumerate() {
                reverse[slot] = neighbors[neighbor as usize]
                    .iter()
                    .position(|&back| back as usize == index)
                    .expect("toroidal wiring is symmetric") as u8;
            }
            reverse
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{Board, wire_neighbors, wire_reverse_slots};
    use crate::board::cell::Slot;

    #[test]
    fn corner_cell_wraps_to_the_opposite_edges() {
        let board = Board::new(5, 4, 1, 0.0);
        assert_eq!(
            board.neighbors_of(0, 0),
            [
                (4, 3), (0, 3), (1, 3),
                (4, 0),         (1, 0),
                (4, 1), (0, 1), (1, 1),
            ]
        );
    }

    #[test]
    fn reverse_slots_are_mirrored_on_roomy_grids() {
        let neighbors = wire_neighbors(5, 4);
        let reverse_slots = wire_reverse_slots(&neighbors);
        for reverse in reverse_slots {
            for slot in Slot::ALL {
                assert_eq!(reverse[slot.index()] as usize, slot.reverse().index());
            }
        }
    }

    #[test]
    fn single_cell_grid_is_its_own_neighborhood() {
        let neighbors = wire_neighbors(1, 1);
        assert_eq!(neighbors[0], [0; 8]);
        let reverse_slots = wire_reverse_slots(&neighbors);
        assert_eq!(reverse_slots[0], [0; 8]);
    }
}
