//! Conway's Game of Life (B3/S23) on a toroidal grid.

pub mod board;

pub use board::{Board, BoardConfig, Pattern, SnapshotError, StabilityEvent, StepResult};
