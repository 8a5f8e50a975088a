//! Plain-text board snapshots.
//!
//! First line `"<columns>,<rows>"`, then one line per row of `'1'`
//! (alive) and `'0'` (dead) characters, top row first, left to right.
//! Snapshots carry liveness only; wiring, the generation counter, and
//! stability state are never touched.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use super::engine::Board;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing dimension header")]
    MissingHeader,

    #[error("malformed dimension header {0:?}")]
    MalformedHeader(String),

    #[error("snapshot is {found_columns}x{found_rows} but the board is {columns}x{rows}")]
    DimensionMismatch {
        found_columns: usize,
        found_rows: usize,
        columns: usize,
        rows: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unexpected character {character:?} in row {row}")]
    InvalidCell { row: usize, character: char },

    #[error("snapshot ends after {found} of {expected} rows")]
    MissingRows { found: usize, expected: usize },
}

impl Board {
    /// Render the current liveness matrix in the snapshot text format.
    pub fn snapshot(&self) -> String {
        let mut out = String::with_capacity((self.columns + 1) * (self.rows + 1) + 8);
        out.push_str(&format!("{},{}\n", self.columns, self.rows));
        for y in 0..self.rows {
            for x in 0..self.columns {
                out.push(if self.cells[y * self.columns + x].alive {
                    '1'
                } else {
                    '0'
                });
            }
            out.push('\n');
        }
        out
    }

    /// Replace the liveness matrix from snapshot text.
    ///
    /// The declared dimensions must match the board exactly and every
    /// row must be complete; on any failure the board is left
    /// untouched.
    pub fn restore(&mut self, text: &str) -> Result<(), SnapshotError> {
        let mut lines = text.lines();
        let header = lines.next().ok_or(SnapshotError::MissingHeader)?;
        let (found_columns, found_rows) = parse_header(header)?;
        if found_columns != self.columns || found_rows != self.rows {
            return Err(SnapshotError::DimensionMismatch {
                found_columns,
                found_rows,
                columns: self.columns,
                rows: self.rows,
            });
        }

        let mut staged = Vec::with_capacity(self.columns * self.rows);
        for row in 0..self.rows {
            let line = lines.next().ok_or(SnapshotError::MissingRows {
                found: row,
                expected: self.rows,
            })?;
            let mut cells_in_row = 0usize;
            for character in line.chars() {
                match character {
                    '0' => staged.push(false),
                    '1' => staged.push(true),
                    other => {
                        return Err(SnapshotError::InvalidCell {
                            row,
                            character: other,
                        });
                    }
                }
                cells_in_row += 1;
            }
            if cells_in_row != self.columns {
                return Err(SnapshotError::RowLength {
                    row,
                    found: cells_in_row,
                    expected: self.columns,
                });
            }
        }

        for (cell, alive) in self.cells.iter_mut().zip(staged) {
            cell.alive = alive;
        }
        Ok(())
    }

    /// Write the snapshot format to `path`, replacing any existing file.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        fs::write(path, self.snapshot())?;
        debug!(path = %path.display(), "saved board snapshot");
        Ok(())
    }

    /// Read a snapshot file written by [`Board::save_snapshot`].
    pub fn load_snapshot(&mut self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        self.restore(&text)?;
        debug!(path = %path.display(), "loaded board snapshot");
        Ok(())
    }
}

fn parse_header(header: &str) -> Result<(usize, usize), SnapshotError> {
    let malformed = || SnapshotError::MalformedHeader(header.to_string());
    let (columns, rows) = header.split_once(',').ok_or_else(malformed)?;
    let columns = columns.trim().parse().map_err(|_| malformed())?;
    let rows = rows.trim().parse().map_err(|_| malformed())?;
    Ok((columns, rows))
}
