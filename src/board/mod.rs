//! Toroidal Life board internals and public API.

mod analysis;
mod cell;
mod engine;
mod pattern;
mod snapshot;

pub use cell::{Cell, Slot};
pub use engine::{Board, BoardConfig, STABLE_NOTIFY_INTERVAL, StabilityEvent, StepResult};
pub use pattern::Pattern;
pub use snapshot::SnapshotError;
