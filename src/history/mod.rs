//! Snapshot-based linear undo/redo.

pub(crate) mod engine;

pub use engine::{HISTORY_CAPACITY, HistoryEngine};
