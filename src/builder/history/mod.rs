//! Undo/Redo history for the calculator layout.
//!
//! Every committed layout change (a palette drop, the end of a reorder drag, a
//! removal) is recorded as a full snapshot. Undo and redo move a cursor through
//! the snapshots; committing while the cursor is behind the newest snapshot
//! discards the redo branch.
//!
//! ## Usage
//!
//! - **Ctrl+Z**: Undo the last change
//! - **Ctrl+Y** or **Ctrl+Shift+Z**: Redo the last undone change
//!
//! ## Module Structure
//!
//! - [`layout_history`] - LayoutHistory snapshot stack with a cursor
//! - [`systems`] - Messages and Bevy systems for undo/redo requests and shortcuts

mod layout_history;
mod systems;

#[cfg(test)]
mod tests;

// Re-exports
pub use layout_history::LayoutHistory;
pub use systems::{RedoRequest, UndoRequest, apply_history_requests, handle_history_shortcuts};
