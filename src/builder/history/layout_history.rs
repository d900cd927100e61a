//! Snapshot stack tracking undo/redo state.

use super::super::layout::Layout;

/// Linear history of layout snapshots with a cursor.
///
/// Always holds at least one snapshot, and `cursor < len()`. The live layout
/// is expected to equal `current()` whenever no drag is in progress.
#[derive(Debug, Clone)]
pub struct LayoutHistory {
    entries: Vec<Layout>,
    cursor: usize,
    /// Optional cap on stored snapshots (oldest dropped first)
    limit: Option<usize>,
}

impl Default for LayoutHistory {
    fn default() -> Self {
        Self {
            entries: vec![Layout::new()],
            cursor: 0,
            limit: None,
        }
    }
}

impl LayoutHistory {
    /// Change the snapshot cap. A limit of zero is treated as one, since the
    /// current snapshot can never be dropped.
    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit.map(|l| l.max(1));
        self.trim();
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record `layout` right after the cursor, discarding any redo entries,
    /// and move the cursor onto it.
    pub fn commit(&mut self, layout: Layout) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(layout);
        self.cursor = self.entries.len() - 1;
        self.trim();
    }

    /// Step back one snapshot. Returns `None` when already at the oldest entry.
    pub fn undo(&mut self) -> Option<&Layout> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Step forward one snapshot. Returns `None` when already at the newest entry.
    pub fn redo(&mut self) -> Option<&Layout> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// The snapshot the cursor points at.
    pub fn current(&self) -> &Layout {
        &self.entries[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of steps available to undo
    pub fn undo_count(&self) -> usize {
        self.cursor
    }

    /// Number of steps available to redo
    pub fn redo_count(&self) -> usize {
        self.entries.len() - self.cursor - 1
    }

    fn trim(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        if self.entries.len() <= limit {
            return;
        }
        // Oldest undo steps go first, then the furthest redo steps. The
        // snapshot under the cursor always survives.
        let excess = (self.entries.len() - limit).min(self.cursor);
        self.entries.drain(..excess);
        self.cursor -= excess;
        self.entries.truncate(limit.max(self.cursor + 1));
    }
}
