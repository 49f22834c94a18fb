//! Snapshot-based linear undo/redo.
//!
//! Owns full copies, never references: later graph mutation cannot corrupt
//! recorded history. One `record` per structural mutation means one undo
//! reverts exactly one user action.

use crate::model::GraphSnapshot;

#[derive(Default)]
pub struct HistoryStack {
    undo: Vec<GraphSnapshot>,
    redo: Vec<GraphSnapshot>,
}

impl HistoryStack {
    pub fn new() -> HistoryStack {
        HistoryStack::default()
    }

    /// Push the pre-mutation state. A new action after an undo discards the
    /// old future.
    pub fn record(&mut self, before: GraphSnapshot) {
        self.undo.push(before);
        self.redo.clear();
    }

    /// Pop the previous state, stashing `current` for redo. `None` on an
    /// empty stack (defined no-op).
    pub fn undo(&mut self, current: GraphSnapshot) -> Option<GraphSnapshot> {
        let prev = self.undo.pop()?;
        self.redo.push(current);
        Some(prev)
    }

    pub fn redo(&mut self, current: GraphSnapshot) -> Option<GraphSnapshot> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
