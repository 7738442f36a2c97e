// Undo/Redo History
//
// Linear snapshot history: every checkpoint stores the full event list.
// Writing a new checkpoint after an undo discards the redo tail.

use crate::models::event::CalendarEvent;
use anyhow::{Context, Result};

/// Snapshot log with a cursor pointing at the live state.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Vec<CalendarEvent>>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Start with a single empty snapshot as the undo floor
    pub fn new() -> Self {
        Self {
            snapshots: vec![Vec::new()],
            cursor: 0,
        }
    }

    /// Record `events` as the newest state, dropping anything past the cursor
    pub fn checkpoint(&mut self, events: Vec<CalendarEvent>) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(events);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step back one snapshot and return it, or `None` at the floor
    pub fn undo(&mut self) -> Option<&[CalendarEvent]> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Step forward one snapshot and return it, or `None` at the end
    pub fn redo(&mut self) -> Option<&[CalendarEvent]> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of stored snapshots, including the initial empty one
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> &[CalendarEvent] {
        &self.snapshots[self.cursor]
    }

    /// Serialize the snapshot under the cursor, for debugging and bug reports
    pub fn snapshot_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self.current()).context("Failed to serialize snapshot")
    }
}
