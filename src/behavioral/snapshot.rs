//! Behavioral Pattern: Snapshot (a.k.a. Memento)
//! Example: Undo history for a text editor
//!
//! Run with: cargo run --bin snapshot
//!
//! The object whose state is saved (the *originator*) produces the snapshot
//! itself, because only it can see its private fields. A snapshot is an
//! immutable value; other code can hold it, label it and hand it back, but
//! cannot read what is inside. The *caretaker* ([`History`]) stores snapshots
//! and decides when to restore one.
//!
//! In Rust the "narrow interface" is just field privacy: [`Snapshot`]'s fields
//! are private to this module, and only [`Editor::restore`] consumes them.
//!
//! Snapshots cost memory, so [`History::with_capacity`] bounds how many are
//! kept and drops the oldest first.

use std::collections::VecDeque;

use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Editor {
    text: String,
    cursor: (u32, u32),
    selection_width: u32,
    next_snapshot: u64,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_cursor(&mut self, x: u32, y: u32) {
        self.cursor = (x, y);
    }

    pub fn set_selection_width(&mut self, width: u32) {
        self.selection_width = width;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> (u32, u32) {
        self.cursor
    }

    pub fn selection_width(&self) -> u32 {
        self.selection_width
    }

    pub fn create_snapshot(&mut self, label: impl Into<String>) -> Snapshot {
        let id = self.next_snapshot;
        self.next_snapshot += 1;
        Snapshot {
            id,
            label: label.into(),
            text: self.text.clone(),
            cursor: self.cursor,
            selection_width: self.selection_width,
        }
    }

    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.text = snapshot.text.clone();
        self.cursor = snapshot.cursor;
        self.selection_width = snapshot.selection_width;
    }
}

/// Opaque saved state. Only metadata is readable from outside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    id: u64,
    label: String,
    text: String,
    cursor: (u32, u32),
    selection_width: u32,
}

impl Snapshot {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The caretaker.
#[derive(Debug, Default)]
pub struct History {
    snapshots: VecDeque<Snapshot>,
    capacity: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        History {
            snapshots: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Snapshots the editor before a change.
    pub fn backup(&mut self, editor: &mut Editor, label: &str) {
        if self.capacity == Some(0) {
            return;
        }
        if let Some(capacity) = self.capacity {
            while self.snapshots.len() >= capacity {
                if let Some(dropped) = self.snapshots.pop_front() {
                    debug!(id = dropped.id(), "history full, dropping oldest snapshot");
                }
            }
        }
        self.snapshots.push_back(editor.create_snapshot(label));
    }

    /// Restores the most recent snapshot. Returns `false` when history is empty.
    pub fn undo(&mut self, editor: &mut Editor) -> bool {
        match self.snapshots.pop_back() {
            Some(snapshot) => {
                debug!(id = snapshot.id(), label = snapshot.label(), "restoring snapshot");
                editor.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.snapshots.iter().map(Snapshot::label).collect()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_brings_back_every_field() {
        let mut editor = Editor::new();
        editor.set_text("draft");
        editor.set_cursor(3, 1);
        editor.set_selection_width(2);
        let snapshot = editor.create_snapshot("draft");

        editor.set_text("final");
        editor.set_cursor(0, 0);
        editor.set_selection_width(0);
        editor.restore(&snapshot);

        assert_eq!(editor.text(), "draft");
        assert_eq!(editor.cursor(), (3, 1));
        assert_eq!(editor.selection_width(), 2);
    }

    #[test]
    fn test_history_undoes_in_reverse() {
        let mut editor = Editor::new();
        let mut history = History::new();

        history.backup(&mut editor, "empty");
        editor.set_text("one");
        history.backup(&mut editor, "one");
        editor.set_text("two");

        assert!(history.undo(&mut editor));
        assert_eq!(editor.text(), "one");
        assert!(history.undo(&mut editor));
        assert_eq!(editor.text(), "");
        assert!(!history.undo(&mut editor));
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut editor = Editor::new();
        let mut history = History::with_capacity(2);
        for text in ["a", "b", "c"] {
            editor.set_text(text);
            history.backup(&mut editor, text);
        }
        assert_eq!(history.labels(), vec!["b", "c"]);
    }

    #[test]
    fn test_snapshot_ids_are_unique() {
        let mut editor = Editor::new();
        let a = editor.create_snapshot("a");
        let b = editor.create_snapshot("b");
        assert_ne!(a.id(), b.id());
    }
}
