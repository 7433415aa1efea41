use super::{Edit, EditGroup};

/// Manages the journal of edit groups for undo/redo functionality.
///
/// The journal is linear: a cursor sits between groups, undo moves it back,
/// redo moves it forward, and journaling a new group while the cursor is not
/// at the end discards everything after it. The history only hands out edit
/// sequences; applying them to the figure collection is the document's job.
pub struct UndoHistory {
    /// Group currently being collected, not yet journaled
    open_group: Option<EditGroup>,
    /// Journaled groups, oldest first
    groups: Vec<EditGroup>,
    /// Cursor position: everything before it can be undone, everything at and
    /// after it can be redone
    position: usize,
}

impl UndoHistory {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self {
            open_group: None,
            groups: Vec::new(),
            position: 0,
        }
    }

    /// Returns true if there is a group that can be undone
    pub fn can_undo(&self) -> bool {
        self.position > 0
    }

    /// Returns true if there is a group that can be redone
    pub fn can_redo(&self) -> bool {
        self.position < self.groups.len()
    }

    /// Open a new group, journaling any previously open non-empty group
    pub fn begin_group(&mut self) {
        self.flush();
        self.open_group = Some(EditGroup::default());
    }

    /// Append an edit to the open group, opening one if necessary
    pub fn push(&mut self, edit: Edit) {
        if self.open_group.is_none() {
            self.begin_group();
        }
        if let Some(group) = &mut self.open_group {
            group.push(edit);
        }
    }

    /// Close the open group: journal it if it holds edits, discard it if empty
    pub fn end_group(&mut self) {
        self.flush();
    }

    /// Step the cursor back and return the edits that reverse the group it
    /// moved over: inverted, in reverse application order. Returns `None` at
    /// the journal boundary.
    pub fn undo(&mut self) -> Option<Vec<Edit>> {
        if !self.can_undo() {
            return None;
        }
        self.position -= 1;
        let group = &self.groups[self.position];
        Some(group.iter().rev().cloned().map(Edit::invert).collect())
    }

    /// Return the edits of the group at the cursor in original order, not
    /// inverted, and step the cursor forward. Returns `None` at the boundary.
    pub fn redo(&mut self) -> Option<Vec<Edit>> {
        if !self.can_redo() {
            return None;
        }
        let edits = self.groups[self.position].iter().cloned().collect();
        self.position += 1;
        Some(edits)
    }

    fn flush(&mut self) {
        if let Some(group) = self.open_group.take() {
            if !group.is_empty() {
                // Standard linear undo: a fresh edit after undoing discards
                // the now-unreachable redo groups.
                self.groups.truncate(self.position);
                self.groups.push(group);
                self.position = self.groups.len();
            }
        }
    }
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new()
    }
}
