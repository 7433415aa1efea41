mod history;

pub use history::UndoHistory;

use crate::figure::{Figure, FigureId, FigureType};

/// A single invertible document edit.
///
/// Add carries only the snapshot of the figure that was inserted, Delete only
/// the snapshot of the figure that was removed, Update both sides of an
/// in-place change. Snapshots are plain clones, so the journal never aliases
/// the live figure collection.
#[derive(Debug, Clone)]
pub enum Edit {
    /// A figure was appended to the document.
    Add { figure: FigureType },
    /// A figure was removed from the document.
    Delete { figure: FigureType },
    /// A figure was changed in place.
    Update { old: FigureType, new: FigureType },
}

impl Edit {
    /// The id of the figure this edit concerns.
    pub fn figure_id(&self) -> FigureId {
        match self {
            Edit::Add { figure } | Edit::Delete { figure } => figure.id(),
            Edit::Update { new, .. } => new.id(),
        }
    }

    /// The edit that exactly reverses this one: Add and Delete swap kinds,
    /// Update swaps its snapshots.
    pub fn invert(self) -> Edit {
        match self {
            Edit::Add { figure } => Edit::Delete { figure },
            Edit::Delete { figure } => Edit::Add { figure },
            Edit::Update { old, new } => Edit::Update { old: new, new: old },
        }
    }
}

/// One logical user operation: an ordered sequence of edits undone and
/// redone together (a bulk delete is one group with one edit per figure).
#[derive(Debug, Clone, Default)]
pub struct EditGroup {
    edits: Vec<Edit>,
}

impl EditGroup {
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn push(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edit> {
        self.edits.iter()
    }
}
