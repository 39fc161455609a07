//! Actions accepted by the roster store.
//!
//! Every operator interaction maps to exactly one variant; the store's
//! reducer is the only code that turns them into state changes.

use roster_model::{Record, RecordField, RecordId};

use crate::pagination::PageRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // =========================================================================
    // Data
    // =========================================================================
    /// Seed the roster from the loader's response.
    Load(Vec<Record>),

    // =========================================================================
    // Search & pagination
    // =========================================================================
    /// Replace the active search text.
    Search(String),
    /// Move to another page.
    GoToPage(PageRequest),

    // =========================================================================
    // Selection
    // =========================================================================
    /// Row checkbox.
    ToggleOne { id: RecordId, checked: bool },
    /// "Select all visible" checkbox; applies to the page currently shown.
    ToggleVisible { checked: bool },

    // =========================================================================
    // Editing
    // =========================================================================
    /// Enter edit mode for a row.
    BeginEdit(RecordId),
    /// Type into one field of an open draft.
    UpdateDraft {
        id: RecordId,
        field: RecordField,
        value: String,
    },
    /// Leave edit mode without saving.
    CancelEdit(RecordId),
    /// Commit the open draft.
    SaveEdit(RecordId),
    /// Commit a complete edited record directly.
    CommitEdit(Record),

    // =========================================================================
    // Deletion
    // =========================================================================
    /// Row delete button.
    DeleteOne(RecordId),
    /// Bulk delete of the current selection.
    DeleteSelected,
}

impl Action {
    /// Short, PII-free name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load(_) => "load",
            Self::Search(_) => "search",
            Self::GoToPage(_) => "go_to_page",
            Self::ToggleOne { .. } => "toggle_one",
            Self::ToggleVisible { .. } => "toggle_visible",
            Self::BeginEdit(_) => "begin_edit",
            Self::UpdateDraft { .. } => "update_draft",
            Self::CancelEdit(_) => "cancel_edit",
            Self::SaveEdit(_) => "save_edit",
            Self::CommitEdit(_) => "commit_edit",
            Self::DeleteOne(_) => "delete_one",
            Self::DeleteSelected => "delete_selected",
        }
    }

    /// Convenience constructor for an empty search.
    pub fn clear_search() -> Self {
        Self::Search(String::new())
    }
}
