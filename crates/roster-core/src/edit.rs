//! Single-record edits and the inline edit drafts that feed them.

use std::collections::HashMap;

use roster_model::{Record, RecordField, RecordId};

use crate::master::MasterList;

/// Apply the editable fields of `updated` to the master record with the same id.
///
/// The id itself is never touched and every other record passes through
/// unchanged. Returns false when no record has that id.
pub fn commit_edit(master: &mut MasterList, updated: &Record) -> bool {
    match master.get_mut(&updated.id) {
        Some(record) => {
            record.apply_fields_from(updated);
            true
        }
        None => false,
    }
}

/// In-progress edits, one draft per record in edit mode.
///
/// A draft starts as a copy of the record and is only written back to the
/// master list on save; cancelling drops it without side effects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDrafts {
    drafts: HashMap<RecordId, Record>,
}

impl EditDrafts {
    /// Open (or reopen from scratch) a draft for `record`.
    pub fn begin(&mut self, record: &Record) {
        self.drafts.insert(record.id.clone(), record.clone());
    }

    /// Change one field of an open draft. Returns false without a draft.
    pub fn update(&mut self, id: &RecordId, field: RecordField, value: impl Into<String>) -> bool {
        match self.drafts.get_mut(id) {
            Some(draft) => {
                draft.set_field(field, value);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.drafts.get(id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.drafts.contains_key(id)
    }

    /// Close a draft, returning its contents.
    pub fn take(&mut self, id: &RecordId) -> Option<Record> {
        self.drafts.remove(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &RecordId> {
        self.drafts.keys()
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    pub fn clear(&mut self) {
        self.drafts.clear();
    }
}
