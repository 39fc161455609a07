//! Multi-select set keyed by record id.

use std::collections::BTreeSet;

use roster_model::RecordId;

use crate::master::MasterList;

/// Ids chosen for bulk action.
///
/// Membership is independent of the filtered view and the visible page: an id
/// stays selected while a search hides it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<RecordId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select or deselect one record.
    ///
    /// Selecting requires the id to exist in `master`. Returns whether the set changed.
    pub fn toggle_one(&mut self, id: &RecordId, checked: bool, master: &MasterList) -> bool {
        if !checked {
            return self.ids.remove(id);
        }
        if !master.contains(id) {
            return false;
        }
        self.ids.insert(id.clone())
    }

    /// "Select all visible" checkbox.
    ///
    /// Checking replaces the selection with exactly `visible`. Unchecking
    /// empties the whole set, including ids selected on other pages.
    pub fn toggle_visible<'a>(
        &mut self,
        visible: impl IntoIterator<Item = &'a RecordId>,
        checked: bool,
    ) -> bool {
        let next: BTreeSet<RecordId> = if checked {
            visible.into_iter().cloned().collect()
        } else {
            BTreeSet::new()
        };
        let changed = next != self.ids;
        self.ids = next;
        changed
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    pub fn remove(&mut self, id: &RecordId) -> bool {
        self.ids.remove(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordId> {
        self.ids.iter()
    }
}
