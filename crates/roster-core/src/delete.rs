//! Record removal with selection and draft reconciliation.

use roster_model::{Record, RecordId};

use crate::edit::EditDrafts;
use crate::master::MasterList;
use crate::selection::SelectionSet;

/// Remove one record by id.
///
/// The id is also purged from the selection and from open drafts. Returns the
/// removed record, or `None` for an absent id.
pub fn delete_one(
    master: &mut MasterList,
    selection: &mut SelectionSet,
    drafts: &mut EditDrafts,
    id: &RecordId,
) -> Option<Record> {
    if !master.contains(id) {
        return None;
    }
    let removed = master.remove_where(|record| &record.id == id).pop();
    selection.remove(id);
    drafts.take(id);
    removed
}

/// Remove every selected record in one step and empty the selection.
///
/// Returns the ids that were actually removed, in master order.
pub fn delete_selected(
    master: &mut MasterList,
    selection: &mut SelectionSet,
    drafts: &mut EditDrafts,
) -> Vec<RecordId> {
    let removed: Vec<RecordId> = if selection.is_empty() {
        Vec::new()
    } else {
        master
            .remove_where(|record| selection.contains(&record.id))
            .into_iter()
            .map(|record| record.id)
            .collect()
    };
    for id in &removed {
        drafts.take(id);
    }
    selection.clear();
    removed
}
