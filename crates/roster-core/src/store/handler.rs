//! Action handlers.
//!
//! Each handler mutates the state in place and reports what happened as a
//! list of events. Handlers never leave the state inconsistent, including on
//! no-op paths.

use roster_model::{Record, RecordField, RecordId};
use tracing::{debug, info};

use crate::config::FilterPolicy;
use crate::delete::{delete_one, delete_selected};
use crate::edit::commit_edit;
use crate::event::{IgnoreReason, RosterEvent};
use crate::master::MasterList;
use crate::message::Action;
use crate::pagination::{PageRequest, clamp_page};
use crate::search;

use super::RosterState;

impl RosterState {
    pub(crate) fn apply(&mut self, action: Action) -> Vec<RosterEvent> {
        match action {
            Action::Load(records) => self.handle_load(records),
            Action::Search(query) => self.handle_search(query),
            Action::GoToPage(request) => self.handle_go_to_page(request),
            Action::ToggleOne { id, checked } => self.handle_toggle_one(&id, checked),
            Action::ToggleVisible { checked } => self.handle_toggle_visible(checked),
            Action::BeginEdit(id) => self.handle_begin_edit(&id),
            Action::UpdateDraft { id, field, value } => {
                self.handle_update_draft(&id, field, value)
            }
            Action::CancelEdit(id) => self.handle_cancel_edit(&id),
            Action::SaveEdit(id) => self.handle_save_edit(&id),
            Action::CommitEdit(record) => self.commit(&record),
            Action::DeleteOne(id) => self.handle_delete_one(&id),
            Action::DeleteSelected => self.handle_delete_selected(),
        }
    }

    // =========================================================================
    // Data
    // =========================================================================

    fn handle_load(&mut self, records: Vec<Record>) -> Vec<RosterEvent> {
        let master = MasterList::from_records(records);
        let count = master.len();
        *self = Self {
            master,
            selection_reset_signal: self.selection_reset_signal,
            filter_policy: self.filter_policy,
            ..Self::default()
        };
        self.refilter();
        info!(record_count = count, "roster loaded");
        vec![RosterEvent::Loaded { count }]
    }

    // =========================================================================
    // Search & pagination
    // =========================================================================

    fn handle_search(&mut self, query: String) -> Vec<RosterEvent> {
        if query == self.query {
            return Vec::new();
        }
        self.query = query;
        self.refilter();
        debug!(matches = self.filtered.len(), "search applied");
        let mut events = vec![RosterEvent::QueryChanged {
            matches: self.filtered.len(),
        }];
        self.move_to_page(1, &mut events);
        events
    }

    fn handle_go_to_page(&mut self, request: PageRequest) -> Vec<RosterEvent> {
        let total_pages = self.total_pages();
        match request.resolve(self.current_page, total_pages) {
            Ok(page) => {
                let mut events = Vec::new();
                self.move_to_page(page, &mut events);
                events
            }
            Err(rejected) => {
                debug!(%rejected, "page request rejected");
                vec![RosterEvent::PageRejected {
                    requested: rejected.requested,
                    total_pages: rejected.total_pages,
                }]
            }
        }
    }

    fn move_to_page(&mut self, page: usize, events: &mut Vec<RosterEvent>) {
        if page == self.current_page {
            return;
        }
        self.current_page = page;
        events.push(RosterEvent::PageChanged {
            page,
            total_pages: self.total_pages(),
        });
    }

    /// Pull the current page back inside the (possibly shrunk) filtered view.
    fn clamp_current_page(&mut self, events: &mut Vec<RosterEvent>) {
        let page = clamp_page(self.current_page, self.total_pages());
        self.move_to_page(page, events);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    fn handle_toggle_one(&mut self, id: &RecordId, checked: bool) -> Vec<RosterEvent> {
        if checked && !self.master.contains(id) {
            return ignored(IgnoreReason::UnknownRecord(id.clone()));
        }
        if self.selection.toggle_one(id, checked, &self.master) {
            debug!(record_id = %id, checked, "selection toggled");
            vec![self.selection_changed()]
        } else {
            Vec::new()
        }
    }

    fn handle_toggle_visible(&mut self, checked: bool) -> Vec<RosterEvent> {
        let visible = self.visible_ids();
        self.select_all = checked;
        if self.selection.toggle_visible(&visible, checked) {
            debug!(visible = visible.len(), checked, "visible selection toggled");
            vec![self.selection_changed()]
        } else {
            Vec::new()
        }
    }

    fn selection_changed(&self) -> RosterEvent {
        RosterEvent::SelectionChanged {
            selected: self.selection.len(),
        }
    }

    // =========================================================================
    // Editing
    // =========================================================================

    fn handle_begin_edit(&mut self, id: &RecordId) -> Vec<RosterEvent> {
        match self.master.get(id) {
            Some(record) => {
                self.drafts.begin(record);
                vec![RosterEvent::DraftOpened(id.clone())]
            }
            None => ignored(IgnoreReason::UnknownRecord(id.clone())),
        }
    }

    fn handle_update_draft(
        &mut self,
        id: &RecordId,
        field: RecordField,
        value: String,
    ) -> Vec<RosterEvent> {
        if self.drafts.update(id, field, value) {
            vec![RosterEvent::DraftUpdated {
                id: id.clone(),
                field,
            }]
        } else {
            ignored(IgnoreReason::NoDraft(id.clone()))
        }
    }

    fn handle_cancel_edit(&mut self, id: &RecordId) -> Vec<RosterEvent> {
        match self.drafts.take(id) {
            Some(_) => vec![RosterEvent::DraftClosed(id.clone())],
            None => ignored(IgnoreReason::NoDraft(id.clone())),
        }
    }

    fn handle_save_edit(&mut self, id: &RecordId) -> Vec<RosterEvent> {
        let Some(draft) = self.drafts.take(id) else {
            return ignored(IgnoreReason::NoDraft(id.clone()));
        };
        let mut events = vec![RosterEvent::DraftClosed(id.clone())];
        events.extend(self.commit(&draft));
        events
    }

    fn commit(&mut self, updated: &Record) -> Vec<RosterEvent> {
        if !commit_edit(&mut self.master, updated) {
            return ignored(IgnoreReason::UnknownRecord(updated.id.clone()));
        }
        debug!(record_id = %updated.id, policy = %self.filter_policy, "edit committed");
        let mut events = vec![RosterEvent::RecordUpdated(updated.id.clone())];
        match self.filter_policy {
            FilterPolicy::ClearOnEdit => {
                if !search::is_blank(&self.query) {
                    events.push(RosterEvent::FilterCleared);
                }
                self.query.clear();
            }
            FilterPolicy::Reapply => {}
        }
        self.refilter();
        self.clamp_current_page(&mut events);
        events
    }

    // =========================================================================
    // Deletion
    // =========================================================================

    fn handle_delete_one(&mut self, id: &RecordId) -> Vec<RosterEvent> {
        let was_selected = self.selection.contains(id);
        if delete_one(&mut self.master, &mut self.selection, &mut self.drafts, id).is_none() {
            return ignored(IgnoreReason::UnknownRecord(id.clone()));
        }
        info!(record_id = %id, remaining = self.master.len(), "record deleted");
        self.refilter();
        let mut events = vec![RosterEvent::RecordsDeleted(vec![id.clone()])];
        if was_selected {
            events.push(self.selection_changed());
        }
        self.clamp_current_page(&mut events);
        events
    }

    fn handle_delete_selected(&mut self) -> Vec<RosterEvent> {
        let removed = delete_selected(&mut self.master, &mut self.selection, &mut self.drafts);
        self.select_all = false;
        self.selection_reset_signal = !self.selection_reset_signal;
        self.refilter();
        info!(
            deleted = removed.len(),
            remaining = self.master.len(),
            "selected records deleted"
        );
        let mut events = Vec::new();
        if !removed.is_empty() {
            events.push(RosterEvent::RecordsDeleted(removed));
        }
        events.push(RosterEvent::SelectionCleared);
        self.clamp_current_page(&mut events);
        events
    }
}

fn ignored(reason: IgnoreReason) -> Vec<RosterEvent> {
    debug!(?reason, "action ignored");
    vec![RosterEvent::Ignored(reason)]
}
