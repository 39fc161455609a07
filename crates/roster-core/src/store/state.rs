//! Roster state - the single source of truth.
//!
//! The master list and the active query are authoritative. The filtered view
//! is derived from them and recomputed whenever either changes; it is stored
//! only as positions into the master list.

use roster_model::{Record, RecordId};

use crate::config::FilterPolicy;
use crate::edit::EditDrafts;
use crate::master::MasterList;
use crate::pagination::{self, PAGE_SIZE};
use crate::search;
use crate::selection::SelectionSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterState {
    pub(crate) master: MasterList,
    pub(crate) query: String,
    pub(crate) filtered: Vec<usize>,
    pub(crate) selection: SelectionSet,
    pub(crate) select_all: bool,
    pub(crate) drafts: EditDrafts,
    pub(crate) current_page: usize,
    pub(crate) page_size: usize,
    pub(crate) selection_reset_signal: bool,
    pub(crate) filter_policy: FilterPolicy,
}

impl Default for RosterState {
    fn default() -> Self {
        Self {
            master: MasterList::default(),
            query: String::new(),
            filtered: Vec::new(),
            selection: SelectionSet::default(),
            select_all: false,
            drafts: EditDrafts::default(),
            current_page: 1,
            page_size: PAGE_SIZE,
            selection_reset_signal: false,
            filter_policy: FilterPolicy::default(),
        }
    }
}

impl RosterState {
    pub fn with_policy(filter_policy: FilterPolicy) -> Self {
        Self {
            filter_policy,
            ..Self::default()
        }
    }

    // =========================================================================
    // Read access
    // =========================================================================

    pub fn master(&self) -> &MasterList {
        &self.master
    }

    /// The active search text, exactly as entered.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Records in the filtered view, in master order.
    pub fn filtered(&self) -> impl Iterator<Item = &Record> {
        self.filtered.iter().map(|&pos| &self.master.records()[pos])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// State of the "select all visible" indicator.
    pub fn select_all(&self) -> bool {
        self.select_all
    }

    pub fn drafts(&self) -> &EditDrafts {
        &self.drafts
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered.len(), self.page_size)
    }

    /// Flips on every bulk delete.
    pub fn selection_reset_signal(&self) -> bool {
        self.selection_reset_signal
    }

    pub fn filter_policy(&self) -> FilterPolicy {
        self.filter_policy
    }

    /// Records on the current page.
    pub fn visible(&self) -> Vec<&Record> {
        pagination::window(&self.filtered, self.current_page, self.page_size)
            .iter()
            .map(|&pos| &self.master.records()[pos])
            .collect()
    }

    pub fn visible_ids(&self) -> Vec<RecordId> {
        self.visible().into_iter().map(|r| r.id.clone()).collect()
    }

    /// Check every cross-view invariant.
    ///
    /// The filtered view must equal a fresh filter of the master list, the
    /// selection and drafts may only name master records, and the current
    /// page must lie inside `1..=total_pages`.
    pub fn is_consistent(&self) -> bool {
        let refiltered = search::filter_positions(&self.query, self.master.records());
        refiltered == self.filtered
            && self.selection.iter().all(|id| self.master.contains(id))
            && self.drafts.ids().all(|id| self.master.contains(id))
            && (1..=self.total_pages()).contains(&self.current_page)
    }

    // =========================================================================
    // Derived view maintenance
    // =========================================================================

    pub(crate) fn refilter(&mut self) {
        self.filtered = search::filter_positions(&self.query, self.master.records());
    }
}
