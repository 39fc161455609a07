//! Render-ready snapshot of the current page.

use roster_model::Record;
use serde::Serialize;

use super::RosterState;

/// Everything a renderer needs to draw one page of the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub rows: Vec<RowView>,
    pub page: usize,
    pub total_pages: usize,
    /// Page numbers for the page bar, `1..=total_pages`.
    pub page_numbers: Vec<usize>,
    pub query: String,
    /// Size of the filtered view.
    pub matches: usize,
    /// Size of the master list.
    pub total_records: usize,
    pub selected: usize,
    pub select_all: bool,
    pub selection_reset_signal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub record: Record,
    pub selected: bool,
    /// Open edit draft, when the row is in edit mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<Record>,
}

impl RosterState {
    pub fn page_view(&self) -> PageView {
        let rows = self
            .visible()
            .into_iter()
            .map(|record| RowView {
                record: record.clone(),
                selected: self.selection.contains(&record.id),
                draft: self.drafts.get(&record.id).cloned(),
            })
            .collect();
        let total_pages = self.total_pages();
        PageView {
            rows,
            page: self.current_page,
            total_pages,
            page_numbers: (1..=total_pages).collect(),
            query: self.query.clone(),
            matches: self.filtered.len(),
            total_records: self.master.len(),
            selected: self.selection.len(),
            select_all: self.select_all,
            selection_reset_signal: self.selection_reset_signal,
        }
    }
}
