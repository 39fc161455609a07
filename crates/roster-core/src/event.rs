//! Notifications emitted alongside each state update.

use roster_model::{RecordField, RecordId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterEvent {
    /// The roster was (re)seeded with `count` records.
    Loaded { count: usize },
    /// The active query changed; `matches` records are now in view.
    QueryChanged { matches: usize },
    /// An edit dropped the active query.
    FilterCleared,
    /// The current page moved, by request or by clamping.
    PageChanged { page: usize, total_pages: usize },
    /// A page request fell outside `1..=total_pages`; nothing changed.
    PageRejected { requested: usize, total_pages: usize },
    /// Selection membership changed.
    SelectionChanged { selected: usize },
    /// The selection was emptied by a bulk delete; select-all indicators must reset.
    SelectionCleared,
    DraftOpened(RecordId),
    DraftUpdated { id: RecordId, field: RecordField },
    DraftClosed(RecordId),
    /// A record's editable fields were committed.
    RecordUpdated(RecordId),
    /// Records left the roster.
    RecordsDeleted(Vec<RecordId>),
    /// The action referred to something that does not exist; nothing changed.
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    UnknownRecord(RecordId),
    NoDraft(RecordId),
}
