//! Case-insensitive roster search.
//!
//! A query matches a record when its lowercase form is a substring of the
//! lowercase name, email or role. A blank query matches everything.

use roster_model::{Record, RecordField};

/// Returns true when the query contains nothing but whitespace.
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Check one record against an already-lowercased needle.
pub fn matches_lowercase(record: &Record, needle: &str) -> bool {
    RecordField::ALL
        .iter()
        .any(|&field| record.field(field).to_lowercase().contains(needle))
}

/// Check one record against a raw query.
pub fn matches(record: &Record, query: &str) -> bool {
    is_blank(query) || matches_lowercase(record, &query.to_lowercase())
}

/// Filter `master` by `query`, keeping master order.
pub fn filter_records(query: &str, master: &[Record]) -> Vec<Record> {
    filter_positions(query, master)
        .into_iter()
        .map(|pos| master[pos].clone())
        .collect()
}

/// Positions in `master` of the records matching `query`.
pub(crate) fn filter_positions(query: &str, master: &[Record]) -> Vec<usize> {
    if is_blank(query) {
        return (0..master.len()).collect();
    }
    let needle = query.to_lowercase();
    master
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_lowercase(record, &needle))
        .map(|(pos, _)| pos)
        .collect()
}
