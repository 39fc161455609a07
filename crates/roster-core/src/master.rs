//! The authoritative, ordered record list with an id index.

use std::collections::HashMap;

use roster_model::{Record, RecordId};
use tracing::warn;

/// Ordered master list of records.
///
/// Order is load order and never changes. The id index gives average O(1)
/// lookups; it is rebuilt only when records are removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasterList {
    records: Vec<Record>,
    index: HashMap<RecordId, usize>,
}

impl MasterList {
    /// Build a master list, keeping the first record for any repeated id.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut list = Self::default();
        for record in records {
            if list.index.contains_key(&record.id) {
                warn!(record_id = %record.id, "dropping record with duplicate id");
                continue;
            }
            list.index.insert(record.id.clone(), list.records.len());
            list.records.push(record);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.index.contains_key(id)
    }

    pub fn position(&self, id: &RecordId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.position(id).map(|pos| &self.records[pos])
    }

    pub(crate) fn get_mut(&mut self, id: &RecordId) -> Option<&mut Record> {
        let pos = self.position(id)?;
        self.records.get_mut(pos)
    }

    /// Remove every record for which `remove` returns true.
    ///
    /// Returns the removed records in master order.
    pub(crate) fn remove_where(&mut self, mut remove: impl FnMut(&Record) -> bool) -> Vec<Record> {
        let (removed, kept): (Vec<Record>, Vec<Record>) =
            std::mem::take(&mut self.records).into_iter().partition(&mut remove);
        self.records = kept;
        if !removed.is_empty() {
            self.reindex();
        }
        removed
    }

    fn reindex(&mut self) {
        self.index = self
            .records
            .iter()
            .enumerate()
            .map(|(pos, record)| (record.id.clone(), pos))
            .collect();
    }
}

impl<'a> IntoIterator for &'a MasterList {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> Record {
        Record::new(RecordId::new(id), format!("User {id}"), "", "member")
    }

    #[test]
    fn first_duplicate_wins() {
        let mut dup = record("2");
        dup.name = "Impostor".to_string();
        let list = MasterList::from_records(vec![record("1"), record("2"), dup]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(&RecordId::new("2")).unwrap().name, "User 2");
    }

    #[test]
    fn removal_keeps_order_and_index_in_sync() {
        let mut list = MasterList::from_records((1..=5).map(|i| record(&i.to_string())));
        let removed = list.remove_where(|r| r.id.as_str() == "2" || r.id.as_str() == "4");
        assert_eq!(removed.len(), 2);
        let ids: Vec<&str> = list.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "3", "5"]);
        assert_eq!(list.position(&RecordId::new("5")), Some(2));
        assert!(!list.contains(&RecordId::new("4")));
    }
}
