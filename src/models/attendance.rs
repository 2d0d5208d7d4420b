use crate::models::student::StudentRecord;
use std::collections::BTreeMap;

/// Attendance collected by the guided builder, addressed by a transient
/// sequential id starting at 1. Ids are never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceSheet {
    entries: BTreeMap<usize, StudentRecord>,
    next_id: usize,
}

impl AttendanceSheet {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Store a record and return the id assigned to it.
    pub fn insert(&mut self, record: StudentRecord) -> usize {
        let id = self.next_id;
        self.entries.insert(id, record);
        self.next_id += 1;
        id
    }

    pub fn get(&self, id: usize) -> Option<&StudentRecord> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: usize) -> Option<&mut StudentRecord> {
        self.entries.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &StudentRecord)> {
        self.entries.iter().map(|(id, r)| (*id, r))
    }

    /// Records in id order, ready for export.
    pub fn records(&self) -> Vec<StudentRecord> {
        self.entries.values().cloned().collect()
    }
}

impl Default for AttendanceSheet {
    fn default() -> Self {
        Self::new()
    }
}
