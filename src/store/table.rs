//! RecordStore implementation
//!
//! HashMap-based record table.

use std::collections::hash_map::Values;
use std::collections::HashMap;

use crate::error::{Result, RosterError};
use crate::record::{RollNo, StudentRecord};

/// Owns every record, keyed by roll number
#[derive(Debug, Default)]
pub struct RecordStore {
    records: HashMap<RollNo, StudentRecord>,
}

impl RecordStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a new record
    ///
    /// Fails with `DuplicateKey` if the roll number is taken; the existing
    /// record is left as it was.
    pub fn create(&mut self, record: StudentRecord) -> Result<()> {
        let roll_no = record.roll_no();

        if self.records.contains_key(&roll_no) {
            tracing::debug!(roll_no, "create rejected: duplicate roll number");
            return Err(RosterError::DuplicateKey(roll_no));
        }

        self.records.insert(roll_no, record);
        tracing::debug!(roll_no, total = self.records.len(), "record created");
        Ok(())
    }

    /// Remove a record, returning it
    pub fn delete(&mut self, roll_no: RollNo) -> Result<StudentRecord> {
        let removed = self
            .records
            .remove(&roll_no)
            .ok_or(RosterError::NotFound(roll_no))?;

        tracing::debug!(roll_no, total = self.records.len(), "record deleted");
        Ok(removed)
    }

    /// Replace the course of an existing record, leaving every other field alone
    pub fn update_course(&mut self, roll_no: RollNo, course: impl Into<String>) -> Result<()> {
        let record = self
            .records
            .get_mut(&roll_no)
            .ok_or(RosterError::NotFound(roll_no))?;

        record.set_course(course.into());
        tracing::debug!(roll_no, course = record.course(), "course updated");
        Ok(())
    }

    /// Look up a record by roll number
    pub fn find(&self, roll_no: RollNo) -> Option<&StudentRecord> {
        self.records.get(&roll_no)
    }

    /// Whether a roll number is in use
    pub fn contains(&self, roll_no: RollNo) -> bool {
        self.records.contains_key(&roll_no)
    }

    /// Iterate over every record, in no particular order
    pub fn list_all(&self) -> Records<'_> {
        Records {
            inner: self.records.values(),
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a StudentRecord;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.list_all()
    }
}

/// Iterator over the records of a store
pub struct Records<'a> {
    inner: Values<'a, RollNo, StudentRecord>,
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a StudentRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Records<'_> {}
