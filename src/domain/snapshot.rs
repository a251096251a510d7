// src/domain/snapshot.rs

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::domain::employee::EmployeeRecord;
use crate::errors::DataSourceError;

/// All employee records effective on one calendar day, in the order the
/// source returned them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    day: NaiveDate,
    records: Vec<EmployeeRecord>,
}

impl Snapshot {
    /// Builds a snapshot, rejecting a record set that holds the same
    /// employee twice.
    pub fn from_records(
        day: NaiveDate,
        records: Vec<EmployeeRecord>,
    ) -> Result<Self, DataSourceError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.employee_id.as_str()) {
                return Err(DataSourceError::DuplicateEmployee {
                    employee_id: record.employee_id.clone(),
                    day,
                });
            }
        }
        Ok(Self { day, records })
    }

    pub fn empty(day: NaiveDate) -> Self {
        Self {
            day,
            records: Vec::new(),
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.day
    }

    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Anything that can hand out the deduplicated roster for a given day.
///
/// A day with no data must come back as an empty snapshot, not an error.
pub trait SnapshotSource {
    fn get_snapshot(&self, day: NaiveDate) -> Result<Snapshot, DataSourceError>;
}
