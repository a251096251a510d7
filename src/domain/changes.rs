// src/domain/changes.rs

use crate::domain::employee::{EmployeeField, EmployeeRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Changed,
}

impl ChangeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Changed => "changed",
        }
    }
}

/// One attribute's before/after values. `None` means the value was absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDelta {
    pub field: EmployeeField,
    pub old: Option<String>,
    pub new: Option<String>,
}

/// A single entry in the daily change set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    /// The employee as of the target day.
    pub record: EmployeeRecord,
    /// Always empty for `Added`; never empty for `Changed`.
    pub field_deltas: Vec<FieldDelta>,
}

impl ChangeEvent {
    pub fn added(record: EmployeeRecord) -> Self {
        Self {
            kind: ChangeKind::Added,
            record,
            field_deltas: Vec::new(),
        }
    }

    pub fn changed(record: EmployeeRecord, field_deltas: Vec<FieldDelta>) -> Self {
        Self {
            kind: ChangeKind::Changed,
            record,
            field_deltas,
        }
    }
}

/// Counts shown at the top of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChangeSummary {
    pub added: usize,
    pub changed: usize,
}

impl ChangeSummary {
    pub fn of(changes: &[ChangeEvent]) -> Self {
        changes
            .iter()
            .fold(ChangeSummary::default(), |mut acc, event| {
                match event.kind {
                    ChangeKind::Added => acc.added += 1,
                    ChangeKind::Changed => acc.changed += 1,
                }
                acc
            })
    }
}
