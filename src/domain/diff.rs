// src/domain/diff.rs

use chrono::{Days, NaiveDate};
use std::collections::HashMap;
use tracing::debug;

use crate::domain::changes::{ChangeEvent, FieldDelta};
use crate::domain::employee::{EmployeeField, EmployeeRecord};
use crate::domain::snapshot::{Snapshot, SnapshotSource};
use crate::errors::DataSourceError;

/// Computes the change set for `check_date` against the day before it.
///
/// Both snapshots must load for a result to be produced; any source failure
/// is returned as-is.
pub fn compute_changes<S: SnapshotSource + ?Sized>(
    source: &S,
    check_date: NaiveDate,
) -> Result<Vec<ChangeEvent>, DataSourceError> {
    let previous_day = check_date
        .checked_sub_days(Days::new(1))
        .ok_or_else(|| DataSourceError::Unavailable(format!("no day before {check_date}")))?;

    let old = source.get_snapshot(previous_day)?;
    debug!("Number of old records: {}", old.len());
    let new = source.get_snapshot(check_date)?;
    debug!("Number of new records: {}", new.len());

    Ok(diff_snapshots(&old, &new))
}

/// Compares two snapshots.
///
/// Output follows the order of `new`. Employees missing from `new` are not
/// reported.
pub fn diff_snapshots(old: &Snapshot, new: &Snapshot) -> Vec<ChangeEvent> {
    // Last record wins if an id ever repeats.
    let old_by_id: HashMap<&str, &EmployeeRecord> = old
        .records()
        .iter()
        .map(|r| (r.employee_id.as_str(), r))
        .collect();

    let mut results = Vec::new();
    for record in new.records() {
        debug!(employee_id = %record.employee_id, "Checking employee");
        match old_by_id.get(record.employee_id.as_str()) {
            None => results.push(ChangeEvent::added(record.clone())),
            Some(previous) => {
                let deltas = field_deltas(previous, record);
                if !deltas.is_empty() {
                    results.push(ChangeEvent::changed(record.clone(), deltas));
                }
            }
        }
    }
    results
}

/// Every attribute whose value differs, in field order. Comparison is exact.
pub fn field_deltas(old: &EmployeeRecord, new: &EmployeeRecord) -> Vec<FieldDelta> {
    EmployeeField::ALL
        .iter()
        .filter_map(|&field| {
            let old_value = field.value(old);
            let new_value = field.value(new);
            (old_value != new_value).then(|| FieldDelta {
                field,
                old: old_value.map(str::to_string),
                new: new_value.map(str::to_string),
            })
        })
        .collect()
}
