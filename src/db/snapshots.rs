use chrono::NaiveDate;
use rusqlite::types::ValueRef;
use rusqlite::{params, Row};

use crate::db::connection::Database;
use crate::domain::employee::EmployeeRecord;
use crate::domain::snapshot::{Snapshot, SnapshotSource};
use crate::errors::DataSourceError;

const SQL_SNAPSHOT_FOR_DAY: &str = include_str!("../../sql/snapshot_for_day.sql");

/// Reads daily snapshots out of the `headcount_snapshots` table.
#[derive(Debug, Clone)]
pub struct SqliteSnapshotRepository {
    db: Database,
}

impl SqliteSnapshotRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl SnapshotSource for SqliteSnapshotRepository {
    fn get_snapshot(&self, day: NaiveDate) -> Result<Snapshot, DataSourceError> {
        let records = self.db.with_conn(|conn| {
            let mut stmt = conn.prepare_cached(SQL_SNAPSHOT_FOR_DAY)?;
            let mut rows = stmt.query(params![day])?;

            let mut records = Vec::new();
            while let Some(row) = rows.next()? {
                records.push(record_from_row(row)?);
            }
            Ok(records)
        })?;

        tracing::debug!("Loaded {} records for {}", records.len(), day);
        Snapshot::from_records(day, records)
    }
}

fn record_from_row(row: &Row<'_>) -> Result<EmployeeRecord, DataSourceError> {
    let employee_id: String = row.get("employee_id")?;

    // These three columns may hold bytes that are not valid text.
    let employee_name = decode_text(row, "employee_name", &employee_id)?;
    let business_title = decode_text(row, "business_title", &employee_id)?;
    let manager = decode_text(row, "manager", &employee_id)?;

    Ok(EmployeeRecord {
        employee_name,
        last_name: row.get("last_name")?,
        first_name: row.get("first_name")?,
        business_title,
        worker_status: row.get("worker_status")?,
        employee_type: row.get("employee_type")?,
        job_code: row.get("job_code")?,
        job_title: row.get("job_title")?,
        job_family: row.get("job_family")?,
        cost_center: row.get("cost_center")?,
        manager,
        management_level: row.get("management_level")?,
        email_primary_work: row.get("email_primary_work")?,
        employee_id,
    })
}

/// Reads a TEXT or BLOB column as UTF-8.
fn decode_text(
    row: &Row<'_>,
    field: &'static str,
    employee_id: &str,
) -> Result<Option<String>, DataSourceError> {
    let bytes = match row.get_ref(field)? {
        ValueRef::Null => return Ok(None),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => bytes,
        ValueRef::Integer(i) => return Ok(Some(i.to_string())),
        ValueRef::Real(f) => return Ok(Some(f.to_string())),
    };

    std::str::from_utf8(bytes)
        .map(|s| Some(s.to_string()))
        .map_err(|_| DataSourceError::Encoding {
            employee_id: employee_id.to_string(),
            field,
        })
}
