use crate::db::connection::{init_db, Database};
use crate::domain::EmployeeRecord;
use chrono::NaiveDate;
use rusqlite::params;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// A unique path under the temp dir; nothing is created yet.
pub fn temp_path(prefix: &str, extension: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "{prefix}_{}_{:?}.{extension}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        std::thread::current().id(),
    ))
}

/// Returns a fresh test database using the production schema
pub fn make_db() -> Database {
    let db = Database::new(temp_path("headcount_test", "sqlite"));
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn employee(id: &str, name: &str) -> EmployeeRecord {
    EmployeeRecord {
        employee_name: Some(name.to_string()),
        worker_status: Some("Active".to_string()),
        employee_type: Some("Regular".to_string()),
        business_title: Some("Engineer".to_string()),
        manager: Some("Alice".to_string()),
        ..EmployeeRecord::new(id)
    }
}

/// Inserts one source row for `snap_date`.
pub fn insert_row(db: &Database, snap_date: NaiveDate, hire_date: Option<NaiveDate>, r: &EmployeeRecord) {
    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO headcount_snapshots (
                snap_date, employee_id, hire_date, employee_name, last_name, first_name,
                business_title, worker_status, employee_type, job_code, job_title, job_family,
                cost_center, manager, management_level, email_primary_work
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)
            "#,
            params![
                snap_date,
                &r.employee_id,
                hire_date,
                &r.employee_name,
                &r.last_name,
                &r.first_name,
                &r.business_title,
                &r.worker_status,
                &r.employee_type,
                &r.job_code,
                &r.job_title,
                &r.job_family,
                &r.cost_center,
                &r.manager,
                &r.management_level,
                &r.email_primary_work,
            ],
        )?;
        Ok(())
    })
    .expect("insert source row");
}
