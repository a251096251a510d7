// src/tests/job_tests.rs

use crate::db::{Database, SqliteSnapshotRepository};
use crate::delivery::ReportSink;
use crate::domain::{ChangeKind, EmployeeField, EmployeeRecord};
use crate::errors::AppError;
use crate::job::run_job;
use crate::tests::utils::{day, employee, insert_row, make_db, temp_path};
use std::fs;

#[test]
fn job_writes_html_report_for_added_and_changed_employees() {
    let db = make_db();
    let yesterday = day(2024, 5, 1);
    let today = day(2024, 5, 2);

    // E1 unchanged, E2 promoted, E3 gone, E4 new.
    insert_row(&db, yesterday, None, &employee("E1", "Amy"));
    insert_row(&db, yesterday, None, &employee("E2", "Bo"));
    insert_row(&db, yesterday, None, &employee("E3", "Cyrus Gone"));
    insert_row(&db, today, None, &employee("E1", "Amy"));
    insert_row(
        &db,
        today,
        None,
        &EmployeeRecord {
            business_title: Some("Senior Engineer".to_string()),
            ..employee("E2", "Bo")
        },
    );
    insert_row(&db, today, None, &employee("E4", "Dina Newhire"));

    let path = temp_path("headcount_report", "html");
    let sink = ReportSink::File(path.clone());
    let repo = SqliteSnapshotRepository::new(db);

    let report = run_job(&repo, &sink, today).unwrap();

    let kinds: Vec<(ChangeKind, &str)> = report
        .changes
        .iter()
        .map(|e| (e.kind, e.record.employee_id.as_str()))
        .collect();
    assert_eq!(
        kinds,
        vec![(ChangeKind::Changed, "E2"), (ChangeKind::Added, "E4")]
    );
    assert_eq!(
        report.changes[0].field_deltas[0].field,
        EmployeeField::BusinessTitle
    );

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("Organizational changes for 2024-05-02"));
    assert!(html.contains("Senior Engineer"));
    assert!(html.contains("Dina Newhire"));
    assert!(!html.contains("Cyrus Gone"));

    let _ = fs::remove_file(path);
}

#[test]
fn job_writes_xlsx_when_asked() {
    let db = make_db();
    insert_row(&db, day(2024, 5, 2), None, &employee("E1", "Amy"));

    let path = temp_path("headcount_report", "xlsx");
    let sink = ReportSink::File(path.clone());
    let repo = SqliteSnapshotRepository::new(db);

    let report = run_job(&repo, &sink, day(2024, 5, 2)).unwrap();
    assert_eq!(report.changes.len(), 1);

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"PK"));

    let _ = fs::remove_file(path);
}

#[test]
fn failed_fetch_delivers_nothing() {
    // No schema applied, so the query fails.
    let db = Database::new(temp_path("headcount_missing", "sqlite"));
    let path = temp_path("headcount_report", "html");
    let sink = ReportSink::File(path.clone());
    let repo = SqliteSnapshotRepository::new(db);

    let err = run_job(&repo, &sink, day(2024, 5, 2)).unwrap_err();

    assert!(matches!(err, AppError::DataSource(_)));
    assert!(!path.exists());
}

#[test]
fn rerunning_the_same_day_gives_the_same_report() {
    let db = make_db();
    insert_row(&db, day(2024, 5, 1), None, &employee("E1", "Amy"));
    insert_row(
        &db,
        day(2024, 5, 2),
        None,
        &EmployeeRecord {
            manager: None,
            ..employee("E1", "Amy")
        },
    );
    insert_row(&db, day(2024, 5, 2), None, &employee("E2", "Bo"));

    let path = temp_path("headcount_report", "html");
    let sink = ReportSink::File(path.clone());
    let repo = SqliteSnapshotRepository::new(db);

    let first = run_job(&repo, &sink, day(2024, 5, 2)).unwrap();
    let first_html = fs::read_to_string(&path).unwrap();
    let second = run_job(&repo, &sink, day(2024, 5, 2)).unwrap();
    let second_html = fs::read_to_string(&path).unwrap();

    assert_eq!(first.changes, second.changes);
    assert_eq!(first_html, second_html);
    assert_eq!(first.changes[0].field_deltas[0].new, None);

    let _ = fs::remove_file(path);
}
