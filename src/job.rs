// src/job.rs

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use crate::delivery::{ChangeReport, ReportSink};
use crate::domain::{compute_changes, SnapshotSource};
use crate::errors::AppError;

/// One report run: diff `check_date` against the day before, render, deliver.
///
/// Nothing is delivered unless the whole change set was computed.
pub fn run_job<S: SnapshotSource + ?Sized>(
    source: &S,
    sink: &ReportSink,
    check_date: NaiveDate,
) -> Result<ChangeReport, AppError> {
    let start = Utc::now();
    info!("Getting changes for {}", check_date);

    let changes = compute_changes(source, check_date)?;
    debug!("{} change events", changes.len());

    let report = ChangeReport {
        check_date,
        changes,
    };
    sink.deliver(&report)?;

    info!("Duration: {}", Utc::now() - start);
    Ok(report)
}
