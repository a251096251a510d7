// errors.rs
use chrono::NaiveDate;
use thiserror::Error;

use crate::mailer::MailerError;

/// The snapshot source could not produce a snapshot for a requested day.
/// Always fatal to the run; nothing retries it.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),
    #[error("malformed text in {field} for employee {employee_id}")]
    Encoding {
        employee_id: String,
        field: &'static str,
    },
    #[error("employee {employee_id} appears more than once in the snapshot for {day}")]
    DuplicateEmployee { employee_id: String, day: NaiveDate },
    #[error("database unavailable: {0}")]
    Unavailable(String),
}

/// Errors that abort a report run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("data source error: {0}")]
    DataSource(#[from] DataSourceError),
    #[error("mailer error: {0}")]
    Mailer(#[from] MailerError),
    #[error("config error: {0}")]
    Config(String),
    #[error("xlsx error: {0}")]
    Xlsx(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
