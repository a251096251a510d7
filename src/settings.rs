// src/settings.rs

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

use crate::db::{Database, SqliteSnapshotRepository};
use crate::delivery::ReportSink;
use crate::errors::AppError;
use crate::logging::LogFormat;
use crate::mailer::{BrevoMailer, DEFAULT_API_URL};

/// Daily report of new and changed employees in the headcount roster.
///
/// Every option can also be set through the environment variable shown.
#[derive(Debug, Clone, Parser)]
#[command(name = "headcount", version, about)]
pub struct Settings {
    /// SQLite file holding the daily headcount rows
    #[arg(long, env = "DB_PATH", default_value = "headcount.sqlite3")]
    pub db_path: PathBuf,

    /// Create the source table on startup if it is missing
    #[arg(long, env = "INIT_SCHEMA")]
    pub init_schema: bool,

    /// Day to report on in run-and-exit mode (YYYY-MM-DD); defaults to today
    #[arg(long, env = "CUSTOM_DATE")]
    pub custom_date: Option<NaiveDate>,

    /// Run the job once and exit instead of staying on the daily schedule
    #[arg(long, env = "RUN_AND_EXIT")]
    pub run_and_exit: bool,

    /// Local hour of day (0-23) at which the scheduled job runs
    #[arg(long, env = "RUN_HOUR", default_value_t = 8, value_parser = clap::value_parser!(u32).range(0..=23))]
    pub run_hour: u32,

    /// Write the report to this file instead of emailing it
    #[arg(long, env = "REPORT_OUTPUT")]
    pub report_output: Option<PathBuf>,

    /// Whitespace-separated list of report recipients
    #[arg(long, env = "REPORT_RECIPIENTS", value_delimiter = ' ')]
    pub report_recipients: Vec<String>,

    /// Attach the spreadsheet version of the report to the email
    #[arg(long, env = "ATTACH_XLSX")]
    pub attach_xlsx: bool,

    #[arg(long, env = "MAIL_API_URL", default_value = DEFAULT_API_URL)]
    pub mail_api_url: String,

    #[arg(long, env = "MAIL_API_KEY", hide_env_values = true)]
    pub mail_api_key: Option<String>,

    #[arg(long, env = "MAIL_FROM")]
    pub mail_from: Option<String>,

    #[arg(long, env = "MAIL_FROM_NAME", default_value = "Headcount")]
    pub mail_from_name: String,

    /// Delivery configuration set added as a header on outgoing mail
    #[arg(long, env = "MAIL_CONFIGURATION_SET")]
    pub mail_configuration_set: Option<String>,

    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Settings {
    pub fn database(&self) -> Database {
        Database::new(&self.db_path)
    }

    pub fn repository(&self) -> SqliteSnapshotRepository {
        SqliteSnapshotRepository::new(self.database())
    }

    /// Recipients with blank entries dropped; env values may carry extra spaces.
    pub fn recipients(&self) -> Vec<String> {
        self.report_recipients
            .iter()
            .flat_map(|r| r.split_whitespace())
            .map(str::to_string)
            .collect()
    }

    /// File output when `report_output` is set, email otherwise.
    pub fn report_sink(&self) -> Result<ReportSink, AppError> {
        if let Some(path) = &self.report_output {
            return Ok(ReportSink::File(path.clone()));
        }

        let api_key = self
            .mail_api_key
            .clone()
            .ok_or_else(|| AppError::Config("MAIL_API_KEY is required for email delivery".into()))?;
        let sender = self
            .mail_from
            .clone()
            .ok_or_else(|| AppError::Config("MAIL_FROM is required for email delivery".into()))?;
        let recipients = self.recipients();
        if recipients.is_empty() {
            return Err(AppError::Config(
                "REPORT_RECIPIENTS must name at least one address".into(),
            ));
        }

        let mailer = BrevoMailer::new(api_key, sender, self.mail_from_name.clone())
            .with_api_url(self.mail_api_url.clone())
            .with_configuration_set(self.mail_configuration_set.clone());

        Ok(ReportSink::Email {
            mailer,
            recipients,
            attach_xlsx: self.attach_xlsx,
        })
    }
}
