// src/delivery.rs

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ChangeEvent;
use crate::errors::AppError;
use crate::mailer::{Attachment, BrevoMailer};
use crate::spreadsheets::export_changes_xlsx;
use crate::templates::{render_report_html, report_subject};

/// A computed change set ready to be rendered.
#[derive(Debug, Clone)]
pub struct ChangeReport {
    pub check_date: NaiveDate,
    pub changes: Vec<ChangeEvent>,
}

impl ChangeReport {
    pub fn subject(&self) -> String {
        report_subject(self.check_date)
    }

    pub fn html(&self) -> String {
        render_report_html(self.check_date, &self.changes).into_string()
    }

    pub fn xlsx(&self) -> Result<Vec<u8>, AppError> {
        export_changes_xlsx(self.check_date, &self.changes)
    }

    fn xlsx_filename(&self) -> String {
        format!("headcount-changes-{}.xlsx", self.check_date)
    }
}

/// Where a finished report goes.
#[derive(Debug, Clone)]
pub enum ReportSink {
    Email {
        mailer: BrevoMailer,
        recipients: Vec<String>,
        attach_xlsx: bool,
    },
    /// `.xlsx` paths get the workbook, anything else the HTML document.
    File(PathBuf),
}

impl ReportSink {
    pub fn deliver(&self, report: &ChangeReport) -> Result<(), AppError> {
        match self {
            ReportSink::Email {
                mailer,
                recipients,
                attach_xlsx,
            } => {
                let attachments = if *attach_xlsx {
                    vec![Attachment {
                        name: report.xlsx_filename(),
                        content: report.xlsx()?,
                    }]
                } else {
                    Vec::new()
                };
                mailer.send_report(recipients, &report.subject(), &report.html(), &attachments)?;
            }
            ReportSink::File(path) => {
                write_report_file(path, report)?;
                tracing::info!("Wrote report to {}", path.display());
            }
        }
        Ok(())
    }
}

fn write_report_file(path: &Path, report: &ChangeReport) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let is_xlsx = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));

    if is_xlsx {
        fs::write(path, report.xlsx()?)?;
    } else {
        fs::write(path, report.html())?;
    }
    Ok(())
}
