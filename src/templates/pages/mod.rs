pub mod changes_report;

pub use changes_report::{render_report_html, report_subject};
