pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use pages::{render_report_html, report_subject};
