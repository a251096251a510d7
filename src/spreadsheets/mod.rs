pub mod changes_xlsx;

pub use changes_xlsx::export_changes_xlsx;
