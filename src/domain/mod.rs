pub mod changes;
pub mod diff;
pub mod employee;
pub mod snapshot;

pub use changes::{ChangeEvent, ChangeKind, ChangeSummary, FieldDelta};
pub use diff::compute_changes;
pub use employee::{EmployeeField, EmployeeRecord};
pub use snapshot::{Snapshot, SnapshotSource};
