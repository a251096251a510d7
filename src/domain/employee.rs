// src/domain/employee.rs

use std::fmt;

/// One employee's state as of a snapshot date.
///
/// Every attribute is optional; `None` is a real value and is not the same
/// as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeRecord {
    pub employee_id: String,

    pub employee_name: Option<String>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub business_title: Option<String>,
    pub worker_status: Option<String>,
    pub employee_type: Option<String>,
    pub job_code: Option<String>,
    pub job_title: Option<String>,
    pub job_family: Option<String>,
    pub cost_center: Option<String>,
    pub manager: Option<String>,
    pub management_level: Option<String>,
    pub email_primary_work: Option<String>,
}

impl EmployeeRecord {
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            ..Self::default()
        }
    }

    /// Best label for the report: the full name if we have one, else the id.
    pub fn display_name(&self) -> &str {
        self.employee_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.employee_id)
    }
}

/// The attributes compared between snapshots.
///
/// Declaration order is the order deltas are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    EmployeeName,
    LastName,
    FirstName,
    BusinessTitle,
    WorkerStatus,
    EmployeeType,
    JobCode,
    JobTitle,
    JobFamily,
    CostCenter,
    Manager,
    ManagementLevel,
    EmailPrimaryWork,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 13] = [
        EmployeeField::EmployeeName,
        EmployeeField::LastName,
        EmployeeField::FirstName,
        EmployeeField::BusinessTitle,
        EmployeeField::WorkerStatus,
        EmployeeField::EmployeeType,
        EmployeeField::JobCode,
        EmployeeField::JobTitle,
        EmployeeField::JobFamily,
        EmployeeField::CostCenter,
        EmployeeField::Manager,
        EmployeeField::ManagementLevel,
        EmployeeField::EmailPrimaryWork,
    ];

    /// Column name, as used in the source table and in reports.
    pub fn name(self) -> &'static str {
        match self {
            EmployeeField::EmployeeName => "employee_name",
            EmployeeField::LastName => "last_name",
            EmployeeField::FirstName => "first_name",
            EmployeeField::BusinessTitle => "business_title",
            EmployeeField::WorkerStatus => "worker_status",
            EmployeeField::EmployeeType => "employee_type",
            EmployeeField::JobCode => "job_code",
            EmployeeField::JobTitle => "job_title",
            EmployeeField::JobFamily => "job_family",
            EmployeeField::CostCenter => "cost_center",
            EmployeeField::Manager => "manager",
            EmployeeField::ManagementLevel => "management_level",
            EmployeeField::EmailPrimaryWork => "email_primary_work",
        }
    }

    /// Human-friendly label for the rendered report.
    pub fn label(self) -> &'static str {
        match self {
            EmployeeField::EmployeeName => "Employee Name",
            EmployeeField::LastName => "Last Name",
            EmployeeField::FirstName => "First Name",
            EmployeeField::BusinessTitle => "Business Title",
            EmployeeField::WorkerStatus => "Worker Status",
            EmployeeField::EmployeeType => "Employee Type",
            EmployeeField::JobCode => "Job Code",
            EmployeeField::JobTitle => "Job Title",
            EmployeeField::JobFamily => "Job Family",
            EmployeeField::CostCenter => "Cost Center",
            EmployeeField::Manager => "Manager",
            EmployeeField::ManagementLevel => "Management Level",
            EmployeeField::EmailPrimaryWork => "Email (Work)",
        }
    }

    pub fn value(self, record: &EmployeeRecord) -> Option<&str> {
        let value = match self {
            EmployeeField::EmployeeName => &record.employee_name,
            EmployeeField::LastName => &record.last_name,
            EmployeeField::FirstName => &record.first_name,
            EmployeeField::BusinessTitle => &record.business_title,
            EmployeeField::WorkerStatus => &record.worker_status,
            EmployeeField::EmployeeType => &record.employee_type,
            EmployeeField::JobCode => &record.job_code,
            EmployeeField::JobTitle => &record.job_title,
            EmployeeField::JobFamily => &record.job_family,
            EmployeeField::CostCenter => &record.cost_center,
            EmployeeField::Manager => &record.manager,
            EmployeeField::ManagementLevel => &record.management_level,
            EmployeeField::EmailPrimaryWork => &record.email_primary_work,
        };
        value.as_deref()
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
