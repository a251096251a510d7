use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::domain::{ChangeEvent, ChangeKind};
use crate::errors::AppError;

const HEADERS: [&str; 6] = [
    "Change",
    "Employee ID",
    "Employee Name",
    "Field",
    "Previous",
    "Current",
];

/// Flattens the change set into one sheet: a row per added employee and a
/// row per field delta of a changed employee.
pub fn export_changes_xlsx(
    check_date: NaiveDate,
    changes: &[ChangeEvent],
) -> Result<Vec<u8>, AppError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(format!("Changes {check_date}"))
        .map_err(|e| AppError::Xlsx(format!("Failed to name worksheet: {e}")))?;

    let bold = Format::new().set_bold();
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| AppError::Xlsx(format!("Failed to write header '{header}': {e}")))?;
    }

    let mut r: u32 = 1;
    for event in changes {
        match event.kind {
            ChangeKind::Added => {
                write_row(worksheet, r, event, None, None, None)?;
                r += 1;
            }
            ChangeKind::Changed => {
                for delta in &event.field_deltas {
                    write_row(
                        worksheet,
                        r,
                        event,
                        Some(delta.field.name()),
                        delta.old.as_deref(),
                        delta.new.as_deref(),
                    )?;
                    r += 1;
                }
            }
        }
    }

    worksheet.autofit();

    workbook
        .save_to_buffer()
        .map_err(|e| AppError::Xlsx(format!("Failed to save workbook: {e}")))
}

fn write_row(
    worksheet: &mut Worksheet,
    r: u32,
    event: &ChangeEvent,
    field: Option<&str>,
    previous: Option<&str>,
    current: Option<&str>,
) -> Result<(), AppError> {
    let cells = [
        (0u16, Some(event.kind.as_str())),
        (1, Some(event.record.employee_id.as_str())),
        (2, event.record.employee_name.as_deref()),
        (3, field),
        (4, previous),
        (5, current),
    ];

    // Absent values stay as blank cells.
    for (col, value) in cells {
        if let Some(value) = value {
            worksheet
                .write_string(r, col, value)
                .map_err(|e| AppError::Xlsx(format!("Failed to write {}: {e}", HEADERS[col as usize])))?;
        }
    }
    Ok(())
}
