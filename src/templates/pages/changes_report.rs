use chrono::NaiveDate;
use maud::{html, Markup};

use crate::domain::{ChangeEvent, ChangeKind, ChangeSummary, EmployeeField};
use crate::templates::components::{badge, card, field_value};
use crate::templates::layouts::email::email_layout;

const TH_STYLE: &str = "text-align: left; padding: 4px 8px; border-bottom: 1px solid #e5e7eb; font-size: 0.85em; color: #6b7280;";
const TD_STYLE: &str = "padding: 4px 8px; border-bottom: 1px solid #f3f4f6; font-size: 0.9em;";

pub fn report_subject(check_date: NaiveDate) -> String {
    format!("Organizational changes for {check_date}")
}

/// The full report document, one block per change in the order given.
pub fn render_report_html(check_date: NaiveDate, changes: &[ChangeEvent]) -> Markup {
    let summary = ChangeSummary::of(changes);
    let title = report_subject(check_date);

    email_layout(
        &title,
        html! {
            p {
                strong { (summary.added) } " added, "
                strong { (summary.changed) } " changed."
            }
            @if changes.is_empty() {
                p style="color: #6b7280;" { "No changes were found for this day." }
            }
            @for event in changes {
                (change_block(event))
            }
        },
    )
}

fn change_block(event: &ChangeEvent) -> Markup {
    let record = &event.record;
    let subtitle = format!("Employee ID {}", record.employee_id);

    let body = match event.kind {
        ChangeKind::Added => html! {
            (badge("added", "#16a34a"))
            table style="border-collapse: collapse; margin-top: 8px;" {
                tbody {
                    @for field in EmployeeField::ALL {
                        tr {
                            th style=(TH_STYLE) { (field.label()) }
                            td style=(TD_STYLE) { (field_value(field.value(record))) }
                        }
                    }
                }
            }
        },
        ChangeKind::Changed => html! {
            (badge("changed", "#2563eb"))
            table style="border-collapse: collapse; margin-top: 8px;" {
                thead {
                    tr {
                        th style=(TH_STYLE) { "Field" }
                        th style=(TH_STYLE) { "Previous" }
                        th style=(TH_STYLE) { "Current" }
                    }
                }
                tbody {
                    @for delta in &event.field_deltas {
                        tr {
                            td style=(TD_STYLE) { (delta.field.label()) }
                            td style=(TD_STYLE) { (field_value(delta.old.as_deref())) }
                            td style=(TD_STYLE) { (field_value(delta.new.as_deref())) }
                        }
                    }
                }
            }
        },
    };

    card(record.display_name(), Some(subtitle.as_str()), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmployeeRecord, FieldDelta};

    fn check_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    }

    #[test]
    fn subject_names_the_day() {
        assert_eq!(
            report_subject(check_date()),
            "Organizational changes for 2024-05-02"
        );
    }

    #[test]
    fn empty_change_set_says_so() {
        let html = render_report_html(check_date(), &[]).into_string();
        assert!(html.contains("Organizational changes for 2024-05-02"));
        assert!(html.contains("No changes were found"));
        assert!(html.contains("<strong>0</strong> added"));
    }

    #[test]
    fn changed_employee_shows_previous_and_current() {
        let record = EmployeeRecord {
            employee_name: Some("Doe, Jane".to_string()),
            manager: Some("Bob".to_string()),
            ..EmployeeRecord::new("E1")
        };
        let event = ChangeEvent::changed(
            record,
            vec![FieldDelta {
                field: EmployeeField::Manager,
                old: None,
                new: Some("Bob".to_string()),
            }],
        );

        let html = render_report_html(check_date(), &[event]).into_string();

        assert!(html.contains("Doe, Jane"));
        assert!(html.contains("Employee ID E1"));
        assert!(html.contains("Manager"));
        assert!(html.contains("(none)"));
        assert!(html.contains("Bob"));
        assert!(html.contains("<strong>1</strong> changed"));
    }

    #[test]
    fn added_employee_lists_attributes_and_escapes_text() {
        let record = EmployeeRecord {
            employee_name: Some("O'Neil <Ops>".to_string()),
            business_title: Some("Engineer".to_string()),
            ..EmployeeRecord::new("E7")
        };

        let html = render_report_html(check_date(), &[ChangeEvent::added(record)]).into_string();

        assert!(html.contains("Business Title"));
        assert!(html.contains("Engineer"));
        assert!(html.contains("&lt;Ops&gt;"));
        assert!(!html.contains("<Ops>"));
    }

    #[test]
    fn events_render_in_given_order() {
        let first = ChangeEvent::added(EmployeeRecord {
            employee_name: Some("Zed".to_string()),
            ..EmployeeRecord::new("E2")
        });
        let second = ChangeEvent::added(EmployeeRecord {
            employee_name: Some("Amy".to_string()),
            ..EmployeeRecord::new("E1")
        });

        let html = render_report_html(check_date(), &[first, second]).into_string();

        let zed = html.find("Zed").unwrap();
        let amy = html.find("Amy").unwrap();
        assert!(zed < amy);
    }
}
