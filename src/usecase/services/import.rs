//! Bulk employee import: one create request per spreadsheet row, strictly
//! sequential, stopping at the first failure. Rows already submitted stay
//! committed; later rows are never attempted.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{error, info};

use crate::domain::entities::{Attachments, Gender, NewEmployee};
use crate::usecase::ports::source::EmployeeSource;

/// Fixed column-header vocabulary shared by the template export and the
/// import parser.
pub const TEMPLATE_COLUMNS: [&str; 18] = [
    "FullName",
    "Email",
    "OfficialPhone",
    "PersonalPhone",
    "PresentAddress",
    "PermanentAddress",
    "EmergencyContactName",
    "EmergencyContactPhone",
    "DOB",
    "DOJ",
    "Gender",
    "BloodGroup",
    "BasicSalary",
    "GrossSalary",
    "EmpCode",
    "DepartmentId",
    "DesignationId",
    "EmployeeTypeId",
];

/// Columns whose cells are date-typed in the workbook.
pub const DATE_COLUMNS: [&str; 2] = ["DOB", "DOJ"];

/// One parsed spreadsheet row, keyed by the header vocabulary. Blank cells
/// read back as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRow {
    values: BTreeMap<String, String>,
}

impl SheetRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, column: &str, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.values.insert(column.to_string(), value);
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Builds the create payload for one row. Defaults: gender Male, date of
/// joining today, numeric fields zero when absent or unparseable.
pub fn row_to_new_employee(row: &SheetRow, created_by: i64, today: NaiveDate) -> NewEmployee {
    NewEmployee {
        full_name: text(row, "FullName"),
        email: text(row, "Email"),
        official_phone: text(row, "OfficialPhone"),
        personal_phone: optional(row, "PersonalPhone"),
        present_address: text(row, "PresentAddress"),
        permanent_address: optional(row, "PermanentAddress"),
        emergency_contact_name: optional(row, "EmergencyContactName"),
        emergency_contact_phone: optional(row, "EmergencyContactPhone"),
        photo_url: None,
        cv_url: None,
        dob: text(row, "DOB"),
        doj: row
            .get("DOJ")
            .map(str::to_string)
            .unwrap_or_else(|| today.to_string()),
        gender: match row.get("Gender") {
            Some("Female") => Gender::Female,
            _ => Gender::Male,
        },
        blood_group: row
            .get("BloodGroup")
            .and_then(|v| serde_json::from_value(serde_json::Value::String(v.to_string())).ok()),
        basic_salary: number(row, "BasicSalary"),
        gross_salary: number(row, "GrossSalary"),
        is_active: 1,
        emp_code: text(row, "EmpCode"),
        department_id: integer(row, "DepartmentId"),
        designation_id: integer(row, "DesignationId"),
        employee_type_id: integer(row, "EmployeeTypeId"),
        office_timing_id: 0,
        leave_type_ids: Vec::new(),
        created_by,
    }
}

fn text(row: &SheetRow, column: &str) -> String {
    row.get(column).unwrap_or("").to_string()
}

fn optional(row: &SheetRow, column: &str) -> Option<String> {
    row.get(column).map(str::to_string)
}

fn number(row: &SheetRow, column: &str) -> f64 {
    row.get(column).and_then(|v| v.parse().ok()).unwrap_or(0.0)
}

fn integer(row: &SheetRow, column: &str) -> i64 {
    row.get(column).and_then(|v| v.parse().ok()).unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFailure {
    /// 1-based position within the sheet's data rows.
    pub row: usize,
    pub reason: String,
}

/// Outcome of an import run: ids created before the loop stopped, and the
/// row that stopped it, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub created: Vec<i64>,
    pub failed: Option<RowFailure>,
}

impl ImportReport {
    pub fn succeeded(&self) -> bool {
        self.failed.is_none()
    }
}

/// Submits rows one at a time, each awaited before the next. No rollback:
/// a failure at row n leaves rows 1..n-1 committed and skips the rest.
pub async fn import_employees(
    source: &dyn EmployeeSource,
    rows: &[SheetRow],
    created_by: i64,
) -> ImportReport {
    let today = chrono::Local::now().date_naive();
    let mut report = ImportReport::default();

    for (index, row) in rows.iter().enumerate() {
        let payload = row_to_new_employee(row, created_by, today);
        match source.create(payload, Attachments::default()).await {
            Ok(created) => {
                info!(row = index + 1, id = created.employee_id, "imported employee");
                report.created.push(created.employee_id);
            }
            Err(err) => {
                error!(row = index + 1, %err, "import stopped");
                report.failed = Some(RowFailure {
                    row: index + 1,
                    reason: err.to_string(),
                });
                break;
            }
        }
    }

    report
}
