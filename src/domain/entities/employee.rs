use serde::{Deserialize, Serialize};

use crate::domain::entities::record::{FieldValue, TableRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub employee_id: i64,
    pub full_name: String,
    pub email: String,
    pub official_phone: String,
    #[serde(default)]
    pub personal_phone: Option<String>,
    pub present_address: String,
    #[serde(default)]
    pub permanent_address: Option<String>,
    #[serde(default)]
    pub emergency_contact_name: Option<String>,
    #[serde(default)]
    pub emergency_contact_phone: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub cv_url: Option<String>,
    pub dob: String,
    pub doj: String,
    pub gender: Gender,
    #[serde(default)]
    pub blood_group: Option<BloodGroup>,
    pub basic_salary: f64,
    pub gross_salary: f64,
    pub is_active: i64,
    pub emp_code: String,
    pub department_id: i64,
    pub designation_id: i64,
    pub employee_type_id: i64,
    #[serde(default)]
    pub office_timing_id: i64,
    #[serde(default)]
    pub leave_type_ids: Vec<i64>,
    pub created_by: i64,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub updated_by: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

/// Create/update payload; the source assigns the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub full_name: String,
    pub email: String,
    pub official_phone: String,
    pub personal_phone: Option<String>,
    pub present_address: String,
    pub permanent_address: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub photo_url: Option<String>,
    pub cv_url: Option<String>,
    pub dob: String,
    pub doj: String,
    pub gender: Gender,
    pub blood_group: Option<BloodGroup>,
    pub basic_salary: f64,
    pub gross_salary: f64,
    pub is_active: i64,
    pub emp_code: String,
    pub department_id: i64,
    pub designation_id: i64,
    pub employee_type_id: i64,
    #[serde(default)]
    pub office_timing_id: i64,
    #[serde(default)]
    pub leave_type_ids: Vec<i64>,
    pub created_by: i64,
}

/// Optional binary attachments carried alongside an employee mutation.
#[derive(Debug, Clone, Default)]
pub struct Attachments {
    pub photo: Option<FileUpload>,
    pub cv: Option<FileUpload>,
}

#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// One employee's leave-type assignment in the batch operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveAssignment {
    pub employee_id: i64,
    pub leave_type_ids: Vec<i64>,
}

/// Employee joined with the reference names the table displays, searches,
/// and sorts on. Unresolvable ids render as `-`.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRow {
    pub employee: Employee,
    pub department_name: String,
    pub designation_name: String,
}

impl TableRow for EmployeeRow {
    fn id(&self) -> i64 {
        self.employee.employee_id
    }

    fn field(&self, column: &str) -> FieldValue {
        match column {
            "emp_code" => FieldValue::str(&self.employee.emp_code),
            "full_name" => FieldValue::str(&self.employee.full_name),
            "email" => FieldValue::str(&self.employee.email),
            "official_phone" => FieldValue::str(&self.employee.official_phone),
            "department" => FieldValue::str(&self.department_name),
            "designation" => FieldValue::str(&self.designation_name),
            "doj" => FieldValue::str(&self.employee.doj),
            "basic_salary" => FieldValue::num(self.employee.basic_salary),
            "gross_salary" => FieldValue::num(self.employee.gross_salary),
            _ => FieldValue::Null,
        }
    }

    fn searchable() -> &'static [&'static str] {
        &["full_name", "email", "emp_code", "department", "designation"]
    }
}
