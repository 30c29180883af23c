use serde::{Deserialize, Serialize};

use crate::domain::entities::record::{FieldValue, TableRow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub employee_attendance_id: i64,
    pub employee_id: i64,
    /// Calendar date string, `YYYY-MM-DD`; also the grouping key.
    pub attendance_date: String,
    pub in_time: String,
    pub out_time: String,
    #[serde(default)]
    pub late_in_minutes: i64,
    #[serde(default)]
    pub early_out_minutes: i64,
    /// Resolved by the source for display.
    #[serde(default)]
    pub employee_name: String,
    pub created_by: i64,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub updated_by: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendance {
    pub employee_id: i64,
    pub attendance_date: String,
    pub in_time: String,
    pub out_time: String,
    #[serde(default)]
    pub late_in_minutes: i64,
    #[serde(default)]
    pub early_out_minutes: i64,
    pub created_by: i64,
}

impl TableRow for Attendance {
    fn id(&self) -> i64 {
        self.employee_attendance_id
    }

    fn field(&self, column: &str) -> FieldValue {
        match column {
            "employee_name" => FieldValue::str(&self.employee_name),
            "attendance_date" => FieldValue::str(&self.attendance_date),
            "in_time" => FieldValue::str(&self.in_time),
            "out_time" => FieldValue::str(&self.out_time),
            "late_in_minutes" => FieldValue::num(self.late_in_minutes as f64),
            "early_out_minutes" => FieldValue::num(self.early_out_minutes as f64),
            _ => FieldValue::Null,
        }
    }

    fn searchable() -> &'static [&'static str] {
        &["employee_name"]
    }
}
