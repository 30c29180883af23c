use serde::{Deserialize, Serialize};

use crate::domain::entities::record::{FieldValue, TableRow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub holiday_id: i64,
    pub holiday_name: String,
    pub start_date: String,
    pub end_date: String,
    pub no_of_days: i64,
    #[serde(default)]
    pub description: Option<String>,
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
pub struct NewHoliday {
    pub holiday_name: String,
    pub start_date: String,
    pub end_date: String,
    pub no_of_days: i64,
    #[serde(default)]
    pub description: Option<String>,
    pub created_by: i64,
}

impl TableRow for Holiday {
    fn id(&self) -> i64 {
        self.holiday_id
    }

    fn field(&self, column: &str) -> FieldValue {
        match column {
            "holiday_name" => FieldValue::str(&self.holiday_name),
            "start_date" => FieldValue::str(&self.start_date),
            "end_date" => FieldValue::str(&self.end_date),
            "no_of_days" => FieldValue::num(self.no_of_days as f64),
            "description" => FieldValue::opt_str(self.description.as_deref()),
            _ => FieldValue::Null,
        }
    }

    fn searchable() -> &'static [&'static str] {
        &["holiday_name"]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveType {
    pub leave_type_id: i64,
    pub leave_type_name: String,
    pub total_leaves: i64,
    /// Calendar year the allocation applies to; zero means unassigned and
    /// is bucketed under the current year for display.
    #[serde(default)]
    pub year_period: i64,
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
pub struct NewLeaveType {
    pub leave_type_name: String,
    pub total_leaves: i64,
    pub year_period: i64,
    pub created_by: i64,
}

impl TableRow for LeaveType {
    fn id(&self) -> i64 {
        self.leave_type_id
    }

    fn field(&self, column: &str) -> FieldValue {
        match column {
            "leave_type_name" => FieldValue::str(&self.leave_type_name),
            "total_leaves" => FieldValue::num(self.total_leaves as f64),
            "year_period" => FieldValue::num(self.year_period as f64),
            _ => FieldValue::Null,
        }
    }

    fn searchable() -> &'static [&'static str] {
        &["leave_type_name"]
    }
}
