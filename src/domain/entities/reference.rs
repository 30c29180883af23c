use serde::{Deserialize, Serialize};

use crate::domain::entities::record::{FieldValue, TableRow};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub department_id: i64,
    pub department_name: String,
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
pub struct NewDepartment {
    pub department_name: String,
    pub created_by: i64,
}

impl TableRow for Department {
    fn id(&self) -> i64 {
        self.department_id
    }

    fn field(&self, column: &str) -> FieldValue {
        match column {
            "department_name" => FieldValue::str(&self.department_name),
            "created_at" => self
                .created_at
                .map(|v| FieldValue::num(v as f64))
                .unwrap_or(FieldValue::Null),
            _ => FieldValue::Null,
        }
    }

    fn searchable() -> &'static [&'static str] {
        &["department_name"]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Designation {
    pub designation_id: i64,
    pub designation_name: String,
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
pub struct NewDesignation {
    pub designation_name: String,
    pub created_by: i64,
}

impl TableRow for Designation {
    fn id(&self) -> i64 {
        self.designation_id
    }

    fn field(&self, column: &str) -> FieldValue {
        match column {
            "designation_name" => FieldValue::str(&self.designation_name),
            "created_at" => self
                .created_at
                .map(|v| FieldValue::num(v as f64))
                .unwrap_or(FieldValue::Null),
            _ => FieldValue::Null,
        }
    }

    fn searchable() -> &'static [&'static str] {
        &["designation_name"]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeType {
    pub employee_type_id: i64,
    pub employee_type_name: String,
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
pub struct NewEmployeeType {
    pub employee_type_name: String,
    pub created_by: i64,
}

impl TableRow for EmployeeType {
    fn id(&self) -> i64 {
        self.employee_type_id
    }

    fn field(&self, column: &str) -> FieldValue {
        match column {
            "employee_type_name" => FieldValue::str(&self.employee_type_name),
            "created_at" => self
                .created_at
                .map(|v| FieldValue::num(v as f64))
                .unwrap_or(FieldValue::Null),
            _ => FieldValue::Null,
        }
    }

    fn searchable() -> &'static [&'static str] {
        &["employee_type_name"]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weekend {
    pub weekend_id: i64,
    pub day: String,
}

impl TableRow for Weekend {
    fn id(&self) -> i64 {
        self.weekend_id
    }

    fn field(&self, column: &str) -> FieldValue {
        match column {
            "day" => FieldValue::str(&self.day),
            _ => FieldValue::Null,
        }
    }

    fn searchable() -> &'static [&'static str] {
        &["day"]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeTiming {
    pub office_timing_id: i64,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub weekend_ids: Vec<i64>,
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
pub struct NewOfficeTiming {
    pub start_time: String,
    pub end_time: String,
    pub weekend_ids: Vec<i64>,
    pub created_by: i64,
}

impl TableRow for OfficeTiming {
    fn id(&self) -> i64 {
        self.office_timing_id
    }

    fn field(&self, column: &str) -> FieldValue {
        match column {
            "start_time" => FieldValue::str(&self.start_time),
            "end_time" => FieldValue::str(&self.end_time),
            _ => FieldValue::Null,
        }
    }

    fn searchable() -> &'static [&'static str] {
        &["start_time", "end_time"]
    }
}
