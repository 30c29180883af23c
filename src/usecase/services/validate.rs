//! Client-side validation. Runs before any network call; the first failure
//! becomes the inline form message and submission never leaves the screen.

use crate::domain::entities::{
    Attachments, NewAttendance, NewDepartment, NewDesignation, NewEmployee, NewEmployeeType,
    NewHoliday, NewLeaveType, NewOfficeTiming,
};
use crate::error::ConsoleError;

type Checked = Result<(), ConsoleError>;

fn require(ok: bool, message: &str) -> Checked {
    if ok {
        Ok(())
    } else {
        Err(ConsoleError::validation(message))
    }
}

pub fn validate_employee(payload: &NewEmployee) -> Checked {
    require(!payload.full_name.trim().is_empty(), "Please enter full name")?;
    require(!payload.email.trim().is_empty(), "Please enter email")?;
    require(
        !payload.official_phone.trim().is_empty(),
        "Please enter official phone",
    )?;
    require(
        !payload.present_address.trim().is_empty(),
        "Please enter present address",
    )?;
    require(!payload.dob.trim().is_empty(), "Please enter date of birth")?;
    require(!payload.doj.trim().is_empty(), "Please enter date of joining")?;
    require(
        !payload.emp_code.trim().is_empty(),
        "Please enter employee code",
    )?;
    require(
        payload.basic_salary > 0.0,
        "Please enter valid basic salary",
    )?;
    require(
        payload.gross_salary > 0.0,
        "Please enter valid gross salary",
    )?;
    require(payload.department_id > 0, "Please select department")?;
    require(payload.designation_id > 0, "Please select designation")?;
    require(payload.employee_type_id > 0, "Please select employee type")?;
    Ok(())
}

/// Photo must be an image, CV must be a PDF; both checked before any
/// request is built.
pub fn validate_attachments(attachments: &Attachments) -> Checked {
    if let Some(photo) = &attachments.photo {
        require(
            photo.mime_type.starts_with("image/"),
            "Please upload an image file for photo",
        )?;
    }
    if let Some(cv) = &attachments.cv {
        require(
            cv.mime_type == "application/pdf",
            "Please upload a PDF file for CV",
        )?;
    }
    Ok(())
}

pub fn validate_assignment(employee_ids: &[i64], leave_type_ids: &[i64]) -> Checked {
    require(
        !employee_ids.is_empty(),
        "Please select at least one employee",
    )?;
    require(
        !leave_type_ids.is_empty(),
        "Please select at least one leave type",
    )?;
    Ok(())
}

pub fn validate_department(payload: &NewDepartment) -> Checked {
    require(
        !payload.department_name.trim().is_empty(),
        "Please enter department name",
    )
}

pub fn validate_designation(payload: &NewDesignation) -> Checked {
    require(
        !payload.designation_name.trim().is_empty(),
        "Please enter designation name",
    )
}

pub fn validate_employee_type(payload: &NewEmployeeType) -> Checked {
    require(
        !payload.employee_type_name.trim().is_empty(),
        "Please enter employee type name",
    )
}

pub fn validate_holiday(payload: &NewHoliday) -> Checked {
    require(
        !payload.holiday_name.trim().is_empty(),
        "Please enter holiday name",
    )?;
    require(!payload.start_date.trim().is_empty(), "Please enter start date")?;
    require(!payload.end_date.trim().is_empty(), "Please enter end date")?;
    require(payload.no_of_days > 0, "Please enter valid number of days")?;
    Ok(())
}

pub fn validate_leave_type(payload: &NewLeaveType) -> Checked {
    require(
        !payload.leave_type_name.trim().is_empty(),
        "Please enter leave type name",
    )?;
    require(payload.total_leaves > 0, "Please enter valid total leaves")?;
    require(payload.year_period > 0, "Please select year period")?;
    Ok(())
}

pub fn validate_office_timing(payload: &NewOfficeTiming) -> Checked {
    require(!payload.start_time.trim().is_empty(), "Please enter start time")?;
    require(!payload.end_time.trim().is_empty(), "Please enter end time")?;
    Ok(())
}

pub fn validate_attendance(payload: &NewAttendance) -> Checked {
    require(payload.employee_id > 0, "Please select employee")?;
    require(
        !payload.attendance_date.trim().is_empty(),
        "Please enter attendance date",
    )?;
    require(!payload.in_time.trim().is_empty(), "Please enter in time")?;
    require(!payload.out_time.trim().is_empty(), "Please enter out time")?;
    Ok(())
}
