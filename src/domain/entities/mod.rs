pub mod attendance;
pub mod employee;
pub mod leave;
pub mod record;
pub mod reference;

pub use attendance::{Attendance, NewAttendance};
pub use employee::{
    Attachments, BloodGroup, Employee, EmployeeRow, FileUpload, Gender, LeaveAssignment,
    NewEmployee,
};
pub use leave::{Holiday, LeaveType, NewHoliday, NewLeaveType};
pub use record::{FieldValue, TableRow};
pub use reference::{
    Department, Designation, EmployeeType, NewDepartment, NewDesignation, NewEmployeeType,
    NewOfficeTiming, OfficeTiming, Weekend,
};
