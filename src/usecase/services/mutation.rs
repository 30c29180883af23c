use std::sync::Arc;

use tracing::{error, info};

use crate::domain::entities::{
    Attachments, Attendance, Department, Designation, Employee, EmployeeType, Holiday,
    LeaveAssignment, LeaveType, NewAttendance, NewDepartment, NewDesignation, NewEmployee,
    NewEmployeeType, NewHoliday, NewLeaveType, NewOfficeTiming, OfficeTiming,
};
use crate::domain::listview::SelectionSet;
use crate::error::ConsoleError;
use crate::usecase::ports::source::{EmployeeSource, RecordSource, SourceError};
use crate::usecase::services::validate::{
    validate_assignment, validate_attachments, validate_attendance, validate_department,
    validate_designation, validate_employee, validate_employee_type, validate_holiday,
    validate_leave_type, validate_office_timing,
};

/// Screen-facing mutations for one entity family. Validation runs first;
/// a network failure comes back as the generic "Failed to create X"
/// message with the cause logged, and the caller keeps the form open.
pub struct EntityService<T, New> {
    source: Arc<dyn RecordSource<T, New>>,
    entity: &'static str,
    validate: fn(&New) -> Result<(), ConsoleError>,
}

impl<T, New> EntityService<T, New>
where
    T: Send,
    New: Send,
{
    pub fn new(
        source: Arc<dyn RecordSource<T, New>>,
        entity: &'static str,
        validate: fn(&New) -> Result<(), ConsoleError>,
    ) -> Self {
        Self {
            source,
            entity,
            validate,
        }
    }

    /// Fetches the collection, or `None` when no one is signed in: the
    /// query stays unexecuted and the screen keeps whatever it showed.
    pub async fn refresh(&self) -> Result<Option<Vec<T>>, ConsoleError> {
        match self.source.get_all().await {
            Ok(records) => Ok(Some(records)),
            Err(SourceError::NotAuthenticated) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn create(&self, payload: New) -> Result<T, ConsoleError> {
        (self.validate)(&payload)?;
        match self.source.create(payload).await {
            Ok(created) => {
                info!(entity = self.entity, "created");
                Ok(created)
            }
            Err(err) => Err(self.mutation_failed("create", err)),
        }
    }

    pub async fn update(&self, id: i64, payload: New) -> Result<T, ConsoleError> {
        (self.validate)(&payload)?;
        match self.source.update(id, payload).await {
            Ok(updated) => {
                info!(entity = self.entity, id, "updated");
                Ok(updated)
            }
            Err(err) => Err(self.mutation_failed("update", err)),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<i64, ConsoleError> {
        match self.source.delete(id).await {
            Ok(deleted) => {
                info!(entity = self.entity, id = deleted, "deleted");
                Ok(deleted)
            }
            Err(err) => Err(self.mutation_failed("delete", err)),
        }
    }

    fn mutation_failed(&self, action: &'static str, source: SourceError) -> ConsoleError {
        error!(entity = self.entity, action, %source, "mutation failed");
        ConsoleError::Mutation {
            action,
            entity: self.entity,
            source,
        }
    }
}

impl EntityService<Department, NewDepartment> {
    pub fn departments(source: Arc<dyn RecordSource<Department, NewDepartment>>) -> Self {
        Self::new(source, "department", validate_department)
    }
}

impl EntityService<Designation, NewDesignation> {
    pub fn designations(source: Arc<dyn RecordSource<Designation, NewDesignation>>) -> Self {
        Self::new(source, "designation", validate_designation)
    }
}

impl EntityService<EmployeeType, NewEmployeeType> {
    pub fn employee_types(source: Arc<dyn RecordSource<EmployeeType, NewEmployeeType>>) -> Self {
        Self::new(source, "employee type", validate_employee_type)
    }
}

impl EntityService<Holiday, NewHoliday> {
    pub fn holidays(source: Arc<dyn RecordSource<Holiday, NewHoliday>>) -> Self {
        Self::new(source, "holiday", validate_holiday)
    }
}

impl EntityService<LeaveType, NewLeaveType> {
    pub fn leave_types(source: Arc<dyn RecordSource<LeaveType, NewLeaveType>>) -> Self {
        Self::new(source, "leave type", validate_leave_type)
    }
}

impl EntityService<OfficeTiming, NewOfficeTiming> {
    pub fn office_timings(source: Arc<dyn RecordSource<OfficeTiming, NewOfficeTiming>>) -> Self {
        Self::new(source, "office timing", validate_office_timing)
    }
}

impl EntityService<Attendance, NewAttendance> {
    pub fn attendances(source: Arc<dyn RecordSource<Attendance, NewAttendance>>) -> Self {
        Self::new(source, "attendance", validate_attendance)
    }
}

/// Employee mutations: the multipart payload with optional attachments and
/// the selected-employees batch assignment.
pub struct EmployeeService {
    source: Arc<dyn EmployeeSource>,
}

impl EmployeeService {
    pub fn new(source: Arc<dyn EmployeeSource>) -> Self {
        Self { source }
    }

    pub async fn refresh(&self) -> Result<Option<Vec<Employee>>, ConsoleError> {
        match self.source.get_all().await {
            Ok(records) => Ok(Some(records)),
            Err(SourceError::NotAuthenticated) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Employee, ConsoleError> {
        Ok(self.source.get_by_id(id).await?)
    }

    pub async fn create(
        &self,
        payload: NewEmployee,
        attachments: Attachments,
    ) -> Result<Employee, ConsoleError> {
        validate_employee(&payload)?;
        validate_attachments(&attachments)?;
        match self.source.create(payload, attachments).await {
            Ok(created) => {
                info!(id = created.employee_id, "employee created");
                Ok(created)
            }
            Err(err) => Err(Self::mutation_failed("create", err)),
        }
    }

    pub async fn update(
        &self,
        id: i64,
        payload: NewEmployee,
        attachments: Attachments,
    ) -> Result<Employee, ConsoleError> {
        validate_employee(&payload)?;
        validate_attachments(&attachments)?;
        match self.source.update(id, payload, attachments).await {
            Ok(updated) => {
                info!(id, "employee updated");
                Ok(updated)
            }
            Err(err) => Err(Self::mutation_failed("update", err)),
        }
    }

    pub async fn delete(&self, id: i64) -> Result<i64, ConsoleError> {
        match self.source.delete(id).await {
            Ok(deleted) => {
                info!(id = deleted, "employee deleted");
                Ok(deleted)
            }
            Err(err) => Err(Self::mutation_failed("delete", err)),
        }
    }

    /// Assigns the chosen leave types to every selected employee in one
    /// request, one assignment entry per employee.
    pub async fn assign_leave_types(
        &self,
        selection: &SelectionSet,
        leave_type_ids: &[i64],
    ) -> Result<(), ConsoleError> {
        let employee_ids = selection.ids();
        validate_assignment(&employee_ids, leave_type_ids)?;

        let assignments: Vec<LeaveAssignment> = employee_ids
            .iter()
            .map(|employee_id| LeaveAssignment {
                employee_id: *employee_id,
                leave_type_ids: leave_type_ids.to_vec(),
            })
            .collect();

        match self.source.assign_leave_types(assignments).await {
            Ok(()) => {
                info!(
                    employees = employee_ids.len(),
                    leave_types = leave_type_ids.len(),
                    "leave types assigned"
                );
                Ok(())
            }
            Err(err) => Err(Self::mutation_failed("assign leave types to", err)),
        }
    }

    fn mutation_failed(action: &'static str, source: SourceError) -> ConsoleError {
        error!(action, %source, "employee mutation failed");
        ConsoleError::Mutation {
            action,
            entity: "employee",
            source,
        }
    }
}
