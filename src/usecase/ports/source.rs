use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{Attachments, Employee, LeaveAssignment, NewEmployee};

#[derive(Debug, Error)]
pub enum SourceError {
    /// No token in the session; the request was never issued.
    #[error("not signed in")]
    NotAuthenticated,

    #[error("request failed: {0}")]
    Http(String),

    #[error("server returned {code}: {message}")]
    Status { code: u16, message: String },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// CRUD port over the remote collection for one entity family. The source
/// owns identifier assignment; `delete` echoes the removed id.
#[async_trait]
pub trait RecordSource<T, New>: Send + Sync {
    async fn get_all(&self) -> Result<Vec<T>, SourceError>;
    async fn get_by_id(&self, id: i64) -> Result<T, SourceError>;
    async fn create(&self, payload: New) -> Result<T, SourceError>;
    async fn update(&self, id: i64, payload: New) -> Result<T, SourceError>;
    async fn delete(&self, id: i64) -> Result<i64, SourceError>;
}

/// Employees carry optional binary attachments and the leave-type batch
/// assignment, so they get their own port.
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Employee>, SourceError>;
    async fn get_by_id(&self, id: i64) -> Result<Employee, SourceError>;
    async fn create(
        &self,
        payload: NewEmployee,
        attachments: Attachments,
    ) -> Result<Employee, SourceError>;
    async fn update(
        &self,
        id: i64,
        payload: NewEmployee,
        attachments: Attachments,
    ) -> Result<Employee, SourceError>;
    async fn delete(&self, id: i64) -> Result<i64, SourceError>;
    async fn assign_leave_types(
        &self,
        assignments: Vec<LeaveAssignment>,
    ) -> Result<(), SourceError>;
}
