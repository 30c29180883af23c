use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::{
    Attachments, Attendance, Department, Designation, Employee, EmployeeType, FileUpload, Holiday,
    LeaveAssignment, LeaveType, NewAttendance, NewDepartment, NewDesignation, NewEmployee,
    NewEmployeeType, NewHoliday, NewLeaveType, NewOfficeTiming, OfficeTiming, Weekend,
};
use crate::infra::http::session::{read_session, write_session, SharedSession};
use crate::usecase::ports::source::{EmployeeSource, RecordSource, SourceError};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var("HR_CONSOLE_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        Self { base_url }
    }
}

/// Entity endpoints wrap their payloads in a `data` envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct DeletedId {
    id: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub user_id: i64,
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignInResponse {
    pub token: String,
    pub user: AuthUser,
}

/// Thin wrapper over the remote REST API. Attaches the session token as
/// the `Authorization` header on every request; without a token, requests
/// fail as `NotAuthenticated` before anything goes on the wire.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: SharedSession,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: SharedSession) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
        }
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn token(&self) -> Result<String, SourceError> {
        read_session(&self.session)
            .token()
            .map(str::to_string)
            .ok_or(SourceError::NotAuthenticated)
    }

    fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder, SourceError> {
        let token = self.token()?;
        Ok(self
            .http
            .request(method, self.url(path))
            .header(reqwest::header::AUTHORIZATION, token))
    }

    pub async fn sign_in(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SignInResponse, SourceError> {
        let response = self
            .http
            .post(self.url("api/auth/login"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .map_err(|err| SourceError::Http(err.to_string()))?;
        let response = check_status(response).await?;
        let signed_in: SignInResponse = response
            .json()
            .await
            .map_err(|err| SourceError::Decode(err.to_string()))?;

        write_session(&self.session, |session| {
            session.sign_in(signed_in.token.clone(), signed_in.user.user_id)
        });
        debug!(user = %signed_in.user.username, "signed in");
        Ok(signed_in)
    }

    pub fn sign_out(&self) {
        write_session(&self.session, |session| session.sign_out());
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let response = self
            .authed(Method::GET, path)?
            .send()
            .await
            .map_err(|err| SourceError::Http(err.to_string()))?;
        decode(response).await
    }

    async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, SourceError> {
        let response = self
            .authed(method, path)?
            .json(body)
            .send()
            .await
            .map_err(|err| SourceError::Http(err.to_string()))?;
        decode(response).await
    }

    async fn delete_id(&self, path: &str) -> Result<i64, SourceError> {
        let response = self
            .authed(Method::DELETE, path)?
            .send()
            .await
            .map_err(|err| SourceError::Http(err.to_string()))?;
        let deleted: DeletedId = decode(response).await?;
        Ok(deleted.id)
    }

    async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: Form,
    ) -> Result<T, SourceError> {
        let response = self
            .authed(method, path)?
            .multipart(form)
            .send()
            .await
            .map_err(|err| SourceError::Http(err.to_string()))?;
        decode(response).await
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SourceError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(SourceError::Status {
        code: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, SourceError> {
    let response = check_status(response).await?;
    let envelope: Envelope<T> = response
        .json()
        .await
        .map_err(|err| SourceError::Decode(err.to_string()))?;
    Ok(envelope.data)
}

fn employee_form(payload: &NewEmployee, attachments: Attachments) -> Result<Form, SourceError> {
    let details =
        serde_json::to_string(payload).map_err(|err| SourceError::Decode(err.to_string()))?;
    let mut form = Form::new().text("employeeDetails", details);
    if let Some(photo) = attachments.photo {
        form = form.part("photoUrl", file_part(photo)?);
    }
    if let Some(cv) = attachments.cv {
        form = form.part("cvUrl", file_part(cv)?);
    }
    Ok(form)
}

fn file_part(upload: FileUpload) -> Result<Part, SourceError> {
    Part::bytes(upload.bytes)
        .file_name(upload.file_name)
        .mime_str(&upload.mime_type)
        .map_err(|err| SourceError::Http(err.to_string()))
}

/// Generic REST source for the flat entity families. The surface is
/// uniform: `getall`, `{id}`, `create`, `edit/{id}`, `delete/{id}`.
pub struct HttpSource<T, New> {
    client: Arc<ApiClient>,
    path: &'static str,
    _marker: PhantomData<fn() -> (T, New)>,
}

impl<T, New> HttpSource<T, New> {
    pub fn new(client: Arc<ApiClient>, path: &'static str) -> Self {
        Self {
            client,
            path,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<T, New> RecordSource<T, New> for HttpSource<T, New>
where
    T: DeserializeOwned + Send + Sync,
    New: Serialize + Send + Sync,
{
    async fn get_all(&self) -> Result<Vec<T>, SourceError> {
        self.client
            .get_json(&format!("api/{}/getall", self.path))
            .await
    }

    async fn get_by_id(&self, id: i64) -> Result<T, SourceError> {
        self.client
            .get_json(&format!("api/{}/{}", self.path, id))
            .await
    }

    async fn create(&self, payload: New) -> Result<T, SourceError> {
        self.client
            .send_json(Method::POST, &format!("api/{}/create", self.path), &payload)
            .await
    }

    async fn update(&self, id: i64, payload: New) -> Result<T, SourceError> {
        self.client
            .send_json(
                Method::PATCH,
                &format!("api/{}/edit/{}", self.path, id),
                &payload,
            )
            .await
    }

    async fn delete(&self, id: i64) -> Result<i64, SourceError> {
        self.client
            .delete_id(&format!("api/{}/delete/{}", self.path, id))
            .await
    }
}

impl HttpSource<Department, NewDepartment> {
    pub fn departments(client: Arc<ApiClient>) -> Self {
        Self::new(client, "departments")
    }
}

impl HttpSource<Designation, NewDesignation> {
    pub fn designations(client: Arc<ApiClient>) -> Self {
        Self::new(client, "designations")
    }
}

impl HttpSource<EmployeeType, NewEmployeeType> {
    pub fn employee_types(client: Arc<ApiClient>) -> Self {
        Self::new(client, "employee-types")
    }
}

impl HttpSource<Holiday, NewHoliday> {
    pub fn holidays(client: Arc<ApiClient>) -> Self {
        Self::new(client, "holidays")
    }
}

impl HttpSource<LeaveType, NewLeaveType> {
    pub fn leave_types(client: Arc<ApiClient>) -> Self {
        Self::new(client, "leave-types")
    }
}

impl HttpSource<OfficeTiming, NewOfficeTiming> {
    pub fn office_timings(client: Arc<ApiClient>) -> Self {
        Self::new(client, "office-timings")
    }
}

impl HttpSource<Weekend, Weekend> {
    pub fn weekends(client: Arc<ApiClient>) -> Self {
        Self::new(client, "weekends")
    }
}

impl HttpSource<Attendance, NewAttendance> {
    pub fn attendances(client: Arc<ApiClient>) -> Self {
        Self::new(client, "employee-attendances")
    }
}

/// Employee endpoints: multipart create/edit carrying the JSON details
/// part plus optional photo and CV files, and the batch leave-type
/// assignment.
pub struct HttpEmployeeSource {
    client: Arc<ApiClient>,
}

impl HttpEmployeeSource {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmployeeSource for HttpEmployeeSource {
    async fn get_all(&self) -> Result<Vec<Employee>, SourceError> {
        self.client.get_json("api/employees/getall").await
    }

    async fn get_by_id(&self, id: i64) -> Result<Employee, SourceError> {
        self.client.get_json(&format!("api/employees/{id}")).await
    }

    async fn create(
        &self,
        payload: NewEmployee,
        attachments: Attachments,
    ) -> Result<Employee, SourceError> {
        let form = employee_form(&payload, attachments)?;
        self.client
            .send_multipart(Method::POST, "api/employees/create", form)
            .await
    }

    async fn update(
        &self,
        id: i64,
        payload: NewEmployee,
        attachments: Attachments,
    ) -> Result<Employee, SourceError> {
        let form = employee_form(&payload, attachments)?;
        self.client
            .send_multipart(Method::PATCH, &format!("api/employees/edit/{id}"), form)
            .await
    }

    async fn delete(&self, id: i64) -> Result<i64, SourceError> {
        self.client
            .delete_id(&format!("api/employees/delete/{id}"))
            .await
    }

    async fn assign_leave_types(
        &self,
        assignments: Vec<LeaveAssignment>,
    ) -> Result<(), SourceError> {
        let body = serde_json::json!({ "data": assignments });
        let _: serde_json::Value = self
            .client
            .send_json(Method::POST, "api/employees/assign-leave-types", &body)
            .await?;
        Ok(())
    }
}
