pub mod client;
pub mod session;

pub use client::{ApiClient, ApiConfig, AuthUser, HttpEmployeeSource, HttpSource, SignInResponse};
pub use session::{Session, SharedSession};
