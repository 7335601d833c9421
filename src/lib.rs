//! Employee directory core: API client, data models and the form/list state
//! the desktop UI renders.

pub mod api;
pub mod config;
pub mod models;
pub mod panel;
pub mod validation;

pub use api::{ApiClient, ApiError, ApiResult, EmployeeApi};
pub use config::AppConfig;
pub use models::{Banner, Department, EmployeeRecord, Field, FormDraft, FormMode, MessageResponse};
pub use panel::{EmployeePanel, Mutation, ReloadTicket, SubmitBlocked};
pub use validation::{ValidationErrors, Violation};
