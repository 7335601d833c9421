//! API client for the employee REST backend

mod error;

pub use error::{ApiError, ApiResult};

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::AppConfig;
use crate::models::{EmployeeRecord, MessageResponse};

pub const LIST_PATH: &str = "/get-employees";
pub const ADD_PATH: &str = "/add-employee";
pub const UPDATE_PATH: &str = "/update-employee";
pub const DELETE_PATH: &str = "/delete-employee";

/// The four calls the employee panel depends on.
///
/// Implementations block; the UI runs them on a background executor.
pub trait EmployeeApi: Send + Sync {
    fn list_employees(&self) -> ApiResult<Vec<EmployeeRecord>>;

    fn add_employee(&self, record: &EmployeeRecord) -> ApiResult<MessageResponse>;

    fn update_employee(
        &self,
        employee_id: &str,
        record: &EmployeeRecord,
    ) -> ApiResult<MessageResponse>;

    fn delete_employee(&self, employee_id: &str) -> ApiResult<MessageResponse>;
}

/// Path of a per-employee endpoint, with the identifier percent-encoded
pub fn employee_path(prefix: &str, employee_id: &str) -> String {
    format!("{}/{}", prefix, urlencoding::encode(employee_id))
}

/// Decode a list snapshot row by row; a row that is not an employee object is skipped
fn decode_rows(rows: Vec<Value>) -> Vec<EmployeeRecord> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping employee row that did not decode");
                None
            }
        })
        .collect()
}

/// Blocking HTTP client for the employee backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> ApiResult<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send<T: DeserializeOwned>(&self, method: &str, path: &str, request: RequestBuilder) -> ApiResult<T> {
        tracing::debug!(method, path, "employee api request");

        let response = request.send().map_err(|e| {
            tracing::warn!(method, path, error = %e, "employee api request failed");
            ApiError::from(e)
        })?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            let err = ApiError::from_status(status, &body);
            tracing::warn!(method, path, %status, error = %err, "employee api returned error");
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(method, path, error = %e, "employee api response did not decode");
            ApiError::from(e)
        })
    }
}

impl EmployeeApi for ApiClient {
    fn list_employees(&self) -> ApiResult<Vec<EmployeeRecord>> {
        let rows: Vec<Value> = self.send("GET", LIST_PATH, self.client.get(self.url(LIST_PATH)))?;
        Ok(decode_rows(rows))
    }

    fn add_employee(&self, record: &EmployeeRecord) -> ApiResult<MessageResponse> {
        self.send("POST", ADD_PATH, self.client.post(self.url(ADD_PATH)).json(record))
    }

    fn update_employee(
        &self,
        employee_id: &str,
        record: &EmployeeRecord,
    ) -> ApiResult<MessageResponse> {
        let path = employee_path(UPDATE_PATH, employee_id);
        self.send("PUT", &path, self.client.put(self.url(&path)).json(record))
    }

    fn delete_employee(&self, employee_id: &str) -> ApiResult<MessageResponse> {
        let path = employee_path(DELETE_PATH, employee_id);
        self.send("DELETE", &path, self.client.delete(self.url(&path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Department;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn employee_path_encodes_identifier() {
        assert_eq!(employee_path(UPDATE_PATH, "E123"), "/update-employee/E123");
        assert_eq!(
            employee_path(DELETE_PATH, "A/B 1"),
            "/delete-employee/A%2FB%201"
        );
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let config = AppConfig {
            api_base_url: "http://localhost:5001/".into(),
            request_timeout: Duration::from_secs(1),
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.get_base_url(), "http://localhost:5001");
        assert_eq!(client.url(LIST_PATH), "http://localhost:5001/get-employees");
    }

    #[test]
    fn off_contract_rows_do_not_hide_the_rest() {
        let rows = vec![
            json!({
                "name": "Ada",
                "employee_id": "E1",
                "email": "e1@example.com",
                "phone_number": "5551234567",
                "department": "HR",
                "date_of_joining": "2021-03-04",
                "role": "Recruiter"
            }),
            json!({
                "name": "Bob",
                "employee_id": "E2",
                "phone_number": 5551234567u64,
                "department": "Finance",
                "date_of_joining": null,
                "role": "Accountant"
            }),
            json!("not an employee"),
        ];

        let records = decode_rows(rows);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].department, Department::Hr);
        assert_eq!(records[1].employee_id, "E2");
        assert_eq!(records[1].department, Department::Other("Finance".into()));
        assert_eq!(records[1].date_of_joining, None);
        assert_eq!(records[1].email, "");
    }
}
