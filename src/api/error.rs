//! API error types

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Error returned by the employee API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, timeout or other transport failure
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Server returned {status}{}", message_suffix(.message))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    /// Success body did not have the expected shape
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Message supplied by the server in the error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Build a status error from a raw error body, picking up `{ "message": ... }`
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: Option<String>,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.is_empty());

        ApiError::Status { status, message }
    }
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_read_from_json_body() {
        let err = ApiError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Employee ID already exists"}"#,
        );
        assert_eq!(err.server_message(), Some("Employee ID already exists"));
        assert_eq!(
            err.to_string(),
            "Server returned 400 Bad Request: Employee ID already exists"
        );
    }

    #[test]
    fn non_json_body_has_no_server_message() {
        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(err.server_message(), None);
        assert_eq!(err.to_string(), "Server returned 500 Internal Server Error");
    }

    #[test]
    fn empty_message_counts_as_missing() {
        let err = ApiError::from_status(StatusCode::BAD_REQUEST, r#"{"message":""}"#);
        assert_eq!(err.server_message(), None);
    }
}
