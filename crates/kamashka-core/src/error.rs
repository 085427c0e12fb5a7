//! Error Types
//!
//! `ApiError` covers everything that can go wrong once a request is built;
//! `SubmitBlocked` covers refusals that happen before any network I/O.

use serde_json::Value;
use thiserror::Error;

/// Common result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Message shown when a mutating call is attempted without a usable token
pub const TOKEN_REFRESH_MESSAGE: &str = "Security issue: Please refresh the page and try again.";

/// Errors raised by the transport or while interpreting a response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// DNS failure, refused connection, CORS rejection...
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Request timed out")]
    Timeout,
    /// Non-success status; `message` is the server's `detail`/`error` text if any
    #[error("Server error: {status}")]
    Status { status: u16, message: Option<String> },
    /// Server-side field validation, flattened into one line
    #[error("{0}")]
    FieldErrors(String),
    #[error("Not found: {0}")]
    NotFound(String),
    /// Body was not valid JSON or did not match the expected item type
    #[error("Invalid response: {0}")]
    Decode(String),
    /// JSON was valid but no usable list could be found in it
    #[error("Invalid data format: {0}")]
    UnexpectedShape(String),
}

impl ApiError {
    /// Classify a non-success response body.
    ///
    /// Preference order: `detail`, `error`, a field → message(s) map, then a
    /// generic status message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let value = match serde_json::from_str::<Value>(body) {
            Ok(value) => value,
            Err(_) => return ApiError::Status { status, message: None },
        };

        if let Some(message) =
            string_member(&value, "detail").or_else(|| string_member(&value, "error"))
        {
            return ApiError::Status { status, message: Some(message) };
        }

        match flatten_field_errors(&value) {
            Some(joined) => ApiError::FieldErrors(joined),
            None => ApiError::Status { status, message: None },
        }
    }

    /// Text the server itself provided, if any
    pub fn server_message(&self) -> Option<String> {
        match self {
            ApiError::Status { message: Some(msg), .. } | ApiError::FieldErrors(msg) => {
                Some(msg.clone())
            }
            _ => None,
        }
    }

    /// Message shown above a form after a failed submission.
    ///
    /// Server text first, then `Server error: <status>` for a bare non-2xx
    /// reply; `fallback` covers transport, timeout and decode failures.
    pub fn submit_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { status, message: None } if !(200..300).contains(status) => {
                self.user_message()
            }
            _ => self.server_message().unwrap_or_else(|| fallback.to_string()),
        }
    }

    /// Text rendered in place of the failed content or above the form
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => {
                "Failed to reach the server. Please try again later.".to_string()
            }
            ApiError::Timeout => {
                "The server took too long to respond. Please try again later.".to_string()
            }
            ApiError::Status { message: Some(msg), .. } => msg.clone(),
            ApiError::Status { status, message: None } => format!("Server error: {}", status),
            ApiError::FieldErrors(msg) => msg.clone(),
            ApiError::NotFound(msg) => msg.clone(),
            ApiError::Decode(_) => "Received an unexpected response from the server.".to_string(),
            ApiError::UnexpectedShape(msg) => format!("Invalid data format: {}", msg),
        }
    }
}

fn string_member(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Join every message of a `{"field": ["msg", ...], "other": "msg"}` map with spaces.
fn flatten_field_errors(value: &Value) -> Option<String> {
    let map = value.as_object()?;
    let mut messages = Vec::new();
    for entry in map.values() {
        match entry {
            Value::String(s) => messages.push(s.clone()),
            Value::Array(items) => {
                messages.extend(items.iter().filter_map(Value::as_str).map(str::to_string))
            }
            _ => {}
        }
    }
    let joined = messages.join(" ");
    if joined.trim().is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// Reasons a submission is refused before a request is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    /// Client-side validation failed; errors are on the form state
    #[error("Please correct the highlighted fields.")]
    Invalid,
    #[error("Security issue: Please refresh the page and try again.")]
    MissingToken,
    /// A submission from this form is already outstanding
    #[error("A submission is already in progress.")]
    InFlight,
    #[error("Please complete the previous steps first.")]
    NotOnFinalStep,
    /// The form already succeeded; it is waiting to navigate away
    #[error("This form has already been submitted.")]
    AlreadySubmitted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_preferred() {
        let err = ApiError::from_response(403, r#"{"detail":"CSRF Failed","error":"other"}"#);
        assert_eq!(err, ApiError::Status { status: 403, message: Some("CSRF Failed".into()) });
        assert_eq!(err.user_message(), "CSRF Failed");
    }

    #[test]
    fn test_error_member() {
        let err = ApiError::from_response(500, r#"{"error":"Mail server down"}"#);
        assert_eq!(err.user_message(), "Mail server down");
    }

    #[test]
    fn test_field_map_flattened() {
        let body = r#"{"email":["Enter a valid email address."],"resume":["File too large.","Unsupported type."]}"#;
        let err = ApiError::from_response(400, body);
        assert_eq!(
            err,
            ApiError::FieldErrors(
                "Enter a valid email address. File too large. Unsupported type.".into()
            )
        );
    }

    #[test]
    fn test_unparseable_body_uses_status() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.user_message(), "Server error: 502");
    }

    #[test]
    fn test_submit_message_prefers_status_over_fallback() {
        let bare = ApiError::from_response(503, "");
        assert_eq!(bare.submit_message("generic"), "Server error: 503");

        let ok_without_text = ApiError::Status { status: 200, message: None };
        assert_eq!(ok_without_text.submit_message("generic"), "generic");
        assert_eq!(ApiError::Timeout.submit_message("generic"), "generic");

        let detail = ApiError::from_response(403, r#"{"detail":"CSRF Failed"}"#);
        assert_eq!(detail.submit_message("generic"), "CSRF Failed");
    }

    #[test]
    fn test_missing_token_message() {
        assert_eq!(SubmitBlocked::MissingToken.to_string(), TOKEN_REFRESH_MESSAGE);
    }
}
