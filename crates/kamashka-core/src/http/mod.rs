//! HTTP Layer - Transport Seam
//!
//! Requests and responses are plain data so that every call leaving the
//! process goes through one trait method and can be observed in tests.

mod reqwest_transport;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::models::Attachment;

pub use reqwest_transport::ReqwestTransport;

/// Header carrying the anti-forgery token on mutating calls
pub const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One part of a multipart body
#[derive(Debug, Clone, PartialEq)]
pub enum MultipartField {
    Text { name: String, value: String },
    File { name: String, attachment: Attachment },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(Vec<MultipartField>),
}

/// A request relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path starting with `/`, e.g. `/blog-posts/`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    /// Send cookies along (the token endpoint sets the session cookie)
    pub credentials: bool,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: vec![("Accept".to_string(), "application/json".to_string())],
            credentials: false,
            body: RequestBody::Empty,
        }
    }

    pub fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query = pairs;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_credentials(mut self) -> Self {
        self.credentials = true;
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn multipart(mut self, fields: Vec<MultipartField>) -> Self {
        self.body = RequestBody::Multipart(fields);
        self
    }

    /// Value of the first header with this name (case-insensitive)
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status plus raw text body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON, whatever the status
    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Fail with a classified error unless the status is 2xx
    pub fn error_for_status(self) -> ApiResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::from_response(self.status, &self.body))
        }
    }
}

/// The only way requests leave the process.
///
/// Futures are not `Send`: everything runs on the browser's single event loop.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let req = ApiRequest::get("/csrf-token/").with_credentials();
        assert_eq!(req.method, Method::Get);
        assert!(req.credentials);
        assert_eq!(req.header_value("accept"), Some("application/json"));
        assert_eq!(req.body, RequestBody::Empty);
    }

    #[test]
    fn test_error_for_status() {
        assert!(ApiResponse::new(201, "{}").error_for_status().is_ok());
        let err =
            ApiResponse::new(404, r#"{"detail":"Not found."}"#).error_for_status().unwrap_err();
        assert_eq!(err.user_message(), "Not found.");
    }
}
