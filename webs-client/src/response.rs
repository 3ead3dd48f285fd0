//! HTTP response wrapper.

use std::borrow::Cow;

use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::{Result, WebsError};

/// Fully read HTTP response.
///
/// The body is drained before the value is handed out, so the connection is
/// already back in the pool by the time callers see it.
#[derive(Debug, Clone)]
pub struct Response {
    status: String,
    status_code: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    /// Create a response snapshot from its parts.
    pub fn new(status_code: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status: status_line(status_code),
            status_code,
            headers,
            body: body.into(),
        }
    }

    /// Drain a reqwest response into a snapshot.
    pub(crate) async fn from_reqwest(response: reqwest::Response) -> Result<Self> {
        let status_code = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(WebsError::ReadBody)?;

        Ok(Self::new(status_code, headers, body))
    }

    /// Status line, e.g. `200 OK`.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Numeric status code.
    pub fn status_code(&self) -> u16 {
        self.status_code.as_u16()
    }

    /// Check if the response was successful (2xx).
    pub fn is_success(&self) -> bool {
        self.status_code.is_success()
    }

    /// Get the response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get a specific header value.
    pub fn header(&self, name: impl AsRef<str>) -> Option<&str> {
        self.headers
            .get(name.as_ref())
            .and_then(|v| v.to_str().ok())
    }

    /// Get the response body as bytes.
    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// Get the response body as text. Invalid UTF-8 sequences are replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Decode the JSON body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
