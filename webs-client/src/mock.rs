//! Request fixtures for tests.
//!
//! A [`MockRegistry`] maps a (method, URL, request body) triple to a canned
//! response or error. Registries are plain values: create one per test and
//! hand it to whatever needs it. The registry is not wired into [`Client`];
//! code under test looks fixtures up explicitly.
//!
//! ```
//! use webs_client::{Method, Mock, MockRegistry};
//!
//! let registry = MockRegistry::new();
//! registry.start();
//! registry.add_mock(Mock::new(Method::GET, "https://api.example.com/users").respond_with(200, "[]"));
//!
//! let mock = registry.lookup(&Method::GET, "https://api.example.com/users", "").unwrap();
//! assert_eq!(mock.response().unwrap().text(), "[]");
//! ```
//!
//! [`Client`]: crate::Client

use std::collections::HashMap;

use http::{HeaderMap, Method, StatusCode};
use parking_lot::Mutex;
use tracing::debug;

use crate::{Response, Result, WebsError};

/// Canned response or error for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mock {
    /// Request method to match.
    pub method: Method,
    /// Request URL to match.
    pub url: String,
    /// Request body to match.
    pub request_body: String,
    /// Error returned instead of a response.
    pub error: Option<String>,
    /// Response body.
    pub response_body: String,
    /// Response status code.
    pub response_status: u16,
}

impl Mock {
    /// Create a fixture for `method` and `url` with an empty request body,
    /// answering `200` with an empty body.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            request_body: String::new(),
            error: None,
            response_body: String::new(),
            response_status: 200,
        }
    }

    /// Match on this request body.
    pub fn request_body(mut self, body: impl Into<String>) -> Self {
        self.request_body = body.into();
        self
    }

    /// Answer with `status` and `body`.
    pub fn respond_with(mut self, status: u16, body: impl Into<String>) -> Self {
        self.response_status = status;
        self.response_body = body.into();
        self
    }

    /// Fail with `message` instead of answering.
    pub fn fail_with(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Turn the fixture into the result a real request would produce.
    pub fn response(&self) -> Result<Response> {
        if let Some(message) = &self.error {
            return Err(WebsError::Mock(message.clone()));
        }

        let status = StatusCode::from_u16(self.response_status)
            .map_err(|e| WebsError::Mock(e.to_string()))?;
        Ok(Response::new(
            status,
            HeaderMap::new(),
            self.response_body.clone(),
        ))
    }

    fn not_found(method: &Method, url: &str, body: &str) -> Self {
        Self::new(method.clone(), url)
            .request_body(body)
            .fail_with(format!("mock not found for {method} {url} {body}"))
    }

    fn key(&self) -> MockKey {
        MockKey {
            method: self.method.clone(),
            url: self.url.clone(),
            body: self.request_body.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MockKey {
    method: Method,
    url: String,
    body: String,
}

#[derive(Debug, Default)]
struct RegistryState {
    enabled: bool,
    mocks: HashMap<MockKey, Mock>,
}

/// Lock-guarded table of request fixtures.
///
/// Lookups only hit while the registry is started.
#[derive(Debug, Default)]
pub struct MockRegistry {
    state: Mutex<RegistryState>,
}

impl MockRegistry {
    /// Create a stopped, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable lookups.
    pub fn start(&self) {
        self.state.lock().enabled = true;
        debug!("Mock registry started");
    }

    /// Disable lookups. Registered fixtures are kept.
    pub fn stop(&self) {
        self.state.lock().enabled = false;
        debug!("Mock registry stopped");
    }

    /// Check if lookups are enabled.
    pub fn is_enabled(&self) -> bool {
        self.state.lock().enabled
    }

    /// Register a fixture, replacing any previous one for the same request.
    pub fn add_mock(&self, mock: Mock) {
        let key = mock.key();
        self.state.lock().mocks.insert(key, mock);
    }

    /// Find the fixture for a request.
    ///
    /// Returns `None` while the registry is stopped. While started, a
    /// request without a fixture yields a fixture carrying a "mock not
    /// found" error.
    pub fn lookup(&self, method: &Method, url: &str, body: &str) -> Option<Mock> {
        let state = self.state.lock();
        if !state.enabled {
            return None;
        }

        let key = MockKey {
            method: method.clone(),
            url: url.to_string(),
            body: body.to_string(),
        };

        match state.mocks.get(&key) {
            Some(mock) => Some(mock.clone()),
            None => {
                debug!(%method, url, "No mock registered for request");
                Some(Mock::not_found(method, url, body))
            }
        }
    }

    /// Remove all fixtures.
    pub fn clear(&self) {
        self.state.lock().mocks.clear();
    }

    /// Number of registered fixtures.
    pub fn len(&self) -> usize {
        self.state.lock().mocks.len()
    }

    /// Check if no fixtures are registered.
    pub fn is_empty(&self) -> bool {
        self.state.lock().mocks.is_empty()
    }
}
