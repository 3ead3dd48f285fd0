//! # Webs HTTP Client
//!
//! A small HTTP client configured through a builder: connect and response
//! timeouts, idle connection pooling and default headers, with convenience
//! verbs, JSON/XML request bodies and fully buffered responses.
//!
//! ## Features
//!
//! - **Builder**: timeouts and pool size resolved once at build time
//! - **Default Headers**: merged additively with per-call headers
//! - **Body Encoding**: JSON or XML chosen from the `Content-Type` header
//! - **Lazy Transport**: the connection pool is built on first use, exactly once
//! - **Mock Registry**: canned responses keyed by method, URL and body
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use webs_client::{Client, HeaderMap, Requester};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder().build();
//!
//!     let response = client
//!         .get("https://api.example.com/users", &HeaderMap::new())
//!         .await?;
//!
//!     println!("Status: {}", response.status());
//!     Ok(())
//! }
//! ```
//!
//! ## With Timeouts and a JSON Body
//!
//! ```rust,no_run
//! use webs_client::{header, Client, HeaderMap, HeaderValue, Requester};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut headers = HeaderMap::new();
//!     headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
//!
//!     let client = Client::builder()
//!         .headers(headers)
//!         .connect_timeout(Duration::from_secs(3))
//!         .response_timeout(Duration::from_secs(10))
//!         .max_idle_connections_per_host(8)
//!         .build();
//!
//!     let response = client
//!         .post(
//!             "https://api.example.com/orders",
//!             &HeaderMap::new(),
//!             &serde_json::json!({"item": "widget", "quantity": 5}),
//!         )
//!         .await?;
//!
//!     let order: serde_json::Value = response.json()?;
//!     println!("{order}");
//!     Ok(())
//! }
//! ```

mod body;
mod client;
mod config;
mod error;
mod headers;
mod mock;
mod requester;
mod response;
mod transport;

pub use body::{BodyFormat, CONTENT_TYPE_JSON, CONTENT_TYPE_XML, encode_body};
pub use client::Client;
pub use config::{
    ClientBuilder, ClientConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_MAX_IDLE_CONNS_PER_HOST,
    DEFAULT_RESPONSE_TIMEOUT,
};
pub use error::{Result, WebsError};
pub use headers::{add_headers, merge_headers};
pub use mock::{Mock, MockRegistry};
pub use requester::Requester;
pub use response::Response;

// Re-export common types
pub use bytes::Bytes;
pub use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
pub use url::Url;

/// Prelude for common imports.
///
/// ```
/// use webs_client::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::Client;
    pub use crate::config::{ClientBuilder, ClientConfig};
    pub use crate::error::{Result, WebsError};
    pub use crate::mock::{Mock, MockRegistry};
    pub use crate::requester::Requester;
    pub use crate::response::Response;
    pub use http::{HeaderMap, HeaderValue, Method, StatusCode, header};
}
