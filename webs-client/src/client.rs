//! HTTP client implementation.

use std::sync::Arc;

use async_trait::async_trait;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, Method};
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::body::encode_body;
use crate::headers::merge_headers;
use crate::transport::LazyTransport;
use crate::{ClientBuilder, ClientConfig, Requester, Response, Result, WebsError};

/// HTTP client with frozen configuration and a lazily built connection pool.
///
/// Cloning is cheap; clones share the configuration and the pool.
#[derive(Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    transport: Arc<LazyTransport>,
}

impl Client {
    /// Create a client from a resolved configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(LazyTransport::new()),
        }
    }

    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the underlying reqwest client, building it on first use.
    pub fn transport(&self) -> Result<reqwest::Client> {
        self.transport.get_or_build(&self.config)
    }

    /// Number of transports this client has constructed.
    pub(crate) fn transport_builds(&self) -> usize {
        self.transport.builds()
    }

    /// Send the request, bounding the wait for response headers.
    async fn dispatch(
        &self,
        transport: &reqwest::Client,
        request: reqwest::Request,
    ) -> Result<reqwest::Response> {
        let timeout = self.config.response_timeout;
        if timeout.is_zero() {
            return Ok(transport.execute(request).await?);
        }

        match tokio::time::timeout(timeout, transport.execute(request)).await {
            Ok(response) => Ok(response?),
            Err(_) => Err(WebsError::Timeout(timeout)),
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .field("transport_builds", &self.transport.builds())
            .finish()
    }
}

#[async_trait]
impl Requester for Client {
    async fn execute_request<B>(
        &self,
        method: Method,
        url: &str,
        headers: &HeaderMap,
        body: Option<&B>,
    ) -> Result<Response>
    where
        B: Serialize + ?Sized + Sync,
    {
        let headers = merge_headers(&self.config.default_headers, headers);

        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        let body = encode_body(content_type, body)?;

        let parsed =
            Url::parse(url).map_err(|e| WebsError::RequestBuild(format!("{url}: {e}")))?;

        let mut request = reqwest::Request::new(method, parsed);
        *request.headers_mut() = headers;
        if let Some(body) = body {
            *request.body_mut() = Some(body.into());
        }

        let transport = self.transport()?;

        debug!(
            method = %request.method(),
            url = %request.url(),
            "Sending HTTP request"
        );

        let response = self.dispatch(&transport, request).await?;
        let response = Response::from_reqwest(response).await?;

        debug!(
            status = response.status_code(),
            bytes = response.bytes().len(),
            "Received HTTP response"
        );

        Ok(response)
    }
}
