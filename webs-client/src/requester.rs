//! Request execution interface.

use async_trait::async_trait;
use http::{HeaderMap, Method};
use serde::Serialize;

use crate::{Response, Result};

/// Executes HTTP requests.
///
/// Implementors provide [`execute_request`](Requester::execute_request);
/// the verb helpers are built on top of it.
#[async_trait]
pub trait Requester: Send + Sync {
    /// Send a request and read the whole response.
    ///
    /// `headers` are added to the implementor's default headers, and `body`
    /// is encoded according to the resulting `Content-Type`.
    async fn execute_request<B>(
        &self,
        method: Method,
        url: &str,
        headers: &HeaderMap,
        body: Option<&B>,
    ) -> Result<Response>
    where
        B: Serialize + ?Sized + Sync;

    /// Send a prebuilt request.
    ///
    /// Only the method, URI and headers are used. The request's own body is
    /// dropped and never sent; use the verb methods to send a body.
    async fn send<T>(&self, request: http::Request<T>) -> Result<Response>
    where
        T: Send,
    {
        let (parts, _) = request.into_parts();
        let url = parts.uri.to_string();
        self.execute_request(parts.method, &url, &parts.headers, None::<&()>)
            .await
    }

    /// Send a GET request.
    async fn get(&self, url: &str, headers: &HeaderMap) -> Result<Response> {
        self.execute_request(Method::GET, url, headers, None::<&()>)
            .await
    }

    /// Send a POST request with an encoded body.
    async fn post<B>(&self, url: &str, headers: &HeaderMap, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.execute_request(Method::POST, url, headers, Some(body))
            .await
    }

    /// Send a PUT request with an encoded body.
    async fn put<B>(&self, url: &str, headers: &HeaderMap, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.execute_request(Method::PUT, url, headers, Some(body))
            .await
    }

    /// Send a PATCH request with an encoded body.
    async fn patch<B>(&self, url: &str, headers: &HeaderMap, body: &B) -> Result<Response>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.execute_request(Method::PATCH, url, headers, Some(body))
            .await
    }

    /// Send a DELETE request.
    async fn delete(&self, url: &str, headers: &HeaderMap) -> Result<Response> {
        self.execute_request(Method::DELETE, url, headers, None::<&()>)
            .await
    }
}
