//! Client configuration and builder.

use std::time::Duration;

use http::HeaderMap;

use crate::Client;

/// Response timeout used when none is configured. Zero means no timeout.
pub const DEFAULT_RESPONSE_TIMEOUT: Duration = Duration::ZERO;

/// Connect timeout used when none is configured. Zero means no timeout.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::ZERO;

/// Idle connections kept per host when none is configured.
pub const DEFAULT_MAX_IDLE_CONNS_PER_HOST: usize = 1;

/// Resolved, immutable client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Headers sent with every request.
    pub default_headers: HeaderMap,
    /// Connection timeout. Zero disables it.
    pub connect_timeout: Duration,
    /// Time allowed for response headers to arrive. Zero disables it.
    pub response_timeout: Duration,
    /// Maximum idle connections kept per host.
    pub max_idle_conns_per_host: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientBuilder::new().config()
    }
}

/// Builder for [`Client`].
///
/// Setters store raw values; defaults are resolved when the client is
/// built, so the order in which setters are called does not matter.
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    headers: HeaderMap,
    disable_timeouts: bool,
    connect_timeout: Duration,
    response_timeout: Duration,
    max_idle_conns_per_host: usize,
}

impl ClientBuilder {
    /// Create a builder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default headers, replacing any previously set.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Enable or disable timeouts that were not set explicitly.
    pub fn disable_timeouts(mut self, disable: bool) -> Self {
        self.disable_timeouts = disable;
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the response timeout.
    ///
    /// The timer starts when the request is dispatched, so it also covers
    /// connecting; a connect slower than this fails with a timeout even
    /// when the connect timeout is longer. Reading the body is not covered.
    pub fn response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout = timeout;
        self
    }

    /// Set the maximum idle connections kept per host. Zero means unset.
    pub fn max_idle_connections_per_host(mut self, max: usize) -> Self {
        self.max_idle_conns_per_host = max;
        self
    }

    /// Connection timeout the built client will use.
    pub fn resolved_connect_timeout(&self) -> Duration {
        self.resolve_timeout(self.connect_timeout, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Response timeout the built client will use.
    pub fn resolved_response_timeout(&self) -> Duration {
        self.resolve_timeout(self.response_timeout, DEFAULT_RESPONSE_TIMEOUT)
    }

    /// Idle connections per host the built client will keep.
    pub fn resolved_max_idle_conns_per_host(&self) -> usize {
        if self.max_idle_conns_per_host > 0 {
            self.max_idle_conns_per_host
        } else {
            DEFAULT_MAX_IDLE_CONNS_PER_HOST
        }
    }

    // Explicit value, then disabled, then default.
    fn resolve_timeout(&self, explicit: Duration, default: Duration) -> Duration {
        if !explicit.is_zero() {
            explicit
        } else if self.disable_timeouts {
            Duration::ZERO
        } else {
            default
        }
    }

    /// Snapshot the resolved configuration.
    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            default_headers: self.headers.clone(),
            connect_timeout: self.resolved_connect_timeout(),
            response_timeout: self.resolved_response_timeout(),
            max_idle_conns_per_host: self.resolved_max_idle_conns_per_host(),
        }
    }

    /// Build a client from the current settings.
    ///
    /// The client receives a copy of the configuration; later changes to
    /// this builder do not affect it.
    pub fn build(&self) -> Client {
        Client::new(self.config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_default_options() {
        let builder = ClientBuilder::new();

        assert_eq!(builder.resolved_connect_timeout(), DEFAULT_CONNECT_TIMEOUT);
        assert_eq!(builder.resolved_response_timeout(), DEFAULT_RESPONSE_TIMEOUT);
        assert_eq!(
            builder.resolved_max_idle_conns_per_host(),
            DEFAULT_MAX_IDLE_CONNS_PER_HOST
        );

        let config = ClientConfig::default();
        assert_eq!(config.connect_timeout, Duration::ZERO);
        assert_eq!(config.response_timeout, Duration::ZERO);
        assert_eq!(config.max_idle_conns_per_host, 1);
        assert!(config.default_headers.is_empty());
    }

    #[test]
    fn test_explicit_options() {
        let builder = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(3))
            .response_timeout(Duration::from_secs(4))
            .max_idle_connections_per_host(5);

        let config = builder.config();
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
        assert_eq!(config.response_timeout, Duration::from_secs(4));
        assert_eq!(config.max_idle_conns_per_host, 5);
    }

    #[test]
    fn test_custom_headers_replace_previous() {
        let mut first = HeaderMap::new();
        first.insert("x-first", HeaderValue::from_static("1"));
        let mut second = HeaderMap::new();
        second.insert("x-custom-header", HeaderValue::from_static("custom-value"));

        let config = ClientBuilder::new().headers(first).headers(second).config();

        assert_eq!(
            config.default_headers.get("X-Custom-Header").unwrap(),
            "custom-value"
        );
        assert!(config.default_headers.get("x-first").is_none());
    }

    #[test]
    fn test_disabled_timeouts() {
        let builder = ClientBuilder::new().disable_timeouts(true);

        assert_eq!(builder.resolved_connect_timeout(), Duration::ZERO);
        assert_eq!(builder.resolved_response_timeout(), Duration::ZERO);
    }

    #[test]
    fn test_explicit_timeout_wins_over_disable_in_either_order() {
        let disabled_first = ClientBuilder::new()
            .disable_timeouts(true)
            .connect_timeout(Duration::from_secs(2))
            .response_timeout(Duration::from_secs(5));
        let disabled_last = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(2))
            .response_timeout(Duration::from_secs(5))
            .disable_timeouts(true);

        for builder in [disabled_first, disabled_last] {
            assert_eq!(builder.resolved_connect_timeout(), Duration::from_secs(2));
            assert_eq!(builder.resolved_response_timeout(), Duration::from_secs(5));
        }
    }

    #[test]
    fn test_zero_idle_connections_falls_back_to_default() {
        let builder = ClientBuilder::new().max_idle_connections_per_host(0);
        assert_eq!(builder.resolved_max_idle_conns_per_host(), 1);
    }

    #[test]
    fn test_builder_changes_after_build_do_not_leak() {
        let builder = ClientBuilder::new().connect_timeout(Duration::from_secs(1));
        let client = builder.build();

        let builder = builder
            .connect_timeout(Duration::from_secs(9))
            .max_idle_connections_per_host(10);

        assert_eq!(client.config().connect_timeout, Duration::from_secs(1));
        assert_eq!(client.config().max_idle_conns_per_host, 1);
        assert_eq!(builder.build().config().connect_timeout, Duration::from_secs(9));
    }
}
