//! Lazily constructed reqwest transport.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use tracing::trace;

use crate::{ClientConfig, Result, WebsError};

/// Connection pool built on first use and shared afterwards.
pub(crate) struct LazyTransport {
    slot: Mutex<Option<reqwest::Client>>,
    builds: AtomicUsize,
}

impl LazyTransport {
    pub(crate) fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            builds: AtomicUsize::new(0),
        }
    }

    /// Return the transport, building it under the lock if needed.
    ///
    /// A failed build leaves the slot empty so the next call tries again.
    pub(crate) fn get_or_build(&self, config: &ClientConfig) -> Result<reqwest::Client> {
        let mut slot = self.slot.lock();
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }

        let client = build_transport(config)?;
        self.builds.fetch_add(1, Ordering::SeqCst);
        *slot = Some(client.clone());
        Ok(client)
    }

    /// Number of transports constructed so far.
    pub(crate) fn builds(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }
}

fn build_transport(config: &ClientConfig) -> Result<reqwest::Client> {
    trace!(
        connect_timeout = ?config.connect_timeout,
        max_idle_per_host = config.max_idle_conns_per_host,
        "Building HTTP transport"
    );

    let mut builder =
        reqwest::Client::builder().pool_max_idle_per_host(config.max_idle_conns_per_host);

    if !config.connect_timeout.is_zero() {
        builder = builder.connect_timeout(config.connect_timeout);
    }

    builder.build().map_err(WebsError::Transport)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_builds_once() {
        let transport = LazyTransport::new();
        let config = ClientConfig::default();
        assert_eq!(transport.builds(), 0);

        transport.get_or_build(&config).unwrap();
        transport.get_or_build(&config).unwrap();

        assert_eq!(transport.builds(), 1);
    }

    #[test]
    fn test_builds_with_timeouts() {
        let transport = LazyTransport::new();
        let config = ClientConfig {
            connect_timeout: Duration::from_millis(250),
            max_idle_conns_per_host: 4,
            ..ClientConfig::default()
        };

        assert!(transport.get_or_build(&config).is_ok());
        assert_eq!(transport.builds(), 1);
    }
}
