//! Client configuration and the shared handle passed to every operation.
//!
//! An [`NpmClient`] bundles the HTTP transport with the [`Endpoints`] it reads
//! from. It holds no mutable state, so one instance can be cloned and used from
//! any number of concurrent tasks.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use npmscrape_core::{ClientConfig, NpmClient, Package};
//!
//! # async fn example() -> npmscrape_core::Result<()> {
//! let config = ClientConfig::builder().timeout(Duration::from_secs(10)).build();
//! let client = NpmClient::with_config(config)?;
//!
//! let deps = Package::new("express").dependencies(&client).await?;
//! for dep in &deps.normal {
//!     println!("{}", dep.name);
//! }
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use reqwest::Client;

use crate::endpoints::Endpoints;
use crate::fetch::Fetcher;
use crate::status::StatusMonitor;
use crate::{NpmError, Result};

/// Default User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; npmscrape/1.0; +https://github.com/stormlightlabs/npmscrape)";

/// Configuration for [`NpmClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Where each resource lives (default: the public npm website).
    pub endpoints: Endpoints,

    /// User-Agent header value.
    pub user_agent: String,

    /// Per-request timeout (default: none, a hung request hangs its call).
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { endpoints: Endpoints::default(), user_agent: DEFAULT_USER_AGENT.to_string(), timeout: None }
    }
}

impl ClientConfig {
    /// Creates a new builder for ClientConfig.
    ///
    /// # Example
    ///
    /// ```rust
    /// use npmscrape_core::{ClientConfig, Endpoints};
    ///
    /// let config = ClientConfig::builder()
    ///     .endpoints(Endpoints::with_root("http://localhost:4873"))
    ///     .user_agent("my-tool/0.1")
    ///     .build();
    /// assert_eq!(config.user_agent, "my-tool/0.1");
    /// ```
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }
}

/// Builder for ClientConfig.
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ClientConfig::default() }
    }

    /// Sets the endpoint registry.
    pub fn endpoints(mut self, value: Endpoints) -> Self {
        self.config.endpoints = value;
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.user_agent = value.into();
        self
    }

    /// Sets a per-request timeout.
    pub fn timeout(mut self, value: Duration) -> Self {
        self.config.timeout = Some(value);
        self
    }

    /// Builds the config.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle used by [`Package`](crate::Package), [`User`](crate::User)
/// and [`StatusMonitor`] operations.
#[derive(Debug, Clone)]
pub struct NpmClient {
    fetcher: Fetcher,
    endpoints: Endpoints,
}

impl NpmClient {
    /// Creates a client with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client from a [`ClientConfig`].
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| NpmError::RemoteUnavailable {
            url: config.endpoints.package.clone(),
            reason: format!("failed to create HTTP client: {e}"),
        })?;

        Ok(Self::with_http_client(client, config.endpoints))
    }

    /// Creates a client around a caller-built transport.
    ///
    /// Use this to add retries, proxies or timeouts at the transport level.
    pub fn with_http_client(client: Client, endpoints: Endpoints) -> Self {
        Self { fetcher: Fetcher::new(client), endpoints }
    }

    /// Gets the endpoint registry.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Gets the fetch primitive.
    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    /// Operations against the registry status page.
    pub fn status(&self) -> StatusMonitor<'_> {
        StatusMonitor::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert!(config.user_agent.contains("npmscrape"));
        assert!(config.timeout.is_none());
        assert_eq!(config.endpoints, Endpoints::default());
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::builder()
            .timeout(Duration::from_secs(5))
            .endpoints(Endpoints::with_root("http://mirror.local"))
            .build();
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.endpoints.package, "http://mirror.local/package/");
    }

    #[test]
    fn test_client_keeps_endpoints() {
        let client = NpmClient::with_config(ClientConfig::default()).unwrap();
        assert_eq!(client.endpoints().user, "https://www.npmjs.com/~");
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<NpmClient>();
    }
}
