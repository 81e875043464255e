//! Client configuration.

use std::time::Duration;

use crate::auth::ApiKey;

/// Configuration for the PrintNode client.
///
/// The default API key is fixed here at construction time and read-only for
/// the life of the client; per-call `RequestOptions` can override it.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Default API key applied when a call carries no override.
    pub api_key: Option<ApiKey>,
    /// API origin. Defaults to the production PrintNode origin; overridable
    /// for pointing at a test server.
    pub base_uri: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Pool idle timeout.
    pub pool_idle_timeout: Duration,
    /// Maximum idle connections per host.
    pub pool_max_idle_per_host: usize,
    /// User-Agent header value.
    pub user_agent: String,
    /// Whether to enable request/response tracing.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_uri: crate::BASE_URI.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            pool_idle_timeout: Duration::from_secs(90),
            pool_max_idle_per_host: 10,
            user_agent: crate::USER_AGENT.to_string(),
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the default API key.
    pub fn with_api_key(mut self, key: impl Into<ApiKey>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the API origin.
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.config.base_uri = base_uri.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set pool idle timeout.
    pub fn with_pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.config.pool_idle_timeout = timeout;
        self
    }

    /// Set maximum idle connections per host.
    pub fn with_pool_max_idle(mut self, max: usize) -> Self {
        self.config.pool_max_idle_per_host = max;
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enable or disable request/response tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.base_uri, "https://api.printnode.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.contains("printnode-client"));
        assert!(config.enable_tracing);
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::builder()
            .with_api_key("default-key")
            .with_base_uri("http://localhost:9100")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("custom-agent/1.0")
            .with_tracing(false)
            .build();

        assert_eq!(config.api_key.unwrap().as_str(), "default-key");
        assert_eq!(config.base_uri, "http://localhost:9100");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "custom-agent/1.0");
        assert!(!config.enable_tracing);
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = ClientConfig::builder().with_api_key("secret").build();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
    }
}
