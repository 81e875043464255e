//! PrintNode API client.
//!
//! One client instance owns one reusable transport for its lifetime. Headers
//! that never change per call (`Accept-Version`, the optional child-account
//! selector) are baked into the transport at construction; authentication is
//! resolved per call and carried on the outgoing request value, so concurrent
//! calls with different credentials cannot race on shared state.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, instrument};

use crate::auth::{ApiKey, DelegatedAccount, RequestOptions};
use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBuilder, RequestMethod};
use crate::response::Response;

/// Async client for the PrintNode REST API.
///
/// # Example
///
/// ```rust,ignore
/// use printnode_client::{ClientConfig, PrintNodeClient, RequestOptions};
///
/// let config = ClientConfig::builder().with_api_key("my-api-key").build();
/// let client = PrintNodeClient::with_config(config, None)?;
///
/// let printers = client.get("/printers", &RequestOptions::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PrintNodeClient {
    inner: reqwest::Client,
    config: ClientConfig,
    delegated: Option<DelegatedAccount>,
}

impl PrintNodeClient {
    /// Create a client with default configuration and no delegation.
    ///
    /// Every call must then carry its key via `RequestOptions`.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default(), None)
    }

    /// Create a client acting on behalf of a child account.
    pub fn delegated(account: DelegatedAccount) -> Result<Self> {
        Self::with_config(ClientConfig::default(), Some(account))
    }

    /// Create a client with custom configuration and an optional child
    /// account context.
    pub fn with_config(
        config: ClientConfig,
        delegated: Option<DelegatedAccount>,
    ) -> Result<Self> {
        url::Url::parse(&config.base_uri).map_err(|e| {
            Error::with_source(ErrorKind::Config(format!("invalid base URI: {e}")), e)
        })?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::HeaderName::from_static("accept-version"),
            reqwest::header::HeaderValue::from_static(crate::ACCEPT_VERSION),
        );

        if let Some(ref account) = delegated {
            let name = reqwest::header::HeaderName::from_bytes(account.header_name().as_bytes())
                .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;
            let value = reqwest::header::HeaderValue::from_str(account.value()).map_err(|e| {
                Error::with_source(
                    ErrorKind::Config(format!("invalid delegated account value: {e}")),
                    e,
                )
            })?;
            headers.insert(name, value);
        }

        let inner = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            config,
            delegated,
        })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the child account context, if any.
    pub fn delegated_account(&self) -> Option<&DelegatedAccount> {
        self.delegated.as_ref()
    }

    /// Build the full URL for a relative path.
    pub fn url(&self, relative_uri: &str) -> String {
        let base = self.config.base_uri.trim_end_matches('/');
        if relative_uri.starts_with('/') {
            format!("{base}{relative_uri}")
        } else {
            format!("{base}/{relative_uri}")
        }
    }

    // =========================================================================
    // Verbs
    // =========================================================================

    /// GET a resource, returning the raw response body.
    #[instrument(skip(self, options), fields(uri = %relative_uri))]
    pub async fn get(&self, relative_uri: &str, options: &RequestOptions) -> Result<String> {
        let request = self.request(RequestMethod::Get, relative_uri, options)?;
        self.execute(request).await?.text().await
    }

    /// POST a JSON payload, returning the raw response body.
    ///
    /// Null-valued payload fields are omitted from the wire body.
    #[instrument(skip(self, payload, options), fields(uri = %relative_uri))]
    pub async fn post<T: Serialize>(
        &self,
        relative_uri: &str,
        payload: &T,
        options: &RequestOptions,
    ) -> Result<String> {
        let request = self
            .request(RequestMethod::Post, relative_uri, options)?
            .json(payload)?;
        self.execute(request).await?.text().await
    }

    /// PATCH a JSON payload, returning the raw response body.
    ///
    /// `extra_headers` are attached to the outgoing request.
    #[instrument(skip(self, payload, options, extra_headers), fields(uri = %relative_uri))]
    pub async fn patch<T: Serialize>(
        &self,
        relative_uri: &str,
        payload: &T,
        options: &RequestOptions,
        extra_headers: &[(&str, &str)],
    ) -> Result<String> {
        let request = self
            .request(RequestMethod::Patch, relative_uri, options)?
            .json(payload)?
            .headers(extra_headers.iter().copied());
        self.execute(request).await?.text().await
    }

    /// DELETE a resource, returning the raw response body.
    ///
    /// `extra_headers` are attached to the outgoing request.
    #[instrument(skip(self, options, extra_headers), fields(uri = %relative_uri))]
    pub async fn delete(
        &self,
        relative_uri: &str,
        options: &RequestOptions,
        extra_headers: &[(&str, &str)],
    ) -> Result<String> {
        let request = self
            .request(RequestMethod::Delete, relative_uri, options)?
            .headers(extra_headers.iter().copied());
        self.execute(request).await?.text().await
    }

    // =========================================================================
    // Typed JSON conveniences
    // =========================================================================

    /// GET with JSON response deserialization.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        relative_uri: &str,
        options: &RequestOptions,
    ) -> Result<T> {
        let request = self.request(RequestMethod::Get, relative_uri, options)?;
        self.execute(request).await?.json().await
    }

    /// POST with JSON body and JSON response deserialization.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        relative_uri: &str,
        payload: &B,
        options: &RequestOptions,
    ) -> Result<T> {
        let request = self
            .request(RequestMethod::Post, relative_uri, options)?
            .json(payload)?;
        self.execute(request).await?.json().await
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Build an authenticated request for a relative path.
    ///
    /// Fails with `MissingCredentials` before any network I/O when no key
    /// resolves.
    fn request(
        &self,
        method: RequestMethod,
        relative_uri: &str,
        options: &RequestOptions,
    ) -> Result<RequestBuilder> {
        let api_key = self.resolve_api_key(options)?;
        Ok(RequestBuilder::new(method, self.url(relative_uri)).basic_auth(api_key.as_str()))
    }

    /// Resolve the effective API key for a call.
    ///
    /// Per-call options win over the client default; an empty key counts as
    /// absent.
    fn resolve_api_key(&self, options: &RequestOptions) -> Result<ApiKey> {
        options
            .api_key
            .as_ref()
            .filter(|k| k.is_valid())
            .or_else(|| self.config.api_key.as_ref().filter(|k| k.is_valid()))
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::MissingCredentials))
    }

    /// Send a request and classify the response.
    ///
    /// On 2xx the response is returned; any other status becomes
    /// `ErrorKind::Api` carrying status, headers, and body.
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let mut req = self
            .inner
            .request(request.method.to_reqwest(), &request.url);

        // Per-request authentication. PrintNode keys go in the username slot
        // raw, without the "key:" colon form.
        if let Some(ref key) = request.basic_auth {
            let mut value = reqwest::header::HeaderValue::from_str(&format!(
                "Basic {}",
                BASE64.encode(key.as_bytes())
            ))
            .map_err(|e| {
                Error::with_source(ErrorKind::Config(format!("invalid API key: {e}")), e)
            })?;
            value.set_sensitive(true);
            req = req.header(reqwest::header::AUTHORIZATION, value);
        }

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(ref body) = request.body {
            req = req.json(body);
        }

        if let Some(timeout) = request.timeout {
            req = req.timeout(timeout);
        }

        if self.config.enable_tracing {
            debug!(method = ?request.method, url = %request.url, "sending request");
        }

        let response = req.send().await?;

        if self.config.enable_tracing {
            let status = response.status().as_u16();
            if response.status().is_success() {
                debug!(status, "response received");
            } else {
                info!(status, "non-success response");
            }
        }

        Response::new(response).check_api_error().await
    }
}
