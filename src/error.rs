//! Error types for printnode-client.

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if no API key could be resolved for a call.
    pub fn is_missing_credentials(&self) -> bool {
        matches!(self.kind, ErrorKind::MissingCredentials)
    }

    /// Returns true if this is a non-success API response.
    pub fn is_api_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Api { .. })
    }

    /// Returns the HTTP status code for API error responses.
    pub fn status(&self) -> Option<u16> {
        match self.kind {
            ErrorKind::Api { status, .. } => Some(status),
            _ => None,
        }
    }

    /// Returns the response body for API error responses.
    pub fn response_body(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// No API key resolvable from per-call options or client configuration.
    /// Raised before any network I/O.
    #[error("PrintNode API key not set; provide one via ClientConfig or RequestOptions")]
    MissingCredentials,

    /// Non-success (non-2xx) API response. Uniform across GET, POST, PATCH,
    /// and DELETE; carries the full response for caller inspection.
    #[error("API error: HTTP {status}")]
    Api {
        status: u16,
        headers: Vec<(String, String)>,
        body: String,
    },

    /// Request timeout.
    #[error("Request timeout")]
    Timeout,

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_decode() {
            ErrorKind::Json(err.to_string())
        } else {
            ErrorKind::Other(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}
