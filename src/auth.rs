//! Credential and delegation types.
//!
//! `ApiKey` implements a custom Debug to redact the key from logs.

/// A PrintNode API key.
///
/// Sent as HTTP Basic authentication with the raw key in the username slot
/// and no password.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the key is non-empty.
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(\"[REDACTED]\")")
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

/// Per-call request options.
///
/// Carries an optional API key override; when absent, the client-level
/// default from `ClientConfig` applies.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// API key override for this call.
    pub api_key: Option<ApiKey>,
}

impl RequestOptions {
    /// Create empty options (client default key applies).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key override.
    pub fn with_api_key(mut self, key: impl Into<ApiKey>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

/// Child-account delegation context.
///
/// Lets one API credential act on behalf of a child account, selected by id,
/// email, or creator reference. The selector is fixed at client construction
/// and signaled via a dedicated header on every request the client issues.
/// Exactly one selector exists per context; an unknown mode is
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelegatedAccount {
    /// Select the child account by numeric account id.
    ById(String),
    /// Select the child account by account email.
    ByEmail(String),
    /// Select the child account by creator reference.
    ByCreatorRef(String),
}

impl DelegatedAccount {
    /// Delegate by account id.
    pub fn by_id(id: impl Into<String>) -> Self {
        Self::ById(id.into())
    }

    /// Delegate by account email.
    pub fn by_email(email: impl Into<String>) -> Self {
        Self::ByEmail(email.into())
    }

    /// Delegate by creator reference.
    pub fn by_creator_ref(creator_ref: impl Into<String>) -> Self {
        Self::ByCreatorRef(creator_ref.into())
    }

    /// The request header name selecting this delegation mode.
    pub fn header_name(&self) -> &'static str {
        match self {
            Self::ById(_) => "X-Child-Account-By-Id",
            Self::ByEmail(_) => "X-Child-Account-By-Email",
            Self::ByCreatorRef(_) => "X-Child-Account-By-CreatorRef",
        }
    }

    /// The selector value sent in the header.
    pub fn value(&self) -> &str {
        match self {
            Self::ById(v) | Self::ByEmail(v) | Self::ByCreatorRef(v) => v,
        }
    }
}
