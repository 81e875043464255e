//! HTTP request building.

use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;

use crate::error::Result;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Patch => reqwest::Method::PATCH,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Builder for an outgoing request.
///
/// The builder is an owned value: authentication and headers are carried on
/// the request itself, never written to shared transport state, so concurrent
/// calls with different credentials cannot interfere with each other.
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Option<serde_json::Value>,
    pub(crate) basic_auth: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl std::fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &self.headers)
            .field("basic_auth", &self.basic_auth.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
            basic_auth: None,
            timeout: None,
        }
    }

    /// Set the API key sent as Basic authentication.
    pub fn basic_auth(mut self, api_key: impl Into<String>) -> Self {
        self.basic_auth = Some(api_key.into());
        self
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add a set of headers.
    pub fn headers<'a>(mut self, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        for (name, value) in pairs {
            self.headers.insert(name.to_string(), value.to_string());
        }
        self
    }

    /// Set a JSON body.
    ///
    /// Null-valued fields are omitted from the serialized payload. The API
    /// can treat an omitted field differently from an explicit null, so the
    /// wire format always omits.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        let value = strip_nulls(serde_json::to_value(body)?);
        self.body = Some(value);
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        Ok(self)
    }

    /// Set a per-request timeout, overriding the client-level default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Drop null-valued fields from JSON objects, recursively.
pub(crate) fn strip_nulls(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(map) => serde_json::Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.into_iter().map(strip_nulls).collect())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_builder() {
        let req = RequestBuilder::new(RequestMethod::Get, "https://example.com/printers")
            .basic_auth("key123")
            .header("X-Custom", "value");

        assert_eq!(req.method, RequestMethod::Get);
        assert_eq!(req.url, "https://example.com/printers");
        assert_eq!(req.basic_auth, Some("key123".to_string()));
        assert_eq!(req.headers.get("X-Custom"), Some(&"value".to_string()));
    }

    #[test]
    fn test_headers_from_pairs() {
        let req = RequestBuilder::new(RequestMethod::Delete, "https://example.com")
            .headers([("X-One", "1"), ("X-Two", "2")]);

        assert_eq!(req.headers.get("X-One"), Some(&"1".to_string()));
        assert_eq!(req.headers.get("X-Two"), Some(&"2".to_string()));
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let req = RequestBuilder::new(RequestMethod::Post, "https://example.com")
            .json(&json!({"title": "job"}))
            .unwrap();

        assert!(req.body.is_some());
        assert_eq!(
            req.headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_json_body_omits_null_fields() {
        #[derive(Serialize)]
        struct PrintJob {
            title: String,
            source: Option<String>,
            expire_after: Option<u64>,
        }

        let req = RequestBuilder::new(RequestMethod::Post, "https://example.com")
            .json(&PrintJob {
                title: "invoice".to_string(),
                source: None,
                expire_after: None,
            })
            .unwrap();

        let body = req.body.unwrap();
        let serialized = serde_json::to_string(&body).unwrap();
        assert!(!serialized.contains("source"));
        assert!(!serialized.contains("expire_after"));
        assert!(serialized.contains("invoice"));
    }

    #[test]
    fn test_strip_nulls_is_recursive() {
        let stripped = strip_nulls(json!({
            "a": null,
            "b": {"c": null, "d": 1},
            "e": [{"f": null, "g": 2}, null]
        }));

        // Nested objects lose null keys; array elements are visited too.
        // A literal null array element is a value, not a field, and stays.
        assert_eq!(stripped, json!({"b": {"d": 1}, "e": [{"g": 2}, null]}));
    }

    #[test]
    fn test_strip_nulls_leaves_scalars_alone() {
        assert_eq!(strip_nulls(json!(7)), json!(7));
        assert_eq!(strip_nulls(json!("text")), json!("text"));
        assert_eq!(strip_nulls(json!(false)), json!(false));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let req = RequestBuilder::new(RequestMethod::Get, "https://example.com")
            .basic_auth("secret-key");
        let debug = format!("{:?}", req);
        assert!(!debug.contains("secret-key"));
    }
}
