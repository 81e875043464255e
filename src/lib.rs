//! # printnode-client
//!
//! Async client for the [PrintNode](https://www.printnode.com) REST API.
//!
//! The client owns one reusable HTTP transport, attaches the API version and
//! optional child-account delegation headers at construction, resolves the
//! API key per call, and maps every non-success response into a single
//! structured error carrying status, headers, and body.
//!
//! ## Example
//!
//! ```rust,ignore
//! use printnode_client::{ClientConfig, PrintNodeClient, RequestOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), printnode_client::Error> {
//!     let config = ClientConfig::builder()
//!         .with_api_key("my-api-key")
//!         .build();
//!     let client = PrintNodeClient::with_config(config, None)?;
//!
//!     // Raw body, caller-side deserialization
//!     let printers = client.get("/printers", &RequestOptions::default()).await?;
//!
//!     // Typed convenience
//!     let whoami: serde_json::Value = client
//!         .get_json("/whoami", &RequestOptions::default())
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! One `PrintNodeClient` is safe to share across concurrent callers:
//! authentication is computed per call and carried on the outgoing request
//! value, never written to shared transport state.

mod auth;
mod client;
mod config;
mod error;
mod request;
mod response;

pub use auth::{ApiKey, DelegatedAccount, RequestOptions};
pub use client::PrintNodeClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBuilder, RequestMethod};
pub use response::Response;

/// PrintNode API origin.
pub const BASE_URI: &str = "https://api.printnode.com";

/// API version negotiated via the `Accept-Version` header on every request.
pub const ACCEPT_VERSION: &str = "~3";

/// User-Agent string for the client.
pub const USER_AGENT: &str = concat!("printnode-client/", env!("CARGO_PKG_VERSION"));
