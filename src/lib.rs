//! # Newsletter2Go Client
//!
//! A client library for the Newsletter2Go email marketing REST API.
//!
//! The client authenticates with the account's auth key and credentials,
//! caches the issued tokens, injects them as bearer on every request and
//! transparently recovers once when the API rejects a stale token.
//!
//! ## Quick start
//!
//! ```ignore
//! use newsletter2go_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!
//!     // Reads NEWSLETTER2GO_AUTH_KEY / _USERNAME / _PASSWORD from the
//!     // environment or a .env file
//!     let config = Config::new();
//!     let client = Client::new(config)?;
//!
//!     let lists = client.lists().get(None).await?;
//!     info!("lists: {lists}");
//!
//!     client
//!         .lists()
//!         .recipients()
//!         .patch("abc123", "rcpt1", json!({ "first_name": "Ada" }))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Namespaced accessors on [`client::Client`] map 1:1 onto HTTP endpoints;
//! see the [`api`] module for the full set.

/// Resource namespaces mapping onto API endpoints
pub mod api;
/// Token lifecycle management
pub mod auth;
/// API client with automatic authentication
pub mod client;
/// Configuration from environment or builders
pub mod config;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Wire models for requests and responses
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Logging and environment helpers
pub mod utils;

/// Version of the crate as published in Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the version of the crate
pub fn version() -> &'static str {
    VERSION
}
