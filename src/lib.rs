//! # SpiritEx Client
//!
//! An async Rust client library for the SpiritEx exchange HTTP API.
//!
//! ## Features
//!
//! - Every endpoint of the exchange, grouped by resource
//! - Password sign-in or host-delegated identity
//! - Global and per-call result callbacks
//! - One request per call: no retries, no queueing, no caching
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spiritex_client::ExchangeClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ExchangeClient::builder("https://exchange.example.com/api").build();
//!     let info = client.server().get_server_info(None).await?;
//!     println!("Server info: {:?}", info);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use auth::User;
pub use error::{CommandError, ErrorKind, ExchangeError};
pub use rest::{CallOptions, Callback, ClientOptions, ExchangeClient, ExchangeClientBuilder};
pub use types::Identifier;

/// Result type alias using ExchangeError
pub type Result<T> = std::result::Result<T, ExchangeError>;
