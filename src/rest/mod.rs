//! SpiritEx REST API client.
//!
//! [`ExchangeClient`] owns the session and the single dispatch path. The
//! resource groups borrow the client and map typed arguments onto command
//! payloads:
//!
//! ```rust,no_run
//! use spiritex_client::rest::{CallOptions, Callback, ExchangeClient};
//!
//! # async fn run() -> Result<(), spiritex_client::ExchangeError> {
//! let client = ExchangeClient::builder("https://exchange.example.com/api").build();
//! let options = CallOptions::new().callback(Callback::from_fn(|error, _| {
//!     if let Some(message) = error {
//!         eprintln!("{message}");
//!     }
//! }));
//! let _offerings = client.public_offerings().list(Some(&options)).await?;
//! # Ok(())
//! # }
//! ```

mod accounts;
mod client;
pub mod endpoints;
mod offerings;
mod options;
mod orders;
mod permissions;
mod public_offerings;
mod server;
mod types;

pub use accounts::Accounts;
pub use client::{ExchangeClient, ExchangeClientBuilder};
pub use offerings::Offerings;
pub use options::{CallOptions, Callback, ClientOptions, ENV_SERVER_URL};
pub use orders::{NOT_AUTHENTICATED, Orders};
pub use permissions::Permissions;
pub use public_offerings::PublicOfferings;
pub use server::Server;
pub use types::*;
