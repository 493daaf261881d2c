//! Authentication module for the SpiritEx API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Identity delegates that supply bearer tokens on demand
//! - The session record held by the client after sign-in

mod credentials;
mod delegate;
mod session;

pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
pub use delegate::{IdentityDelegate, StaticToken};
pub use session::{Session, User};
pub(crate) use session::{ClientState, SigninResult};
