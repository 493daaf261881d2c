//! Identity delegates: externally managed sessions that hand out bearer tokens.

use futures_util::future::BoxFuture;
use secrecy::{ExposeSecret, SecretString};

use crate::error::DelegateError;

/// A capability that produces a short-lived bearer token on demand.
///
/// The client asks the delegate for a fresh token before every request when
/// no session token is stored. Returning `Ok(None)` is not an error: the
/// request simply goes out unauthenticated.
///
/// # Example
///
/// ```rust
/// use futures_util::future::BoxFuture;
/// use secrecy::SecretString;
/// use spiritex_client::auth::IdentityDelegate;
/// use spiritex_client::error::DelegateError;
///
/// struct HostSession;
///
/// impl IdentityDelegate for HostSession {
///     fn session_token(&self) -> BoxFuture<'_, Result<Option<SecretString>, DelegateError>> {
///         Box::pin(async { Ok(Some(SecretString::from("token-from-host".to_owned()))) })
///     }
/// }
/// ```
pub trait IdentityDelegate: Send + Sync {
    /// Get the current session token, if the host has one.
    fn session_token(&self) -> BoxFuture<'_, Result<Option<SecretString>, DelegateError>>;
}

/// Delegate that always hands out the same token.
pub struct StaticToken {
    token: SecretString,
}

impl StaticToken {
    /// Create a delegate for a fixed token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
        }
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticToken")
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl IdentityDelegate for StaticToken {
    fn session_token(&self) -> BoxFuture<'_, Result<Option<SecretString>, DelegateError>> {
        let token = SecretString::from(self.token.expose_secret().to_owned());
        Box::pin(async move { Ok(Some(token)) })
    }
}
