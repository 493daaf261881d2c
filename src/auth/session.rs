//! Session state held by the client.

use std::sync::Arc;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::auth::IdentityDelegate;
use crate::types::Identifier;

/// Identity metadata for the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user id
    pub user_id: Identifier,
    /// Display name
    #[serde(default)]
    pub user_name: String,
    /// Any further fields the server returns for the user
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The active authentication context.
///
/// A session created by [`authenticate`](crate::ExchangeClient::authenticate)
/// carries a bearer token. A session created by
/// [`connect`](crate::ExchangeClient::connect) carries only the user; its
/// tokens come from the identity delegate on every request.
pub struct Session {
    token: Option<SecretString>,
    user: Option<User>,
}

impl Session {
    pub(crate) fn from_signin(signin: SigninResult) -> Self {
        Self {
            token: signin.session_token.map(SecretString::from),
            user: signin.user,
        }
    }

    pub(crate) fn delegated(user: Option<User>) -> Self {
        Self { token: None, user }
    }

    /// The signed-in user, if the server returned one.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether this session holds its own bearer token.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn token(&self) -> Option<&SecretString> {
        self.token.as_ref()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("user", &self.user)
            .finish()
    }
}

/// Result payload of `/Session/Signin`.
#[derive(Debug, Deserialize)]
pub(crate) struct SigninResult {
    #[serde(default)]
    session_token: Option<String>,
    #[serde(rename = "User", default)]
    user: Option<User>,
}

/// Mutable identity state shared by every clone of a client.
///
/// At most one identity mode is active: setting a session from sign-in clears
/// the delegate, and connecting a delegate replaces the session.
#[derive(Default)]
pub(crate) struct ClientState {
    pub(crate) session: Option<Arc<Session>>,
    pub(crate) delegate: Option<Arc<dyn IdentityDelegate>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signin_result_parses_session() {
        let json = serde_json::json!({
            "session_token": "T",
            "User": { "user_id": 1, "user_name": "a", "email_address": "a@b.com" }
        });
        let signin: SigninResult = serde_json::from_value(json).unwrap();
        let session = Session::from_signin(signin);

        assert!(session.has_token());
        let user = session.user().unwrap();
        assert_eq!(user.user_id, Identifier::from(1u64));
        assert_eq!(user.user_name, "a");
        assert_eq!(user.extra["email_address"], "a@b.com");
    }

    #[test]
    fn test_session_debug_redacts_token() {
        let signin: SigninResult =
            serde_json::from_value(serde_json::json!({ "session_token": "secret-token" })).unwrap();
        let session = Session::from_signin(signin);
        let debug_str = format!("{:?}", session);
        assert!(!debug_str.contains("secret-token"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_delegated_session_has_no_token() {
        let session = Session::delegated(None);
        assert!(!session.has_token());
        assert!(session.user().is_none());
    }
}
