//! Permission endpoints.

use serde::Serialize;
use serde_json::Value;

use crate::error::ExchangeError;
use crate::rest::endpoints::permissions;
use crate::rest::{CallOptions, ExchangeClient};
use crate::types::Identifier;

/// Per-user permissions on accounts.
#[derive(Debug, Clone, Copy)]
pub struct Permissions<'a> {
    client: &'a ExchangeClient,
}

impl ExchangeClient {
    /// Permission endpoints.
    pub fn permissions(&self) -> Permissions<'_> {
        Permissions { client: self }
    }
}

#[derive(Serialize)]
struct PermissionParams<'a> {
    account_id: Identifier,
    user_id: Identifier,
    permission: &'a str,
}

impl Permissions<'_> {
    /// List the permissions granted on an account.
    pub async fn list(
        &self,
        account_id: impl Into<Identifier>,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        #[derive(Serialize)]
        struct Params {
            account_id: Identifier,
        }
        let params = Params {
            account_id: account_id.into(),
        };
        self.client.dispatch(permissions::LIST, &params, options).await
    }

    /// Grant a permission on an account to a user.
    pub async fn set(
        &self,
        account_id: impl Into<Identifier>,
        user_id: impl Into<Identifier>,
        permission: &str,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        let params = PermissionParams {
            account_id: account_id.into(),
            user_id: user_id.into(),
            permission,
        };
        self.client.dispatch(permissions::SET, &params, options).await
    }

    /// Revoke a permission on an account from a user.
    pub async fn unset(
        &self,
        account_id: impl Into<Identifier>,
        user_id: impl Into<Identifier>,
        permission: &str,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        let params = PermissionParams {
            account_id: account_id.into(),
            user_id: user_id.into(),
            permission,
        };
        self.client.dispatch(permissions::UNSET, &params, options).await
    }
}
