//! Account endpoints.

use serde::Serialize;
use serde_json::Value;

use crate::error::ExchangeError;
use crate::rest::endpoints::accounts;
use crate::rest::{CallOptions, ExchangeClient};
use crate::types::{FundingAction, FundingInfo, Identifier};

/// Account management and funding.
#[derive(Debug, Clone, Copy)]
pub struct Accounts<'a> {
    client: &'a ExchangeClient,
}

impl ExchangeClient {
    /// Account endpoints.
    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { client: self }
    }
}

#[derive(Serialize)]
struct AccountParams {
    account_id: Identifier,
}

impl Accounts<'_> {
    /// List the accounts visible to the user.
    pub async fn list(&self, options: Option<&CallOptions>) -> Result<Option<Value>, ExchangeError> {
        #[derive(Serialize)]
        struct Empty {}
        self.client.dispatch(accounts::LIST, &Empty {}, options).await
    }

    /// Get an account.
    pub async fn get(
        &self,
        account_id: impl Into<Identifier>,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        let params = AccountParams {
            account_id: account_id.into(),
        };
        self.client.dispatch(accounts::GET, &params, options).await
    }

    /// Create an account.
    pub async fn create(
        &self,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        #[derive(Serialize)]
        struct Empty {}
        self.client.dispatch(accounts::CREATE, &Empty {}, options).await
    }

    /// Destroy an account.
    pub async fn destroy(
        &self,
        account_id: impl Into<Identifier>,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        let params = AccountParams {
            account_id: account_id.into(),
        };
        self.client.dispatch(accounts::DESTROY, &params, options).await
    }

    /// Rename an account.
    pub async fn rename(
        &self,
        account_id: impl Into<Identifier>,
        account_name: &str,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        #[derive(Serialize)]
        struct Params<'a> {
            account_id: Identifier,
            account_name: &'a str,
        }
        let params = Params {
            account_id: account_id.into(),
            account_name,
        };
        self.client.dispatch(accounts::RENAME, &params, options).await
    }

    /// Get the assets held by an account.
    pub async fn get_assets(
        &self,
        account_id: impl Into<Identifier>,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        let params = AccountParams {
            account_id: account_id.into(),
        };
        self.client.dispatch(accounts::ASSETS, &params, options).await
    }

    /// Get a summary of the assets held by an account.
    ///
    /// With `resolve_fields` set, the server expands referenced fields in the
    /// summary.
    pub async fn get_asset_summary(
        &self,
        account_id: impl Into<Identifier>,
        resolve_fields: bool,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        #[derive(Serialize)]
        struct Params {
            account_id: Identifier,
            #[serde(rename = "ResolveFields")]
            resolve_fields: bool,
        }
        let params = Params {
            account_id: account_id.into(),
            resolve_fields,
        };
        self.client
            .dispatch(accounts::ASSET_SUMMARY, &params, options)
            .await
    }

    /// Get the audit trail of an account.
    pub async fn get_audits(
        &self,
        account_id: impl Into<Identifier>,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        let params = AccountParams {
            account_id: account_id.into(),
        };
        self.client.dispatch(accounts::AUDITS, &params, options).await
    }

    /// Apply a funding action to an account.
    ///
    /// The request is a copy of `info` with `account_id` and `funding_action`
    /// set; those two keys override any values already present in `info`.
    pub async fn funding(
        &self,
        account_id: impl Into<Identifier>,
        action: impl Into<FundingAction>,
        info: &FundingInfo,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        let account_id: Identifier = account_id.into();
        let action: FundingAction = action.into();

        let mut params = info.clone();
        params.insert("account_id".to_string(), Value::from(account_id));
        params.insert(
            "funding_action".to_string(),
            Value::String(action.as_str().to_string()),
        );
        self.client.dispatch(accounts::FUNDING, &params, options).await
    }

    /// Deposit funds directly (test environments).
    pub async fn test_deposit(
        &self,
        account_id: impl Into<Identifier>,
        amount_cents: u64,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        self.direct_funding(FundingAction::DepositDirect, account_id.into(), amount_cents, options)
            .await
    }

    /// Withdraw funds directly (test environments).
    pub async fn test_withdraw(
        &self,
        account_id: impl Into<Identifier>,
        amount_cents: u64,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        self.direct_funding(FundingAction::WithdrawDirect, account_id.into(), amount_cents, options)
            .await
    }

    async fn direct_funding(
        &self,
        funding_action: FundingAction,
        account_id: Identifier,
        amount_cents: u64,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        #[derive(Serialize)]
        struct Params {
            funding_action: FundingAction,
            account_id: Identifier,
            amount_cents: u64,
        }
        let params = Params {
            funding_action,
            account_id,
            amount_cents,
        };
        self.client.dispatch(accounts::FUNDING, &params, options).await
    }
}
