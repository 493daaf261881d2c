//! Order endpoints.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::error::ExchangeError;
use crate::rest::endpoints::orders;
use crate::rest::{CallOptions, ExchangeClient, OrderInfo};
use crate::types::Identifier;

/// Message of the error raised when an order is created without a session user.
pub const NOT_AUTHENTICATED: &str =
    "You must call authenticate() or connect() before using the Exchange Client.";

/// Order placement and history.
#[derive(Debug, Clone, Copy)]
pub struct Orders<'a> {
    client: &'a ExchangeClient,
}

impl ExchangeClient {
    /// Order endpoints.
    pub fn orders(&self) -> Orders<'_> {
        Orders { client: self }
    }
}

#[derive(Serialize)]
struct OrderParams {
    order_id: Identifier,
}

impl Orders<'_> {
    /// List the orders of an account.
    pub async fn list(
        &self,
        account_id: impl Into<Identifier>,
        include_closed: bool,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        #[derive(Serialize)]
        struct Params {
            account_id: Identifier,
            include_closed: bool,
        }
        let params = Params {
            account_id: account_id.into(),
            include_closed,
        };
        self.client.dispatch(orders::LIST, &params, options).await
    }

    /// Get an order.
    pub async fn get(
        &self,
        order_id: impl Into<Identifier>,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        let params = OrderParams {
            order_id: order_id.into(),
        };
        self.client.dispatch(orders::GET, &params, options).await
    }

    /// Place an order on an offering.
    ///
    /// The order is placed on behalf of the signed-in user. Fails with
    /// [`ExchangeError::Precondition`] before any request is sent when no user
    /// is signed in.
    pub async fn create(
        &self,
        account_id: impl Into<Identifier>,
        offering_id: impl Into<Identifier>,
        info: &OrderInfo,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        let user = self
            .client
            .session_user()
            .await
            .ok_or_else(|| ExchangeError::Precondition(NOT_AUTHENTICATED.to_string()))?;

        #[derive(Serialize)]
        struct Params<'a> {
            user_id: Identifier,
            account_id: Identifier,
            offering_id: Identifier,
            order_type: &'a str,
            unit_count: u64,
            #[serde(with = "rust_decimal::serde::float")]
            unit_price: Decimal,
            #[serde(skip_serializing_if = "Option::is_none")]
            expiration: Option<&'a str>,
        }
        let params = Params {
            user_id: user.user_id,
            account_id: account_id.into(),
            offering_id: offering_id.into(),
            order_type: &info.order_type,
            unit_count: info.unit_count,
            unit_price: info.unit_price,
            expiration: info.expiration.as_deref(),
        };
        self.client.dispatch(orders::CREATE, &params, options).await
    }

    /// Close an order.
    pub async fn close(
        &self,
        order_id: impl Into<Identifier>,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        let params = OrderParams {
            order_id: order_id.into(),
        };
        self.client.dispatch(orders::CLOSE, &params, options).await
    }

    /// Get the transactions that filled an order.
    pub async fn get_transactions(
        &self,
        order_id: impl Into<Identifier>,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        let params = OrderParams {
            order_id: order_id.into(),
        };
        self.client
            .dispatch(orders::TRANSACTIONS, &params, options)
            .await
    }
}
