//! Server and user endpoints.

use serde::Serialize;
use serde_json::Value;

use crate::error::ExchangeError;
use crate::rest::endpoints::{server, session};
use crate::rest::{CallOptions, ExchangeClient};

/// Server information and user lookup.
#[derive(Debug, Clone, Copy)]
pub struct Server<'a> {
    client: &'a ExchangeClient,
}

impl ExchangeClient {
    /// Server and user endpoints.
    pub fn server(&self) -> Server<'_> {
        Server { client: self }
    }
}

impl Server<'_> {
    /// Get server information.
    pub async fn get_server_info(
        &self,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        #[derive(Serialize)]
        struct Empty {}
        self.client
            .dispatch(session::SERVER_INFO, &Empty {}, options)
            .await
    }

    /// Ask the server to fail on purpose.
    ///
    /// Useful to check how errors flow through callbacks.
    pub async fn get_server_error(
        &self,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        #[derive(Serialize)]
        struct Empty {}
        self.client
            .dispatch(session::SERVER_ERROR, &Empty {}, options)
            .await
    }

    /// Get the specification of an asset type.
    pub async fn get_asset_type(
        &self,
        asset_type: &str,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        #[derive(Serialize)]
        struct Params<'a> {
            asset_type: &'a str,
        }
        self.client
            .dispatch(server::ASSET_TYPE_SPECIFICATIONS, &Params { asset_type }, options)
            .await
    }

    /// Get the current user.
    pub async fn get_user(
        &self,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        #[derive(Serialize)]
        struct Empty {}
        self.client.dispatch(server::USER, &Empty {}, options).await
    }

    /// Look up a user by email address.
    pub async fn lookup_user(
        &self,
        email_address: &str,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        #[derive(Serialize)]
        struct Params<'a> {
            email_address: &'a str,
        }
        self.client
            .dispatch(server::USER_LOOKUP, &Params { email_address }, options)
            .await
    }
}
