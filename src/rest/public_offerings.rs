//! Public offering endpoints.

use serde::Serialize;
use serde_json::Value;

use crate::error::ExchangeError;
use crate::rest::endpoints::public_offerings;
use crate::rest::{CallOptions, ExchangeClient};
use crate::types::Identifier;

/// Offerings visible to every user, and their markets.
#[derive(Debug, Clone, Copy)]
pub struct PublicOfferings<'a> {
    client: &'a ExchangeClient,
}

impl ExchangeClient {
    /// Public offering endpoints.
    pub fn public_offerings(&self) -> PublicOfferings<'_> {
        PublicOfferings { client: self }
    }
}

#[derive(Serialize)]
struct OfferingParams {
    offering_id: Identifier,
}

impl PublicOfferings<'_> {
    /// List public offerings.
    pub async fn list(&self, options: Option<&CallOptions>) -> Result<Option<Value>, ExchangeError> {
        #[derive(Serialize)]
        struct Empty {}
        self.client
            .dispatch(public_offerings::LIST, &Empty {}, options)
            .await
    }

    /// Get a public offering.
    pub async fn get(
        &self,
        offering_id: impl Into<Identifier>,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        let params = OfferingParams {
            offering_id: offering_id.into(),
        };
        self.client
            .dispatch(public_offerings::GET, &params, options)
            .await
    }

    /// Get the market (open orders) for a public offering.
    pub async fn get_market(
        &self,
        offering_id: impl Into<Identifier>,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        let params = OfferingParams {
            offering_id: offering_id.into(),
        };
        self.client
            .dispatch(public_offerings::MARKET, &params, options)
            .await
    }
}
