//! Offering endpoints.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::error::ExchangeError;
use crate::rest::endpoints::offerings;
use crate::rest::{CallOptions, ExchangeClient, OfferingInfo};
use crate::types::Identifier;

/// Offerings managed by a supplier account.
#[derive(Debug, Clone, Copy)]
pub struct Offerings<'a> {
    client: &'a ExchangeClient,
}

impl ExchangeClient {
    /// Offering endpoints.
    pub fn offerings(&self) -> Offerings<'_> {
        Offerings { client: self }
    }
}

#[derive(Serialize)]
struct OfferingParams {
    offering_id: Identifier,
}

impl Offerings<'_> {
    /// List the offerings of an account.
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
        self.client.dispatch(offerings::LIST, &params, options).await
    }

    /// Get an offering.
    pub async fn get(
        &self,
        offering_id: impl Into<Identifier>,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        let params = OfferingParams {
            offering_id: offering_id.into(),
        };
        self.client.dispatch(offerings::GET, &params, options).await
    }

    /// Create an offering of the given asset type.
    pub async fn create(
        &self,
        account_id: impl Into<Identifier>,
        asset_type: &str,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        #[derive(Serialize)]
        struct Params<'a> {
            account_id: Identifier,
            asset_type: &'a str,
        }
        let params = Params {
            account_id: account_id.into(),
            asset_type,
        };
        self.client.dispatch(offerings::CREATE, &params, options).await
    }

    /// Delete an offering.
    pub async fn destroy(
        &self,
        offering_id: impl Into<Identifier>,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        let params = OfferingParams {
            offering_id: offering_id.into(),
        };
        self.client.dispatch(offerings::DELETE, &params, options).await
    }

    /// Save the editable details of an offering.
    ///
    /// Only the four fields of [`OfferingInfo`] are sent, next to the id.
    pub async fn update(
        &self,
        offering_id: impl Into<Identifier>,
        info: &OfferingInfo,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        #[derive(Serialize)]
        struct Params<'a> {
            offering_id: Identifier,
            offering_name: &'a str,
            description: &'a str,
            asset_info: &'a Value,
            #[serde(with = "rust_decimal::serde::float")]
            supplier_fee_rate: Decimal,
        }
        let params = Params {
            offering_id: offering_id.into(),
            offering_name: &info.offering_name,
            description: &info.description,
            asset_info: &info.asset_info,
            supplier_fee_rate: info.supplier_fee_rate,
        };
        self.client.dispatch(offerings::SAVE, &params, options).await
    }

    /// Activate an offering.
    pub async fn activate(
        &self,
        offering_id: impl Into<Identifier>,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        let params = OfferingParams {
            offering_id: offering_id.into(),
        };
        self.client.dispatch(offerings::ACTIVATE, &params, options).await
    }

    /// Pause an offering.
    pub async fn pause(
        &self,
        offering_id: impl Into<Identifier>,
        options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError> {
        let params = OfferingParams {
            offering_id: offering_id.into(),
        };
        self.client.dispatch(offerings::PAUSE, &params, options).await
    }
}
