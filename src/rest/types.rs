//! Request types for the SpiritEx REST API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Editable details of an offering, sent by `Offerings::update`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferingInfo {
    /// Display name of the offering
    pub offering_name: String,
    /// Free-text description
    pub description: String,
    /// Asset-type specific details
    pub asset_info: Value,
    /// Fee rate charged to the supplier, e.g. `0.01` for one percent
    #[serde(with = "rust_decimal::serde::float")]
    pub supplier_fee_rate: Decimal,
}

impl OfferingInfo {
    /// Create offering details with empty asset info.
    pub fn new(
        offering_name: impl Into<String>,
        description: impl Into<String>,
        supplier_fee_rate: Decimal,
    ) -> Self {
        Self {
            offering_name: offering_name.into(),
            description: description.into(),
            asset_info: Value::Object(serde_json::Map::new()),
            supplier_fee_rate,
        }
    }

    /// Set the asset-type specific details.
    pub fn asset_info(mut self, asset_info: Value) -> Self {
        self.asset_info = asset_info;
        self
    }
}

/// Details of a new order, sent by `Orders::create`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderInfo {
    /// Order type tag understood by the server
    pub order_type: String,
    /// Number of units to trade
    pub unit_count: u64,
    /// Price per unit
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// Optional expiration timestamp
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expiration: Option<String>,
}

impl OrderInfo {
    /// Create order details without an expiration.
    pub fn new(order_type: impl Into<String>, unit_count: u64, unit_price: Decimal) -> Self {
        Self {
            order_type: order_type.into(),
            unit_count,
            unit_price,
            expiration: None,
        }
    }

    /// Set the expiration timestamp.
    pub fn expiration(mut self, expiration: impl Into<String>) -> Self {
        self.expiration = Some(expiration.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offering_info_serializes_fee_as_number() {
        let info = OfferingInfo::new("N", "D", Decimal::new(1, 2));
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["supplier_fee_rate"], serde_json::json!(0.01));
        assert_eq!(json["asset_info"], serde_json::json!({}));
    }

    #[test]
    fn test_order_info_omits_missing_expiration() {
        let info = OrderInfo::new("buy", 10, Decimal::new(250, 2));
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["unit_price"], serde_json::json!(2.5));
        assert!(json.get("expiration").is_none());

        let json = serde_json::to_value(info.expiration("2026-12-31")).unwrap();
        assert_eq!(json["expiration"], "2026-12-31");
    }
}
