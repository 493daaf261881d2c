//! Common domain types for the SpiritEx API.

use serde::{Deserialize, Serialize, Serializer};

/// Identifier of a user, account, offering, or order.
///
/// The server may use numeric or string ids; both are passed through
/// unchanged, including negative and fractional numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    /// Numeric id
    Number(serde_json::Number),
    /// String id
    Text(String),
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Identifier::Number(n) => write!(f, "{}", n),
            Identifier::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for Identifier {
    fn from(value: u64) -> Self {
        Identifier::Number(value.into())
    }
}

impl From<u32> for Identifier {
    fn from(value: u32) -> Self {
        Identifier::Number(value.into())
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Number(value.into())
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Text(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::Text(value)
    }
}

impl From<&Identifier> for Identifier {
    fn from(value: &Identifier) -> Self {
        value.clone()
    }
}

impl From<Identifier> for serde_json::Value {
    fn from(value: Identifier) -> Self {
        match value {
            Identifier::Number(n) => serde_json::Value::Number(n),
            Identifier::Text(s) => serde_json::Value::String(s),
        }
    }
}

/// Funding operation applied to an account.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FundingAction {
    /// Direct deposit (`deposit.direct`)
    DepositDirect,
    /// Direct withdrawal (`withdraw.direct`)
    WithdrawDirect,
    /// Any other action tag understood by the server
    Other(String),
}

impl FundingAction {
    /// The wire tag for this action.
    pub fn as_str(&self) -> &str {
        match self {
            FundingAction::DepositDirect => "deposit.direct",
            FundingAction::WithdrawDirect => "withdraw.direct",
            FundingAction::Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for FundingAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for FundingAction {
    fn from(value: &str) -> Self {
        match value {
            "deposit.direct" => FundingAction::DepositDirect,
            "withdraw.direct" => FundingAction::WithdrawDirect,
            other => FundingAction::Other(other.to_string()),
        }
    }
}

impl Serialize for FundingAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Free-form funding details, merged into the funding request.
pub type FundingInfo = serde_json::Map<String, serde_json::Value>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_untagged() {
        let n: Identifier = serde_json::from_str("42").unwrap();
        assert_eq!(n, Identifier::from(42u64));
        let s: Identifier = serde_json::from_str("\"acct-1\"").unwrap();
        assert_eq!(s, Identifier::Text("acct-1".into()));
        assert_eq!(serde_json::to_string(&Identifier::from(7u64)).unwrap(), "7");
        assert_eq!(Identifier::from("x").to_string(), "x");
    }

    #[test]
    fn test_identifier_keeps_negative_and_fractional_numbers() {
        let negative: Identifier = serde_json::from_str("-1").unwrap();
        assert_eq!(negative, Identifier::from(-1i64));
        assert_eq!(negative.to_string(), "-1");

        let fractional: Identifier = serde_json::from_str("2.5").unwrap();
        assert_eq!(serde_json::Value::from(fractional), serde_json::json!(2.5));
    }

    #[test]
    fn test_funding_action_tags() {
        assert_eq!(
            serde_json::to_value(FundingAction::DepositDirect).unwrap(),
            "deposit.direct"
        );
        assert_eq!(FundingAction::from("withdraw.direct"), FundingAction::WithdrawDirect);
        assert_eq!(FundingAction::from("wire.in").as_str(), "wire.in");
    }
}
