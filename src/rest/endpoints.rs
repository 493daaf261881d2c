//! SpiritEx API command paths.
//!
//! These strings are part of the wire protocol and must not change.

/// Session endpoints.
pub mod session {
    /// Sign in with an email address and password.
    pub const SIGNIN: &str = "/Session/Signin";
    /// Get server information.
    pub const SERVER_INFO: &str = "/Session/ServerInfo";
    /// Ask the server to produce an error (diagnostics).
    pub const SERVER_ERROR: &str = "/Session/ServerError";
}

/// User and server-wide endpoints.
pub mod server {
    /// Get the current user.
    pub const USER: &str = "/User";
    /// Look up a user by email address.
    pub const USER_LOOKUP: &str = "/User/Lookup";
    /// Get the specification of an asset type.
    pub const ASSET_TYPE_SPECIFICATIONS: &str = "/AssetTypeSpecifications";
}

/// Account endpoints.
pub mod accounts {
    /// List accounts visible to the user.
    pub const LIST: &str = "/Accounts";
    /// Get an account.
    pub const GET: &str = "/Account";
    /// Create an account.
    pub const CREATE: &str = "/Account/Create";
    /// Destroy an account.
    pub const DESTROY: &str = "/Account/Destroy";
    /// Rename an account.
    pub const RENAME: &str = "/Account/Rename";
    /// Get the assets held by an account.
    pub const ASSETS: &str = "/Account/Assets";
    /// Get a summary of the assets held by an account.
    pub const ASSET_SUMMARY: &str = "/Account/AssetSummary";
    /// Get the audit trail of an account.
    pub const AUDITS: &str = "/Account/Audits";
    /// Deposit or withdraw funds.
    pub const FUNDING: &str = "/Account/Funding";
}

/// Permission endpoints.
pub mod permissions {
    /// List permissions on an account.
    pub const LIST: &str = "/Permissions";
    /// Grant a permission.
    pub const SET: &str = "/SetPermission";
    /// Revoke a permission.
    pub const UNSET: &str = "/UnsetPermission";
}

/// Offering endpoints (supplier side).
pub mod offerings {
    /// List offerings of an account.
    pub const LIST: &str = "/Offerings";
    /// Get an offering.
    pub const GET: &str = "/Offering";
    /// Create an offering.
    pub const CREATE: &str = "/Offering/Create";
    /// Delete an offering.
    pub const DELETE: &str = "/Offering/Delete";
    /// Save offering details.
    pub const SAVE: &str = "/Offering/Save";
    /// Activate an offering.
    pub const ACTIVATE: &str = "/Offering/Activate";
    /// Pause an offering.
    pub const PAUSE: &str = "/Offering/Pause";
}

/// Public offering endpoints.
pub mod public_offerings {
    /// List public offerings.
    pub const LIST: &str = "/PublicOfferings";
    /// Get a public offering.
    pub const GET: &str = "/PublicOffering";
    /// Get the market for a public offering.
    pub const MARKET: &str = "/PublicOffering/Market";
}

/// Order endpoints.
pub mod orders {
    /// List orders of an account.
    pub const LIST: &str = "/Orders";
    /// Get an order.
    pub const GET: &str = "/Order";
    /// Create an order.
    pub const CREATE: &str = "/Order/Create";
    /// Close an order.
    pub const CLOSE: &str = "/Order/Close";
    /// Get the transactions of an order.
    pub const TRANSACTIONS: &str = "/Order/Transactions";
}
