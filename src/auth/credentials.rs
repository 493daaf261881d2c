//! Sign-in credentials for the SpiritEx API.

use secrecy::{ExposeSecret, SecretString};

/// Default environment variable holding the sign-in identifier.
pub const ENV_USER_EMAIL: &str = "SPIRITEX_USER_EMAIL";

/// Default environment variable holding the sign-in secret.
pub const ENV_PASSWORD: &str = "SPIRITEX_PASSWORD";

/// Sign-in credentials: an identifier (email address) and a secret.
#[derive(Clone)]
pub struct Credentials {
    /// The account identifier, usually an email address
    pub identifier: String,
    secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an identifier and secret.
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: SecretString::from(secret.into()),
        }
    }

    /// Get the secret for the sign-in request.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing sign-in credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Credentials provider that holds credentials directly.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(identifier, secret),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `SPIRITEX_USER_EMAIL` and `SPIRITEX_PASSWORD`.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if either variable is not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(ENV_USER_EMAIL, ENV_PASSWORD)
    }

    /// Try to create credentials from custom environment variable names.
    ///
    /// Returns `None` if either variable is not set.
    pub fn try_from_env_vars(identifier_var: &str, secret_var: &str) -> Option<Self> {
        let identifier = std::env::var(identifier_var).ok()?;
        let secret = std::env::var(secret_var).ok()?;

        Some(Self {
            credentials: Credentials::new(identifier, secret),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("a@b.com", "super_secret");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("a@b.com"));
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("a@b.com", "x");
        let creds = provider.get_credentials();
        assert_eq!(creds.identifier, "a@b.com");
        assert_eq!(creds.expose_secret(), "x");
    }

    #[test]
    fn test_env_credentials_missing_vars() {
        let creds = EnvCredentials::try_from_env_vars(
            "SPIRITEX_TEST_UNSET_EMAIL_VAR",
            "SPIRITEX_TEST_UNSET_PASSWORD_VAR",
        );
        assert!(creds.is_none());
    }
}
