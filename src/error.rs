//! Error types for the SpiritEx client library.

use thiserror::Error;

/// Boxed error produced by an [`IdentityDelegate`](crate::auth::IdentityDelegate).
pub type DelegateError = Box<dyn std::error::Error + Send + Sync>;

/// The main error type for all SpiritEx client operations.
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// The transport did not produce a response at all
    #[error("Received an empty response from the server.")]
    EmptyResponse(#[source] reqwest_middleware::Error),

    /// The server answered with a non-success HTTP status
    #[error("Network error: [{status}]{}", reason_suffix(.status_text))]
    Network {
        /// HTTP status code
        status: u16,
        /// Reason phrase for the status, empty when the status has none
        status_text: String,
    },

    /// The server answered with an `error` field in the body
    #[error("{0}")]
    Api(ApiError),

    /// A client-side guard failed before any request was sent
    #[error("{0}")]
    Precondition(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// The identity delegate failed to produce a token
    #[error("Identity delegate failed: {0}")]
    Delegate(#[source] DelegateError),

    /// The request could not be built
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A failure composed by the dispatcher for a specific command
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Discriminator for the failure taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No response was obtained from the transport.
    EmptyResponse,
    /// Non-success HTTP status.
    Network,
    /// Server-supplied error message.
    Api,
    /// Client-side guard failed before dispatch.
    Precondition,
    /// Anything else (request construction, decoding, delegate).
    Generic,
}

impl ExchangeError {
    /// The taxonomy bucket this error belongs to.
    ///
    /// A [`CommandError`] reports the kind of the failure it wraps.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyResponse(_) => ErrorKind::EmptyResponse,
            Self::Network { .. } => ErrorKind::Network,
            Self::Api(_) => ErrorKind::Api,
            Self::Precondition(_) => ErrorKind::Precondition,
            Self::Command(err) => err.kind(),
            Self::Http(_)
            | Self::Json(_)
            | Self::Url(_)
            | Self::Delegate(_)
            | Self::InvalidRequest(_)
            | Self::InvalidResponse(_) => ErrorKind::Generic,
        }
    }

    /// Underlying error code, if the failure carries one.
    ///
    /// Network and API errors never carry a code. For transport failures the
    /// code is the I/O error kind found in the source chain, or `Timeout`.
    pub fn code(&self) -> Option<String> {
        match self {
            Self::Network { .. } | Self::Api(_) | Self::Precondition(_) => None,
            Self::Command(err) => err.cause().code(),
            Self::EmptyResponse(reqwest_middleware::Error::Reqwest(e)) | Self::Http(e)
                if e.is_timeout() =>
            {
                Some("Timeout".to_string())
            }
            _ => io_error_kind(self),
        }
    }

    /// Check if a callback or caller should treat this as an authentication failure.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Network { status, .. } => *status == 401 || *status == 403,
            Self::Command(err) => err.cause().is_unauthorized(),
            _ => false,
        }
    }
}

fn reason_suffix(status_text: &str) -> String {
    if status_text.is_empty() {
        String::new()
    } else {
        format!(" {status_text}")
    }
}

fn io_error_kind(err: &(dyn std::error::Error + 'static)) -> Option<String> {
    let mut current = err.source();
    while let Some(e) = current {
        if let Some(io) = e.downcast_ref::<std::io::Error>() {
            return Some(format!("{:?}", io.kind()));
        }
        current = e.source();
    }
    None
}

/// Error message returned by the server in the response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The server-supplied message, verbatim
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl ApiError {
    /// Create a new API error from the server message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A failure normalized by the dispatcher.
///
/// The message always has the form `In command [<path>]; <message>`, with the
/// underlying error code appended in brackets when there is one.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct CommandError {
    command: String,
    message: String,
    #[source]
    cause: Box<ExchangeError>,
}

impl CommandError {
    /// Compose a command error from the command path and the underlying failure.
    pub fn new(command: impl Into<String>, cause: ExchangeError) -> Self {
        let command = command.into();
        let mut message = format!("In command [{command}]; {cause}");
        if let Some(code) = cause.code() {
            message.push_str(&format!(" [{code}]"));
        }
        Self {
            command,
            message,
            cause: Box::new(cause),
        }
    }

    /// The command path the failure occurred in.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The composed message, as delivered to callbacks.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying failure.
    pub fn cause(&self) -> &ExchangeError {
        &self.cause
    }

    /// The taxonomy bucket of the underlying failure.
    pub fn kind(&self) -> ErrorKind {
        self.cause.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_message() {
        let err = CommandError::new(
            "/Orders",
            ExchangeError::Network {
                status: 500,
                status_text: "Internal Server Error".to_string(),
            },
        );
        assert_eq!(
            err.message(),
            "In command [/Orders]; Network error: [500] Internal Server Error"
        );
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[test]
    fn test_network_error_without_reason_phrase() {
        let err = CommandError::new(
            "/Orders",
            ExchangeError::Network {
                status: 520,
                status_text: String::new(),
            },
        );
        assert_eq!(err.message(), "In command [/Orders]; Network error: [520]");
    }

    #[test]
    fn test_api_error_message() {
        let err = CommandError::new(
            "/Account/Funding",
            ExchangeError::Api(ApiError::new("insufficient funds")),
        );
        assert_eq!(err.to_string(), "In command [/Account/Funding]; insufficient funds");
        assert_eq!(err.command(), "/Account/Funding");
        assert_eq!(err.kind(), ErrorKind::Api);
    }

    #[test]
    fn test_generic_error_appends_code() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let cause = ExchangeError::Delegate(Box::new(io));
        assert_eq!(cause.code().as_deref(), Some("ConnectionRefused"));

        let err = CommandError::new("/User", cause);
        assert_eq!(
            err.message(),
            "In command [/User]; Identity delegate failed: refused [ConnectionRefused]"
        );
        assert_eq!(err.kind(), ErrorKind::Generic);
    }

    #[test]
    fn test_generic_error_without_code() {
        let err = CommandError::new("/Accounts", ExchangeError::InvalidResponse("bad".into()));
        assert_eq!(err.message(), "In command [/Accounts]; Invalid response: bad");
    }

    #[test]
    fn test_command_variant_reports_inner_kind() {
        let err: ExchangeError = CommandError::new(
            "/Order",
            ExchangeError::Network {
                status: 401,
                status_text: "Unauthorized".into(),
            },
        )
        .into();
        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(err.is_unauthorized());
        assert_eq!(err.code(), None);
    }
}
