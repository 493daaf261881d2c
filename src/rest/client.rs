//! SpiritEx REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use url::Url;

use crate::auth::{
    ClientState, CredentialsProvider, IdentityDelegate, Session, SigninResult, User,
};
use crate::error::{ApiError, CommandError, ExchangeError};
use crate::rest::endpoints::{server, session};
use crate::rest::options::{CallOptions, Callback, ClientOptions, ENV_SERVER_URL};

/// Service name used in request/response log labels.
const SERVICE_NAME: &str = "ExchangeApi";

/// The SpiritEx REST API client.
///
/// Every operation funnels through [`ExchangeClient::dispatch`], which attaches
/// the bearer token, performs a single POST, classifies the outcome, and
/// notifies the configured callbacks. Clones share the same session.
///
/// # Example
///
/// ```rust,no_run
/// use spiritex_client::ExchangeClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ExchangeClient::builder("https://exchange.example.com/api").build();
///
///     let user = client.authenticate("a@b.com", "password").await?;
///     println!("Signed in as {:?}", user);
///
///     let accounts = client.accounts().list(None).await?;
///     println!("Accounts: {:?}", accounts);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ExchangeClient {
    http_client: ClientWithMiddleware,
    server_url: String,
    options: ClientOptions,
    state: Arc<RwLock<ClientState>>,
}

/// Bearer token and log label resolved for one request.
struct Identity {
    token: Option<SecretString>,
    label: String,
}

/// Wire-level response body.
#[derive(Debug, serde::Deserialize)]
struct ApiResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
}

impl ApiResponse {
    /// The server error message, if the `error` field is populated.
    fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl ExchangeClient {
    /// Create a new client builder for the given server URL.
    ///
    /// Command paths are appended to this URL verbatim.
    pub fn builder(server_url: impl Into<String>) -> ExchangeClientBuilder {
        ExchangeClientBuilder::new(server_url)
    }

    /// The base server URL.
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// The client-wide options.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    // Session management.

    /// Sign in with an email address and password.
    ///
    /// On success the returned session (token and user) replaces any previous
    /// session or delegate, and the user is returned. When the server returns
    /// no session, or something that is not a session, the client ends up
    /// signed out and `None` is returned.
    pub async fn authenticate(
        &self,
        identifier: &str,
        secret: &str,
    ) -> Result<Option<User>, ExchangeError> {
        #[derive(Serialize)]
        struct Params<'a> {
            email_address: &'a str,
            password: &'a str,
        }
        let result = self
            .dispatch(
                session::SIGNIN,
                &Params {
                    email_address: identifier,
                    password: secret,
                },
                None,
            )
            .await?;

        // A result that is not a session counts as no session.
        let session = result
            .and_then(|value| serde_json::from_value::<SigninResult>(value).ok())
            .map(|signin| Arc::new(Session::from_signin(signin)));
        let user = session.as_ref().and_then(|s| s.user().cloned());

        let mut state = self.state.write().await;
        state.session = session;
        state.delegate = None;
        Ok(user)
    }

    /// Sign in with credentials from a provider.
    pub async fn authenticate_with(
        &self,
        credentials: &dyn CredentialsProvider,
    ) -> Result<Option<User>, ExchangeError> {
        let creds = credentials.get_credentials();
        self.authenticate(&creds.identifier, creds.expose_secret())
            .await
    }

    /// Connect an identity delegate managed by the host runtime.
    ///
    /// The delegate replaces any previous session. The current user is fetched
    /// with a delegate-supplied token; no token is stored, so every later
    /// request asks the delegate again.
    pub async fn connect(
        &self,
        delegate: Arc<dyn IdentityDelegate>,
    ) -> Result<Option<User>, ExchangeError> {
        {
            let mut state = self.state.write().await;
            state.delegate = Some(delegate);
            state.session = Some(Arc::new(Session::delegated(None)));
        }

        #[derive(Serialize)]
        struct Empty {}
        let result = self.dispatch(server::USER, &Empty {}, None).await?;

        let user = result.and_then(|value| serde_json::from_value::<User>(value).ok());
        self.state.write().await.session = Some(Arc::new(Session::delegated(user.clone())));
        Ok(user)
    }

    /// Forget the current session and delegate. No request is sent.
    pub async fn sign_out(&self) {
        let mut state = self.state.write().await;
        state.session = None;
        state.delegate = None;
    }

    /// The signed-in user, if any.
    pub async fn session_user(&self) -> Option<User> {
        let state = self.state.read().await;
        state.session.as_ref().and_then(|s| s.user().cloned())
    }

    /// Whether a user is signed in.
    pub async fn is_authenticated(&self) -> bool {
        self.session_user().await.is_some()
    }

    // Dispatch.

    /// Send one command to the server.
    ///
    /// Performs exactly one POST of `params` as JSON to `server_url + command`.
    /// On success the global callback and then the per-call callback receive
    /// `(None, Some(result))`, and `Some(result)` is returned.
    ///
    /// On failure the error is composed into `In command [<command>]; ...` and
    /// delivered to the same callbacks as `(Some(message), None)`. The
    /// [`CommandError`] is returned when no callback was configured or when
    /// `throw_handled_errors` is set; otherwise the call yields `Ok(None)`.
    pub async fn dispatch<P>(
        &self,
        command: &str,
        params: &P,
        call_options: Option<&CallOptions>,
    ) -> Result<Option<Value>, ExchangeError>
    where
        P: Serialize + ?Sized,
    {
        let listeners: Vec<&Callback> = self
            .options
            .global_callback
            .iter()
            .chain(call_options.and_then(|o| o.callback.as_ref()))
            .collect();

        match self.execute(command, params).await {
            Ok(result) => {
                for listener in &listeners {
                    listener.invoke(None, Some(&result)).await;
                }
                Ok(Some(result))
            }
            Err(cause) => {
                let error = CommandError::new(command, cause);
                for listener in &listeners {
                    listener.invoke(Some(error.message()), None).await;
                }
                let handled = !listeners.is_empty();
                tracing::debug!(command, handled, "{}", error);

                if self.options.throw_handled_errors || !handled {
                    Err(error.into())
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Perform the request and classify the outcome.
    async fn execute<P>(&self, command: &str, params: &P) -> Result<Value, ExchangeError>
    where
        P: Serialize + ?Sized,
    {
        let url = Url::parse(&format!("{}{}", self.server_url, command))?;
        let identity = self.resolve_identity().await?;
        let body = serde_json::to_value(params)?;

        if self.options.log_requests {
            tracing::info!(payload = %body, "{} -->> Server [{}]", identity.label, command);
        }

        let mut request = self
            .http_client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_string());
        if let Some(token) = &identity.token {
            request = request.header(AUTHORIZATION, bearer_header(token)?);
        }

        let response = request.send().await.map_err(ExchangeError::EmptyResponse)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExchangeError::Network {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let text = response.text().await?;
        let api_response: ApiResponse = serde_json::from_str(&text)?;

        if self.options.log_responses {
            tracing::info!(payload = %text, "{} <<-- Server [{}]", identity.label, command);
        }

        if let Some(message) = api_response.error_message() {
            return Err(ExchangeError::Api(ApiError::new(message)));
        }
        Ok(api_response.result.unwrap_or(Value::Null))
    }

    /// Pick the bearer token for the next request.
    ///
    /// A stored session token wins. Otherwise a connected delegate is asked
    /// for a fresh token, provided the host supports delegated identity.
    async fn resolve_identity(&self) -> Result<Identity, ExchangeError> {
        let (session, delegate) = {
            let state = self.state.read().await;
            (state.session.clone(), state.delegate.clone())
        };

        let token = match session.as_deref().and_then(Session::token) {
            Some(token) => Some(SecretString::from(token.expose_secret().to_owned())),
            None => match delegate {
                Some(delegate) if self.options.host_identity => delegate
                    .session_token()
                    .await
                    .map_err(ExchangeError::Delegate)?,
                _ => None,
            },
        };
        let token = token.filter(|t| !t.expose_secret().is_empty());

        let name = session
            .as_deref()
            .and_then(Session::user)
            .map_or("anonymous", |user| user.user_name.as_str());

        Ok(Identity {
            token,
            label: format!("{SERVICE_NAME} as ({name})"),
        })
    }
}

fn bearer_header(token: &SecretString) -> Result<HeaderValue, ExchangeError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
        .map_err(|_| {
            ExchangeError::InvalidRequest("bearer token is not a valid header value".into())
        })?;
    value.set_sensitive(true);
    Ok(value)
}

impl std::fmt::Debug for ExchangeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeClient")
            .field("server_url", &self.server_url)
            .field("options", &self.options)
            .finish()
    }
}

/// Builder for [`ExchangeClient`].
pub struct ExchangeClientBuilder {
    server_url: String,
    options: ClientOptions,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl ExchangeClientBuilder {
    /// Create a new builder with default options.
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            options: ClientOptions::default(),
            user_agent: None,
            timeout: None,
        }
    }

    /// Create a builder from environment variables.
    ///
    /// Reads the server URL from `SPIRITEX_SERVER_URL` and the flags via
    /// [`ClientOptions::from_env`]. Returns `None` if the URL is not set.
    pub fn from_env() -> Option<Self> {
        let server_url = std::env::var(ENV_SERVER_URL).ok()?;
        Some(Self::new(server_url).options(ClientOptions::from_env()))
    }

    /// Replace all client-wide options.
    pub fn options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    /// Log every command and its parameters before sending.
    pub fn log_requests(mut self, enabled: bool) -> Self {
        self.options.log_requests = enabled;
        self
    }

    /// Log every command and its decoded response.
    pub fn log_responses(mut self, enabled: bool) -> Self {
        self.options.log_responses = enabled;
        self
    }

    /// Set a callback invoked for every call.
    pub fn global_callback(mut self, callback: Callback) -> Self {
        self.options.global_callback = Some(callback);
        self
    }

    /// Raise errors even when a callback already received them.
    pub fn throw_handled_errors(mut self, enabled: bool) -> Self {
        self.options.throw_handled_errors = enabled;
        self
    }

    /// Declare whether the host runtime supports delegated identity.
    pub fn host_identity(mut self, supported: bool) -> Self {
        self.options.host_identity = supported;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a transport-level timeout for each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> ExchangeClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("spiritex-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("spiritex-client"));
        headers.insert(USER_AGENT, header_value);

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let reqwest_client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        // No retry middleware: every dispatch is a single attempt.
        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        ExchangeClient {
            http_client: client,
            server_url: self.server_url,
            options: self.options,
            state: Arc::new(RwLock::new(ClientState::default())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: serde_json::Value) -> ApiResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_api_response_error_message() {
        assert_eq!(
            parse(serde_json::json!({ "error": "insufficient funds" })).error_message(),
            Some("insufficient funds".to_string())
        );
        assert_eq!(parse(serde_json::json!({ "error": "" })).error_message(), None);
        assert_eq!(parse(serde_json::json!({ "error": null })).error_message(), None);
        assert_eq!(parse(serde_json::json!({ "result": 1 })).error_message(), None);
        assert_eq!(
            parse(serde_json::json!({ "error": { "code": 7 } })).error_message(),
            Some("{\"code\":7}".to_string())
        );
    }

    #[tokio::test]
    async fn test_anonymous_identity_without_session() {
        let client = ExchangeClient::builder("http://localhost").build();
        let identity = client.resolve_identity().await.unwrap();
        assert!(identity.token.is_none());
        assert_eq!(identity.label, "ExchangeApi as (anonymous)");
    }

    #[tokio::test]
    async fn test_delegate_ignored_without_host_identity() {
        let client = ExchangeClient::builder("http://localhost")
            .host_identity(false)
            .build();
        client.state.write().await.delegate =
            Some(Arc::new(crate::auth::StaticToken::new("D")));

        let identity = client.resolve_identity().await.unwrap();
        assert!(identity.token.is_none());
    }

    #[test]
    fn test_builder_from_env_requires_url() {
        if std::env::var(ENV_SERVER_URL).is_err() {
            assert!(ExchangeClientBuilder::from_env().is_none());
        }
    }
}
