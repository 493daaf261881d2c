//! Per-call and client-wide options.

use std::future::Future;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use serde_json::Value;

type CallbackFn = dyn Fn(Option<String>, Option<Value>) -> BoxFuture<'static, ()> + Send + Sync;

/// Default environment variable holding the server URL.
pub const ENV_SERVER_URL: &str = "SPIRITEX_SERVER_URL";

/// Listener notified with the outcome of a command.
///
/// Invoked exactly once per dispatch with either `(Some(message), None)` on
/// failure or `(None, Some(result))` on success.
///
/// ```rust
/// use spiritex_client::rest::Callback;
///
/// let callback = Callback::new(|error, result| async move {
///     match error {
///         Some(message) => eprintln!("failed: {message}"),
///         None => println!("ok: {:?}", result),
///     }
/// });
/// ```
#[derive(Clone)]
pub struct Callback(Arc<CallbackFn>);

impl Callback {
    /// Create a callback from an async closure.
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(Option<String>, Option<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let inner: Arc<CallbackFn> = Arc::new(
            move |error: Option<String>, result: Option<Value>| -> BoxFuture<'static, ()> {
                Box::pin(f(error, result))
            },
        );
        Self(inner)
    }

    /// Create a callback from a synchronous closure.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Option<&str>, Option<&Value>) + Send + Sync + 'static,
    {
        Self::new(move |error, result| {
            f(error.as_deref(), result.as_ref());
            std::future::ready(())
        })
    }

    pub(crate) async fn invoke(&self, error: Option<&str>, result: Option<&Value>) {
        (self.0)(error.map(str::to_owned), result.cloned()).await
    }
}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Callback")
    }
}

/// Options for a single call.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Invoked after the global callback, if any
    pub callback: Option<Callback>,
}

impl CallOptions {
    /// Create empty call options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-call callback.
    pub fn callback(mut self, callback: Callback) -> Self {
        self.callback = Some(callback);
        self
    }
}

/// Process-wide options, fixed when the client is built.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Log every command path and its parameters before sending
    pub log_requests: bool,
    /// Log every command path and its decoded response
    pub log_responses: bool,
    /// Invoked for every call, before the per-call callback
    pub global_callback: Option<Callback>,
    /// Raise errors even when a callback already received them
    pub throw_handled_errors: bool,
    /// Whether the host runtime supports delegated identity.
    ///
    /// When false, a connected identity delegate is never asked for a token.
    pub host_identity: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            log_requests: false,
            log_responses: false,
            global_callback: None,
            throw_handled_errors: false,
            host_identity: true,
        }
    }
}

impl ClientOptions {
    /// Read the boolean flags from the environment.
    ///
    /// Recognizes `SPIRITEX_LOG_REQUESTS`, `SPIRITEX_LOG_RESPONSES`, and
    /// `SPIRITEX_THROW_HANDLED_ERRORS`; unset variables keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_requests: env_flag("SPIRITEX_LOG_REQUESTS").unwrap_or(defaults.log_requests),
            log_responses: env_flag("SPIRITEX_LOG_RESPONSES").unwrap_or(defaults.log_responses),
            throw_handled_errors: env_flag("SPIRITEX_THROW_HANDLED_ERRORS")
                .unwrap_or(defaults.throw_handled_errors),
            ..defaults
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name).ok().map(|value| parse_flag(&value))
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_default_options() {
        let options = ClientOptions::default();
        assert!(!options.log_requests);
        assert!(!options.throw_handled_errors);
        assert!(options.host_identity);
        assert!(options.global_callback.is_none());
    }

    #[tokio::test]
    async fn test_callback_from_fn_receives_arguments() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let callback = Callback::from_fn(move |error, result| {
            sink.lock()
                .unwrap()
                .push((error.map(str::to_owned), result.cloned()));
        });

        callback.invoke(None, Some(&serde_json::json!(5))).await;
        callback.invoke(Some("boom"), None).await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0], (None, Some(serde_json::json!(5))));
        assert_eq!(seen[1], (Some("boom".to_string()), None));
    }
}
