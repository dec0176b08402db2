//! Uniform HTTP request wrapper
//!
//! One entry point per verb, all routing through the same pipeline:
//! merge headers, send through the injected [`Transport`], classify the
//! result, report failures to the injected [`Notifier`], and either
//! propagate or quietly return per the `quiet` flag.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::notifier::{ERROR_EVENT, EXCEPTION_EVENT, Notifier, TracingNotifier};
use crate::outcome::RequestOutcome;
use crate::transport::{ReqwestTransport, Transport, TransportRequest};
use crate::verb::Verb;

/// Default per-call timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Placeholder recorded as the error when a rejected response has an
/// empty body
pub const BLANK_BODY: &str = "[blank]";

fn default_headers() -> HashMap<String, String> {
    HashMap::from([
        ("Accept".to_string(), "application/json".to_string()),
        ("Content-Type".to_string(), "application/json".to_string()),
    ])
}

/// Per-call options, all defaultable
///
/// ```
/// use std::time::Duration;
/// use apikit::RequestOptions;
///
/// let options = RequestOptions::new()
///     .header("X-Request-Id", "abc-123")
///     .token("s3cret")
///     .quiet()
///     .timeout(Duration::from_secs(5));
/// assert!(options.quiet);
/// ```
#[derive(Clone)]
pub struct RequestOptions {
    /// Caller headers, merged on top of the mandatory defaults
    /// (`Accept`/`Content-Type: application/json`); caller keys win
    pub headers: HashMap<String, String>,
    /// Query parameters (GET/DELETE) or JSON body (POST/PUT/PATCH)
    pub params: Option<Value>,
    /// Bearer-style credential; fills `Authorization` only when the
    /// caller did not already supply one
    pub token: Option<String>,
    /// Report failures but never propagate them; the caller inspects the
    /// returned [`RequestOutcome`] instead
    pub quiet: bool,
    /// Timeout for this call only
    pub timeout: Duration,
    /// Per-call notifier override
    pub notifier: Option<Arc<dyn Notifier>>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            headers: HashMap::new(),
            params: None,
            token: None,
            quiet: false,
            timeout: DEFAULT_TIMEOUT,
            notifier: None,
        }
    }
}

impl RequestOptions {
    /// Create options with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one request header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the request params
    pub fn params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    /// Set the authorization token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Enable quiet mode
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Set the per-call timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the notifier for this call
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }
}

/// API request client
///
/// Holds the injected transport and notifier; each invocation is
/// otherwise stateless, so one client may serve concurrent calls.
///
/// ```no_run
/// use apikit::{ApiClient, RequestOptions};
///
/// async fn fetch_users() -> apikit::Result<()> {
///     let client = ApiClient::new()?;
///     let outcome = client
///         .get("http://api.example.com/users", RequestOptions::new().token("abcdef"))
///         .await?;
///     assert!(outcome.success());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notifier>,
}

impl ApiClient {
    /// Create a client with the production transport and the default
    /// tracing-backed notifier
    pub fn new() -> Result<Self> {
        let transport = ReqwestTransport::new()
            .map_err(|cause| Error::transport_with_source("failed to build HTTP transport", cause))?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a client around an injected transport
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            notifier: Arc::new(TracingNotifier),
        }
    }

    /// Replace the configured notifier
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// GET request
    pub async fn get(&self, uri: &str, options: RequestOptions) -> Result<RequestOutcome> {
        self.execute(Verb::Get, uri, options).await
    }

    /// POST request
    pub async fn post(&self, uri: &str, options: RequestOptions) -> Result<RequestOutcome> {
        self.execute(Verb::Post, uri, options).await
    }

    /// PUT request
    pub async fn put(&self, uri: &str, options: RequestOptions) -> Result<RequestOutcome> {
        self.execute(Verb::Put, uri, options).await
    }

    /// PATCH request
    pub async fn patch(&self, uri: &str, options: RequestOptions) -> Result<RequestOutcome> {
        self.execute(Verb::Patch, uri, options).await
    }

    /// DELETE request
    pub async fn delete(&self, uri: &str, options: RequestOptions) -> Result<RequestOutcome> {
        self.execute(Verb::Delete, uri, options).await
    }

    /// String-verb front door
    ///
    /// Parses the verb first, so anything outside the allowed set fails
    /// with [`Error::UnsupportedVerb`] without touching the transport.
    pub async fn request(
        &self,
        verb: &str,
        uri: &str,
        options: RequestOptions,
    ) -> Result<RequestOutcome> {
        self.execute(Verb::parse(verb)?, uri, options).await
    }

    /// Execute one request
    ///
    /// Returns the populated [`RequestOutcome`] on success. On failure the
    /// notifier is told exactly once, then the failure is either
    /// propagated (`quiet == false`) or swallowed into the outcome
    /// (`quiet == true`).
    pub async fn execute(
        &self,
        verb: Verb,
        uri: &str,
        options: RequestOptions,
    ) -> Result<RequestOutcome> {
        let headers = effective_headers(&options.headers, options.token.as_deref());
        let notifier = options
            .notifier
            .clone()
            .unwrap_or_else(|| Arc::clone(&self.notifier));

        debug!(verb = %verb, uri, timeout_ms = options.timeout.as_millis() as u64, "dispatching api request");

        let request = TransportRequest {
            verb,
            uri: uri.to_string(),
            headers,
            params: options.params.clone(),
            timeout: options.timeout,
        };

        let mut outcome = RequestOutcome::default();

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(cause) => {
                let message = cause.to_string();
                outcome.error = Some(message.clone());
                warn!(verb = %verb, uri, error = %message, "api request transport failure");
                notifier.error(EXCEPTION_EVENT, json!(message));
                return if options.quiet {
                    Ok(outcome)
                } else {
                    Err(Error::transport_with_source(message, cause))
                };
            }
        };

        let status = response.status;
        outcome.status = Some(status);
        outcome.headers = Some(response.headers);
        outcome.body = response.body;
        outcome.raw_body = Some(response.raw_body);

        if outcome.success() {
            return Ok(outcome);
        }

        let error = match outcome.body.as_deref() {
            Some(body) if !body.is_empty() => body.to_string(),
            _ => BLANK_BODY.to_string(),
        };
        outcome.error = Some(error.clone());
        warn!(verb = %verb, uri, status, "api request rejected by status policy");
        notifier.error(
            ERROR_EVENT,
            json!({
                "response_code": status,
                "response_body": outcome.body,
                "error": error,
            }),
        );

        if options.quiet {
            Ok(outcome)
        } else {
            Err(Error::request_failed(status, error))
        }
    }
}

/// Build the effective header set: mandatory defaults, caller headers on
/// top (winning on conflict, case-insensitively), then the token as
/// `Authorization` only when none was supplied.
fn effective_headers(
    caller: &HashMap<String, String>,
    token: Option<&str>,
) -> HashMap<String, String> {
    let mut headers = default_headers();

    for (name, value) in caller {
        headers.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
        headers.insert(name.clone(), value.clone());
    }

    if let Some(token) = token {
        if !token.is_empty()
            && !headers
                .keys()
                .any(|name| name.eq_ignore_ascii_case("Authorization"))
        {
            headers.insert("Authorization".to_string(), token.to_string());
        }
    }

    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_present_when_no_caller_headers() {
        let headers = effective_headers(&HashMap::new(), None);
        assert_eq!(headers.get("Accept").unwrap(), "application/json");
        assert_eq!(headers.get("Content-Type").unwrap(), "application/json");
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn caller_headers_win_over_defaults_without_duplication() {
        let caller = HashMap::from([
            ("content-type".to_string(), "text/plain".to_string()),
            ("X".to_string(), "1".to_string()),
        ]);
        let headers = effective_headers(&caller, None);
        assert_eq!(headers.get("content-type").unwrap(), "text/plain");
        assert_eq!(headers.get("X").unwrap(), "1");
        assert_eq!(headers.get("Accept").unwrap(), "application/json");
        assert!(!headers.contains_key("Content-Type"));
        assert_eq!(headers.len(), 3);
    }

    #[test]
    fn token_fills_missing_authorization() {
        let headers = effective_headers(&HashMap::new(), Some("abc"));
        assert_eq!(headers.get("Authorization").unwrap(), "abc");
    }

    #[test]
    fn explicit_authorization_wins_over_token() {
        let caller = HashMap::from([("Authorization".to_string(), "zzz".to_string())]);
        let headers = effective_headers(&caller, Some("abc"));
        assert_eq!(headers.get("Authorization").unwrap(), "zzz");
    }

    #[test]
    fn empty_token_is_ignored() {
        let headers = effective_headers(&HashMap::new(), Some(""));
        assert!(!headers.contains_key("Authorization"));
    }
}
