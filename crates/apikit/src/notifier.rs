//! Error notification capability
//!
//! The original monitoring integration is a thin delegation shim to an
//! external provider. Here the capability is a single-method trait so the
//! backend can be swapped without touching call sites; the wired default
//! emits structured `tracing` events, which deployments bridge to their
//! monitoring service of choice.

use serde_json::Value;

/// Event tag for transport-level failures (no response obtained)
pub const EXCEPTION_EVENT: &str = "ApiRequest Exception";

/// Event tag for semantic failures (response rejected by status policy)
pub const ERROR_EVENT: &str = "ApiRequest Error";

/// Receiver of structured error/exception events
///
/// Implementations must be safe for concurrent read-only use; the request
/// wrapper shares one notifier across calls.
pub trait Notifier: Send + Sync {
    /// Report a failure event
    ///
    /// `tag` is one of [`EXCEPTION_EVENT`] or [`ERROR_EVENT`]; `payload`
    /// is the exception message (JSON string) for the former and a
    /// `{response_code, response_body, error}` object for the latter.
    fn error(&self, tag: &str, payload: Value);
}

/// Default notifier: emits structured `tracing::error!` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Create a new tracing-backed notifier
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn error(&self, tag: &str, payload: Value) {
        tracing::error!(event = tag, payload = %payload, "api request failure");
    }
}

/// Notifier that discards every event, for tests and opted-out callers
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl NullNotifier {
    /// Create a new null notifier
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for NullNotifier {
    fn error(&self, _tag: &str, _payload: Value) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn notifiers_satisfy_the_capability_trait() {
        let notifiers: [&dyn Notifier; 2] = [&TracingNotifier, &NullNotifier];
        for notifier in notifiers {
            notifier.error(EXCEPTION_EVENT, json!("connection refused"));
            notifier.error(ERROR_EVENT, json!({ "response_code": 500 }));
        }
    }
}
