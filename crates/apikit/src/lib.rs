//! # apikit — conventions for outbound API calls
//!
//! A thin set of conventions used by application code to make outbound
//! HTTP calls, structure business-logic operations as callable objects,
//! and forward error/exception events to a monitoring surface.
//!
//! | Concern | Entry point |
//! |---------|-------------|
//! | HTTP calls | [`ApiClient`] — one uniform method per verb |
//! | Call result | [`RequestOutcome`] — optional fields, `success()` |
//! | Service objects | [`Service`] + [`ServiceOutcome`] |
//! | Error reporting | [`Notifier`] — `TracingNotifier` wired by default |
//! | Network I/O | [`Transport`] — `ReqwestTransport` in production |
//!
//! ## Usage
//!
//! ```no_run
//! use apikit::{ApiClient, RequestOptions};
//! use serde_json::json;
//!
//! async fn create_user() -> apikit::Result<()> {
//!     let client = ApiClient::new()?;
//!     let outcome = client
//!         .post(
//!             "http://api.example.com/users",
//!             RequestOptions::new()
//!                 .token("abcdef")
//!                 .params(json!({ "user_id": 101 })),
//!         )
//!         .await?;
//!     assert!(outcome.success());
//!     Ok(())
//! }
//! ```
//!
//! Failures are reported to the configured [`Notifier`] exactly once and,
//! by default, propagated as [`Error`]. With `RequestOptions::quiet()` the
//! call always returns a [`RequestOutcome`] and the caller checks
//! `success()`/`error` itself.

/// Error types and the crate-wide `Result` alias
pub mod error;

/// Error notification capability and default implementations
pub mod notifier;

/// Per-call request outcome
pub mod outcome;

/// The uniform HTTP request wrapper
pub mod request;

/// Callable service objects
pub mod service;

/// HTTP transport abstraction and the reqwest-backed implementation
pub mod transport;

/// HTTP verb enumeration with closed dispatch
pub mod verb;

pub use error::{Error, Result};
pub use notifier::{ERROR_EVENT, EXCEPTION_EVENT, Notifier, NullNotifier, TracingNotifier};
pub use outcome::{ACCEPTED_STATUS, RequestOutcome};
pub use request::{ApiClient, BLANK_BODY, DEFAULT_TIMEOUT, RequestOptions};
pub use service::{Service, ServiceOutcome};
pub use transport::{
    NullTransport, ReqwestTransport, Transport, TransportConfig, TransportError, TransportRequest,
    TransportResponse,
};
pub use verb::Verb;
