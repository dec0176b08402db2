//! Callable service objects
//!
//! A service is a one-shot business operation: construct it with its
//! arguments, then `call` it. `run` is the quiet path, capturing the
//! result or failure into a [`ServiceOutcome`] instead of propagating;
//! calling [`Service::call`] directly and bubbling with `?` is the
//! raising path.

use async_trait::async_trait;

use crate::error::Result;

/// A one-shot, callable business operation
///
/// ```
/// use apikit::{Result, Service};
/// use async_trait::async_trait;
///
/// struct Doubler(i32);
///
/// #[async_trait]
/// impl Service for Doubler {
///     type Output = i32;
///
///     async fn call(&mut self) -> Result<i32> {
///         Ok(self.0 * 2)
///     }
/// }
///
/// # async fn demo() {
/// let outcome = Doubler(21).run().await;
/// assert!(outcome.success());
/// assert_eq!(outcome.result, Some(42));
/// # }
/// ```
#[async_trait]
pub trait Service: Send + Sized {
    /// Value produced by a successful call
    type Output: Send;

    /// Perform the operation, propagating failures
    async fn call(&mut self) -> Result<Self::Output>;

    /// Perform the operation, capturing the result and any failure into
    /// a [`ServiceOutcome`] without propagating
    async fn run(self) -> ServiceOutcome<Self::Output> {
        let mut service = self;
        match service.call().await {
            Ok(result) => ServiceOutcome {
                result: Some(result),
                error: None,
            },
            Err(cause) => {
                tracing::warn!(error = %cause, "service call failed");
                ServiceOutcome {
                    result: None,
                    error: Some(cause.to_string()),
                }
            }
        }
    }
}

/// Captured result of a service run
///
/// `error` is set if and only if [`success`](Self::success) is false,
/// mirroring the request outcome invariant.
#[derive(Debug, Clone)]
pub struct ServiceOutcome<T> {
    /// The produced value, when the call succeeded
    pub result: Option<T>,
    /// Failure description, when the call failed
    pub error: Option<String>,
}

impl<T> ServiceOutcome<T> {
    /// Whether the call returned `Ok`
    pub fn success(&self) -> bool {
        self.error.is_none()
    }
}
