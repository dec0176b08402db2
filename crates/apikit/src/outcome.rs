//! Per-call request outcome

use std::collections::HashMap;

/// Status codes treated as success. Fixed by contract, not configurable.
pub const ACCEPTED_STATUS: [u16; 2] = [200, 201];

/// The result of one request wrapper invocation
///
/// Response fields are optional so that "no response was received" is
/// distinguishable from "empty response": on a transport-level failure
/// every response field stays `None`, while a semantic failure leaves
/// them populated alongside `error`.
///
/// One outcome is created per call, filled in exactly once during
/// execution, and immutable afterwards. `error` is set if and only if
/// [`success`](Self::success) is false.
#[derive(Debug, Clone, Default)]
pub struct RequestOutcome {
    /// HTTP status code, present only if a response was received
    pub status: Option<u16>,
    /// Response headers, present only if a response was received
    pub headers: Option<HashMap<String, String>>,
    /// Decoded (UTF-8) response body, if any
    pub body: Option<String>,
    /// Raw response payload bytes, present only if a response was received
    pub raw_body: Option<Vec<u8>>,
    /// Failure description: the transport error message, or the response
    /// body (`"[blank]"` when empty) on a rejected status code
    pub error: Option<String>,
}

impl RequestOutcome {
    /// Whether the call succeeded: a response was received and its status
    /// code is in [`ACCEPTED_STATUS`]
    pub fn success(&self) -> bool {
        self.status
            .is_some_and(|code| ACCEPTED_STATUS.contains(&code))
    }
}
