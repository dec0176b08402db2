//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for apikit
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure: the call never produced a response
    /// (connection refused, DNS failure, timeout, TLS error, ...)
    #[error("{message}")]
    Transport {
        /// Message taken from the underlying transport error
        message: String,
        /// The underlying transport error, when available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Semantic failure: a response was received but its status code is
    /// outside the accepted set
    #[error("ApiRequest Error {status}: {error}")]
    RequestFailed {
        /// HTTP status code of the rejected response
        status: u16,
        /// Response body, or the `"[blank]"` placeholder when empty
        error: String,
    },

    /// Verb outside the allowed set {GET, POST, PUT, PATCH, DELETE}
    #[error("unsupported HTTP verb: {verb}")]
    UnsupportedVerb {
        /// The verb as supplied by the caller
        verb: String,
    },

    /// Generic string-based error, used by service objects to flag a
    /// failed operation
    #[error("{message}")]
    Operation {
        /// Description of the failed operation
        message: String,
    },
}

impl Error {
    /// Create a transport error without a source
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Create a transport error wrapping the underlying cause
    pub fn transport_with_source<S: Into<String>>(
        message: S,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Transport {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a semantic request failure
    pub fn request_failed<S: Into<String>>(status: u16, error: S) -> Self {
        Self::RequestFailed {
            status,
            error: error.into(),
        }
    }

    /// Create an unsupported-verb error
    pub fn unsupported_verb<S: Into<String>>(verb: S) -> Self {
        Self::UnsupportedVerb { verb: verb.into() }
    }

    /// Create a generic operation error
    pub fn operation<S: Into<String>>(message: S) -> Self {
        Self::Operation {
            message: message.into(),
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::operation(s)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Operation { message: s }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_display_format() {
        let error = Error::request_failed(500, "server down");
        assert_eq!(format!("{error}"), "ApiRequest Error 500: server down");
    }

    #[test]
    fn transport_error_carries_message() {
        let error = Error::transport("connection refused");
        match error {
            Error::Transport { message, source } => {
                assert_eq!(message, "connection refused");
                assert!(source.is_none());
            }
            _ => panic!("Expected Transport error"),
        }
    }

    #[test]
    fn unsupported_verb_names_the_verb() {
        let error = Error::unsupported_verb("TRACE");
        assert_eq!(format!("{error}"), "unsupported HTTP verb: TRACE");
    }

    #[test]
    fn operation_error_from_str() {
        let error: Error = "boom".into();
        assert!(matches!(error, Error::Operation { .. }));
        assert_eq!(format!("{error}"), "boom");
    }
}
