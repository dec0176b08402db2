//! HTTP verb enumeration
//!
//! Dispatch is a closed `match` over the five allowed methods. The only
//! place an unsupported verb can appear is string parsing, which fails
//! with [`Error::UnsupportedVerb`] before any transport call is made.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An HTTP method accepted by the request wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl Verb {
    /// All allowed verbs, in dispatch order
    pub const ALL: [Verb; 5] = [Verb::Get, Verb::Post, Verb::Put, Verb::Patch, Verb::Delete];

    /// Parse a verb name, case-insensitively
    ///
    /// Anything outside the allowed set is rejected with
    /// [`Error::UnsupportedVerb`].
    pub fn parse(verb: &str) -> Result<Self> {
        match verb.to_ascii_uppercase().as_str() {
            "GET" => Ok(Verb::Get),
            "POST" => Ok(Verb::Post),
            "PUT" => Ok(Verb::Put),
            "PATCH" => Ok(Verb::Patch),
            "DELETE" => Ok(Verb::Delete),
            _ => Err(Error::unsupported_verb(verb)),
        }
    }

    /// Canonical upper-case name
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        }
    }

    /// Whether request params travel in the body (JSON) rather than the
    /// query string
    pub fn sends_body(self) -> bool {
        matches!(self, Verb::Post | Verb::Put | Verb::Patch)
    }

    /// Map to the transport-level method type
    pub(crate) fn as_method(self) -> reqwest::Method {
        match self {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Put => reqwest::Method::PUT,
            Verb::Patch => reqwest::Method::PATCH,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Verb::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_allowed_verbs() {
        for verb in Verb::ALL {
            assert_eq!(Verb::parse(verb.as_str()).unwrap(), verb);
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(Verb::parse("get").unwrap(), Verb::Get);
        assert_eq!(Verb::parse("Patch").unwrap(), Verb::Patch);
    }

    #[test]
    fn rejects_verbs_outside_the_allowed_set() {
        for verb in ["TRACE", "OPTIONS", "HEAD", "CONNECT", ""] {
            let error = Verb::parse(verb).unwrap_err();
            assert!(matches!(error, Error::UnsupportedVerb { .. }));
        }
    }

    #[test]
    fn body_verbs() {
        assert!(Verb::Post.sends_body());
        assert!(Verb::Put.sends_body());
        assert!(Verb::Patch.sends_body());
        assert!(!Verb::Get.sends_body());
        assert!(!Verb::Delete.sends_body());
    }
}
