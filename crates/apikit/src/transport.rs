//! HTTP transport abstraction
//!
//! The request wrapper talks to the network through the [`Transport`]
//! trait so tests can substitute scripted implementations.
//! [`ReqwestTransport`] is the production implementation; it owns a
//! pooled `reqwest::Client` and applies the timeout per request, never
//! client-wide, so concurrent calls cannot interfere.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::verb::Verb;

/// Boxed error produced by a transport. Anything a transport returns is a
/// transport-level failure by definition.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// One outbound request, fully resolved by the wrapper
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method
    pub verb: Verb,
    /// Absolute endpoint URI
    pub uri: String,
    /// Effective header set (defaults + caller headers + token)
    pub headers: HashMap<String, String>,
    /// Query parameters (GET/DELETE) or JSON body (POST/PUT/PATCH)
    pub params: Option<Value>,
    /// Timeout for this request only
    pub timeout: Duration,
}

/// What a transport hands back when a response was received
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// UTF-8 decoded body, when the payload is non-empty and decodable
    pub body: Option<String>,
    /// Raw payload bytes
    pub raw_body: Vec<u8>,
}

/// Capability performing the actual network I/O
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request, bounded by `request.timeout`
    ///
    /// Returns `Ok` whenever a response was received, regardless of its
    /// status code; classification is the wrapper's job.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// Connection-pool configuration for [`ReqwestTransport`]
///
/// Deliberately has no timeout field: timeouts are per call, carried on
/// [`TransportRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Maximum idle connections per host
    pub max_idle_per_host: usize,
    /// Idle connection timeout
    pub idle_timeout: Duration,
    /// TCP keep-alive duration
    pub keepalive: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 10,
            idle_timeout: Duration::from_secs(90),
            keepalive: Duration::from_secs(60),
            user_agent: format!("apikit/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Production transport backed by a pooled `reqwest::Client`
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    config: TransportConfig,
}

impl ReqwestTransport {
    /// Create a transport with the default pool configuration
    pub fn new() -> Result<Self, TransportError> {
        Self::with_config(TransportConfig::default())
    }

    /// Create a transport with a custom pool configuration
    pub fn with_config(config: TransportConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .pool_max_idle_per_host(config.max_idle_per_host)
            .pool_idle_timeout(config.idle_timeout)
            .tcp_keepalive(config.keepalive)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the pool configuration
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.verb.as_method(), &request.uri)
            .timeout(request.timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(params) = &request.params {
            builder = if request.verb.sends_body() {
                builder.json(params)
            } else {
                builder.query(params)
            };
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let raw_body = response.bytes().await?.to_vec();
        let body = if raw_body.is_empty() {
            None
        } else {
            String::from_utf8(raw_body.clone()).ok()
        };

        Ok(TransportResponse {
            status,
            headers,
            body,
            raw_body,
        })
    }
}

/// Transport that refuses every request, for tests and disabled wiring
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTransport;

impl NullTransport {
    /// Create a new null transport
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transport for NullTransport {
    async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, TransportError> {
        Err("transport disabled".into())
    }
}
