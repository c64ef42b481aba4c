//! HTTP transport client implementation
//!
//! Implements the Transport trait on top of a pooled `reqwest` client.

use crate::error::{Result, TransportError};
use crate::timeout::TimeoutPolicy;
use crate::traits::{HttpRequest, HttpResponse, Transport};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// HTTP transport implementation
///
/// Handles HTTP requests with:
/// - Connection pooling shared by every clone
/// - Connect, write and read timeouts
/// - No retries: every call is exactly one exchange
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Arc<ReqwestClient>,
    timeouts: TimeoutPolicy,
}

impl HttpTransport {
    /// Create a new HTTP transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpTransportConfig::default())
    }

    /// Create a new HTTP transport with custom configuration
    pub fn with_config(config: HttpTransportConfig) -> Result<Self> {
        let timeouts = config.timeouts;
        let client = ReqwestClient::builder()
            .connect_timeout(timeouts.connect)
            .read_timeout(timeouts.read)
            .timeout(timeouts.exchange())
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self {
            client: Arc::new(client),
            timeouts,
        })
    }

    /// The timeout policy this transport applies
    pub fn timeouts(&self) -> TimeoutPolicy {
        self.timeouts
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_http(&self, request: HttpRequest) -> Result<HttpResponse> {
        let method = reqwest::Method::from_bytes(request.method.to_uppercase().as_bytes())
            .map_err(|_| {
                TransportError::InvalidRequest(format!(
                    "Unsupported HTTP method: {}",
                    request.method
                ))
            })?;

        let started = Instant::now();
        let budget = self.timeouts.exchange();

        let mut req = self.client.request(method, &request.url);

        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let response = req
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(e, budget))?;

        let status = response.status();
        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.to_string(), v.to_string());
            }
        }

        // A body that fails to arrive in time is a timeout; any other read
        // failure leaves the body absent and lets the caller classify it.
        let body = match response.bytes().await {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(e) if e.is_timeout() => return Err(TransportError::from_reqwest(e, budget)),
            Err(e) => {
                tracing::debug!(error = %e, "Failed to read response body");
                None
            }
        };

        tracing::debug!(
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis(),
            body_size = body.as_ref().map(Vec::len),
            "Received HTTP response"
        );

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body,
        })
    }
}

/// HTTP transport configuration
#[derive(Clone, Debug)]
pub struct HttpTransportConfig {
    /// Connect, write and read budgets
    pub timeouts: TimeoutPolicy,

    /// Maximum idle connections per host
    pub pool_max_idle_per_host: usize,

    /// `User-Agent` header value
    pub user_agent: String,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            timeouts: TimeoutPolicy::default(),
            pool_max_idle_per_host: 10,
            user_agent: format!("odxproxy-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_http_transport_creation() {
        let transport = HttpTransport::new().expect("Failed to create transport");
        assert_eq!(transport.timeouts(), TimeoutPolicy::default());
    }

    #[test]
    fn test_http_transport_with_config() {
        let config = HttpTransportConfig {
            timeouts: TimeoutPolicy::new(
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(3),
            ),
            pool_max_idle_per_host: 5,
            user_agent: "test-agent".to_string(),
        };

        let transport = HttpTransport::with_config(config).expect("Failed to create transport");
        assert_eq!(transport.timeouts().exchange(), Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_unsupported_method() {
        let transport = HttpTransport::new().unwrap();
        let err = transport
            .send_http(HttpRequest::new("BAD METHOD", "http://localhost"))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::InvalidRequest(_)));
    }
}
