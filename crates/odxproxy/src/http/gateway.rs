//! Delivery of request envelopes to the gateway

use std::fmt;
use std::sync::Arc;

use odxproxy_transport::{HttpRequest, Transport};

use crate::error::{Error, Result};

/// Header carrying the instance API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Posts envelopes to `{gateway}/api/odoo/execute` over a [`Transport`].
#[derive(Clone)]
pub struct Gateway {
    transport: Arc<dyn Transport>,
    execute_url: String,
}

impl Gateway {
    /// Create a gateway bound to `execute_url`.
    pub fn new(transport: Arc<dyn Transport>, execute_url: impl Into<String>) -> Self {
        Self {
            transport,
            execute_url: execute_url.into(),
        }
    }

    /// Endpoint every envelope is posted to.
    pub fn execute_url(&self) -> &str {
        &self.execute_url
    }

    /// Post an encoded envelope and return the raw reply body.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if the exchange does not complete
    /// - [`Error::Http`] on a non-2xx status or an empty/unreadable body
    pub async fn post(&self, api_key: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        let request = HttpRequest::new("POST", self.execute_url.as_str())
            .with_header("Accept", JSON_CONTENT_TYPE)
            .with_header("Content-Type", JSON_CONTENT_TYPE)
            .with_header(API_KEY_HEADER, api_key)
            .with_body(body);

        let response = self.transport.send_http(request).await?;

        if !response.is_success() {
            return Err(Error::Http {
                status: response.status,
                status_text: response.status_text.clone(),
                body: response.text(),
            });
        }

        match response.readable_body() {
            Some(body) => Ok(body.to_vec()),
            None => Err(Error::Http {
                status: response.status,
                status_text: response.status_text.clone(),
                body: None,
            }),
        }
    }
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway")
            .field("execute_url", &self.execute_url)
            .finish_non_exhaustive()
    }
}
