//! Main client implementation for the ODX Proxy gateway

use std::fmt;
use std::sync::Arc;

use odxproxy_protocol::{QueryModifiers, RequestEnvelope, ResponseEnvelope};
use odxproxy_transport::{HttpTransport, HttpTransportConfig, Transport};
use serde::de::DeserializeOwned;

use crate::{
    config::ClientConfig,
    envelope::{CallSpec, EnvelopeBuilder},
    error::Result,
    http::{Gateway, decode_response},
    id::{IdGenerator, UuidV7Generator},
    observability::{CallMetadata, CallTimer},
    resources::Records,
};

/// Client for executing Odoo operations through the ODX Proxy gateway.
///
/// Cloning is cheap; clones share the configuration and the connection pool.
/// Pass the handle to whatever needs it, or register one process-wide with
/// [`initialize`](crate::initialize).
///
/// # Example
///
/// ```rust,no_run
/// use odxproxy::{Client, ClientConfig, InstanceInfo, QueryModifiers};
///
/// # async fn example() -> Result<(), odxproxy::Error> {
/// let config = ClientConfig::new(InstanceInfo::new(
///     "https://erp.example.com",
///     2,
///     "prod",
///     "odoo-api-key",
/// ))?;
/// let client = Client::new(config)?;
///
/// let count = client
///     .records()
///     .search_count("res.partner", vec![], &QueryModifiers::new(), None)
///     .await?;
/// println!("{:?}", count.result);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: ClientConfig,
    gateway: Gateway,
    ids: Arc<dyn IdGenerator>,
}

impl Client {
    /// Create a client backed by a pooled HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    /// Create a client builder for advanced configuration.
    pub fn builder(config: ClientConfig) -> ClientBuilder {
        ClientBuilder {
            config,
            transport: None,
            ids: None,
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Access the per-action record operations.
    pub fn records(&self) -> Records {
        Records::new(self.clone())
    }

    /// Build the envelope for `call` without sending it.
    pub fn build_envelope(
        &self,
        call: CallSpec,
        keyword: &QueryModifiers,
        id: Option<&str>,
    ) -> RequestEnvelope {
        EnvelopeBuilder::new(self.inner.config.instance(), self.inner.ids.as_ref())
            .build(call, keyword, id)
    }

    /// Build and send the envelope for `call`.
    ///
    /// # Errors
    ///
    /// See [`Client::send`].
    pub async fn execute<T: DeserializeOwned>(
        &self,
        call: CallSpec,
        keyword: &QueryModifiers,
        id: Option<&str>,
    ) -> Result<ResponseEnvelope<T>> {
        let envelope = self.build_envelope(call, keyword, id);
        self.send(&envelope).await
    }

    /// Send a prepared envelope and decode the reply.
    ///
    /// One call is one network exchange; nothing is retried.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`](crate::Error::Transport) when the exchange fails or times out
    /// - [`Error::Http`](crate::Error::Http) on a non-2xx status or empty body
    /// - [`Error::Decode`](crate::Error::Decode) when the reply is not an envelope
    /// - [`Error::Application`](crate::Error::Application) when the reply carries an error
    pub async fn send<T: DeserializeOwned>(
        &self,
        envelope: &RequestEnvelope,
    ) -> Result<ResponseEnvelope<T>> {
        let body = envelope.to_json()?;
        let metadata = CallMetadata::from_envelope(envelope).with_body_size(body.len());
        metadata.log_request();

        let timer = CallTimer::start();
        let outcome = self.exchange(envelope.odoo_instance.api_key(), body).await;

        match &outcome {
            Ok(_) => metadata.log_success(timer.elapsed()),
            Err(e) => metadata.log_error(timer.elapsed(), e.code(), &e.to_string()),
        }

        outcome
    }

    async fn exchange<T: DeserializeOwned>(
        &self,
        api_key: &str,
        body: Vec<u8>,
    ) -> Result<ResponseEnvelope<T>> {
        let reply = self.inner.gateway.post(api_key, body).await?;
        decode_response(&reply)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.inner.config)
            .field("gateway", &self.inner.gateway)
            .field("ids", &self.inner.ids)
            .finish()
    }
}

/// Builder for creating a configured Client.
pub struct ClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
    ids: Option<Arc<dyn IdGenerator>>,
}

impl ClientBuilder {
    /// Use a custom transport instead of the pooled HTTP client.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use a custom identifier generator instead of UUIDv7.
    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Build the client with the configured options.
    ///
    /// # Errors
    ///
    /// Returns an error if the default HTTP transport cannot be built.
    pub fn build(self) -> Result<Client> {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::with_config(HttpTransportConfig {
                timeouts: self.config.timeouts(),
                ..Default::default()
            })?),
        };

        let gateway = Gateway::new(transport, self.config.execute_url());

        Ok(Client {
            inner: Arc::new(ClientInner {
                config: self.config,
                gateway,
                ids: self.ids.unwrap_or_else(|| Arc::new(UuidV7Generator)),
            }),
        })
    }
}
