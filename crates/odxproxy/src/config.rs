//! Configuration for the ODX Proxy client

use odxproxy_protocol::InstanceInfo;
use odxproxy_transport::TimeoutPolicy;
use std::time::Duration;
use url::Url;

use crate::error::{Error, Result};

/// Public gateway used when no gateway URL is configured.
pub const DEFAULT_GATEWAY_URL: &str = "https://gateway.odxproxy.io";

/// Configuration for the ODX Proxy client.
///
/// Built once through [`ClientConfigBuilder`] and never modified afterwards.
/// The gateway URL is stored without its trailing `/`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    instance: InstanceInfo,
    gateway_url: String,
    timeouts: TimeoutPolicy,
}

impl ClientConfig {
    /// Create a configuration for `instance` with the default gateway and timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the instance descriptor is incomplete.
    pub fn new(instance: InstanceInfo) -> Result<Self> {
        Self::builder().instance(instance).build()
    }

    /// Create a new builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// The Odoo instance every call targets.
    pub fn instance(&self) -> &InstanceInfo {
        &self.instance
    }

    /// Gateway base URL, without trailing slash.
    pub fn gateway_url(&self) -> &str {
        &self.gateway_url
    }

    /// Full URL of the execute endpoint.
    pub fn execute_url(&self) -> String {
        format!("{}{}", self.gateway_url, odxproxy_protocol::EXECUTE_PATH)
    }

    /// Timeout policy for gateway calls.
    pub fn timeouts(&self) -> TimeoutPolicy {
        self.timeouts
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first, if present.
    /// This will look for:
    /// - `ODXPROXY_INSTANCE_URL` for the Odoo server URL (required)
    /// - `ODXPROXY_USER_ID` for the Odoo user id (required)
    /// - `ODXPROXY_DB` for the database name (required)
    /// - `ODXPROXY_API_KEY` for the Odoo API key (required)
    /// - `ODXPROXY_GATEWAY_URL` for the gateway base URL
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or malformed.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        use std::env;

        let _ = dotenvy::dotenv();

        let required = |name: &str| {
            env::var(name).map_err(|_| Error::InvalidConfig(format!("{} is not set", name)))
        };

        let user_id = required("ODXPROXY_USER_ID")?;
        let user_id = user_id.trim().parse::<i64>().map_err(|_| {
            Error::InvalidConfig(format!("ODXPROXY_USER_ID is not a number: {}", user_id))
        })?;

        let instance = InstanceInfo::new(
            required("ODXPROXY_INSTANCE_URL")?,
            user_id,
            required("ODXPROXY_DB")?,
            required("ODXPROXY_API_KEY")?,
        );

        let mut builder = Self::builder().instance(instance);

        // Gateway URL
        if let Ok(gateway_url) = env::var("ODXPROXY_GATEWAY_URL") {
            builder = builder.gateway_url(gateway_url);
        }

        builder.build()
    }
}

/// Builder for creating ClientConfig with a fluent API.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    instance: Option<InstanceInfo>,
    gateway_url: Option<String>,
    timeouts: TimeoutPolicy,
}

impl ClientConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target Odoo instance.
    pub fn instance(mut self, instance: InstanceInfo) -> Self {
        self.instance = Some(instance);
        self
    }

    /// Set the gateway base URL.
    ///
    /// Defaults to [`DEFAULT_GATEWAY_URL`].
    pub fn gateway_url(mut self, gateway_url: impl Into<String>) -> Self {
        self.gateway_url = Some(gateway_url.into());
        self
    }

    /// Set the whole timeout policy.
    pub fn timeouts(mut self, timeouts: TimeoutPolicy) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.connect = timeout;
        self
    }

    /// Set the read timeout.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.read = timeout;
        self
    }

    /// Set the write timeout.
    pub fn write_timeout(mut self, timeout: Duration) -> Self {
        self.timeouts.write = timeout;
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No instance was set, or its URL or database is empty
    /// - The gateway URL is empty, unparsable, or not http/https
    pub fn build(self) -> Result<ClientConfig> {
        let instance = self
            .instance
            .ok_or_else(|| Error::InvalidConfig("instance descriptor is required".to_string()))?;

        if instance.url.trim().is_empty() {
            return Err(Error::InvalidConfig("instance URL cannot be empty".to_string()));
        }
        if instance.db.trim().is_empty() {
            return Err(Error::InvalidConfig("database name cannot be empty".to_string()));
        }

        let gateway_url = normalize_gateway_url(
            self.gateway_url
                .unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string()),
        )?;

        Ok(ClientConfig {
            instance,
            gateway_url,
            timeouts: self.timeouts,
        })
    }
}

/// Strip one trailing `/` and check the URL is a usable http(s) address.
fn normalize_gateway_url(raw: String) -> Result<String> {
    if raw.trim().is_empty() {
        return Err(Error::InvalidUrl("Gateway URL cannot be empty".to_string()));
    }

    let url: Url = raw
        .parse()
        .map_err(|e| Error::InvalidUrl(format!("{}: {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(Error::InvalidUrl(format!(
                "Invalid URL scheme '{}'. Only 'http' and 'https' are supported.",
                scheme
            )));
        }
    }

    Ok(match raw.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => raw,
    })
}
