//! Odoo instance descriptor
//!
//! Identifies which backend database, user and credentials a call targets.
//! The gateway receives it verbatim as `odoo_instance` in every request.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The Odoo instance a call targets.
///
/// The API key is kept in a [`SecretString`] so it never shows up in `Debug`
/// output, but it is serialized in clear text because the gateway needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceInfo {
    /// Base URL of the Odoo server
    pub url: String,

    /// Id of the Odoo user the calls run as
    pub user_id: i64,

    /// Database name
    pub db: String,

    /// Odoo API key of that user
    #[serde(serialize_with = "expose_secret", deserialize_with = "secret_string")]
    pub api_key: SecretString,
}

impl InstanceInfo {
    /// Create a new instance descriptor.
    pub fn new(
        url: impl Into<String>,
        user_id: i64,
        db: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            user_id,
            db: db.into(),
            api_key: SecretString::new(api_key.into().into_boxed_str()),
        }
    }

    /// The API key in clear text.
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl PartialEq for InstanceInfo {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
            && self.user_id == other.user_id
            && self.db == other.db
            && self.api_key() == other.api_key()
    }
}

impl Eq for InstanceInfo {}

fn expose_secret<S: Serializer>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret.expose_secret())
}

fn secret_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SecretString, D::Error> {
    let value = String::deserialize(deserializer)?;
    Ok(SecretString::new(value.into_boxed_str()))
}
