//! Record operations on Odoo models

use odxproxy_protocol::{QueryModifiers, ResponseEnvelope};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{client::Client, envelope::CallSpec, error::Result};

/// Record operations resource.
///
/// Every method builds one envelope and performs one gateway call. The
/// `keyword` argument is only read; what goes on the wire is a masked copy.
/// `id` is used verbatim when non-empty, otherwise a fresh one is generated.
#[derive(Debug, Clone)]
pub struct Records {
    client: Client,
}

impl Records {
    /// Create a new Records resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Ids of the records matching a domain.
    ///
    /// Only the `context` modifier is sent.
    pub async fn search(
        &self,
        model: &str,
        params: Vec<Value>,
        keyword: &QueryModifiers,
        id: Option<&str>,
    ) -> Result<ResponseEnvelope<Vec<i64>>> {
        self.client
            .execute(CallSpec::search(model, params), keyword, id)
            .await
    }

    /// Search and read matching records in one call.
    pub async fn search_read<T: DeserializeOwned>(
        &self,
        model: &str,
        params: Vec<Value>,
        keyword: &QueryModifiers,
        id: Option<&str>,
    ) -> Result<ResponseEnvelope<Vec<T>>> {
        self.client
            .execute(CallSpec::search_read(model, params), keyword, id)
            .await
    }

    /// Read records by id.
    ///
    /// Only the `fields` and `context` modifiers are sent.
    pub async fn read<T: DeserializeOwned>(
        &self,
        model: &str,
        ids: &[i64],
        keyword: &QueryModifiers,
        id: Option<&str>,
    ) -> Result<ResponseEnvelope<Vec<T>>> {
        self.client
            .execute(CallSpec::read(model, ids), keyword, id)
            .await
    }

    /// Field definitions of a model.
    ///
    /// Only the `context` modifier is sent.
    pub async fn fields_get<T: DeserializeOwned>(
        &self,
        model: &str,
        keyword: &QueryModifiers,
        id: Option<&str>,
    ) -> Result<ResponseEnvelope<T>> {
        self.client
            .execute(CallSpec::fields_get(model), keyword, id)
            .await
    }

    /// Number of records matching a domain.
    pub async fn search_count(
        &self,
        model: &str,
        params: Vec<Value>,
        keyword: &QueryModifiers,
        id: Option<&str>,
    ) -> Result<ResponseEnvelope<i64>> {
        self.client
            .execute(CallSpec::search_count(model, params), keyword, id)
            .await
    }

    /// Create a record. Odoo answers with the new id, or a list of ids when
    /// several value maps are passed.
    pub async fn create<T: DeserializeOwned>(
        &self,
        model: &str,
        params: Vec<Value>,
        keyword: &QueryModifiers,
        id: Option<&str>,
    ) -> Result<ResponseEnvelope<T>> {
        self.client
            .execute(CallSpec::create(model, params), keyword, id)
            .await
    }

    /// Update records by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`](crate::Error::Serialization) if
    /// `values` cannot be converted to JSON, before anything is sent.
    pub async fn write<V: Serialize + ?Sized>(
        &self,
        model: &str,
        ids: &[i64],
        values: &V,
        keyword: &QueryModifiers,
        id: Option<&str>,
    ) -> Result<ResponseEnvelope<bool>> {
        let values = serde_json::to_value(values)?;
        self.client
            .execute(CallSpec::write(model, ids, values), keyword, id)
            .await
    }

    /// Delete records by id.
    pub async fn unlink(
        &self,
        model: &str,
        ids: &[i64],
        keyword: &QueryModifiers,
        id: Option<&str>,
    ) -> Result<ResponseEnvelope<bool>> {
        self.client
            .execute(CallSpec::unlink(model, ids), keyword, id)
            .await
    }

    /// Call an arbitrary public method of a model.
    pub async fn call_method<T: DeserializeOwned>(
        &self,
        model: &str,
        fn_name: &str,
        params: Vec<Value>,
        keyword: &QueryModifiers,
        id: Option<&str>,
    ) -> Result<ResponseEnvelope<T>> {
        self.client
            .execute(CallSpec::call_method(model, fn_name, params), keyword, id)
            .await
    }
}
