//! Process-wide client
//!
//! For code that cannot pass a [`Client`] around. [`initialize`] registers a
//! client once; the free functions below run against it. The first
//! successful registration wins and every later attempt is rejected.

use std::sync::OnceLock;

use odxproxy_protocol::{QueryModifiers, ResponseEnvelope};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    client::Client,
    config::ClientConfig,
    error::{Error, Result},
};

static GLOBAL_CLIENT: OnceLock<Client> = OnceLock::new();

/// Build a client from `config` and register it process-wide.
///
/// # Errors
///
/// - [`Error::AlreadyInitialized`] if a client is already registered,
///   including when a concurrent call registered first
/// - any error from [`Client::new`]; the slot stays free in that case
pub fn initialize(config: ClientConfig) -> Result<Client> {
    if GLOBAL_CLIENT.get().is_some() {
        return Err(Error::AlreadyInitialized);
    }

    let client = Client::new(config)?;
    GLOBAL_CLIENT
        .set(client.clone())
        .map_err(|_| Error::AlreadyInitialized)?;

    tracing::debug!(
        gateway = %client.config().gateway_url(),
        "Registered process-wide client"
    );
    Ok(client)
}

/// The process-wide client.
///
/// # Errors
///
/// Returns [`Error::NotInitialized`] before [`initialize`] has succeeded.
pub fn current() -> Result<Client> {
    GLOBAL_CLIENT.get().cloned().ok_or(Error::NotInitialized)
}

/// [`Records::search`](crate::Records::search) on the process-wide client.
pub async fn search(
    model: &str,
    params: Vec<Value>,
    keyword: &QueryModifiers,
    id: Option<&str>,
) -> Result<ResponseEnvelope<Vec<i64>>> {
    current()?.records().search(model, params, keyword, id).await
}

/// [`Records::search_read`](crate::Records::search_read) on the process-wide client.
pub async fn search_read<T: DeserializeOwned>(
    model: &str,
    params: Vec<Value>,
    keyword: &QueryModifiers,
    id: Option<&str>,
) -> Result<ResponseEnvelope<Vec<T>>> {
    current()?
        .records()
        .search_read(model, params, keyword, id)
        .await
}

/// [`Records::read`](crate::Records::read) on the process-wide client.
pub async fn read<T: DeserializeOwned>(
    model: &str,
    ids: &[i64],
    keyword: &QueryModifiers,
    id: Option<&str>,
) -> Result<ResponseEnvelope<Vec<T>>> {
    current()?.records().read(model, ids, keyword, id).await
}

/// [`Records::fields_get`](crate::Records::fields_get) on the process-wide client.
pub async fn fields_get<T: DeserializeOwned>(
    model: &str,
    keyword: &QueryModifiers,
    id: Option<&str>,
) -> Result<ResponseEnvelope<T>> {
    current()?.records().fields_get(model, keyword, id).await
}

/// [`Records::search_count`](crate::Records::search_count) on the process-wide client.
pub async fn search_count(
    model: &str,
    params: Vec<Value>,
    keyword: &QueryModifiers,
    id: Option<&str>,
) -> Result<ResponseEnvelope<i64>> {
    current()?
        .records()
        .search_count(model, params, keyword, id)
        .await
}

/// [`Records::create`](crate::Records::create) on the process-wide client.
pub async fn create<T: DeserializeOwned>(
    model: &str,
    params: Vec<Value>,
    keyword: &QueryModifiers,
    id: Option<&str>,
) -> Result<ResponseEnvelope<T>> {
    current()?.records().create(model, params, keyword, id).await
}

/// [`Records::write`](crate::Records::write) on the process-wide client.
pub async fn write<V: Serialize + ?Sized>(
    model: &str,
    ids: &[i64],
    values: &V,
    keyword: &QueryModifiers,
    id: Option<&str>,
) -> Result<ResponseEnvelope<bool>> {
    current()?
        .records()
        .write(model, ids, values, keyword, id)
        .await
}

/// [`Records::unlink`](crate::Records::unlink) on the process-wide client.
pub async fn unlink(
    model: &str,
    ids: &[i64],
    keyword: &QueryModifiers,
    id: Option<&str>,
) -> Result<ResponseEnvelope<bool>> {
    current()?.records().unlink(model, ids, keyword, id).await
}

/// [`Records::call_method`](crate::Records::call_method) on the process-wide client.
pub async fn call_method<T: DeserializeOwned>(
    model: &str,
    fn_name: &str,
    params: Vec<Value>,
    keyword: &QueryModifiers,
    id: Option<&str>,
) -> Result<ResponseEnvelope<T>> {
    current()?
        .records()
        .call_method(model, fn_name, params, keyword, id)
        .await
}
