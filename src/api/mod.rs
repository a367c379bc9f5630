//! Remote API module.
//!
//! The backend wraps every payload in a JSON envelope of the shape
//! `{ data: ... }` or `{ msg: ..., data: ... }`. This module decodes that
//! envelope and exposes the typed client used by the cache.

mod client;

pub use client::*;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::CacheError;

/// Response envelope used by every backend endpoint.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Value,
}

/// Decode an envelope body into the expected payload type.
///
/// Fails closed: a missing or null `data` field decodes as the payload's
/// default rather than an error, matching the backend's habit of omitting
/// sections it has nothing to report for.
pub fn unwrap_data<T>(body: Value) -> Result<T, CacheError>
where
    T: DeserializeOwned + Default,
{
    let envelope: ApiEnvelope = serde_json::from_value(body)?;
    if envelope.data.is_null() {
        tracing::debug!(
            msg = envelope.msg.as_deref().unwrap_or(""),
            "envelope carried no data, using defaults"
        );
        return Ok(T::default());
    }
    serde_json::from_value(envelope.data).map_err(CacheError::from)
}
