// Wire mapping for inbound backend event envelopes
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::events::{
    AUTH_CODE_ISSUED, AUTH_TOKEN_REFRESHED, BackendEvent, DeviceCode, STATS_READY,
};
use crate::domain::samples::Bucket;

/// The `{name, payload}` envelope the backend posts to the panel.
#[derive(Debug, Deserialize)]
pub struct WireEvent {
    pub name: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

#[derive(Debug, Error)]
pub enum EventDecodeError {
    #[error("malformed payload for {name}: {source}")]
    Malformed {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenPayload {
    opaque_token: String,
}

#[derive(Debug, Deserialize)]
struct StatsPayload {
    buckets: Vec<Bucket>,
}

/// Map a wire envelope to a typed event. Names without a payload mapping
/// (the `*ERROR*` family among them) pass through as `Other`.
pub fn decode_event(wire: WireEvent) -> Result<BackendEvent, EventDecodeError> {
    match wire.name.as_str() {
        AUTH_CODE_ISSUED => {
            let code: DeviceCode = decode_payload(&wire.name, wire.payload)?;
            Ok(BackendEvent::AuthCodeIssued(code))
        }
        AUTH_TOKEN_REFRESHED => {
            let payload: TokenPayload = decode_payload(&wire.name, wire.payload)?;
            Ok(BackendEvent::AuthTokenRefreshed {
                token: payload.opaque_token,
            })
        }
        STATS_READY => {
            let payload: StatsPayload = decode_payload(&wire.name, wire.payload)?;
            Ok(BackendEvent::StatsReady {
                buckets: payload.buckets,
            })
        }
        _ => Ok(BackendEvent::Other { name: wire.name }),
    }
}

fn decode_payload<T: DeserializeOwned>(
    name: &str,
    payload: serde_json::Value,
) -> Result<T, EventDecodeError> {
    serde_json::from_value(payload).map_err(|source| EventDecodeError::Malformed {
        name: name.to_string(),
        source,
    })
}
