//! Record codec - stored bytes to structured records and back.
//!
//! Point reads decode strictly; range scans decode leniently so one foreign
//! payload cannot fail a whole query.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::ChaincodeError;

/// Serialise a record to its canonical JSON bytes.
pub fn encode<T: Serialize>(record: &T) -> Result<Vec<u8>, ChaincodeError> {
    serde_json::to_vec(record).map_err(|e| ChaincodeError::Encode(e.to_string()))
}

/// Strict decode for point reads.
///
/// Empty bytes mean the key holds nothing and fail with `NotFound`; anything
/// that does not parse as `T` fails with `MalformedRecord`.
pub fn decode<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Result<T, ChaincodeError> {
    if bytes.is_empty() {
        return Err(ChaincodeError::NotFound(key.to_string()));
    }
    serde_json::from_slice(bytes).map_err(|e| ChaincodeError::MalformedRecord {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// Lenient decode for scans: the parsed JSON value, or the raw text.
pub fn decode_lenient(bytes: &[u8]) -> Value {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => value,
        Err(err) => {
            debug!(error = %err, "scan value is not JSON, keeping raw string");
            Value::String(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}
