// src/core/cluster/codec.rs

//! Serialization helpers for blobs stored behind the state-storage seam.

use crate::core::errors::StreamGridError;

/// Serializes a value into the storage wire form.
pub fn serialize<T: bincode::Encode>(value: &T) -> Result<Vec<u8>, StreamGridError> {
    let bytes = bincode::encode_to_vec(value, bincode::config::standard())?;
    Ok(bytes)
}

/// Deserializes bytes that may be absent. A missing node is an explicit
/// "no value", never a failure; only malformed bytes error.
pub fn maybe_deserialize<T: bincode::Decode<()>>(
    raw: Option<&[u8]>,
) -> Result<Option<T>, StreamGridError> {
    match raw {
        Some(bytes) => {
            let (value, _) = bincode::decode_from_slice(bytes, bincode::config::standard())?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

/// Renders an error and its full source chain into one string, for storing
/// under an error path.
pub fn stringify_error(error: &dyn std::error::Error) -> String {
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        out.push_str("\ncaused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
