//! Payload codec: JSON text wrapped in a hex byte encoding.
//!
//! Application data is serialized to JSON, and the JSON text is then hex
//! encoded. Both layers must round-trip exactly; the digest covers the
//! encoded form, never the application data directly.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::PayloadError;

/// The fixed value the anchor record encodes. The anchor carries no
/// application data; decoding it is refused.
pub const ANCHOR_SENTINEL: &str = "anchor";

/// Encode application data: JSON text, then hex of the text's UTF-8 bytes.
pub fn encode<T: Serialize + ?Sized>(data: &T) -> Result<Bytes, PayloadError> {
    let text = serde_json::to_string(data).map_err(|e| PayloadError::Serialize(e.to_string()))?;
    Ok(Bytes::from(hex::encode(text.as_bytes()).into_bytes()))
}

/// Decode payload bytes back to the JSON text they wrap.
pub fn decode_text(payload: &[u8]) -> Result<String, PayloadError> {
    let raw = hex::decode(payload).map_err(|e| PayloadError::Decoding(e.to_string()))?;
    String::from_utf8(raw).map_err(|e| PayloadError::Decoding(e.to_string()))
}

/// Decode payload bytes to structured application data.
pub fn decode<T: DeserializeOwned>(payload: &[u8]) -> Result<T, PayloadError> {
    let text = decode_text(payload)?;
    serde_json::from_str(&text).map_err(|e| PayloadError::Deserialize(e.to_string()))
}

/// The JSON text form of the anchor sentinel.
pub(crate) fn anchor_text() -> String {
    serde_json::to_string(ANCHOR_SENTINEL).expect("sentinel string always serializes")
}

/// The encoded form of the anchor sentinel.
pub fn anchor_payload() -> Bytes {
    Bytes::from(hex::encode(anchor_text().as_bytes()).into_bytes())
}
