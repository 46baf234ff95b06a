//! Base64 wrapping for string payloads.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::core::error::{Error, Result};

/// Encode a UTF-8 string as standard base64.
pub fn base64_encode(value: &str) -> String {
    STANDARD.encode(value.as_bytes())
}

/// Decode standard base64 back to a UTF-8 string. Invalid base64 or invalid
/// UTF-8 payloads are errors.
pub fn base64_decode(value: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(value)
        .map_err(|e| Error::encoding_invalid_base64(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| Error::encoding_invalid_utf8(e.to_string()))
}
