//! URL-safe base64 encoding

use base64::{engine::general_purpose::URL_SAFE, Engine};

use crate::error::UrlError;

/// Largest input accepted before the encoded length would overflow `usize`
const BASE64_UPPER_BOUND: usize = usize::MAX / 4 * 3;

/// Base64 encode using the `A-Za-z0-9-_` alphabet, keeping `=` padding
///
/// Thumbor expects the padded form, unlike the unpadded variant commonly
/// used for web tokens. The empty input encodes to the empty string.
pub fn base64_url_safe(bytes: &[u8]) -> Result<String, UrlError> {
    if bytes.len() >= BASE64_UPPER_BOUND {
        return Err(UrlError::invalid_argument(
            "bytes",
            format!("input length must not exceed {}", BASE64_UPPER_BOUND),
        ));
    }
    Ok(URL_SAFE.encode(bytes))
}
