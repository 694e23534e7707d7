//! Padding and key normalization for the legacy scheme

use crate::error::UrlError;

/// Append `pad` to `buffer` until its length is a multiple of `multiple_of`
///
/// A buffer that is already aligned (including an empty one) is left
/// untouched. Adding a full block here would break wire compatibility.
pub fn right_pad(buffer: &mut Vec<u8>, pad: u8, multiple_of: usize) -> Result<(), UrlError> {
    if multiple_of < 2 {
        return Err(UrlError::invalid_argument(
            "multiple_of",
            "must be greater than one",
        ));
    }

    let remainder = buffer.len() % multiple_of;
    if remainder != 0 {
        buffer.resize(buffer.len() + (multiple_of - remainder), pad);
    }
    Ok(())
}

/// Stretch or truncate `key` to exactly `desired_length` bytes
///
/// Short keys are repeated until long enough, then cut. Only the legacy
/// AES path uses this; HMAC signs with the caller's key unmodified.
pub fn normalize_key(key: &[u8], desired_length: usize) -> Result<Vec<u8>, UrlError> {
    if key.is_empty() {
        return Err(UrlError::invalid_argument("key", "must not be blank"));
    }
    if desired_length == 0 {
        return Err(UrlError::invalid_argument(
            "desired_length",
            "must be greater than zero",
        ));
    }

    Ok(key.iter().copied().cycle().take(desired_length).collect())
}
