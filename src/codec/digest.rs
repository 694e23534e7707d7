//! Hash and keyed-hash primitives

use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use sha1::Sha1;

use crate::error::UrlError;

type HmacSha1 = Hmac<Sha1>;

/// Lower-case hex MD5 digest of `input`
pub fn md5_hex(input: &str) -> Result<String, UrlError> {
    if input.is_empty() {
        return Err(UrlError::invalid_argument("input", "must not be blank"));
    }
    Ok(hex::encode(Md5::digest(input.as_bytes())))
}

/// HMAC-SHA1 of `message` keyed with `key` exactly as supplied
///
/// The key is never normalized or padded here. Callers guarantee a
/// non-empty key; an empty one is a programming error.
pub fn hmac_sha1(message: &[u8], key: &[u8]) -> Vec<u8> {
    debug_assert!(!key.is_empty(), "HMAC key must not be empty");

    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}
