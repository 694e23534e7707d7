//! URL signing
//!
//! Provides the two authentication schemes for safe URLs:
//! - HMAC-SHA1 over the assembled configuration, keyed with the raw key
//! - Legacy AES-128-ECB encryption of the padded configuration, keyed with
//!   the key normalized to 16 bytes
//!
//! Both return the base64url (padded) text that prefixes the URL path.

use std::fmt;

use crate::codec::{aes128_ecb_encrypt, base64_url_safe, hmac_sha1, normalize_key, right_pad};
use crate::constants::{AES_BLOCK_SIZE, LEGACY_PAD_BYTE};
use crate::error::UrlError;

/// Shared secret used to sign safe URLs
///
/// Never empty. `Debug` output is redacted so builders can be logged.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    pub fn new(key: impl Into<Vec<u8>>) -> Result<Self, UrlError> {
        let key = key.into();
        if key.is_empty() {
            return Err(UrlError::invalid_argument("key", "must not be blank"));
        }
        Ok(Self(key))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(<redacted>)")
    }
}

/// Signing scheme applied to a safe URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningScheme {
    HmacSha1,
    Legacy,
}

impl SigningScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HmacSha1 => "hmac-sha1",
            Self::Legacy => "legacy",
        }
    }
}

/// Generate the signature path segment for an assembled configuration
///
/// The signature is computed as:
/// ```text
/// hmac-sha1: base64url(HMAC-SHA1(key, config))
/// legacy:    base64url(AES-128-ECB(normalize(key, 16), pad(config, '{', 16)))
/// ```
pub fn generate_signature(
    config: &str,
    key: &[u8],
    scheme: SigningScheme,
) -> Result<String, UrlError> {
    if key.is_empty() {
        return Err(UrlError::invalid_state("cannot sign a URL without a key"));
    }

    let signature = match scheme {
        SigningScheme::HmacSha1 => hmac_sha1(config.as_bytes(), key),
        SigningScheme::Legacy => compute_legacy_signature(config, key)?,
    };

    base64_url_safe(&signature)
}

/// Pad the configuration with `{` and encrypt it block by block
fn compute_legacy_signature(config: &str, key: &[u8]) -> Result<Vec<u8>, UrlError> {
    let key = normalize_key(key, AES_BLOCK_SIZE)?;

    let mut message = config.as_bytes().to_vec();
    right_pad(&mut message, LEGACY_PAD_BYTE, AES_BLOCK_SIZE)?;

    aes128_ecb_encrypt(&message, &key)
}
