//! Primitive codec module
//!
//! Byte-level building blocks used when finalizing a safe URL:
//! - URL-safe base64 encoding (padding retained)
//! - MD5 hex digests
//! - HMAC-SHA1 signatures
//! - AES-128-ECB encryption over pre-padded input
//! - Right padding and key normalization for the legacy scheme
//!
//! All functions are deterministic: no IV, no randomness. Only the encode
//! direction exists; nothing here ever decodes a URL.

pub mod cipher;
pub mod digest;
pub mod encoding;
pub mod padding;

pub use cipher::aes128_ecb_encrypt;
pub use digest::{hmac_sha1, md5_hex};
pub use encoding::base64_url_safe;
pub use padding::{normalize_key, right_pad};
