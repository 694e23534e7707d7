//! AES-128-ECB encryption for the legacy signing scheme
//!
//! ECB with no library padding, matching the legacy Thumbor wire format.

use aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};
use aes::Aes128;

use crate::constants::AES_BLOCK_SIZE;
use crate::error::UrlError;

/// Encrypt `message` block by block under `key`
///
/// `message` must already be padded to a multiple of 16 bytes and `key`
/// must be exactly 16 bytes (see [`super::padding`]).
pub fn aes128_ecb_encrypt(message: &[u8], key: &[u8]) -> Result<Vec<u8>, UrlError> {
    if message.len() % AES_BLOCK_SIZE != 0 {
        return Err(UrlError::invalid_argument(
            "message",
            format!(
                "length {} is not a multiple of {}",
                message.len(),
                AES_BLOCK_SIZE
            ),
        ));
    }

    let cipher = Aes128::new_from_slice(key).map_err(|_| {
        UrlError::invalid_argument(
            "key",
            format!("must be exactly {} bytes, got {}", AES_BLOCK_SIZE, key.len()),
        )
    })?;

    let mut output = message.to_vec();
    for block in output.chunks_exact_mut(AES_BLOCK_SIZE) {
        cipher.encrypt_block(GenericArray::from_mut_slice(block));
    }
    Ok(output)
}
