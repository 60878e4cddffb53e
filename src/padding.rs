// src/padding.rs
//! PKCS#5/#7 byte padding — aligns payloads to the cipher block size
//!
//! `n` bytes of value `n` are appended, where `n` is the distance to the
//! next block boundary. An already-aligned input gains a full block of
//! padding so that `unpad` always has exactly one unambiguous reading.

use crate::error::CryptoError;

/// Pad `data` up to a multiple of `block_size`
///
/// Always appends at least 1 and at most `block_size` bytes.
pub fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
    let padding = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + padding);
    padded.extend_from_slice(data);
    padded.resize(data.len() + padding, padding as u8);
    padded
}

/// Strip the padding appended by [`pad`], returning the original payload
///
/// Fails with `MalformedCiphertext` when `data` is empty or its trailing
/// byte is not a plausible pad length (zero, or larger than `data` itself).
/// No output of [`pad`] ever ends in a zero byte.
pub fn unpad(data: &[u8]) -> Result<&[u8], CryptoError> {
    let Some(&last) = data.last() else {
        return Err(CryptoError::MalformedCiphertext(
            "cannot unpad an empty buffer".into(),
        ));
    };

    let padding = last as usize;
    if padding == 0 || padding > data.len() {
        return Err(CryptoError::MalformedCiphertext(format!(
            "pad byte {padding} out of range for a {}-byte buffer",
            data.len()
        )));
    }

    Ok(&data[..data.len() - padding])
}
