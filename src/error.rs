// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("invalid AES key length {0}: must be 16, 24, or 32 bytes")]
    InvalidKeyLength(usize),

    #[error("malformed ciphertext: {0}")]
    MalformedCiphertext(String),
}
