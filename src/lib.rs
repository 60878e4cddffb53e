// src/lib.rs
//! aes-crypter — AES-CBC encryption with a per-key cipher context cache
//!
//! Features:
//! - AES-128/192/256 in chained-block (CBC) mode
//! - PKCS#5/#7 padding
//! - Process-wide memoization of key schedule expansion
//! - Key-derived IV for deterministic, byte-compatible output
//!
//! The IV is taken from the key itself, so encrypting the same plaintext
//! under the same key always yields the same ciphertext. That is a
//! compatibility requirement of the system this crate serves, not a
//! recommendation; see DESIGN.md before depending on it in new code.

pub mod cache;
pub mod consts;
pub mod context;
pub mod crypter;
pub mod error;
pub mod padding;

// Re-export everything users need at the crate root
pub use cache::CipherCache;
pub use context::CipherContext;
pub use crypter::Crypter;
pub use error::CryptoError;
