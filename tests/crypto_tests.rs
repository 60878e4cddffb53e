// tests/crypto_tests.rs
mod common;

use aes_crypter::error::CryptoError;
use aes_crypter::Crypter;
use rand::RngCore;

fn random_bytes(len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    rand::rng().fill_bytes(&mut buf);
    buf
}

#[test]
fn test_encrypt_decrypt_roundtrip_all_key_sizes() {
    common::setup();
    let crypter = Crypter::new();

    for key_len in [16usize, 24, 32] {
        let key = random_bytes(key_len);
        for plain_len in [0usize, 1, 15, 16, 17, 1000] {
            let plaintext = random_bytes(plain_len);
            let ciphertext = crypter.encrypt(&plaintext, &key).unwrap();
            assert_eq!(ciphertext.len() % 16, 0);
            assert!(ciphertext.len() > plaintext.len());

            let decrypted = crypter.decrypt(&ciphertext, &key).unwrap();
            assert_eq!(decrypted, plaintext);
        }
    }
}

#[test]
fn test_known_example_hello_world() {
    let crypter = Crypter::new();
    let key = b"0123456789abcdef";

    let ciphertext = crypter.encrypt(b"hello world", key).unwrap();
    // 11 bytes of plaintext pad to exactly one block
    assert_eq!(ciphertext.len(), 16);

    let decrypted = crypter.decrypt(&ciphertext, key).unwrap();
    assert_eq!(decrypted, b"hello world");
}

#[test]
fn test_invalid_key_lengths_fail() {
    let crypter = Crypter::new();

    for key_len in [0usize, 1, 15, 17, 23, 25, 31, 33] {
        let key = vec![0u8; key_len];
        assert_eq!(
            crypter.encrypt(b"anything", &key),
            Err(CryptoError::InvalidKeyLength(key_len)),
            "key length {key_len}"
        );
        assert_eq!(
            crypter.decrypt(&[0u8; 16], &key),
            Err(CryptoError::InvalidKeyLength(key_len)),
            "key length {key_len}"
        );
    }
}

#[test]
fn test_same_key_produces_identical_ciphertext() {
    let crypter = Crypter::new();
    let key =
        hex::decode("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f").unwrap();
    let plaintext = b"deterministic output expected";

    let first = crypter.encrypt(plaintext, &key).unwrap();
    for _ in 0..10 {
        assert_eq!(crypter.encrypt(plaintext, &key).unwrap(), first);
    }

    // A second crypter with a cold cache agrees byte for byte
    let other = Crypter::new();
    assert_eq!(other.encrypt(plaintext, &key).unwrap(), first);
}

#[test]
fn test_one_bit_key_difference_changes_ciphertext() {
    let crypter = Crypter::new();
    let key_a = random_bytes(16);
    let mut key_b = key_a.clone();
    key_b[15] ^= 0x01;

    let plaintext = b"same plaintext, sibling keys";
    let ct_a = crypter.encrypt(plaintext, &key_a).unwrap();
    let ct_b = crypter.encrypt(plaintext, &key_b).unwrap();
    assert_ne!(ct_a, ct_b);
}

#[test]
fn test_decrypt_rejects_misaligned_ciphertext() {
    let crypter = Crypter::new();
    let key = random_bytes(16);

    for len in [1usize, 15, 17, 31, 100] {
        assert!(
            matches!(
                crypter.decrypt(&vec![0u8; len], &key),
                Err(CryptoError::MalformedCiphertext(_))
            ),
            "ciphertext length {len}"
        );
    }
}

#[test]
fn test_decrypt_rejects_empty_ciphertext() {
    let crypter = Crypter::new();
    let key = random_bytes(24);
    assert!(matches!(
        crypter.decrypt(&[], &key),
        Err(CryptoError::MalformedCiphertext(_))
    ));
}

#[test]
fn test_decrypt_with_wrong_key_does_not_roundtrip() {
    let crypter = Crypter::new();
    let key = random_bytes(32);
    let wrong_key = random_bytes(32);
    let plaintext = random_bytes(64);

    let ciphertext = crypter.encrypt(&plaintext, &key).unwrap();
    // Either the garbage plaintext differs or the garbage padding is rejected
    match crypter.decrypt(&ciphertext, &wrong_key) {
        Ok(decrypted) => assert_ne!(decrypted, plaintext),
        Err(CryptoError::MalformedCiphertext(_)) => {}
        Err(err) => panic!("unexpected error: {err}"),
    }
}

#[test]
fn test_error_is_not_cached_for_invalid_key() {
    let crypter = Crypter::new();
    let bad_key = vec![0u8; 15];

    // Fails identically on every call
    for _ in 0..3 {
        assert_eq!(
            crypter.encrypt(b"payload", &bad_key),
            Err(CryptoError::InvalidKeyLength(15))
        );
    }
    assert!(crypter.cache().is_empty());

    // A valid key is unaffected by the earlier failures
    let key = random_bytes(16);
    let ciphertext = crypter.encrypt(b"payload", &key).unwrap();
    assert_eq!(crypter.decrypt(&ciphertext, &key).unwrap(), b"payload");
    assert_eq!(crypter.cache().len(), 1);
}
