//! Handles the creation and verification of (Ethereum) Signatures.
//!
//! Two interchangeable backends provide the same `Signer` API: `k256` (pure
//! Rust, always compiled) and `secp256k1` (bindings to libsecp256k1, selected
//! with the `secp256k1` feature). Both use RFC 6979 nonces and low-s
//! normalization, so they produce identical signatures.

use crate::abiencode::types::Hash;
use sha3::{Digest, Keccak256};

pub mod k256;
#[cfg(feature = "secp256k1")]
pub mod secp256k1;

#[cfg(not(feature = "secp256k1"))]
pub use self::k256::{Error, Signer};
#[cfg(feature = "secp256k1")]
pub use self::secp256k1::{Error, Signer};


const ETH_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// The bytes actually hashed for a personal message:
/// `"\x19Ethereum Signed Message:\n" || len(msg) || msg`, with the length in
/// decimal ASCII.
pub fn eth_message(msg: &[u8]) -> Vec<u8> {
    let len = msg.len().to_string();
    let mut out = Vec::with_capacity(ETH_MESSAGE_PREFIX.len() + len.len() + msg.len());
    out.extend_from_slice(ETH_MESSAGE_PREFIX);
    out.extend_from_slice(len.as_bytes());
    out.extend_from_slice(msg);
    out
}

/// Keccak-256 of [eth_message], the digest that gets signed for `msg`.
pub fn hash_message(msg: &[u8]) -> Hash {
    Hash(Keccak256::digest(eth_message(msg)).into())
}

/// Add the `\x19Ethereum Signed Message:\n32` prefix to hash.
///
/// This is the format expected by the Solidity contracts.
pub fn hash_to_eth_signed_msg_hash(hash: Hash) -> Hash {
    // Packed encoding with a fixed length, no need to go through eth_message.
    let mut hasher = Keccak256::new();
    hasher.update(b"\x19Ethereum Signed Message:\n32");
    hasher.update(hash.0);
    Hash(hasher.finalize().into())
}

/// Parse a hex encoded private key (with or without `0x`).
pub fn parse_private_key(input: &str) -> Result<[u8; 32], crate::Error> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if digits.len() != 64 {
        return Err(crate::Error::InvalidPrivateKey(format!(
            "expected 32 bytes (64 hex characters), got {} characters",
            digits.len()
        )));
    }
    let mut key = [0u8; 32];
    hex::decode_to_slice(digits, &mut key)
        .map_err(|e| crate::Error::InvalidPrivateKey(e.to_string()))?;
    Ok(key)
}
