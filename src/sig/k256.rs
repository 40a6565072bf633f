//! Signer using the k256 Rust crate (implementation of ecdsa in Rust).

use crate::abiencode::types::{Address, Hash, Signature};
use k256::{
    ecdsa::{
        recoverable,
        signature::{hazmat::PrehashSigner, Signature as k256Signature},
        SigningKey, VerifyingKey,
    },
    elliptic_curve::{
        rand_core::{CryptoRng, RngCore},
        sec1::ToEncodedPoint,
    },
};
use sha3::{Digest, Keccak256};

use super::{eth_message, hash_to_eth_signed_msg_hash};

pub use k256::ecdsa::Error;

#[derive(Debug)]
pub struct Signer {
    key: SigningKey,
    addr: Address,
}

impl From<VerifyingKey> for Address {
    fn from(key: VerifyingKey) -> Self {
        let point = key.to_encoded_point(false);

        // See https://ethereum.stackexchange.com/questions/65233/goethereum-getting-public-key-from-private-key-hex-formatting
        //
        // Throw away the first byte, which is not part of the public key. It is
        // the SEC1 tag for an uncompressed point.
        let hash: [u8; 32] = Keccak256::digest(&point.as_bytes()[1..]).into();

        let mut addr = Address([0; 20]);
        addr.0.copy_from_slice(&hash[32 - 20..]);
        addr
    }
}

/// Ethereum `v` (27/28) back to the 65-byte layout k256 expects (0/1).
fn from_eth_signature(eth_sig: Signature) -> Result<recoverable::Signature, Error> {
    let mut sig_bytes: [u8; 65] = eth_sig.0;
    sig_bytes[64] = eth_sig.recovery_id().ok_or_else(Error::new)?;
    recoverable::Signature::from_bytes(&sig_bytes)
}

impl Signer {
    /// Fails if the bytes are zero or not below the curve order.
    pub fn from_bytes(private_key: &[u8; 32]) -> Result<Self, Error> {
        let key = SigningKey::from_bytes(private_key)?;
        let addr = key.verifying_key().into();
        Ok(Self { key, addr })
    }

    /// Hex encoded key as found in `PRIVATE_KEY`, `0x` optional.
    pub fn from_hex(input: &str) -> Result<Self, crate::Error> {
        let key = super::parse_private_key(input)?;
        Self::from_bytes(&key).map_err(|e| crate::Error::InvalidPrivateKey(e.to_string()))
    }

    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let key = SigningKey::random(rng);
        let addr = key.verifying_key().into();
        Self { key, addr }
    }

    pub fn address(&self) -> Address {
        self.addr
    }

    pub fn sign_eth(&self, msg: Hash) -> Result<Signature, Error> {
        // "\x19Ethereum Signed Message:\n32" format
        let hash = hash_to_eth_signed_msg_hash(msg);

        let sig: recoverable::Signature = self.key.sign_prehash(&hash.0)?;

        // This Signature type already has the layout we need: 65 bytes
        // containing r, s and v in this order. We still have to add 27 to v
        // for the signature to be valid in the EVM.
        let mut sig_bytes: [u8; 65] = sig.as_ref().try_into().map_err(|_| Error::new())?;
        debug_assert!(sig_bytes[32] & 0x80 == 0);
        sig_bytes[64] += 27;

        Ok(Signature(sig_bytes))
    }

    /// Recover the signer of `msg`, applying the prefix like [Self::sign_eth].
    pub fn recover_signer(&self, msg: Hash, eth_sig: Signature) -> Result<Address, Error> {
        self.recover_prehashed(hash_to_eth_signed_msg_hash(msg), eth_sig)
    }

    /// Recover the signer from a digest that already carries the prefix.
    pub fn recover_prehashed(&self, eth_hash: Hash, eth_sig: Signature) -> Result<Address, Error> {
        let sig = from_eth_signature(eth_sig)?;
        let verifying_key = sig.recover_verifying_key_from_digest_bytes(&eth_hash.0.into())?;
        Ok(verifying_key.into())
    }

    /// Recover the signer of an arbitrary personal message.
    ///
    /// The prefix (including the decimal message length) is built from the raw
    /// bytes and hashed by k256 itself, independent of
    /// [hash_to_eth_signed_msg_hash].
    pub fn verify_message(&self, msg: &[u8], eth_sig: Signature) -> Result<Address, Error> {
        let sig = from_eth_signature(eth_sig)?;
        let verifying_key = sig.recover_verifying_key(&eth_message(msg))?;
        Ok(verifying_key.into())
    }
}
