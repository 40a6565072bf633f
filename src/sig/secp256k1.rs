//! Signer using the secp256k1 crate (bindings to libsecp256k1).

use crate::abiencode::types::{Address, Hash, Signature};
use secp256k1::{
    self,
    ecdsa::{RecoverableSignature, RecoveryId},
    All, Message, PublicKey, Secp256k1, SecretKey,
};

use super::{hash_message, hash_to_eth_signed_msg_hash};

pub use secp256k1::Error;

#[derive(Debug)]
pub struct Signer {
    secp: Secp256k1<All>,
    key: SecretKey,
    addr: Address,
}

impl Signer {
    /// Fails if the bytes are zero or not below the curve order.
    pub fn from_bytes(private_key: &[u8; 32]) -> Result<Self, Error> {
        let secp = Secp256k1::new();
        let key = SecretKey::from_slice(private_key)?;
        let addr = PublicKey::from_secret_key(&secp, &key).into();
        Ok(Self { secp, key, addr })
    }

    /// Hex encoded key as found in `PRIVATE_KEY`, `0x` optional.
    pub fn from_hex(input: &str) -> Result<Self, crate::Error> {
        let key = super::parse_private_key(input)?;
        Self::from_bytes(&key).map_err(|e| crate::Error::InvalidPrivateKey(e.to_string()))
    }

    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let secp = Secp256k1::new();
        let key = SecretKey::new(rng);
        let addr = PublicKey::from_secret_key(&secp, &key).into();
        Self { secp, key, addr }
    }

    pub fn address(&self) -> Address {
        self.addr
    }

    /// Sign a hash using a Ethereum 65-byte recoverable signature.
    pub fn sign_eth(&self, msg: Hash) -> Result<Signature, Error> {
        // Partially taken from https://github.com/synlestidae/ethereum-tx-sign/blob/master/src/lib.rs#L534

        // "\x19Ethereum Signed Message:\n32" format
        let hash = hash_to_eth_signed_msg_hash(msg);

        // We have to use sign_ecdsa_recoverable because the contract must be
        // able to recover the address. This gives us the additional
        // information needed for v.
        let sig = self
            .secp
            .sign_ecdsa_recoverable(&Message::from(hash), &self.key);

        let (v, rs) = sig.serialize_compact();

        // [EIP-2](https://eips.ethereum.org/EIPS/eip-2) makes signatures with
        // a high s invalid. libsecp256k1 only produces low s values.
        debug_assert!(rs[32] & 0x80 == 0);

        // According to [EIP-2098](https://eips.ethereum.org/EIPS/eip-2098), the
        // yParity (v) is offset by 27. No EIP-155 chain id here: personal
        // messages are not transactions and ecrecover expects 27/28.
        let v: u8 = 27 + v.to_i32() as u8;

        Ok(Signature::new(&rs, v))
    }

    /// Recover the signer of `msg`, applying the prefix like [Self::sign_eth].
    pub fn recover_signer(&self, msg: Hash, eth_sig: Signature) -> Result<Address, Error> {
        self.recover_prehashed(hash_to_eth_signed_msg_hash(msg), eth_sig)
    }

    /// Recover the signer from a digest that already carries the prefix.
    pub fn recover_prehashed(&self, eth_hash: Hash, eth_sig: Signature) -> Result<Address, Error> {
        let rs = &eth_sig.0[..64];
        let v = eth_sig.recovery_id().ok_or(Error::InvalidRecoveryId)?;

        let recid = RecoveryId::from_i32(v.into())?;
        let sig = RecoverableSignature::from_compact(rs, recid)?;

        let pk = self.secp.recover_ecdsa(&Message::from(eth_hash), &sig)?;

        Ok(pk.into())
    }

    /// Recover the signer of an arbitrary personal message.
    pub fn verify_message(&self, msg: &[u8], eth_sig: Signature) -> Result<Address, Error> {
        self.recover_prehashed(hash_message(msg), eth_sig)
    }
}
