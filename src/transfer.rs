//! Transfer parameters and the signing flow that produces the report.

use core::fmt::Display;

use serde::Serialize;

use crate::{
    abiencode,
    error::{Error, Result},
    sig::hash_to_eth_signed_msg_hash,
    wallet::Wallet,
    Address, Hash, Signature, U256,
};

/// Cross-chain transfer parameters.
///
/// Field order is the packing order:
/// `abi.encodePacked(contract, sender, receiver, nonce, amount)`.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct TransferParams {
    pub contract: Address,
    pub sender: Address,
    pub receiver: Address,
    pub nonce: U256,
    pub amount: U256,
}

impl TransferParams {
    /// The 116 packed bytes that get hashed.
    pub fn packed(&self) -> Result<Vec<u8>> {
        Ok(abiencode::to_vec(self)?)
    }

    /// `keccak256(abi.encodePacked(...))`
    pub fn message_hash(&self) -> Result<Hash> {
        Ok(abiencode::to_hash(self)?)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SignaturePayload {
    pub message_hash: Hash,
    pub eth_signed_message_hash: Hash,
    pub signature: Signature,
}

/// Everything printed by one run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SignatureReport {
    pub wallet: Address,
    pub payload: SignaturePayload,
    pub recovered: Address,
}

impl Display for SignatureReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sig = &self.payload.signature;
        writeln!(f, "Wallet address: {}", self.wallet)?;
        writeln!(f, "Hash: {}", self.payload.message_hash)?;
        writeln!(
            f,
            "Ethereum Signed Message Hash: {}",
            self.payload.eth_signed_message_hash
        )?;
        writeln!(f, "Signature: {}", sig)?;
        writeln!(f, "r: {}", sig.r())?;
        writeln!(f, "s: {}", sig.s())?;
        writeln!(f, "v: {}", sig.v())?;
        writeln!(f, "Recovered Address: {}", self.recovered)
    }
}

impl SignatureReport {
    /// Write the report to `out` and flush it.
    pub fn write_to<W: std::io::Write>(&self, out: &mut W) -> std::io::Result<()> {
        write!(out, "{}", self)?;
        out.flush()
    }
}

/// Hash, sign and verify `params` with the wallet's key.
///
/// The signature is checked twice: by recovering from the prefixed digest and
/// through the message verification path that rebuilds the prefix from the
/// raw hash bytes. Both must yield the wallet address.
pub fn sign_transfer(wallet: &Wallet, params: &TransferParams) -> Result<SignatureReport> {
    if tracing::enabled!(target: "bridge_signer::transfer", tracing::Level::DEBUG) {
        let packed = params.packed()?;
        tracing::debug!(target: "bridge_signer::transfer", packed = %hex::encode(packed), "packed transfer");
    }

    let message_hash = params.message_hash()?;
    let eth_signed_message_hash = hash_to_eth_signed_msg_hash(message_hash);
    let signature = wallet.sign_message(message_hash)?;
    tracing::info!(target: "bridge_signer::transfer", %message_hash, v = signature.v(), "signed transfer");

    let signer = wallet.signer();
    let recovered = signer.recover_prehashed(eth_signed_message_hash, signature)?;
    let verified = signer.verify_message(&message_hash.0, signature)?;

    let expected = wallet.address();
    for candidate in [recovered, verified] {
        if candidate != expected {
            return Err(Error::RecoveryMismatch {
                expected,
                recovered: candidate,
            });
        }
    }

    Ok(SignatureReport {
        wallet: expected,
        payload: SignaturePayload {
            message_hash,
            eth_signed_message_hash,
            signature,
        },
        recovered,
    })
}
