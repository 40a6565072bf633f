use crate::{
    error::Result,
    provider::ReadProvider,
    sig::Signer,
    Address, Hash, Signature,
};

/// Signing key plus the read provider it was configured with.
#[derive(Debug)]
pub struct Wallet {
    signer: Signer,
    provider: ReadProvider,
}

impl Wallet {
    pub fn new(signer: Signer, provider: ReadProvider) -> Self {
        Self { signer, provider }
    }

    /// Build the wallet from the two environment secrets.
    pub fn from_secrets(private_key: &str, rpc_url: &str) -> Result<Self> {
        let provider = ReadProvider::new(rpc_url)?;
        let signer = Signer::from_hex(private_key)?;

        tracing::debug!(
            target: "bridge_signer::wallet",
            address = %signer.address(),
            rpc = %provider.redacted(),
            "wallet ready"
        );
        Ok(Self::new(signer, provider))
    }

    pub fn address(&self) -> Address {
        self.signer.address()
    }

    pub fn provider(&self) -> &ReadProvider {
        &self.provider
    }

    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    /// Personal-message signature over the 32 raw bytes of `hash`.
    pub fn sign_message(&self, hash: Hash) -> Result<Signature> {
        Ok(self.signer.sign_eth(hash)?)
    }
}
