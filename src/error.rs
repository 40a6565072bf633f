use crate::{abiencode, sig, Address};

/// Everything that can go wrong between reading the input and printing the
/// report. Every variant is fatal for the invocation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid address {input:?}: {reason}")]
    InvalidAddress { input: String, reason: &'static str },
    #[error("bad address checksum: {0}")]
    BadChecksum(String),
    #[error("invalid unsigned integer {0:?}")]
    InvalidInteger(String),
    #[error("negative value {0:?} where an unsigned integer is required")]
    NegativeInteger(String),
    #[error("value {0:?} does not fit into 256 bits")]
    IntegerOverflow(String),
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),
    #[error("invalid RPC URL")]
    InvalidRpcUrl(#[from] url::ParseError),
    #[error("unsupported RPC URL scheme {0:?}, expected http, https, ws or wss")]
    UnsupportedRpcScheme(String),
    #[error("packed encoding failed: {0}")]
    Encoding(#[from] abiencode::Error),
    #[error("signature operation failed: {0}")]
    Signature(#[from] sig::Error),
    #[error("recovered address {recovered} does not match signer {expected}")]
    RecoveryMismatch { expected: Address, recovered: Address },
}

pub type Result<T> = core::result::Result<T, Error>;
