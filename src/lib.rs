//! Off-chain signatures over cross-chain transfer parameters.
//!
//! The transfer is tightly packed (`abi.encodePacked`), hashed with Keccak-256
//! and signed with the Ethereum personal-message convention, so a bridge
//! contract can check it with `ecrecover`.

mod abiencode {
    mod error;
    mod hashing;
    mod ser;

    pub mod types;

    pub use error::Error;
    pub use hashing::to_hash;
    pub use ser::{to_vec, to_writer, Writer};

    #[cfg(test)]
    mod tests;
}
pub mod sig;

pub mod cli;
mod error;
pub mod provider;
pub mod transfer;
pub mod wallet;

pub use abiencode::types::{parse_u256, Address, Bytes32, Hash, Signature, U256};
pub use error::{Error, Result};
