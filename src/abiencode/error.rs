//! Error type and Return values used by the packed Serializer.

use serde::ser;

/// Represents all possible errors that can happen during Serialization.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The value contains a type that is not directly representable in
    /// Solidity types.
    ///
    /// For example floating point numbers, enums and maps. We don't pick an
    /// arbitrary representation for these, as it would force a specific layout
    /// on the Solidity side. Implement a custom serialize method instead.
    #[error("type is not representable in packed abi encoding: {0}")]
    TypeNotRepresentable(&'static str),
    /// Although the type is representable in Solidity, the Serializer does not
    /// implement this functionality.
    #[error("type is not yet implemented: {0}")]
    TypeNotYetSupported(&'static str),
    /// Raised by a `Serialize` implementation through [ser::Error::custom].
    #[error("{0}")]
    Custom(String),
}

impl ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: core::fmt::Display,
    {
        Error::Custom(msg.to_string())
    }
}

/// Alias for `Result` using the [Error] returned by the Serializer.
pub type Result<T> = core::result::Result<T, Error>;
