use super::{to_writer, types::Hash, Error, Writer};

use serde::Serialize;
use sha3::{Digest, Keccak256};

/// Hashes the packed encoding as it is produced, without buffering it.
#[derive(Default)]
pub struct PackedHasher(Keccak256);

impl Writer for PackedHasher {
    fn write(&mut self, chunk: &[u8]) {
        self.0.update(chunk);
    }
}

impl PackedHasher {
    pub fn finish(self) -> Hash {
        Hash(self.0.finalize().into())
    }
}

/// `keccak256(abi.encodePacked(value))`
pub fn to_hash<T>(value: &T) -> Result<Hash, Error>
where
    T: Serialize + ?Sized,
{
    let mut hasher = PackedHasher::default();
    to_writer(value, &mut hasher)?;
    Ok(hasher.finish())
}
