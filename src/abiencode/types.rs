use core::fmt::{Debug, Display};
use core::str::FromStr;

use hex::FromHex;
use rand::{distributions::Standard, prelude::Distribution};
use serde::Serialize;
use sha3::{Digest, Keccak256};
use uint::construct_uint;

#[cfg(feature = "secp256k1")]
use secp256k1::{PublicKey, ThirtyTwoByteHash};

use crate::Error;

macro_rules! impl_hex_fmt {
    ($T:ident) => {
        impl Debug for $T {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("0x")?;
                for b in self.0 {
                    f.write_fmt(format_args!("{:02x}", b))?;
                }
                Ok(())
            }
        }
    };
    ($T:ident, Display) => {
        impl_hex_fmt!($T);

        impl Display for $T {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                Debug::fmt(self, f)
            }
        }
    };
}

macro_rules! bytesN {
    ( $T:ident, $N:literal ) => {
        #[derive(PartialEq, Eq, Copy, Clone)]
        pub struct $T(pub [u8; $N]);

        impl Serialize for $T {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_bytes(&self.0)
            }
        }

        impl Distribution<$T> for Standard {
            fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> $T {
                $T(rng.gen())
            }
        }

        impl Default for $T {
            fn default() -> Self {
                Self([0; $N])
            }
        }

        impl_hex_fmt!($T, Display);
    };
}

bytesN!(Bytes32, 32);
bytesN!(Hash, 32);

#[cfg(feature = "secp256k1")]
impl ThirtyTwoByteHash for Hash {
    fn into_32(self) -> [u8; 32] {
        self.0
    }
}

/// 65-byte Ethereum signature in `r || s || v` layout, with `v` in {27, 28}.
#[derive(PartialEq, Eq, Copy, Clone)]
pub struct Signature(pub [u8; 65]);
impl_hex_fmt!(Signature, Display);

impl Signature {
    pub fn new(rs: &[u8; 64], v: u8) -> Self {
        let mut sig: Signature = Signature([0; 65]);
        sig.0[..64].copy_from_slice(rs);
        sig.0[64] = v;
        sig
    }

    pub fn r(&self) -> Bytes32 {
        let mut r = Bytes32::default();
        r.0.copy_from_slice(&self.0[..32]);
        r
    }

    pub fn s(&self) -> Bytes32 {
        let mut s = Bytes32::default();
        s.0.copy_from_slice(&self.0[32..64]);
        s
    }

    pub fn v(&self) -> u8 {
        self.0[64]
    }

    /// Recovery id (0 or 1) encoded in `v`, `None` unless `v` is 27 or 28.
    pub fn recovery_id(&self) -> Option<u8> {
        match self.v() {
            27 | 28 => Some(self.v() - 27),
            _ => None,
        }
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self([0; 65])
    }
}

// We could use primitive_types:U256 or ethereum_types::U256 here, too. Both
// have the ability to serde serialize, but to a hex string, which is not what
// the packed encoder wants. Both internally use construct_uint and don't add
// much functionality, so we create our own type.
construct_uint! {
    pub struct U256(4);
}

impl Serialize for U256 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut bytes = [0u8; 32];
        self.to_big_endian(&mut bytes);
        serializer.serialize_bytes(&bytes)
    }
}

impl Distribution<U256> for Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> U256 {
        let buf: [u8; 32] = rng.gen();
        U256::from_big_endian(&buf)
    }
}

/// Parse an unsigned 256-bit integer given in decimal or `0x`-prefixed hex.
///
/// `U256::from_str` only understands hex and `U256::from_dec_str` happily
/// accepts an empty string, so neither is used directly on user input.
pub fn parse_u256(input: &str) -> Result<U256, Error> {
    let trimmed = input.trim();
    if trimmed.starts_with('-') {
        return Err(Error::NegativeInteger(input.to_owned()));
    }
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let (digits, radix) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (trimmed, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(Error::InvalidInteger(input.to_owned()));
    }

    if radix == 16 {
        let significant = digits.trim_start_matches('0');
        if significant.len() > 64 {
            return Err(Error::IntegerOverflow(input.to_owned()));
        }
        // FromHex wants an even number of digits, left-pad to a full word.
        let padded = format!("{:0>64}", significant);
        let bytes = <[u8; 32]>::from_hex(padded)
            .map_err(|_| Error::InvalidInteger(input.to_owned()))?;
        Ok(U256::from_big_endian(&bytes))
    } else {
        U256::from_dec_str(digits).map_err(|e| match e {
            uint::FromDecStrErr::InvalidLength => Error::IntegerOverflow(input.to_owned()),
            uint::FromDecStrErr::InvalidCharacter => Error::InvalidInteger(input.to_owned()),
        })
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Default)]
pub struct Address(pub [u8; 20]);
impl_hex_fmt!(Address);

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Packed encoding: the raw 20 bytes, no left padding.
        serializer.serialize_bytes(&self.0)
    }
}

impl Address {
    /// EIP-55 mixed-case checksum encoding, including the `0x` prefix.
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0);
        let hash: [u8; 32] = Keccak256::digest(lower.as_bytes()).into();

        let mut out = String::with_capacity(2 + 40);
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            // High nibble for even positions, low nibble for odd ones.
            let nibble = (hash[i / 2] >> (4 * (1 - i % 2))) & 0x0f;
            if nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl FromStr for Address {
    type Err = Error;

    /// Accepts 40 hex characters with or without `0x`. Mixed case input must
    /// carry a valid EIP-55 checksum; all-lower and all-upper are taken as is.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.len() != 40 {
            return Err(Error::InvalidAddress {
                input: s.to_owned(),
                reason: "expected 20 bytes (40 hex characters)",
            });
        }
        let bytes = <[u8; 20]>::from_hex(digits).map_err(|_| Error::InvalidAddress {
            input: s.to_owned(),
            reason: "not a hex string",
        })?;
        let addr = Address(bytes);

        let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
        if has_lower && has_upper && addr.to_checksum()[2..] != *digits {
            return Err(Error::BadChecksum(s.to_owned()));
        }
        Ok(addr)
    }
}

#[cfg(feature = "secp256k1")]
impl From<PublicKey> for Address {
    fn from(pk: PublicKey) -> Self {
        // See https://ethereum.stackexchange.com/questions/65233/goethereum-getting-public-key-from-private-key-hex-formatting

        // Throw away the first byte, which is not part of the public key. It is
        // added by serialize_uncompressed due to the encoding used.
        let hash: [u8; 32] = Keccak256::digest(&pk.serialize_uncompressed()[1..]).into();

        let mut addr = Address([0; 20]);
        addr.0.copy_from_slice(&hash[32 - 20..]);
        addr
    }
}

impl Distribution<Address> for Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Address {
        Address(rng.gen())
    }
}
