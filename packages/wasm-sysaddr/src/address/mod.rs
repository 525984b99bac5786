//! Address encoding and decoding for the two textual forms of a Syscoin address.
//!
//! # Supported Address Formats
//!
//! - **Base58Check**: Traditional P2PKH and P2SH addresses (`S...`, `3...`)
//! - **Bech32/Bech32m**: Native SegWit addresses (`sys1q...` for v0, `sys1p...` for v1)
//!
//! Both codecs only carry the network-specific parameters (version bytes, HRP) and
//! delegate checksum and alphabet handling to the `bitcoin` and `bech32` crates.
//!
//! # Examples
//!
//! ```rust,ignore
//! use wasm_sysaddr::{AddressCodec, SYSCOIN};
//!
//! let legacy = SYSCOIN.base58.decode("SPd281HLz89nvKZ1js6eeefD3YsjcP78AX")?;
//! assert_eq!(legacy.version, 63);
//! ```

mod base58check;
mod bech32;

pub use base58check::{Base58CheckCodec, DecodedLegacyAddress};
pub use bech32::{Bech32Codec, DecodedSegwitAddress};

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("Base58 error: {0}")]
    Base58Error(String),
    #[error("Bech32 error: {0}")]
    Bech32Error(String),
}

impl AddressError {
    /// The underlying codec message, without the error-kind prefix
    pub fn into_detail(self) -> String {
        match self {
            AddressError::Base58Error(msg) | AddressError::Bech32Error(msg) => msg,
        }
    }
}

pub type Result<T> = std::result::Result<T, AddressError>;

/// Trait for address encoding and decoding
pub trait AddressCodec {
    /// The structured form of an address handled by this codec
    type Decoded;

    fn encode(&self, decoded: &Self::Decoded) -> Result<String>;
    fn decode(&self, address: &str) -> Result<Self::Decoded>;
}

/// Output script type an address stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    P2pkh,
    P2sh,
    P2wpkh,
    P2wsh,
}

impl AddressType {
    /// Map a witness v0 program length to its address type
    pub fn from_v0_program_len(len: usize) -> Option<Self> {
        match len {
            20 => Some(AddressType::P2wpkh),
            32 => Some(AddressType::P2wsh),
            _ => None,
        }
    }

    /// The Base58Check type that wraps the same hash as a witness type.
    /// Legacy types map to themselves.
    pub const fn legacy_counterpart(self) -> Self {
        match self {
            AddressType::P2pkh | AddressType::P2wpkh => AddressType::P2pkh,
            AddressType::P2sh | AddressType::P2wsh => AddressType::P2sh,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            AddressType::P2pkh => "p2pkh",
            AddressType::P2sh => "p2sh",
            AddressType::P2wpkh => "p2wpkh",
            AddressType::P2wsh => "p2wsh",
        }
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
