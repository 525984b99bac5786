//! Base58Check encoding/decoding for traditional addresses (P2PKH, P2SH).

use super::{AddressCodec, AddressError, Result};
use crate::bitcoin::base58;

/// Base58Check codec with network-specific version bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base58CheckCodec {
    /// Base58Check P2PKH version byte
    pub pub_key_hash: u8,
    /// Base58Check P2SH version byte
    pub script_hash: u8,
}

/// A Base58Check address split into its version byte and the hash that follows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLegacyAddress {
    pub version: u8,
    pub payload: Vec<u8>,
}

impl Base58CheckCodec {
    /// Create a new Base58Check codec with specified version bytes
    pub const fn new(pub_key_hash: u8, script_hash: u8) -> Self {
        assert!(
            pub_key_hash != script_hash,
            "P2PKH and P2SH version bytes must differ"
        );
        Self {
            pub_key_hash,
            script_hash,
        }
    }

    pub fn encode_p2pkh(&self, hash: &[u8]) -> String {
        to_base58_check(self.pub_key_hash, hash)
    }

    pub fn encode_p2sh(&self, hash: &[u8]) -> String {
        to_base58_check(self.script_hash, hash)
    }
}

fn to_base58_check(version: u8, hash: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + hash.len());
    data.push(version);
    data.extend_from_slice(hash);

    // encode_check appends the 4-byte double-SHA256 checksum
    base58::encode_check(&data)
}

/// Render an error with its sources, e.g. `decode: invalid base58 character 0x30`
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut msg = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

/// Decode a Base58Check address to (version, hash)
fn from_base58_check(address: &str) -> Result<(u8, Vec<u8>)> {
    // decode_check verifies and strips the checksum
    let payload =
        base58::decode_check(address).map_err(|e| AddressError::Base58Error(error_chain(&e)))?;

    match payload.split_first() {
        Some((&version, hash)) => Ok((version, hash.to_vec())),
        None => Err(AddressError::Base58Error("Empty payload".to_string())),
    }
}

impl AddressCodec for Base58CheckCodec {
    type Decoded = DecodedLegacyAddress;

    fn encode(&self, decoded: &DecodedLegacyAddress) -> Result<String> {
        Ok(to_base58_check(decoded.version, &decoded.payload))
    }

    /// Only checksum and alphabet are validated here; version and payload length
    /// are left to the caller.
    fn decode(&self, address: &str) -> Result<DecodedLegacyAddress> {
        let (version, payload) = from_base58_check(address)?;
        Ok(DecodedLegacyAddress { version, payload })
    }
}
