//! Bech32 and Bech32m encoding/decoding for witness addresses.
//!
//! Implements BIP 173 (Bech32) and BIP 350 (Bech32m) through the `bech32` crate.
//! - Bech32 is used for witness version 0 (P2WPKH, P2WSH)
//! - Bech32m is used for witness version 1+ (P2TR and later)
//!
//! Decoding accepts all-lowercase or all-uppercase input and rejects mixed case.

use ::bech32::{segwit, Fe32, Hrp};

use super::{AddressCodec, AddressError, AddressType, Result};
use crate::bitcoin::WitnessVersion;

/// Bech32/Bech32m codec for witness addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bech32Codec {
    /// Bech32 Human Readable Part (HRP)
    pub hrp: &'static str,
}

/// A segwit address split into witness version and witness program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSegwitAddress {
    pub witness_version: WitnessVersion,
    pub program: Vec<u8>,
}

impl DecodedSegwitAddress {
    /// Address type for version 0 programs, `None` for any other version
    pub fn address_type(&self) -> Option<AddressType> {
        if self.witness_version != WitnessVersion::V0 {
            return None;
        }
        AddressType::from_v0_program_len(self.program.len())
    }
}

impl Bech32Codec {
    /// Create a new Bech32 codec with the specified HRP
    pub const fn new(hrp: &'static str) -> Self {
        Self { hrp }
    }

    fn parse_hrp(&self) -> Result<Hrp> {
        Hrp::parse(self.hrp)
            .map_err(|e| AddressError::Bech32Error(format!("Invalid HRP '{}': {}", self.hrp, e)))
    }
}

/// Encode witness program with custom HRP
fn encode_witness_with_custom_hrp(
    program: &[u8],
    version: WitnessVersion,
    hrp: Hrp,
) -> Result<String> {
    let version = Fe32::try_from(version.to_num())
        .map_err(|e| AddressError::Bech32Error(format!("Invalid witness version: {}", e)))?;

    // picks Bech32 or Bech32m from the version and checks the program length for it
    segwit::encode(hrp, version, program)
        .map_err(|e| AddressError::Bech32Error(format!("Bech32 encoding failed: {}", e)))
}

/// Decode witness program with custom HRP
fn decode_witness_with_custom_hrp(
    address: &str,
    expected_hrp: Hrp,
) -> Result<(WitnessVersion, Vec<u8>)> {
    let (decoded_hrp, witness_version, witness_program) = segwit::decode(address)
        .map_err(|e| AddressError::Bech32Error(format!("Failed to decode address: {}", e)))?;

    // uppercase addresses carry an uppercase HRP
    if decoded_hrp.to_lowercase() != expected_hrp.to_lowercase() {
        return Err(AddressError::Bech32Error(format!(
            "HRP mismatch: expected '{}', got '{}'",
            expected_hrp, decoded_hrp
        )));
    }

    // segwit::decode already limits versions to 0-16
    let version = WitnessVersion::try_from(witness_version.to_u8())
        .map_err(|e| AddressError::Bech32Error(format!("Invalid witness version: {}", e)))?;

    Ok((version, witness_program))
}

impl AddressCodec for Bech32Codec {
    type Decoded = DecodedSegwitAddress;

    fn encode(&self, decoded: &DecodedSegwitAddress) -> Result<String> {
        encode_witness_with_custom_hrp(
            &decoded.program,
            decoded.witness_version,
            self.parse_hrp()?,
        )
    }

    fn decode(&self, address: &str) -> Result<DecodedSegwitAddress> {
        let (witness_version, program) = decode_witness_with_custom_hrp(address, self.parse_hrp()?)?;
        Ok(DecodedSegwitAddress {
            witness_version,
            program,
        })
    }
}
