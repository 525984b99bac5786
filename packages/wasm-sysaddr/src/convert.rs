//! Conversion between the legacy Base58Check and the segwit v0 Bech32 form of an address.
//!
//! The input is tried as Bech32 first, then as Base58Check:
//!
//! - `sys1q...` (P2WPKH) converts to `S...` (P2PKH)
//! - `sys1q...` (P2WSH) converts to a P2SH Base58Check address over the 32-byte program
//! - `S...` (P2PKH) converts to `sys1q...` (P2WPKH)
//!
//! P2SH legacy addresses are not accepted as input, and witness versions above 0 are
//! rejected without trying Base58Check.

use crate::address::{AddressCodec, AddressType, DecodedLegacyAddress, DecodedSegwitAddress};
use crate::bitcoin::WitnessVersion;
use crate::error::ConversionError;
use crate::networks::{NetworkParameters, SYSCOIN};

type Result<T> = std::result::Result<T, ConversionError>;

const P2PKH_PAYLOAD_LEN: usize = 20;

/// A converted address together with the types on both sides of the conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub from: AddressType,
    pub to: AddressType,
    pub address: String,
}

/// Converts addresses for one network
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddressConverter {
    params: NetworkParameters,
}

impl AddressConverter {
    pub const fn new(params: NetworkParameters) -> Self {
        Self { params }
    }

    pub const fn params(&self) -> &NetworkParameters {
        &self.params
    }

    /// Convert `address` to its other encoding
    pub fn convert(&self, address: &str) -> Result<String> {
        self.convert_detailed(address).map(|c| c.address)
    }

    /// Like [`AddressConverter::convert`], also reporting the source and target types
    pub fn convert_detailed(&self, address: &str) -> Result<Conversion> {
        if address.is_empty() {
            return Err(ConversionError::EmptyInput);
        }

        // Any Bech32 failure (HRP, checksum, case, grouping) leaves Base58Check to try
        if let Ok(segwit) = self.params.bech32.decode(address) {
            return self.segwit_to_legacy(segwit);
        }

        let legacy = self.params.base58.decode(address).map_err(|e| {
            ConversionError::InvalidAddress {
                detail: e.into_detail(),
                hrp: self.params.bech32_hrp(),
            }
        })?;
        self.legacy_to_segwit(legacy)
    }

    fn segwit_to_legacy(&self, segwit: DecodedSegwitAddress) -> Result<Conversion> {
        if segwit.witness_version != WitnessVersion::V0 {
            return Err(ConversionError::UnsupportedWitnessVersion(
                segwit.witness_version.to_num(),
            ));
        }

        let from = segwit
            .address_type()
            .ok_or(ConversionError::InternalInvariantViolation(
                segwit.program.len(),
            ))?;
        let to = from.legacy_counterpart();
        let address = match to {
            AddressType::P2pkh => self.params.base58.encode_p2pkh(&segwit.program),
            _ => self.params.base58.encode_p2sh(&segwit.program),
        };

        Ok(Conversion { from, to, address })
    }

    fn legacy_to_segwit(&self, legacy: DecodedLegacyAddress) -> Result<Conversion> {
        let expected = self.params.p2pkh_version();
        if legacy.version != expected {
            return Err(ConversionError::UnsupportedPrefix {
                expected,
                actual: legacy.version,
            });
        }

        if legacy.payload.len() != P2PKH_PAYLOAD_LEN {
            return Err(ConversionError::InvalidPayloadLength {
                expected: P2PKH_PAYLOAD_LEN,
                actual: legacy.payload.len(),
            });
        }

        let segwit = DecodedSegwitAddress {
            witness_version: WitnessVersion::V0,
            program: legacy.payload,
        };
        let address = self
            .params
            .bech32
            .encode(&segwit)
            .map_err(|e| ConversionError::EncodingFailed(e.into_detail()))?;

        Ok(Conversion {
            from: AddressType::P2pkh,
            to: AddressType::P2wpkh,
            address,
        })
    }
}

/// Convert a Syscoin address between its legacy and segwit forms
pub fn convert_address(address: &str) -> Result<String> {
    AddressConverter::new(SYSCOIN).convert(address)
}
