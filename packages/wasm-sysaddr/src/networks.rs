//! Network parameters for address conversion.
// Values from src/chainparams.cpp in the Syscoin implementation:
//   base58Prefixes[PUBKEY_ADDRESS], base58Prefixes[SCRIPT_ADDRESS], bech32_hrp
use crate::address::{Base58CheckCodec, Bech32Codec};

/// The version bytes and HRP of one network, bundled as the two codecs that use them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkParameters {
    pub base58: Base58CheckCodec,
    pub bech32: Bech32Codec,
}

impl NetworkParameters {
    pub const fn new(p2pkh_version: u8, p2sh_version: u8, bech32_hrp: &'static str) -> Self {
        Self {
            base58: Base58CheckCodec::new(p2pkh_version, p2sh_version),
            bech32: Bech32Codec::new(bech32_hrp),
        }
    }

    pub const fn p2pkh_version(&self) -> u8 {
        self.base58.pub_key_hash
    }

    pub const fn p2sh_version(&self) -> u8 {
        self.base58.script_hash
    }

    pub const fn bech32_hrp(&self) -> &'static str {
        self.bech32.hrp
    }
}

// Syscoin mainnet: P2PKH addresses start with S, segwit addresses with sys1
pub const SYSCOIN: NetworkParameters = NetworkParameters::new(63, 5, "sys");

impl Default for NetworkParameters {
    fn default() -> Self {
        SYSCOIN
    }
}
