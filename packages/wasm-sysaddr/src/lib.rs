mod address;
mod convert;
mod error;
mod networks;
pub mod wasm;

// re-export bitcoin from the miniscript crate, base58 and witness versions come from there
pub use ::miniscript::bitcoin;

pub use address::{
    AddressCodec, AddressError, AddressType, Base58CheckCodec, Bech32Codec,
    DecodedLegacyAddress, DecodedSegwitAddress,
};
pub use convert::{convert_address, AddressConverter, Conversion};
pub use error::ConversionError;
pub use networks::{NetworkParameters, SYSCOIN};
pub use wasm::AddressNamespace;
