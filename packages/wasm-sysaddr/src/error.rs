/// Why an address could not be converted.
///
/// `UnsupportedWitnessVersion` is reported for well-formed segwit addresses of the
/// configured network; every other Bech32 failure falls through to the Base58Check
/// attempt and, if that fails too, surfaces as `InvalidAddress`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("Address must be a non-empty string")]
    EmptyInput,

    #[error(
        "Unsupported SegWit version ({0}): Taproot (v1) or future versions cannot be converted"
    )]
    UnsupportedWitnessVersion(u8),

    #[error("Invalid address: Not valid Base58 ({detail}) or supported Bech32 HRP '{hrp}'")]
    InvalidAddress { detail: String, hrp: &'static str },

    #[error("Invalid Base58 prefix: Expected {expected}, got {actual}")]
    UnsupportedPrefix { expected: u8, actual: u8 },

    #[error("Invalid P2PKH payload length: {actual} bytes (expected {expected})")]
    InvalidPayloadLength { expected: usize, actual: usize },

    #[error("Failed to encode P2PKH to Bech32: {0}")]
    EncodingFailed(String),

    #[error("Internal Error: Invalid SegWit v0 program length after decode: {0} bytes")]
    InternalInvariantViolation(usize),
}
