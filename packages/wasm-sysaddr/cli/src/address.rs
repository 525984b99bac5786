use anyhow::Result;
use tracing::debug;
use wasm_sysaddr::{AddressConverter, SYSCOIN};

/// Convert `address` with the Syscoin parameters, returning the other encoding
pub fn handle_convert(address: &str) -> Result<String> {
    let converter = AddressConverter::new(SYSCOIN);
    debug!(
        address,
        hrp = converter.params().bech32_hrp(),
        "converting address"
    );

    let conversion = converter.convert_detailed(address)?;
    debug!(
        from = %conversion.from,
        to = %conversion.to,
        converted = %conversion.address,
        "converted address"
    );
    Ok(conversion.address)
}
