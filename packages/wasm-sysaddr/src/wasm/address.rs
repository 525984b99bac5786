use crate::convert::AddressConverter;
use crate::error::ConversionError;
use crate::wasm::try_into_js_value::TryIntoJsValue;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

fn to_js_error(e: ConversionError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

#[wasm_bindgen]
pub struct AddressNamespace;

#[wasm_bindgen]
impl AddressNamespace {
    /// Convert between `S...` and `sys1q...` addresses
    #[wasm_bindgen]
    pub fn convert_address(address: &str) -> std::result::Result<String, JsValue> {
        AddressConverter::default()
            .convert(address)
            .map_err(to_js_error)
    }

    /// Returns `{ from, to, address }` where `from`/`to` are address types such as "p2pkh"
    #[wasm_bindgen]
    pub fn convert_address_detailed(address: &str) -> std::result::Result<JsValue, JsValue> {
        let conversion = AddressConverter::default()
            .convert_detailed(address)
            .map_err(to_js_error)?;
        conversion.try_to_js_value().map_err(JsValue::from)
    }
}
