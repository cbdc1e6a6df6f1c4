//! Build-time configuration with an optional runtime override. The runtime
//! config is read from `window.CONSULTA_CONFIG` (if present) so static
//! deployments can change endpoints without rebuilding. Configuration values
//! are public; do not store secrets here.

use consulta_client::{ClientConfig, RuntimeOverrides};
use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;

/// Loads config from build-time environment variables and applies runtime overrides.
pub fn load() -> ClientConfig {
    let config = ClientConfig::from_build_env();
    match runtime_overrides() {
        Some(overrides) => config.with_overrides(overrides),
        None => config,
    }
}

fn runtime_overrides() -> Option<RuntimeOverrides> {
    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("CONSULTA_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeOverrides {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        locale: read_runtime_value(&object, "locale").or_else(browser_language),
    })
}

fn read_runtime_value(object: &Object, key: &str) -> Option<String> {
    Reflect::get(object, &JsValue::from_str(key))
        .ok()?
        .as_string()
}

fn browser_language() -> Option<String> {
    web_sys::window()?.navigator().language()
}
