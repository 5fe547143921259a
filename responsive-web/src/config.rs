use js_sys::Reflect;
use layout_core::{ConfigError, ResponsiveConfig};
use wasm_bindgen::JsValue;

/// Page global holding configuration overrides, either as a JSON string or
/// as a plain object.
pub const CONFIG_GLOBAL: &str = "HR_RESPONSIVE_CONFIG";

fn read_global_json(key: &str) -> Option<String> {
    let value = Reflect::get(&js_sys::global(), &JsValue::from_str(key)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    if let Some(text) = value.as_string() {
        return Some(text);
    }
    js_sys::JSON::stringify(&value)
        .ok()
        .and_then(|s| s.as_string())
}

/// Defaults when the global is absent; an error when it is present but invalid.
pub fn load_config() -> Result<ResponsiveConfig, ConfigError> {
    match read_global_json(CONFIG_GLOBAL) {
        Some(json) => ResponsiveConfig::from_json(&json),
        None => Ok(ResponsiveConfig::default()),
    }
}
