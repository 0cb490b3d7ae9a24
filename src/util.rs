// Console logging helpers
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    let stamp = js_sys::Date::now();
    web_sys::console::log_1(&JsValue::from_str(&format!("[longpress {:.0}] {}", stamp, msg)));
}

/// Logs only when the shim runs with `debug` enabled.
pub fn dlog(enabled: bool, msg: impl FnOnce() -> String) {
    if enabled {
        clog(&msg());
    }
}
