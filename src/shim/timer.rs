use js_sys::Function;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

/// A scheduled `setTimeout` callback that can be cancelled.
///
/// The callback closure lives as long as the handle. Dropping the handle
/// clears the timeout, so a deadline never outlives its owner.
pub struct Timeout {
    window: Window,
    id: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn schedule(
        window: &Window,
        delay: Duration,
        f: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let ms = delay.as_millis().min(i32::MAX as u128) as i32;
        let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref::<Function>(),
            ms,
        )?;
        Ok(Self {
            window: window.clone(),
            id: Some(id),
            _callback: callback,
        })
    }

    pub fn cancel(mut self) {
        self.clear();
    }

    fn clear(&mut self) {
        if let Some(id) = self.id.take() {
            self.window.clear_timeout_with_handle(id);
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        self.clear();
    }
}
