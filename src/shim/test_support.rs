// Browser fixtures shared by the wasm tests
use js_sys::{Array, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, Touch, TouchEvent, TouchEventInit, TouchInit};

fn set(target: &Object, key: &str, value: &JsValue) {
    Reflect::set(target, &JsValue::from_str(key), value).unwrap();
}

pub fn page() -> (Document, HtmlElement) {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();
    (document, body)
}

/// Fixed-position box on top of everything else on the page.
pub fn placed_div(document: &Document, left: i32, top: i32, width: i32, height: i32) -> Element {
    let div = document.create_element("div").unwrap();
    div.set_attribute(
        "style",
        &format!(
            "position:fixed; left:{}px; top:{}px; width:{}px; height:{}px; z-index:2147483647;",
            left, top, width, height
        ),
    )
    .unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Screen coordinates are offset by (1000, 2000) from the viewport ones.
pub fn touch_at(target: &Element, id: i32, x: f64, y: f64) -> Touch {
    let init = Object::new();
    set(&init, "identifier", &JsValue::from(id));
    set(&init, "target", target.as_ref());
    for key in ["clientX", "pageX"] {
        set(&init, key, &JsValue::from_f64(x));
    }
    for key in ["clientY", "pageY"] {
        set(&init, key, &JsValue::from_f64(y));
    }
    set(&init, "screenX", &JsValue::from_f64(x + 1000.0));
    set(&init, "screenY", &JsValue::from_f64(y + 2000.0));
    Touch::new(init.unchecked_ref::<TouchInit>()).unwrap()
}

/// Builds a bubbling touch event and dispatches it on `target`.
pub fn send_touch(target: &Element, kind: &str, touches: &[Touch]) {
    let init = Object::new();
    set(&init, "bubbles", &JsValue::TRUE);
    let list: Array = touches.iter().collect();
    let changed = if touches.is_empty() {
        Array::new()
    } else {
        list.clone()
    };
    set(&init, "touches", &list);
    set(&init, "targetTouches", &list);
    set(&init, "changedTouches", &changed);
    let evt = TouchEvent::new_with_event_init_dict(kind, init.unchecked_ref::<TouchEventInit>())
        .unwrap();
    target.dispatch_event(&evt).unwrap();
}

pub async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}
