// Synthetic contextmenu construction and delivery
use crate::model::ContactPoint;
use wasm_bindgen::JsValue;
use web_sys::{Document, EventTarget, MouseEvent, MouseEventInit, Touch, TouchList};

/// The browser's fractional value when it exposes one, else the whole pixel.
fn coordinate(exact: Option<f64>, whole: i32) -> f64 {
    exact.filter(|v| v.is_finite()).unwrap_or(whole as f64)
}

// web-sys types Touch coordinates as i32; read the double the browser holds.
fn read_coordinate(t: &Touch, key: &str, whole: i32) -> f64 {
    let exact = js_sys::Reflect::get(t.as_ref(), &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64());
    coordinate(exact, whole)
}

pub fn contact_of(t: &Touch) -> ContactPoint {
    ContactPoint::new(
        read_coordinate(t, "clientX", t.client_x()),
        read_coordinate(t, "clientY", t.client_y()),
        read_coordinate(t, "screenX", t.screen_x()),
        read_coordinate(t, "screenY", t.screen_y()),
    )
}

pub fn contacts_of(list: &TouchList) -> Vec<ContactPoint> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| contact_of(&t))
        .collect()
}

/// Topmost element under the origin, else the touch-start target.
pub fn resolve_target(
    document: &Document,
    origin: &ContactPoint,
    fallback: Option<&EventTarget>,
) -> Option<EventTarget> {
    document
        .element_from_point(origin.client_x as f32, origin.client_y as f32)
        .map(EventTarget::from)
        .or_else(|| fallback.cloned())
}

fn set_coordinate(init: &MouseEventInit, key: &str, value: f64) -> Result<(), JsValue> {
    js_sys::Reflect::set(init.as_ref(), &JsValue::from_str(key), &JsValue::from_f64(value))?;
    Ok(())
}

pub fn context_menu_event(origin: &ContactPoint) -> Result<MouseEvent, JsValue> {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    set_coordinate(&init, "clientX", origin.client_x)?;
    set_coordinate(&init, "clientY", origin.client_y)?;
    set_coordinate(&init, "screenX", origin.screen_x)?;
    set_coordinate(&init, "screenY", origin.screen_y)?;
    MouseEvent::new_with_mouse_event_init_dict("contextmenu", &init)
}

/// Returns `Ok(false)` when there is nowhere to dispatch, otherwise the
/// result of `dispatchEvent` (false when a listener cancelled it).
pub fn fire_context_menu(
    document: &Document,
    origin: &ContactPoint,
    fallback: Option<&EventTarget>,
) -> Result<bool, JsValue> {
    let Some(target) = resolve_target(document, origin, fallback) else {
        return Ok(false);
    };
    let evt = context_menu_event(origin)?;
    target.dispatch_event(&evt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{HoldTracker, Transition};

    #[test]
    fn fractional_coordinate_wins() {
        assert_eq!(coordinate(Some(60.9), 60), 60.9);
        assert_eq!(coordinate(None, 60), 60.0);
        assert_eq!(coordinate(Some(f64::NAN), 42), 42.0);
    }

    #[test]
    fn sub_pixel_drift_cancels_hold() {
        let mut tr = HoldTracker::default();
        let origin = ContactPoint::new(50.0, 50.0, 0.0, 0.0);
        assert!(matches!(tr.touch_start(&[origin]), Transition::Armed { .. }));
        // 10.9 px of drift: whole-pixel reading would see exactly 10.
        let moved = ContactPoint::new(coordinate(Some(60.9), 60), 50.0, 0.0, 0.0);
        assert_eq!(tr.touch_move(Some(moved)), Transition::Disarmed);
    }
}
