//! Document-level long-press → contextmenu shim.
//!
//! Some host widget layers intercept touchstart/touchmove at the panel level,
//! so the browser never raises its own contextmenu on touch-hold. The shim
//! watches touches on the document and, after a still hold, dispatches a
//! synthetic `contextmenu` at the touch point.

pub mod dispatch;
#[cfg(all(test, target_arch = "wasm32"))]
mod test_support;
pub mod timer;

use crate::config::ShimConfig;
use crate::state::{HoldTracker, Transition};
use crate::util::dlog;
use dispatch::{contact_of, contacts_of, fire_context_menu};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use timer::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, EventTarget, TouchEvent, Window};

struct Inner {
    tracker: HoldTracker,
    deadline: Option<Timeout>,
    // touchstart target, used when nothing is found under the hold point
    fallback: Option<EventTarget>,
    debug: bool,
}

impl Inner {
    fn cancel_deadline(&mut self) {
        if let Some(t) = self.deadline.take() {
            t.cancel();
        }
        self.fallback = None;
    }
}

type TouchListener = Closure<dyn FnMut(TouchEvent)>;

/// Owns the hold state and the four document listeners.
/// Listeners are removed and any pending deadline cancelled on drop.
pub struct GestureShim {
    document: Document,
    inner: Rc<RefCell<Inner>>,
    listeners: Vec<(&'static str, TouchListener)>,
}

impl GestureShim {
    pub fn install(document: &Document, config: &ShimConfig) -> Result<Self, JsValue> {
        let window = document
            .default_view()
            .ok_or_else(|| JsValue::from_str("document has no window"))?;
        let inner = Rc::new(RefCell::new(Inner {
            tracker: HoldTracker::new(config.hold()),
            deadline: None,
            fallback: None,
            debug: config.debug,
        }));
        let mut shim = Self {
            document: document.clone(),
            inner,
            listeners: Vec::with_capacity(4),
        };
        let weak = Rc::downgrade(&shim.inner);
        let opts = AddEventListenerOptions::new();
        opts.set_passive(true);
        let listeners = [
            ("touchstart", start_listener(weak.clone(), window, document.clone())),
            ("touchmove", move_listener(weak.clone())),
            ("touchend", end_listener(weak.clone())),
            ("touchcancel", end_listener(weak)),
        ];
        for (name, cb) in listeners {
            // On failure the partially installed shim drops and detaches.
            document.add_event_listener_with_callback_and_add_event_listener_options(
                name,
                cb.as_ref().unchecked_ref(),
                &opts,
            )?;
            shim.listeners.push((name, cb));
        }
        dlog(config.debug, || {
            format!(
                "installed (hold {} ms, drift {} px)",
                config.hold_ms, config.drift_px
            )
        });
        Ok(shim)
    }

    /// Installs on the global `document`.
    pub fn install_on_window(config: &ShimConfig) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no global document"))?;
        Self::install(&document, config)
    }

    pub fn is_holding(&self) -> bool {
        self.inner.borrow().tracker.is_holding()
    }

    pub fn uninstall(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        for (name, cb) in self.listeners.drain(..) {
            let _ = self
                .document
                .remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
        }
        let mut st = self.inner.borrow_mut();
        st.tracker.reset();
        st.cancel_deadline();
    }
}

impl Drop for GestureShim {
    fn drop(&mut self) {
        self.detach();
    }
}

fn start_listener(
    weak: Weak<RefCell<Inner>>,
    window: Window,
    document: Document,
) -> TouchListener {
    Closure::wrap(Box::new(move |e: TouchEvent| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let contacts = contacts_of(&e.touches());
        let mut st = inner.borrow_mut();
        let Transition::Armed { generation, delay } = st.tracker.touch_start(&contacts) else {
            return;
        };
        st.cancel_deadline();
        st.fallback = e.target();
        let fire = expiry_callback(Rc::downgrade(&inner), document.clone(), generation);
        match Timeout::schedule(&window, delay, fire) {
            Ok(t) => {
                st.deadline = Some(t);
                if let Some(hold) = st.tracker.pending() {
                    let origin = hold.origin;
                    dlog(st.debug, || {
                        format!(
                            "hold #{} armed at ({}, {})",
                            generation, origin.client_x, origin.client_y
                        )
                    });
                }
            }
            Err(err) => {
                st.tracker.reset();
                st.fallback = None;
                dlog(st.debug, || format!("could not schedule hold: {:?}", err));
            }
        }
    }) as Box<dyn FnMut(_)>)
}

fn move_listener(weak: Weak<RefCell<Inner>>) -> TouchListener {
    Closure::wrap(Box::new(move |e: TouchEvent| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let primary = e.touches().item(0).map(|t| contact_of(&t));
        let mut st = inner.borrow_mut();
        if st.tracker.touch_move(primary) == Transition::Disarmed {
            st.cancel_deadline();
            dlog(st.debug, || "hold cancelled by drift".to_string());
        }
    }) as Box<dyn FnMut(_)>)
}

fn end_listener(weak: Weak<RefCell<Inner>>) -> TouchListener {
    Closure::wrap(Box::new(move |e: TouchEvent| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let mut st = inner.borrow_mut();
        if st.tracker.touch_end() == Transition::Disarmed {
            dlog(st.debug, || format!("hold cancelled by {}", e.type_()));
        }
        st.cancel_deadline();
    }) as Box<dyn FnMut(_)>)
}

fn expiry_callback(
    weak: Weak<RefCell<Inner>>,
    document: Document,
    generation: u64,
) -> impl FnMut() + 'static {
    move || {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        // Release the borrow before dispatching; host listeners may touch back in.
        let (origin, fallback, debug, _spent) = {
            let mut st = inner.borrow_mut();
            let Some(origin) = st.tracker.expire(generation) else {
                return;
            };
            (origin, st.fallback.take(), st.debug, st.deadline.take())
        };
        match fire_context_menu(&document, &origin, fallback.as_ref()) {
            Ok(delivered) => dlog(debug, || {
                format!(
                    "contextmenu at ({}, {}) dispatched, default allowed: {}",
                    origin.client_x, origin.client_y, delivered
                )
            }),
            Err(err) => dlog(debug, || format!("contextmenu dispatch failed: {:?}", err)),
        }
    }
}
