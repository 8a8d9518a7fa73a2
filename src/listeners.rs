//! Owned DOM registrations. Each guard unregisters itself on drop, so a
//! listener or timer lives exactly as long as the value holding it.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Drop `value` after the current event handler returns.
///
/// A wasm-bindgen closure must not be freed while it is running; guards that
/// may be released from inside their own callback go through here.
pub fn defer_drop<T: 'static>(value: T) {
    spawn_local(async move {
        drop(value);
    });
}

pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::warn!("[dom] addEventListener({}) failed: {:?}", event, e);
        }
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// `setTimeout` registration; cleared on drop if it has not fired.
pub struct Timeout {
    id: Option<i32>,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(millis: u32, callback: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = web::window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis.min(i32::MAX as u32) as i32,
            )
            .map_err(|e| log::warn!("[dom] setTimeout failed: {:?}", e))
            .ok()
        });
        Self {
            id,
            _closure: closure,
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.id, web::window()) {
            w.clear_timeout_with_handle(id);
        }
    }
}

/// `setInterval` registration; cleared on drop.
pub struct Interval {
    id: Option<i32>,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(millis: u32, callback: impl FnMut() + 'static) -> Self {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = web::window().and_then(|w| {
            w.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis.min(i32::MAX as u32) as i32,
            )
            .map_err(|e| log::warn!("[dom] setInterval failed: {:?}", e))
            .ok()
        });
        Self {
            id,
            _closure: closure,
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.id, web::window()) {
            w.clear_interval_with_handle(id);
        }
    }
}

/// `MutationObserver` watching one attribute of one element; disconnected
/// on drop.
pub struct AttributeObserver {
    observer: web::MutationObserver,
    _closure: Closure<dyn FnMut(js_sys::Array, web::MutationObserver)>,
}

impl AttributeObserver {
    pub fn new(
        target: &web::Element,
        attribute: &str,
        mut callback: impl FnMut() + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(
            Box::new(move |_: js_sys::Array, _: web::MutationObserver| callback())
                as Box<dyn FnMut(js_sys::Array, web::MutationObserver)>,
        );
        let observer = web::MutationObserver::new(closure.as_ref().unchecked_ref())
            .map_err(|e| log::warn!("[dom] MutationObserver failed: {:?}", e))
            .ok()?;
        let init = web::MutationObserverInit::new();
        init.set_attributes(true);
        init.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str(attribute)));
        if let Err(e) = observer.observe_with_options(target, &init) {
            log::warn!("[dom] observe({}) failed: {:?}", attribute, e);
            return None;
        }
        Some(Self {
            observer,
            _closure: closure,
        })
    }
}

impl Drop for AttributeObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
