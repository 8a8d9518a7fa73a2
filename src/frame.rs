use crate::card;
use crate::registry;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One frame for every mounted card.
fn frame() {
    for shared in registry::snapshot() {
        // a card busy in one of its own handlers is skipped for this frame
        let Ok(mut m) = shared.try_borrow_mut() else {
            continue;
        };
        card::render(&mut m);
    }
}

/// requestAnimationFrame loop for the page; runs for the page lifetime.
pub fn start_loop() {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
