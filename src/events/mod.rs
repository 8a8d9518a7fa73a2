pub mod pointer;
pub mod sensors;

pub use pointer::{wire_card, wire_drag, wire_release};
pub use sensors::subscribe_sensor;

use crate::card::{SharedCard, WeakCard};
use crate::listeners::EventListener;
use std::rc::Rc;
use web_sys as web;

/// Listener that forwards to the card while it is still mounted. Holds only
/// a weak reference so listeners stored inside the card form no cycle.
pub(crate) fn card_listener(
    shared: &SharedCard,
    target: &web::EventTarget,
    event: &'static str,
    handler: impl Fn(&SharedCard, &web::Event) + 'static,
) -> EventListener {
    let weak: WeakCard = Rc::downgrade(shared);
    EventListener::new(target, event, move |ev| {
        if let Some(c) = weak.upgrade() {
            handler(&c, &ev);
        }
    })
}
