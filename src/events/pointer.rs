use super::card_listener;
use crate::card::{self, SharedCard};
use crate::constants::DEBUG_TOGGLE_ATTR;
use crate::dom;
use crate::listeners::EventListener;
use glam::Vec2;
use tiltcard_core::{Effect, PressKind};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn pointer(ev: &web::Event) -> Option<&web::PointerEvent> {
    ev.dyn_ref::<web::PointerEvent>()
}

#[inline]
fn is_mouse(ev: &web::PointerEvent) -> bool {
    ev.pointer_type() == "mouse"
}

#[inline]
fn client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Listeners on the card element itself; they live as long as the card.
pub fn wire_card(shared: &SharedCard) -> Vec<EventListener> {
    let root = shared.borrow().root.clone();
    let target: &web::EventTarget = root.as_ref();
    let mut out = vec![
        card_listener(shared, target, "pointerenter", |c, ev| {
            if pointer(ev).is_some_and(is_mouse) {
                c.borrow_mut().card.pointer_enter();
            }
        }),
        card_listener(shared, target, "pointermove", |c, ev| {
            let Some(pe) = pointer(ev).filter(|pe| is_mouse(pe)) else {
                return;
            };
            let mut m = c.borrow_mut();
            let rect = dom::card_rect(&m.root);
            m.card.pointer_move(client_pos(pe), &rect);
        }),
        card_listener(shared, target, "pointerleave", |c, ev| {
            if pointer(ev).is_some_and(is_mouse) {
                c.borrow_mut().card.pointer_leave();
            }
        }),
        card_listener(shared, target, "pointerdown", |c, ev| {
            let Some(pe) = pointer(ev) else {
                return;
            };
            if is_mouse(pe) && pe.button() != 0 {
                return;
            }
            let kind = if pe.pointer_type() == "touch" {
                PressKind::Touch
            } else {
                PressKind::Mouse
            };
            let effects = {
                let mut m = c.borrow_mut();
                _ = m.root.set_pointer_capture(pe.pointer_id());
                let now = m.now();
                m.card.press_start(kind, now)
            };
            card::apply_effects(c, effects);
        }),
        card_listener(shared, target, "contextmenu", |c, ev| {
            let effects = c.borrow_mut().card.context_menu();
            if effects.contains(&Effect::SuppressContextMenu) {
                ev.prevent_default();
            }
            card::apply_effects(c, effects);
        }),
    ];

    if let Some(toggle) = dom::find_part(&root, DEBUG_TOGGLE_ATTR) {
        out.push(card_listener(shared, toggle.as_ref(), "pointerdown", |c, ev| {
            // keep the corner tap from starting a press on the card
            ev.stop_propagation();
            card::toggle_debug(c);
        }));
    }
    out
}

/// Window-level move listener that keeps a drag going outside the card.
/// Attached on entering drag mode and dropped on leaving it.
pub fn wire_drag(shared: &SharedCard) -> Vec<EventListener> {
    let Some(window) = web::window() else {
        return Vec::new();
    };
    let target: &web::EventTarget = window.as_ref();
    vec![card_listener(shared, target, "pointermove", |c, ev| {
        let Some(pe) = pointer(ev) else {
            return;
        };
        let mut m = c.borrow_mut();
        let rect = dom::card_rect(&m.root);
        m.card.drag_move(client_pos(pe), &rect);
    })]
}

/// Window-level release listeners, held from press to release. A pointer
/// released off the card still ends the press, so the hold timer can never
/// promote a press whose button is already up.
pub fn wire_release(shared: &SharedCard) -> Vec<EventListener> {
    let Some(window) = web::window() else {
        return Vec::new();
    };
    let target: &web::EventTarget = window.as_ref();
    vec![
        card_listener(shared, target, "pointerup", |c, _ev| {
            let effects = {
                let mut m = c.borrow_mut();
                let now = m.now();
                m.card.release(now)
            };
            card::apply_effects(c, effects);
        }),
        card_listener(shared, target, "pointercancel", |c, _ev| {
            let effects = c.borrow_mut().card.cancel();
            card::apply_effects(c, effects);
        }),
    ]
}
