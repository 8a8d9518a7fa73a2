#![cfg(target_arch = "wasm32")]
//! Browser front-end for tilt cards.
//!
//! Cards are mounted either explicitly through [`mount`] or automatically
//! from `[data-tilt-card]` elements at start-up. One animation-frame loop
//! renders every mounted card. An element carries at most one card: mounting
//! it again returns the live card's handle.

use crate::card::{ClickTarget, SharedCard};
use crate::options::CardOptions;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod card;
mod constants;
mod dom;
mod events;
mod frame;
mod listeners;
mod options;
mod permission;
mod registry;

static LOOP_STARTED: AtomicBool = AtomicBool::new(false);

fn ensure_loop() {
    if !LOOP_STARTED.swap(true, Ordering::SeqCst) {
        frame::start_loop();
    }
}

/// Id of the live card mounted on `el`, if any.
fn mounted_on(el: &web::Element) -> Option<u32> {
    let id = options::parse_mounted_id(el.get_attribute(constants::MOUNTED_ATTR).as_deref())?;
    registry::get(id).map(|_| id)
}

fn register(shared: SharedCard) -> TiltCardHandle {
    let root = shared.borrow().root.clone();
    let id = registry::insert(shared);
    _ = root.set_attribute(constants::MOUNTED_ATTR, &id.to_string());
    ensure_loop();
    TiltCardHandle { id }
}

/// JavaScript handle to a mounted card.
#[wasm_bindgen]
pub struct TiltCardHandle {
    id: u32,
}

#[wasm_bindgen]
impl TiltCardHandle {
    #[wasm_bindgen(getter)]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[wasm_bindgen(js_name = setSelected)]
    pub fn set_selected(&self, selected: bool) {
        if let Some(shared) = registry::get(self.id) {
            card::set_selected(&shared, selected);
        }
    }

    #[wasm_bindgen(getter)]
    pub fn selected(&self) -> bool {
        let Some(shared) = registry::get(self.id) else {
            return false;
        };
        let selected = shared.borrow().card.selected();
        selected
    }

    /// Detach the card: every listener, timer and sensor subscription it
    /// holds is released. Safe to call from inside the click callback.
    pub fn unmount(&self) {
        if let Some(shared) = registry::remove(self.id) {
            let root = shared.borrow().root.clone();
            _ = root.remove_attribute(constants::MOUNTED_ATTR);
            log::info!("[mount] card {} unmounted", self.id);
            listeners::defer_drop(shared);
        }
    }
}

/// Mount a card on `element`. If a card is already live there (for example
/// one auto-mounted from markup) its handle is returned; `selected` and a
/// given `on_click` are applied to it.
#[wasm_bindgen]
pub fn mount(
    element: web::HtmlElement,
    selected: bool,
    on_click: Option<js_sys::Function>,
    float_offset: Option<f32>,
    float_speed: Option<f32>,
    thickness: Option<f32>,
) -> Result<TiltCardHandle, JsValue> {
    if let Some(id) = mounted_on(&element) {
        log::debug!("[mount] element already carries card {}", id);
        if let Some(shared) = registry::get(id) {
            if let Some(f) = on_click {
                shared.borrow_mut().on_click = ClickTarget::Callback(f);
            }
            card::set_selected(&shared, selected);
        }
        return Ok(TiltCardHandle { id });
    }
    let defaults = CardOptions::default();
    let opts = CardOptions {
        selected,
        float_offset: float_offset.unwrap_or(defaults.float_offset),
        float_speed: float_speed.unwrap_or(defaults.float_speed),
        thickness: thickness.unwrap_or(defaults.thickness),
    };
    let target = match on_click {
        Some(f) => ClickTarget::Callback(f),
        None => ClickTarget::None,
    };
    let shared = card::mount(element, &opts, target, card::detect_capabilities())
        .map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
    Ok(register(shared))
}

/// Mount every `[data-tilt-card]` element in the document and return a
/// handle per card. Elements that already carry a card keep it.
#[wasm_bindgen(js_name = mountAll)]
pub fn mount_all() -> Vec<TiltCardHandle> {
    match mount_all_inner() {
        Ok(handles) => handles,
        Err(e) => {
            log::error!("mount_all error: {:?}", e);
            Vec::new()
        }
    }
}

fn mount_all_inner() -> anyhow::Result<Vec<TiltCardHandle>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let caps = card::detect_capabilities();
    let mut handles = Vec::new();
    let mut mounted = 0;
    for (index, el) in dom::all_with_attr(&document, constants::CARD_ATTR)
        .into_iter()
        .enumerate()
    {
        if let Some(id) = mounted_on(&el) {
            handles.push(TiltCardHandle { id });
            continue;
        }
        let opts = CardOptions::from_attrs(|name| el.get_attribute(name), index);
        match card::mount(el, &opts, ClickTarget::DomEvent, caps) {
            Ok(shared) => {
                handles.push(register(shared));
                mounted += 1;
            }
            Err(e) => log::error!("[mount] card {} skipped: {:#}", index, e),
        }
    }
    log::info!("[mount] {} card(s) mounted, {} live", mounted, registry::len());
    Ok(handles)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tiltcard-web starting");
    mount_all();
    Ok(())
}
