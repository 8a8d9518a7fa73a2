use tiltcard_core::CardRect;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn card_rect(el: &web::Element) -> CardRect {
    let r = el.get_bounding_client_rect();
    CardRect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// First descendant carrying `attr` (e.g. `data-tilt-body`).
pub fn find_part(root: &web::Element, attr: &str) -> Option<web::HtmlElement> {
    root.query_selector(&format!("[{}]", attr))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn all_with_attr(document: &web::Document, attr: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(&format!("[{}]", attr)) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

pub fn user_agent() -> String {
    web::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

pub fn vibrate(millis: u32) {
    if let Some(w) = web::window() {
        _ = w.navigator().vibrate_with_duration(millis);
    }
}
