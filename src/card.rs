use crate::constants::*;
use crate::dom;
use crate::events;
use crate::listeners::{defer_drop, AttributeObserver, EventListener, Interval, Timeout};
use crate::options::{self, CardOptions};
use crate::permission;
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use tiltcard_core::{
    CardTransform, Capabilities, Effect, Effects, Face, HoldToken, PermissionState, SensorKind,
    TiltCard,
};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub type SharedCard = Rc<RefCell<MountedCard>>;
pub type WeakCard = Weak<RefCell<MountedCard>>;

/// What a completed tap does.
pub enum ClickTarget {
    Callback(js_sys::Function),
    /// Dispatch `tiltcard:click` on the card root.
    DomEvent,
    None,
}

pub struct CardParts {
    pub body: Option<web::HtmlElement>,
    pub flip: Option<web::HtmlElement>,
    pub front: Option<web::HtmlElement>,
    pub back: Option<web::HtmlElement>,
    pub glare: Option<web::HtmlElement>,
    pub debug: Option<web::HtmlElement>,
}

impl CardParts {
    fn find(root: &web::Element) -> Self {
        Self {
            body: dom::find_part(root, BODY_ATTR),
            flip: dom::find_part(root, FLIP_ATTR),
            front: dom::find_part(root, FRONT_ATTR),
            back: dom::find_part(root, BACK_ATTR),
            glare: dom::find_part(root, GLARE_ATTR),
            debug: dom::find_part(root, DEBUG_ATTR),
        }
    }
}

/// A card bound to a DOM element together with every registration it owns.
/// Dropping it unregisters all of them.
pub struct MountedCard {
    pub card: TiltCard,
    pub root: web::HtmlElement,
    pub parts: CardParts,
    pub on_click: ClickTarget,
    pub mounted_at: Instant,
    pub debug_visible: bool,
    // registrations
    pub element_listeners: Vec<EventListener>,
    pub sensor_listeners: Vec<EventListener>,
    pub drag_listeners: Vec<EventListener>,
    pub release_listeners: Vec<EventListener>,
    pub hold_timer: Option<Timeout>,
    pub decay: Option<Interval>,
    pub selection_observer: Option<AttributeObserver>,
}

impl MountedCard {
    #[inline]
    pub fn now(&self) -> Duration {
        self.mounted_at.elapsed()
    }
}

pub fn detect_capabilities() -> Capabilities {
    Capabilities {
        supports_touch: options::is_handheld_user_agent(&dom::user_agent()),
        has_orientation_sensor: permission::sensor_present(SensorKind::Orientation),
        has_motion_sensor: permission::sensor_present(SensorKind::Motion),
    }
}

pub fn mount(
    root: web::HtmlElement,
    opts: &CardOptions,
    on_click: ClickTarget,
    caps: Capabilities,
) -> anyhow::Result<SharedCard> {
    let card = TiltCard::new(opts.to_config(), caps, opts.selected, rand::random::<u64>())?;
    let decay_ms = card.config().decay_interval.as_millis() as u32;
    let parts = CardParts::find(&root);
    if parts.body.is_none() {
        log::warn!("[mount] card has no [{}] element; tilt will not render", BODY_ATTR);
    }

    let shared = Rc::new(RefCell::new(MountedCard {
        card,
        root: root.clone(),
        parts,
        on_click,
        mounted_at: Instant::now(),
        debug_visible: false,
        element_listeners: Vec::new(),
        sensor_listeners: Vec::new(),
        drag_listeners: Vec::new(),
        release_listeners: Vec::new(),
        hold_timer: None,
        decay: None,
        selection_observer: None,
    }));

    let weak = Rc::downgrade(&shared);
    let decay = Interval::new(decay_ms, move || {
        if let Some(c) = weak.upgrade() {
            c.borrow_mut().card.decay_tick();
        }
    });
    let listeners = events::wire_card(&shared);
    // markup-driven selection: `data-selected` stays live after mount
    let weak = Rc::downgrade(&shared);
    let observed = root.clone();
    let observer = AttributeObserver::new(&root, SELECTED_ATTR, move || {
        if let Some(c) = weak.upgrade() {
            let attr = observed.get_attribute(SELECTED_ATTR);
            set_selected(&c, options::parse_flag(attr.as_deref()));
        }
    });
    for (property, value) in ROOT_STYLES {
        dom::set_style(&root, property, value);
    }
    {
        let mut m = shared.borrow_mut();
        m.decay = Some(decay);
        m.element_listeners = listeners;
        m.selection_observer = observer;
        dom::set_class(&m.root, SELECTED_CLASS, opts.selected);
    }

    // Platforms without a prompt can subscribe straight away.
    for sensor in SensorKind::ALL {
        if caps.has(sensor) && !permission::needs_prompt(sensor) {
            let effects = shared
                .borrow_mut()
                .card
                .permission_resolved(sensor, PermissionState::Granted);
            apply_effects(&shared, effects);
        }
    }

    render(&mut shared.borrow_mut());
    log::info!(
        "[mount] card mounted (touch={}, orientation={}, motion={})",
        caps.supports_touch,
        caps.has_orientation_sensor,
        caps.has_motion_sensor
    );
    Ok(shared)
}

/// Carry out controller effects. Must be called with no borrow held: the
/// click callback may re-enter the card (e.g. to change selection).
pub fn apply_effects(shared: &SharedCard, effects: Effects) {
    for effect in effects {
        match effect {
            Effect::RequestPermission(sensor) => request_permission(shared, sensor),
            Effect::Subscribe(sensor) => {
                if let Some(listener) = events::subscribe_sensor(shared, sensor) {
                    shared.borrow_mut().sensor_listeners.push(listener);
                }
            }
            Effect::ArmHoldTimer { token, after } => arm_hold_timer(shared, token, after),
            Effect::CancelHoldTimer => {
                if let Some(t) = shared.borrow_mut().hold_timer.take() {
                    defer_drop(t);
                }
            }
            Effect::WatchRelease => {
                let listeners = events::wire_release(shared);
                let previous =
                    std::mem::replace(&mut shared.borrow_mut().release_listeners, listeners);
                defer_drop(previous);
            }
            Effect::UnwatchRelease => {
                let listeners = std::mem::take(&mut shared.borrow_mut().release_listeners);
                defer_drop(listeners);
            }
            Effect::AttachDragListeners => {
                let listeners = events::wire_drag(shared);
                shared.borrow_mut().drag_listeners = listeners;
            }
            Effect::DetachDragListeners => {
                let listeners = std::mem::take(&mut shared.borrow_mut().drag_listeners);
                defer_drop(listeners);
            }
            Effect::Haptic { millis } => dom::vibrate(millis),
            Effect::Click => invoke_click(shared),
            // handled by the contextmenu listener, which owns the event
            Effect::SuppressContextMenu => {}
        }
    }
}

fn arm_hold_timer(shared: &SharedCard, token: HoldToken, after: Duration) {
    let weak = Rc::downgrade(shared);
    let timer = Timeout::new(after.as_millis() as u32, move || {
        let Some(c) = weak.upgrade() else {
            return;
        };
        let effects = {
            let mut m = c.borrow_mut();
            // this closure is the timer's own; release it after we return
            if let Some(t) = m.hold_timer.take() {
                defer_drop(t);
            }
            m.card.hold_elapsed(token)
        };
        apply_effects(&c, effects);
    });
    let previous = shared.borrow_mut().hold_timer.replace(timer);
    if let Some(t) = previous {
        defer_drop(t);
    }
}

fn request_permission(shared: &SharedCard, sensor: SensorKind) {
    let request = permission::begin(sensor);
    let weak = Rc::downgrade(shared);
    spawn_local(async move {
        let state = permission::finish(sensor, request).await;
        if let Some(c) = weak.upgrade() {
            let effects = c.borrow_mut().card.permission_resolved(sensor, state);
            apply_effects(&c, effects);
        }
    });
}

fn invoke_click(shared: &SharedCard) {
    let (root, callback) = {
        let m = shared.borrow();
        let cb = match &m.on_click {
            ClickTarget::Callback(f) => Some(f.clone()),
            _ => None,
        };
        let dispatch = matches!(m.on_click, ClickTarget::DomEvent);
        (dispatch.then(|| m.root.clone()), cb)
    };
    if let Some(f) = callback {
        if let Err(e) = f.call0(&JsValue::NULL) {
            log::error!("[click] callback threw: {:?}", e);
        }
    }
    if let Some(root) = root {
        let init = web::EventInit::new();
        init.set_bubbles(true);
        if let Ok(ev) = web::Event::new_with_event_init_dict(CLICK_EVENT, &init) {
            _ = root.dispatch_event(&ev);
        }
    }
}

pub fn set_selected(shared: &SharedCard, selected: bool) {
    let mut m = shared.borrow_mut();
    if m.card.set_selected(selected) {
        log::debug!("[select] card selected={}", selected);
        dom::set_class(&m.root, SELECTED_CLASS, selected);
    }
}

pub fn toggle_debug(shared: &SharedCard) {
    let mut m = shared.borrow_mut();
    m.debug_visible = !m.debug_visible;
    if !m.debug_visible {
        if let Some(d) = &m.parts.debug {
            d.set_text_content(Some(""));
        }
    }
}

/// Advance the controller one frame and write the result to the DOM.
pub fn render(m: &mut MountedCard) {
    let now = m.now();
    let t = m.card.advance(now);
    apply_transform(m, &t);
    if m.debug_visible {
        if let Some(d) = &m.parts.debug {
            d.set_text_content(Some(&m.card.debug_label().unwrap_or_default()));
        }
    }
}

fn apply_transform(m: &MountedCard, t: &CardTransform) {
    let p = &m.parts;
    if let Some(body) = &p.body {
        dom::set_style(body, "transform", &t.body_css());
    }
    if let Some(flip) = &p.flip {
        dom::set_style(flip, "transform", &t.flip_css());
    }
    if let Some(front) = &p.front {
        dom::set_style(front, "transform", &t.face_css(Face::Front));
    }
    if let Some(back) = &p.back {
        dom::set_style(back, "transform", &t.face_css(Face::Back));
    }
    // glare vars go on the highlight layer when the markup has one
    let glare = p.glare.as_ref().unwrap_or(&m.root);
    dom::set_style(glare, GLARE_X_VAR, &t.glare_x());
    dom::set_style(glare, GLARE_Y_VAR, &t.glare_y());
    let face = match t.face {
        Face::Front => "front",
        Face::Back => "back",
    };
    _ = m.root.set_attribute(VISIBLE_FACE_ATTR, face);
    _ = m
        .root
        .set_attribute(MODE_ATTR, &format!("{:?}", m.card.mode()).to_ascii_lowercase());
}
