//! Sensor permission negotiation.
//!
//! Some platforms gate `deviceorientation`/`devicemotion` behind a static
//! `requestPermission()` that must be invoked from inside a user gesture.
//! `begin` therefore calls it synchronously and only the wait is async.

use js_sys::{Function, Promise, Reflect};
use tiltcard_core::{PermissionState, SensorKind};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

fn constructor_name(sensor: SensorKind) -> &'static str {
    match sensor {
        SensorKind::Orientation => "DeviceOrientationEvent",
        SensorKind::Motion => "DeviceMotionEvent",
    }
}

fn sensor_constructor(sensor: SensorKind) -> Option<JsValue> {
    let global = js_sys::global();
    Reflect::get(&global, &JsValue::from_str(constructor_name(sensor)))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn request_fn(sensor: SensorKind) -> Option<(JsValue, Function)> {
    let ctor = sensor_constructor(sensor)?;
    let f = Reflect::get(&ctor, &JsValue::from_str("requestPermission")).ok()?;
    let f = f.dyn_into::<Function>().ok()?;
    Some((ctor, f))
}

/// The event type exists on this platform.
pub fn sensor_present(sensor: SensorKind) -> bool {
    sensor_constructor(sensor).is_some()
}

/// Access needs an explicit prompt.
pub fn needs_prompt(sensor: SensorKind) -> bool {
    request_fn(sensor).is_some()
}

pub enum PermissionRequest {
    Ready(PermissionState),
    Pending(Promise),
}

/// Start negotiation. Must run inside the gesture handler.
pub fn begin(sensor: SensorKind) -> PermissionRequest {
    if !sensor_present(sensor) {
        return PermissionRequest::Ready(PermissionState::Unavailable);
    }
    let Some((ctor, f)) = request_fn(sensor) else {
        return PermissionRequest::Ready(PermissionState::Granted);
    };
    match f.call0(&ctor) {
        Ok(v) => match v.dyn_into::<Promise>() {
            Ok(p) => PermissionRequest::Pending(p),
            Err(v) => PermissionRequest::Ready(parse_answer(&v)),
        },
        Err(e) => {
            log::warn!("[permission] {:?} request threw: {:?}", sensor, e);
            PermissionRequest::Ready(PermissionState::Denied)
        }
    }
}

pub async fn finish(sensor: SensorKind, request: PermissionRequest) -> PermissionState {
    match request {
        PermissionRequest::Ready(state) => state,
        PermissionRequest::Pending(p) => match JsFuture::from(p).await {
            Ok(v) => parse_answer(&v),
            Err(e) => {
                log::warn!("[permission] {:?} request rejected: {:?}", sensor, e);
                PermissionState::Denied
            }
        },
    }
}

fn parse_answer(v: &JsValue) -> PermissionState {
    match v.as_string().as_deref() {
        Some("granted") => PermissionState::Granted,
        _ => PermissionState::Denied,
    }
}
