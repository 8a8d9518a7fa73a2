use super::card_listener;
use crate::card::SharedCard;
use crate::listeners::EventListener;
use tiltcard_core::{Acceleration, OrientationReading, SensorKind};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window-level sensor listener. Only called after the permission gate
/// granted `sensor`; the returned guard lives as long as the card.
pub fn subscribe_sensor(shared: &SharedCard, sensor: SensorKind) -> Option<EventListener> {
    let window = web::window()?;
    let target: &web::EventTarget = window.as_ref();
    log::info!("[sensors] subscribing to {}", sensor.event_name());
    let listener = match sensor {
        SensorKind::Orientation => {
            card_listener(shared, target, sensor.event_name(), |c, ev| {
                let Some(oe) = ev.dyn_ref::<web::DeviceOrientationEvent>() else {
                    return;
                };
                let reading = OrientationReading {
                    beta: oe.beta(),
                    gamma: oe.gamma(),
                };
                c.borrow_mut().card.orientation(&reading);
            })
        }
        SensorKind::Motion => card_listener(shared, target, sensor.event_name(), |c, ev| {
            let Some(me) = ev.dyn_ref::<web::DeviceMotionEvent>() else {
                return;
            };
            let acc = me.acceleration_including_gravity().map(|a| Acceleration {
                x: a.x(),
                y: a.y(),
                z: a.z(),
            });
            let mut m = c.borrow_mut();
            let now = m.now();
            m.card.motion(acc.as_ref(), now);
        }),
    };
    Some(listener)
}
