//! Per-card interaction controller.
//!
//! `TiltCard` owns the whole interaction state of one card and is driven by
//! the host: input events, the decay tick, the hold timer and animation
//! frames come in as method calls, and anything the host must do in return
//! (arm a timer, attach listeners, fire the click callback) comes back as
//! [`Effect`]s. Nothing here touches a platform API.

use crate::config::{ConfigError, TiltConfig};
use crate::constants::HAPTIC_PULSE_MS;
use crate::filter::TiltFilter;
use crate::flip::FlipState;
use crate::float::FloatOscillator;
use crate::press::{HoldToken, LongPress, PressKind, ReleaseOutcome};
use crate::sampler::{drag_sample, mouse_sample, orientation_sample, ShakeDetector};
use crate::sensors::{
    Acceleration, Capabilities, OrientationReading, PermissionState, SensorGate, SensorKind,
};
use crate::transform::CardTransform;
use crate::vector::{CardRect, TiltVector};
use glam::Vec2;
use smallvec::SmallVec;
use std::time::Duration;

/// Which input currently owns the tilt vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    Idle,
    Hover,
    Orientation,
    Dragging,
}

/// Work the host performs on behalf of the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Negotiate sensor access; report back via `permission_resolved`.
    RequestPermission(SensorKind),
    /// Start delivering this sensor's events.
    Subscribe(SensorKind),
    /// Call `hold_elapsed(token)` after the delay.
    ArmHoldTimer { token: HoldToken, after: Duration },
    CancelHoldTimer,
    /// Route document-level release/cancel events to the card for the whole
    /// press, so a release off the card still ends it.
    WatchRelease,
    UnwatchRelease,
    /// Route document-level move/release events to the card.
    AttachDragListeners,
    DetachDragListeners,
    Haptic { millis: u32 },
    /// Invoke the caller's click callback.
    Click,
    /// Prevent the platform context menu for the current event.
    SuppressContextMenu,
}

pub type Effects = SmallVec<[Effect; 4]>;

#[derive(Debug)]
pub struct TiltCard {
    config: TiltConfig,
    caps: Capabilities,
    mode: InteractionMode,
    hovering: bool,
    filter: TiltFilter,
    shake: ShakeDetector,
    press: LongPress,
    float: FloatOscillator,
    flip: FlipState,
    gate: SensorGate,
    last_frame: Option<Duration>,
    last_orientation: Option<(f64, f64)>,
}

impl TiltCard {
    pub fn new(
        config: TiltConfig,
        caps: Capabilities,
        selected: bool,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            filter: TiltFilter::new(&config),
            shake: ShakeDetector::new(config.shake_threshold, config.kick_duration, seed),
            press: LongPress::new(config.hold_duration),
            float: FloatOscillator::new(
                config.float_offset,
                config.float_speed,
                !caps.supports_touch,
            ),
            flip: FlipState::new(config.flip_spring, selected),
            gate: SensorGate::new(&caps),
            config,
            caps,
            mode: InteractionMode::Idle,
            hovering: false,
            last_frame: None,
            last_orientation: None,
        })
    }

    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    pub fn capabilities(&self) -> Capabilities {
        self.caps
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn raw(&self) -> TiltVector {
        self.filter.raw()
    }

    pub fn filter(&self) -> &TiltFilter {
        &self.filter
    }

    pub fn flip(&self) -> &FlipState {
        &self.flip
    }

    pub fn float(&self) -> &FloatOscillator {
        &self.float
    }

    pub fn is_dragging(&self) -> bool {
        self.press.is_dragging()
    }

    pub fn is_kicking(&self) -> bool {
        self.shake.is_kicking()
    }

    fn set_mode(&mut self, mode: InteractionMode) {
        if self.mode != mode {
            log::debug!("[tilt] mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// A sensor-driven mode ends once its vector is back at rest. Hover and
    /// drag only end on their own input events.
    fn settle_mode(&mut self) {
        if self.mode == InteractionMode::Orientation && self.filter.raw().is_rest() {
            self.set_mode(InteractionMode::Idle);
        }
    }

    fn mouse_enabled(&self) -> bool {
        !self.caps.supports_touch && !self.press.is_dragging()
    }

    // ---------------- Hover ----------------

    pub fn pointer_enter(&mut self) {
        if self.mouse_enabled() {
            self.hovering = true;
            self.set_mode(InteractionMode::Hover);
        }
    }

    /// Mouse moved over the card. Returns true when a sample was taken.
    pub fn pointer_move(&mut self, client: Vec2, rect: &CardRect) -> bool {
        if !self.mouse_enabled() {
            return false;
        }
        match mouse_sample(client, rect) {
            Some(sample) => {
                self.hovering = true;
                self.filter.set_raw(TiltVector::from_vec2(sample));
                self.set_mode(InteractionMode::Hover);
                true
            }
            None => false,
        }
    }

    pub fn pointer_leave(&mut self) {
        if !self.mouse_enabled() {
            return;
        }
        self.hovering = false;
        self.filter.reset();
        self.set_mode(InteractionMode::Idle);
    }

    // ---------------- Sensors ----------------

    /// Returns true when the reading was accepted as a sample.
    pub fn orientation(&mut self, reading: &OrientationReading) -> bool {
        let Some(sample) = orientation_sample(reading) else {
            return false;
        };
        if let (Some(beta), Some(gamma)) = (reading.beta, reading.gamma) {
            self.last_orientation = Some((beta, gamma));
        }
        if self.press.is_dragging() || self.hovering {
            return false;
        }
        self.filter.set_raw(TiltVector::from_vec2(sample));
        self.set_mode(InteractionMode::Orientation);
        true
    }

    /// Feed a motion sample; `None` models an event without acceleration.
    /// Returns true when a shake kick was injected.
    pub fn motion(&mut self, acc: Option<&Acceleration>, now: Duration) -> bool {
        let Some(acc) = acc else {
            return false;
        };
        let armed = !self.press.is_dragging();
        match self.shake.observe(acc, now, armed) {
            Some(kick) => {
                self.filter.set_raw(TiltVector::from_vec2(kick));
                true
            }
            None => false,
        }
    }

    pub fn permission_resolved(&mut self, sensor: SensorKind, state: PermissionState) -> Effects {
        let mut out = Effects::new();
        log::info!("[tilt] {:?} permission: {:?}", sensor, state);
        if self.gate.resolve(sensor, state) {
            out.push(Effect::Subscribe(sensor));
        }
        out
    }

    pub fn sensor_granted(&self, sensor: SensorKind) -> bool {
        self.gate.is_granted(sensor)
    }

    /// `B:<beta> G:<gamma>` for the last valid orientation reading.
    pub fn debug_label(&self) -> Option<String> {
        self.last_orientation
            .map(|(beta, gamma)| format!("B:{:.0} G:{:.0}", beta, gamma))
    }

    // ---------------- Decay ----------------

    /// Fixed-interval decay; suspended while dragging.
    pub fn decay_tick(&mut self) -> bool {
        if self.press.is_dragging() {
            return false;
        }
        let moved = self.filter.decay_tick();
        self.settle_mode();
        moved
    }

    // ---------------- Long press ----------------

    pub fn press_start(&mut self, kind: PressKind, now: Duration) -> Effects {
        let mut out = Effects::new();
        for sensor in SensorKind::ALL {
            if self.gate.wants_request(sensor) {
                self.gate.mark_pending(sensor);
                out.push(Effect::RequestPermission(sensor));
            }
        }
        if self.press.is_pressed() {
            out.push(Effect::CancelHoldTimer);
        }
        if let Some(token) = self.press.press(kind, now) {
            out.push(Effect::WatchRelease);
            out.push(Effect::ArmHoldTimer {
                token,
                after: self.press.hold_duration(),
            });
        }
        out
    }

    pub fn hold_elapsed(&mut self, token: HoldToken) -> Effects {
        let mut out = Effects::new();
        if let Some(kind) = self.press.hold_elapsed(token) {
            self.shake.cancel_kick();
            self.hovering = false;
            self.set_mode(InteractionMode::Dragging);
            out.push(Effect::AttachDragListeners);
            if kind == PressKind::Touch {
                out.push(Effect::Haptic {
                    millis: HAPTIC_PULSE_MS,
                });
            }
        }
        out
    }

    /// Document-level pointer position while dragging.
    pub fn drag_move(&mut self, client: Vec2, rect: &CardRect) -> bool {
        if !self.press.is_dragging() {
            return false;
        }
        match drag_sample(client, rect, self.config.drag_span_factor) {
            Some(v) => {
                self.filter.set_raw(v);
                true
            }
            None => false,
        }
    }

    pub fn release(&mut self, now: Duration) -> Effects {
        let mut out = Effects::new();
        let outcome = self.press.release(now);
        match outcome {
            ReleaseOutcome::Idle => return out,
            ReleaseOutcome::Click => {
                out.push(Effect::CancelHoldTimer);
                out.push(Effect::Click);
            }
            ReleaseOutcome::HoldLapsed => {
                log::debug!("[tilt] hold elapsed before timer callback; no click");
                out.push(Effect::CancelHoldTimer);
            }
            ReleaseOutcome::DragEnded => {
                out.push(Effect::DetachDragListeners);
                self.hovering = false;
                self.set_mode(InteractionMode::Idle);
            }
        }
        out.insert(0, Effect::UnwatchRelease);
        self.filter.reset();
        self.settle_mode();
        out
    }

    /// Gesture aborted by the platform (pointer cancel). Never clicks.
    pub fn cancel(&mut self) -> Effects {
        let mut out = Effects::new();
        let was_pressed = self.press.is_pressed();
        if self.press.cancel() {
            out.push(Effect::DetachDragListeners);
            self.hovering = false;
            self.set_mode(InteractionMode::Idle);
        } else if was_pressed {
            out.push(Effect::CancelHoldTimer);
        } else {
            return out;
        }
        out.insert(0, Effect::UnwatchRelease);
        self.filter.reset();
        self.settle_mode();
        out
    }

    /// Context menu request. While dragging it ends the drag and the menu is
    /// suppressed; otherwise the platform handles it.
    pub fn context_menu(&mut self) -> Effects {
        if !self.press.is_dragging() {
            return Effects::new();
        }
        let mut out = self.cancel();
        out.insert(0, Effect::SuppressContextMenu);
        out
    }

    // ---------------- Selection ----------------

    pub fn set_selected(&mut self, selected: bool) -> bool {
        self.flip.set_selected(selected)
    }

    pub fn selected(&self) -> bool {
        self.flip.selected()
    }

    // ---------------- Frame ----------------

    /// Advance springs to `now` (time since mount) and produce the frame.
    pub fn advance(&mut self, now: Duration) -> CardTransform {
        let dt = match self.last_frame {
            Some(prev) => now.saturating_sub(prev).as_secs_f32(),
            None => 0.0,
        };
        self.last_frame = Some(now);

        if self.shake.kick_expired(now) && !self.press.is_dragging() {
            self.filter.reset();
            self.settle_mode();
        }

        self.filter.advance(dt);
        let flip_deg = self.flip.advance(dt);
        CardTransform::compose(
            self.filter.output(),
            self.filter.scale(),
            flip_deg,
            self.float.sample(now),
            self.config.thickness,
        )
    }
}
