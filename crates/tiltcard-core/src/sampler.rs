//! Raw input channels normalised into tilt samples.

use crate::constants::*;
use crate::sensors::{Acceleration, OrientationReading};
use crate::vector::{CardRect, TiltVector};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Pointer position inside `rect` mapped to \[-0.5, 0.5\] per axis.
///
/// Positions a pixel or two outside the rect (sub-pixel layout, late events)
/// are clamped to the edge. Returns `None` for a degenerate rect.
pub fn mouse_sample(client: Vec2, rect: &CardRect) -> Option<Vec2> {
    if rect.is_degenerate() || !client.is_finite() {
        return None;
    }
    let local = client - Vec2::new(rect.left, rect.top);
    let pct = local / rect.size() - Vec2::splat(MOUSE_SAMPLE_HALF_RANGE);
    Some(pct.clamp(
        Vec2::splat(-MOUSE_SAMPLE_HALF_RANGE),
        Vec2::splat(MOUSE_SAMPLE_HALF_RANGE),
    ))
}

/// Device angles to a sample: `gamma` drives x, `beta` (less the hand-held
/// rest pitch) drives y. Readings missing either angle are discarded.
pub fn orientation_sample(reading: &OrientationReading) -> Option<Vec2> {
    let (beta, gamma) = (reading.beta?, reading.gamma?);
    if !(beta.is_finite() && gamma.is_finite()) {
        return None;
    }
    let raw = Vec2::new(
        gamma as f32 / ORIENTATION_DIVISOR_DEG,
        (beta as f32 - ORIENTATION_BETA_REST_DEG) / ORIENTATION_DIVISOR_DEG,
    );
    Some(raw.clamp(Vec2::splat(-ORIENTATION_CLAMP), Vec2::splat(ORIENTATION_CLAMP)))
}

/// Global pointer position while dragging: offset from the card centre over
/// `half_size * span_factor`, clamped to \[-1, 1\].
pub fn drag_sample(client: Vec2, rect: &CardRect, span_factor: f32) -> Option<TiltVector> {
    if rect.is_degenerate() || !client.is_finite() {
        return None;
    }
    let span = rect.size() * 0.5 * span_factor;
    Some(TiltVector::from_vec2((client - rect.center()) / span))
}

/// Shake detection over successive `devicemotion` samples.
#[derive(Debug)]
pub struct ShakeDetector {
    threshold: f64,
    kick_duration: Duration,
    last_sum: f64,
    kick_until: Option<Duration>,
    rng: StdRng,
}

impl ShakeDetector {
    pub fn new(threshold: f32, kick_duration: Duration, seed: u64) -> Self {
        Self {
            threshold: threshold as f64,
            kick_duration,
            last_sum: 0.0,
            kick_until: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Feed one motion sample. Returns a kick when the summed acceleration
    /// jumped by more than the threshold since the previous sample and
    /// `armed` is set. The previous-sample memory is updated either way.
    pub fn observe(&mut self, acc: &Acceleration, now: Duration, armed: bool) -> Option<Vec2> {
        let sum = acc.sum();
        let delta = (sum - self.last_sum).abs();
        self.last_sum = sum;
        if !armed || !(delta > self.threshold) {
            return None;
        }
        let kick = Vec2::new(
            self.rng.gen_range(-SHAKE_KICK_MAX..=SHAKE_KICK_MAX),
            self.rng.gen_range(-SHAKE_KICK_MAX..=SHAKE_KICK_MAX),
        );
        self.kick_until = Some(now + self.kick_duration);
        log::debug!("[shake] delta={:.1} kick=({:.3},{:.3})", delta, kick.x, kick.y);
        Some(kick)
    }

    pub fn kick_duration(&self) -> Duration {
        self.kick_duration
    }

    /// True once, when a live kick's window has passed.
    pub fn kick_expired(&mut self, now: Duration) -> bool {
        match self.kick_until {
            Some(until) if now >= until => {
                self.kick_until = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_kicking(&self) -> bool {
        self.kick_until.is_some()
    }

    pub fn cancel_kick(&mut self) {
        self.kick_until = None;
    }
}
